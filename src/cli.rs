//! Clap command tree and ArgMatches → action conversion.

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::error::PizzeriaError;
use crate::pizza::{Pizza, Variant};

/// What the user asked for.
pub enum CliAction {
    /// Print the menu.
    Menu,
    /// Run one order through the workflow.
    Order {
        pizza: Pizza,
        delivery: bool,
        pickup: bool,
    },
}

pub fn build_cli() -> Command {
    Command::new("pizzeria")
        .about("Bakes and delivers pizzas, on the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("menu").about("List the pizzas we make"))
        .subcommand(
            Command::new("order")
                .about("Bake a pizza, then deliver it or have it picked up")
                .arg(
                    Arg::new("pizza")
                        .required(true)
                        .help("Pizza name: Margherita, Pepperoni or Hawaiian"),
                )
                .arg(
                    Arg::new("size")
                        .long("size")
                        .default_value("L")
                        .help("Pizza size: L or XL"),
                )
                .arg(
                    Arg::new("delivery")
                        .long("delivery")
                        .action(ArgAction::SetTrue)
                        .help("Deliver the order"),
                )
                .arg(
                    Arg::new("pickup")
                        .long("pickup")
                        .action(ArgAction::SetTrue)
                        .help("Order is picked up by the customer"),
                ),
        )
}

/// Translate parsed arguments into an action. The delivery/pickup
/// conflict is checked before the pizza is built.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, PizzeriaError> {
    match matches.subcommand() {
        Some(("menu", _)) => Ok(CliAction::Menu),
        Some(("order", order)) => {
            let delivery = order.get_flag("delivery");
            let pickup = order.get_flag("pickup");
            if delivery && pickup {
                return Err(PizzeriaError::DeliveryPickupConflict);
            }
            let name = order
                .get_one::<String>("pizza")
                .expect("pizza is a required argument");
            let size = order
                .get_one::<String>("size")
                .expect("size has a default value");
            let pizza = Pizza::with_size(Variant::from_name(name)?, size)?;
            Ok(CliAction::Order {
                pizza,
                delivery,
                pickup,
            })
        }
        _ => unreachable!("a subcommand is required"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pizza::Size;

    fn parse(args: &[&str]) -> Result<CliAction, PizzeriaError> {
        let matches = build_cli()
            .try_get_matches_from(args)
            .expect("arguments should parse");
        matches_to_action(&matches)
    }

    #[test]
    fn delivery_and_pickup_conflict() {
        let result = parse(&["pizzeria", "order", "pepperoni", "--delivery", "--pickup"]);
        assert!(matches!(result, Err(PizzeriaError::DeliveryPickupConflict)));
    }

    #[test]
    fn conflict_wins_over_unknown_pizza() {
        // Flags are validated before the pizza is built.
        let result = parse(&["pizzeria", "order", "calzone", "--delivery", "--pickup"]);
        assert!(matches!(result, Err(PizzeriaError::DeliveryPickupConflict)));
    }

    #[test]
    fn unknown_pizza_is_rejected() {
        let result = parse(&["pizzeria", "order", "calzone"]);
        assert!(matches!(result, Err(PizzeriaError::UnknownPizza(_))));
    }

    #[test]
    fn bad_size_is_rejected() {
        let result = parse(&["pizzeria", "order", "pepperoni", "--size", "XXL"]);
        assert!(matches!(result, Err(PizzeriaError::InvalidSize(_))));
    }

    #[test]
    fn order_defaults_to_large_dine_in() {
        match parse(&["pizzeria", "order", "margherita"]) {
            Ok(CliAction::Order {
                pizza,
                delivery,
                pickup,
            }) => {
                assert_eq!(pizza.variant, Variant::Margherita);
                assert_eq!(pizza.size, Size::L);
                assert!(!delivery);
                assert!(!pickup);
            }
            _ => panic!("expected an order action"),
        }
    }

    #[test]
    fn extra_large_delivery_order() {
        match parse(&["pizzeria", "order", "HAWAIIAN", "--size", "XL", "--delivery"]) {
            Ok(CliAction::Order {
                pizza,
                delivery,
                pickup,
            }) => {
                assert_eq!(pizza.variant, Variant::Hawaiian);
                assert_eq!(pizza.size, Size::Xl);
                assert!(delivery);
                assert!(!pickup);
            }
            _ => panic!("expected an order action"),
        }
    }

    #[test]
    fn menu_subcommand_parses() {
        assert!(matches!(parse(&["pizzeria", "menu"]), Ok(CliAction::Menu)));
    }
}
