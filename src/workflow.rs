use rand::Rng;
use std::{fmt, fmt::Display};
use tracing::info;

use crate::error::PizzeriaError;
use crate::pizza::{Pizza, Size};

/// The steps an order can go through.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    Bake,
    Deliver,
    PickUp,
}

impl Step {
    /// The message printed before the step runs. Exactly one `{}`
    /// placeholder, filled with the simulated duration in seconds.
    pub fn announcement(&self) -> &'static str {
        match self {
            Step::Bake => "\u{1F9D1} Baked in {} s!",
            Step::Deliver => "\u{1F6F5} Delivered in {} s!",
            Step::PickUp => "\u{1F3E0} Picked up in {} s!",
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Step::Bake => "baking",
                Step::Deliver => "delivering",
                Step::PickUp => "picking up",
            }
        )
    }
}

/// Anything a workflow step can be timed against. Pizzas always report a
/// size; a subject that reports `None` cannot be timed.
pub trait Timeable {
    fn size(&self) -> Option<Size>;
}

impl Timeable for Pizza {
    fn size(&self) -> Option<Size> {
        Some(self.size)
    }
}

/// Fake duration for one step. XL pizzas take longer in the oven but
/// travel just as fast as L ones.
fn simulate_seconds(step: Step, size: Size, rng: &mut impl Rng) -> u32 {
    match (step, size) {
        (Step::Bake, Size::Xl) => rng.gen_range(11..=20),
        _ => rng.gen_range(2..=10),
    }
}

fn announce<T: Timeable>(step: Step, template: &str, subject: &T) -> Result<(), PizzeriaError> {
    if template.matches("{}").count() != 1 {
        return Err(PizzeriaError::BadTemplate(template.to_string()));
    }
    let size = subject.size().ok_or(PizzeriaError::MissingSize)?;
    let seconds = simulate_seconds(step, size, &mut rand::thread_rng());
    println!("{}", template.replacen("{}", &seconds.to_string(), 1));
    Ok(())
}

/// Wrap an action so it announces a simulated duration before running.
/// The announcement is the only side effect; the action's result is
/// passed through unchanged.
pub fn timed<T, F>(
    step: Step,
    template: &'static str,
    action: F,
) -> impl FnOnce(T) -> Result<T, PizzeriaError>
where
    T: Timeable,
    F: FnOnce(T) -> T,
{
    move |subject| {
        announce(step, template, &subject)?;
        Ok(action(subject))
    }
}

pub fn bake<T: Timeable>(subject: T) -> Result<T, PizzeriaError> {
    timed(Step::Bake, Step::Bake.announcement(), |s| s)(subject)
}

pub fn deliver<T: Timeable>(subject: T) -> Result<T, PizzeriaError> {
    timed(Step::Deliver, Step::Deliver.announcement(), |s| s)(subject)
}

pub fn pick_up<T: Timeable>(subject: T) -> Result<T, PizzeriaError> {
    timed(Step::PickUp, Step::PickUp.announcement(), |s| s)(subject)
}

/// Run one order start to finish: always bake, then deliver or hand over
/// for pickup. Neither flag means dine-in. Both flags at once are
/// rejected at the CLI before this is reached.
pub fn process_order(pizza: Pizza, delivery: bool, pickup: bool) -> Result<(), PizzeriaError> {
    info!("processing an order for one {}", pizza);
    let pizza = bake(pizza)?;
    let pizza = if delivery { deliver(pizza)? } else { pizza };
    if pickup {
        pick_up(pizza)?;
    }
    Ok(())
}
