use thiserror::Error;

/// Everything that can go wrong between the command line and a finished
/// order. All of these abort the current invocation; nothing is retried.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PizzeriaError {
    /// Size argument outside {L, XL}.
    #[error("Size should be either L or XL, not {0:?}")]
    InvalidSize(String),

    /// Two pizzas of different variants were compared. Cross-variant
    /// comparison is a hard error by contract, not `false`.
    #[error("Cannot compare a {left} with a {right}")]
    VariantMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// Both --delivery and --pickup were requested.
    #[error("Choose either --delivery or --pickup, not both")]
    DeliveryPickupConflict,

    /// Order name not among the pizzas we make.
    #[error(
        "Sorry, we only make and deliver the following pizzas: \
         Margherita, Pepperoni and Hawaiian (got {0:?})"
    )]
    UnknownPizza(String),

    /// An announcement template without exactly one `{}` placeholder.
    #[error("Announcement template needs exactly one {{}} placeholder, got {0:?}")]
    BadTemplate(String),

    /// The timed wrapper was handed something without a pizza size.
    #[error("Check that your pizza has a size")]
    MissingSize,
}
