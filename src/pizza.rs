use std::collections::HashMap;
use std::{fmt, fmt::Display};

use crate::error::PizzeriaError;

/// The pizzas we make. Closed set; recipes are fixed per variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    Margherita,
    Pepperoni,
    Hawaiian,
}

/// Menu enumeration order.
pub static VARIANTS: [Variant; 3] = [Variant::Margherita, Variant::Pepperoni, Variant::Hawaiian];

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Margherita => "Margherita",
            Variant::Pepperoni => "Pepperoni",
            Variant::Hawaiian => "Hawaiian",
        }
    }

    pub fn recipe(&self) -> &'static [&'static str] {
        match self {
            Variant::Margherita => &["tomato sauce", "mozzarella", "tomatoes"],
            Variant::Pepperoni => &["tomato sauce", "mozzarella", "pepperoni"],
            Variant::Hawaiian => &["tomato sauce", "chicken", "pineapples"],
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Variant::Margherita => "\u{1F9C0}",
            Variant::Pepperoni => "\u{1F355}",
            Variant::Hawaiian => "\u{1F34D}",
        }
    }

    /// Case-insensitive lookup: "pepperoni", "PEPPERONI" and "Pepperoni"
    /// all match.
    pub fn from_name(name: &str) -> Result<Self, PizzeriaError> {
        match capitalize(name).as_str() {
            "Margherita" => Ok(Variant::Margherita),
            "Pepperoni" => Ok(Variant::Pepperoni),
            "Hawaiian" => Ok(Variant::Hawaiian),
            _ => Err(PizzeriaError::UnknownPizza(name.to_string())),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Size {
    L,
    Xl,
}

impl Size {
    pub fn parse(s: &str) -> Result<Self, PizzeriaError> {
        match s {
            "L" => Ok(Size::L),
            "XL" => Ok(Size::Xl),
            other => Err(PizzeriaError::InvalidSize(other.to_string())),
        }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Size::L => "L",
                Size::Xl => "XL",
            }
        )
    }
}

/// One pizza for one order. Built when the order is placed, dropped when
/// the workflow finishes.
#[derive(Clone, Debug)]
pub struct Pizza {
    pub variant: Variant,
    pub size: Size,
}

impl Pizza {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            size: Size::L,
        }
    }

    pub fn with_size(variant: Variant, size: &str) -> Result<Self, PizzeriaError> {
        Ok(Self {
            variant,
            size: Size::parse(size)?,
        })
    }

    pub fn name(&self) -> &'static str {
        self.variant.name()
    }

    pub fn recipe(&self) -> &'static [&'static str] {
        self.variant.recipe()
    }

    /// Single-entry map of name to recipe.
    pub fn as_dict(&self) -> HashMap<&'static str, Vec<&'static str>> {
        HashMap::from([(self.name(), self.recipe().to_vec())])
    }

    /// Compare two pizzas of the same variant. Comparing across variants
    /// is an error, not `false`: the menu treats that as a category
    /// mistake rather than an inequality.
    pub fn try_eq(&self, other: &Pizza) -> Result<bool, PizzeriaError> {
        if self.variant != other.variant {
            return Err(PizzeriaError::VariantMismatch {
                left: self.name(),
                right: other.name(),
            });
        }
        Ok(self.size == other.size && self.recipe() == other.recipe())
    }

    pub fn menu_line(&self) -> String {
        format!(
            "- {} {}: {}",
            self.name(),
            self.variant.emoji(),
            self.recipe().join(", ")
        )
    }
}

impl Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.size)
    }
}

/// The whole menu, one line per variant, in enumeration order.
pub fn render_menu() -> String {
    VARIANTS
        .iter()
        .map(|variant| Pizza::new(*variant).menu_line() + "\n")
        .collect()
}

/// Uppercase the first letter and lowercase the rest, so free-form order
/// names line up with the menu spelling.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
        }
    }
}
