//! The predefined expense categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// One of the fixed spending categories.
///
/// The declaration order is canonical: spending analysis reports one entry
/// per category in exactly this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Entertainment,
    Shopping,
    Utilities,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
    ];

    /// Returns the canonical category string used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Utilities => "Utilities",
        }
    }
}

impl FromStr for Category {
    type Err = EngineError;

    // Case-sensitive: "food" is not a member of the set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(EngineError::InvalidCategory)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
