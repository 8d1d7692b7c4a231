//! Category enumeration for product organization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// The set is closed; declaration order is the order sections are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Gaming memory.
    Gaming,
    /// Office memory.
    Office,
    /// Server memory.
    Server,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Gaming, Category::Office, Category::Server];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gaming => "gaming",
            Category::Office => "office",
            Category::Server => "server",
        }
    }

    /// Section heading shown above the category grid.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Gaming => "Игровая память",
            Category::Office => "Офисная память",
            Category::Server => "Серверная память",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gaming" => Some(Category::Gaming),
            "office" => Some(Category::Office),
            "server" => Some(Category::Server),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_slug() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str(" Server "), Some(Category::Server));
        assert_eq!(Category::from_str("laptop"), None);
    }

    #[test]
    fn test_category_serde_uses_slug() {
        let json = serde_json::to_string(&Category::Office).unwrap();
        assert_eq!(json, "\"office\"");
    }
}
