//! Catalog item identifiers.
//!
//! Tutorial documents carry either integer ids (`"id": 7`) or string keys
//! (`"id": "rust-basics"`). `ItemId` keeps whichever form was loaded and
//! defines the single ordering used by the `newest` sort.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A catalog item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Integer id. Higher means newer.
    Numeric(i64),
    /// Free-form string key.
    Text(String),
}

/// Ordering key derived from an [`ItemId`].
///
/// Non-numeric text sorts below every numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IdKey<'a> {
    Text(&'a str),
    Numeric(i64),
}

impl ItemId {
    /// Create a numeric id.
    pub fn numeric(id: i64) -> Self {
        ItemId::Numeric(id)
    }

    /// Create a string id.
    pub fn text(id: impl Into<String>) -> Self {
        ItemId::Text(id.into())
    }

    /// Numeric value of this id, if it has one.
    ///
    /// String ids that hold an integer (`"12"`) count as numeric.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ItemId::Numeric(n) => Some(*n),
            ItemId::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Key used to order ids.
    pub fn key(&self) -> IdKey<'_> {
        match self {
            ItemId::Numeric(n) => IdKey::Numeric(*n),
            ItemId::Text(s) => match s.trim().parse() {
                Ok(n) => IdKey::Numeric(n),
                Err(_) => IdKey::Text(s),
            },
        }
    }

    /// Compare two ids by their ordering key.
    pub fn cmp_key(&self, other: &ItemId) -> Ordering {
        self.key().cmp(&other.key())
    }

    /// Loose match against user-supplied text.
    ///
    /// `"7"` matches `Numeric(7)`, and `"07"` does too.
    pub fn matches(&self, raw: &str) -> bool {
        let raw = raw.trim();
        match (self.as_number(), raw.parse::<i64>().ok()) {
            (Some(a), Some(b)) => a == b,
            _ => match self {
                ItemId::Text(s) => s == raw,
                ItemId::Numeric(_) => false,
            },
        }
    }
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::Text(String::new())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Numeric(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Numeric(n)
    }
}

impl From<i32> for ItemId {
    fn from(n: i32) -> Self {
        ItemId::Numeric(i64::from(n))
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        ItemId::Numeric(i64::from(n))
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(ItemId::from_value(&value))
    }
}

impl ItemId {
    /// Build an id from any JSON value, falling back to an empty text id.
    pub fn from_value(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => ItemId::Numeric(i),
                None => match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                        ItemId::Numeric(f as i64)
                    }
                    _ => ItemId::Text(n.to_string()),
                },
            },
            Value::String(s) => ItemId::Text(s.clone()),
            _ => ItemId::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ordering() {
        assert_eq!(ItemId::numeric(3).cmp_key(&ItemId::numeric(10)), Ordering::Less);
        assert_eq!(ItemId::text("12").cmp_key(&ItemId::numeric(3)), Ordering::Greater);
    }

    #[test]
    fn test_text_sorts_below_numeric() {
        assert_eq!(ItemId::text("intro").cmp_key(&ItemId::numeric(-5)), Ordering::Less);
        assert_eq!(ItemId::text("a").cmp_key(&ItemId::text("b")), Ordering::Less);
    }

    #[test]
    fn test_loose_match() {
        assert!(ItemId::numeric(7).matches("7"));
        assert!(ItemId::numeric(7).matches(" 07 "));
        assert!(ItemId::text("rust-basics").matches("rust-basics"));
        assert!(!ItemId::numeric(7).matches("seven"));
    }

    #[test]
    fn test_deserialize_forms() {
        let ids: Vec<ItemId> = serde_json::from_str(r#"[4, "x", 2.0, null]"#).unwrap();
        assert_eq!(
            ids,
            vec![
                ItemId::numeric(4),
                ItemId::text("x"),
                ItemId::numeric(2),
                ItemId::default()
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ItemId::numeric(42).to_string(), "42");
        assert_eq!(ItemId::text("abc").to_string(), "abc");
    }
}
