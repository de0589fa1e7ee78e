//! Attribute records associated with catalog locations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A descriptive record offered at a location (for a brewery, one beer).
///
/// Records are distinct by their natural key: the record name together with
/// the name of the location offering it.
///
/// # Examples
///
/// ```
/// use u_tour::models::AttributeRecord;
///
/// let r = AttributeRecord::new("Porter")
///     .with_location_name("Browar Okocim")
///     .with_style("Baltic Porter");
/// assert_eq!(r.to_string(), "Porter | Browar Okocim | - | Baltic Porter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeRecord {
    name: Option<String>,
    location_name: Option<String>,
    category: Option<String>,
    style: Option<String>,
}

impl AttributeRecord {
    /// Creates a record with only its name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            location_name: None,
            category: None,
            style: None,
        }
    }

    /// Sets the name of the location offering this record.
    pub fn with_location_name(mut self, location_name: impl Into<String>) -> Self {
        self.location_name = Some(location_name.into());
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub(crate) fn from_parts(
        name: Option<String>,
        location_name: Option<String>,
        category: Option<String>,
        style: Option<String>,
    ) -> Self {
        Self {
            name,
            location_name,
            category,
            style,
        }
    }

    /// Record name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name of the location offering the record.
    pub fn location_name(&self) -> Option<&str> {
        self.location_name.as_deref()
    }

    /// Category, if known.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Style, if known.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Key records are deduplicated by.
    pub fn natural_key(&self) -> (Option<&str>, Option<&str>) {
        (self.name(), self.location_name())
    }
}

impl fmt::Display for AttributeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_dash = |s: Option<&str>| s.unwrap_or("-").to_string();
        write!(
            f,
            "{} | {} | {} | {}",
            or_dash(self.name()),
            or_dash(self.location_name()),
            or_dash(self.category()),
            or_dash(self.style())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_key_ignores_category_and_style() {
        let a = AttributeRecord::new("Winter Welcome")
            .with_location_name("Samuel Smith")
            .with_category("British Ale");
        let b = AttributeRecord::new("Winter Welcome")
            .with_location_name("Samuel Smith")
            .with_style("Winter Warmer");
        assert_eq!(a.natural_key(), b.natural_key());
        assert_ne!(a, b);
    }

    #[test]
    fn test_accessors() {
        let r = AttributeRecord::new("Okocim Porter")
            .with_location_name("Browar Okocim")
            .with_style("Baltic Porter");
        assert_eq!(r.name(), Some("Okocim Porter"));
        assert_eq!(r.location_name(), Some("Browar Okocim"));
        assert_eq!(r.category(), None);
        assert_eq!(r.style(), Some("Baltic Porter"));
    }

    #[test]
    fn test_display_missing_fields() {
        let r = AttributeRecord::from_parts(None, None, None, None);
        assert_eq!(r.to_string(), "- | - | - | -");
    }
}
