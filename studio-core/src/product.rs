use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Garment the custom print is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    TShirt,
    Hoodie,
    Sleevie,
    Cap,
}

#[allow(clippy::derivable_impls)]
impl Default for ProductType {
    fn default() -> Self {
        ProductType::TShirt
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown product type: {0}")]
pub struct ParseProductTypeError(pub String);

impl ProductType {
    /// Selector order
    pub const ALL: [ProductType; 4] = [
        ProductType::TShirt,
        ProductType::Hoodie,
        ProductType::Sleevie,
        ProductType::Cap,
    ];

    /// Option value and display label. The select uses the label as its value.
    pub fn label(self) -> &'static str {
        match self {
            ProductType::TShirt => "T-shirt",
            ProductType::Hoodie => "Hoodie",
            ProductType::Sleevie => "Sleevie",
            ProductType::Cap => "Cap",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductType {
    type Err = ParseProductTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| ParseProductTypeError(s.to_string()))
    }
}

/// Body build picked in the measurement form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Build {
    Lean,
    Regular,
    Athletic,
    Big,
}

#[allow(clippy::derivable_impls)]
impl Default for Build {
    fn default() -> Self {
        Build::Athletic
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown build: {0}")]
pub struct ParseBuildError(pub String);

impl Build {
    pub const ALL: [Build; 4] = [Build::Lean, Build::Regular, Build::Athletic, Build::Big];

    pub fn label(self) -> &'static str {
        match self {
            Build::Lean => "Lean",
            Build::Regular => "Regular",
            Build::Athletic => "Athletic",
            Build::Big => "Big",
        }
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Build {
    type Err = ParseBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| ParseBuildError(s.to_string()))
    }
}

/// Body measurements from the form. They never change the preview.
///
/// Height and weight keep the raw text of their number inputs so the
/// controlled inputs echo exactly what was typed, including decimals and
/// half-typed values the browser reports as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurements {
    pub height: String,
    pub weight: String,
    pub build: Build,
}

impl Measurements {
    pub fn height_cm(&self) -> Option<f32> {
        Self::parse_field(&self.height)
    }

    pub fn weight_kg(&self) -> Option<f32> {
        Self::parse_field(&self.weight)
    }

    /// Numeric reading of a number input's raw value. Blank, negative or
    /// non-finite input reads as `None`.
    pub fn parse_field(raw: &str) -> Option<f32> {
        raw.trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_default_is_tshirt() {
        assert_eq!(ProductType::default(), ProductType::TShirt);
    }

    #[test]
    fn test_product_type_parses_every_label() {
        for product in ProductType::ALL {
            assert_eq!(product.label().parse::<ProductType>(), Ok(product));
        }
    }

    #[test]
    fn test_product_type_rejects_unknown() {
        let err = "Sweater".parse::<ProductType>().unwrap_err();
        assert_eq!(err, ParseProductTypeError("Sweater".into()));
        assert_eq!(err.to_string(), "Unknown product type: Sweater");
    }

    #[test]
    fn test_product_type_parse_is_case_sensitive() {
        assert!("t-shirt".parse::<ProductType>().is_err());
    }

    #[test]
    fn test_build_default_is_athletic() {
        assert_eq!(Build::default(), Build::Athletic);
        assert_eq!(Measurements::default().build, Build::Athletic);
    }

    #[test]
    fn test_build_rejects_unknown() {
        assert!("Huge".parse::<Build>().is_err());
        assert_eq!("Lean".parse::<Build>(), Ok(Build::Lean));
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(Measurements::parse_field("180"), Some(180.0));
        assert_eq!(Measurements::parse_field(" 80 "), Some(80.0));
        assert_eq!(Measurements::parse_field("72.5"), Some(72.5));
        assert_eq!(Measurements::parse_field("70000"), Some(70000.0));
        assert_eq!(Measurements::parse_field(""), None);
        assert_eq!(Measurements::parse_field("-5"), None);
        assert_eq!(Measurements::parse_field("abc"), None);
        assert_eq!(Measurements::parse_field("inf"), None);
    }

    #[test]
    fn test_measurements_keep_raw_text() {
        let measurements = Measurements {
            height: "181.5".into(),
            weight: "".into(),
            build: Build::Big,
        };
        assert_eq!(measurements.height_cm(), Some(181.5));
        assert_eq!(measurements.weight_kg(), None);
    }
}
