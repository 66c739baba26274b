//! Derivation configuration: naming conventions and decimal settings.
//!
//! Configuration is passed explicitly to every derivation call rather than
//! living in global or thread-local state, so two concurrent derivations can
//! use different conventions without coordination.

use serde::{Deserialize, Serialize};

/// Naming convention applied to field labels when no explicit rename is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingConvention {
    /// Keep labels exactly as declared.
    #[default]
    Identity,

    /// camelCase
    CamelCase,

    /// snake_case
    SnakeCase,

    /// PascalCase
    PascalCase,

    /// SCREAMING_SNAKE_CASE
    ScreamingSnakeCase,

    /// kebab-case
    KebabCase,
}

impl NamingConvention {
    /// Apply the convention to a raw label.
    pub fn apply(&self, name: &str) -> String {
        use convert_case::{Case, Casing};

        match self {
            NamingConvention::Identity => name.to_string(),
            NamingConvention::CamelCase => name.to_case(Case::Camel),
            NamingConvention::SnakeCase => name.to_case(Case::Snake),
            NamingConvention::PascalCase => name.to_case(Case::Pascal),
            NamingConvention::ScreamingSnakeCase => name.to_case(Case::UpperSnake),
            NamingConvention::KebabCase => name.to_case(Case::Kebab),
        }
    }
}

/// Rounding policy carried alongside decimal precision and scale.
///
/// The engine itself never rounds; the policy is configuration that the
/// value-encoding collaborator reads when it narrows a value to the declared
/// scale. Banker's rounding is representable but never the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Round half away from zero.
    #[default]
    HalfUp,

    /// Round half toward zero.
    HalfDown,

    /// Round half to the nearest even digit (banker's rounding).
    HalfEven,

    /// Always round toward zero.
    Truncate,
}

/// Precision, scale, and rounding applied to decimal-kind primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalSettings {
    /// Total number of significant digits.
    pub precision: u32,

    /// Digits to the right of the decimal point.
    pub scale: u32,

    /// Rounding policy for the value encoder.
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl Default for DecimalSettings {
    fn default() -> Self {
        Self {
            precision: 8,
            scale: 2,
            rounding: RoundingMode::default(),
        }
    }
}

impl DecimalSettings {
    /// Create settings with the given precision and scale and the default rounding.
    pub fn new(precision: u32, scale: u32) -> Self {
        Self {
            precision,
            scale,
            rounding: RoundingMode::default(),
        }
    }

    /// Set the rounding policy.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }
}

/// Ambient configuration threaded through every derivation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeriveConfig {
    /// Naming convention for field labels.
    #[serde(default)]
    pub naming: NamingConvention,

    /// Decimal precision, scale, and rounding.
    #[serde(default)]
    pub decimal: DecimalSettings,
}

impl DeriveConfig {
    /// Create a config with the default convention and decimal settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the naming convention.
    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// Set the decimal settings.
    pub fn with_decimal(mut self, decimal: DecimalSettings) -> Self {
        self.decimal = decimal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_default() {
        assert_eq!(NamingConvention::default(), NamingConvention::Identity);
        assert_eq!(NamingConvention::Identity.apply("user_name"), "user_name");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(NamingConvention::CamelCase.apply("user_name"), "userName");
        assert_eq!(NamingConvention::CamelCase.apply("UserName"), "userName");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(NamingConvention::SnakeCase.apply("userName"), "user_name");
        assert_eq!(NamingConvention::SnakeCase.apply("UserName"), "user_name");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(NamingConvention::PascalCase.apply("user_name"), "UserName");
    }

    #[test]
    fn test_screaming_snake_case() {
        assert_eq!(
            NamingConvention::ScreamingSnakeCase.apply("userName"),
            "USER_NAME"
        );
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(NamingConvention::KebabCase.apply("user_name"), "user-name");
    }

    #[test]
    fn test_decimal_defaults() {
        let settings = DecimalSettings::default();
        assert_eq!(settings.precision, 8);
        assert_eq!(settings.scale, 2);
        assert_eq!(settings.rounding, RoundingMode::HalfUp);
    }

    #[test]
    fn test_decimal_builder() {
        let settings = DecimalSettings::new(10, 4).with_rounding(RoundingMode::HalfEven);
        assert_eq!(settings.precision, 10);
        assert_eq!(settings.scale, 4);
        assert_eq!(settings.rounding, RoundingMode::HalfEven);
    }

    #[test]
    fn test_config_builder() {
        let config = DeriveConfig::new()
            .with_naming(NamingConvention::CamelCase)
            .with_decimal(DecimalSettings::new(12, 3));
        assert_eq!(config.naming, NamingConvention::CamelCase);
        assert_eq!(config.decimal.precision, 12);
    }
}
