use crate::value::CoercionId;
use serde::Deserialize;

///
/// CONSTANTS
///

/// Default display name of the row parameter in rendered key predicates.
pub const DEFAULT_ROW_PARAMETER: &str = "a";

///
/// BuildConfig
///
/// Caller-supplied options for the builders. Deserializable so hosts can
/// carry it inside their own mapping configuration; every field defaults.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Coercion applied when wrapping key values for their declared kind.
    pub key_coercion: CoercionId,

    /// Row parameter name shown when a key predicate is rendered.
    pub row_parameter: String,
}

impl BuildConfig {
    /// Config that requires key values to match declared kinds exactly.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            key_coercion: CoercionId::Strict,
            ..Self::default()
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            key_coercion: CoercionId::NumericWiden,
            row_parameter: DEFAULT_ROW_PARAMETER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: BuildConfig = serde_json::from_str("{}").expect("config should parse");

        assert_eq!(config, BuildConfig::default());
    }

    #[test]
    fn key_coercion_parses_snake_case() {
        let config: BuildConfig =
            serde_json::from_str(r#"{ "key_coercion": "strict", "row_parameter": "row" }"#)
                .expect("config should parse");

        assert_eq!(config.key_coercion, CoercionId::Strict);
        assert_eq!(config.row_parameter, "row");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<BuildConfig>(r#"{ "coercion": "strict" }"#)
            .expect_err("unknown field should fail");

        assert!(err.to_string().contains("unknown field"));
    }
}
