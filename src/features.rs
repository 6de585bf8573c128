//! Feature vector - ordered model input parsed from form fields

use std::collections::HashMap;

use crate::error::AppError;

/// Number of model input features
pub const FEATURE_COUNT: usize = 8;

/// Form field names, in model input order:
/// temperature, max temperature, min temperature, sea-level pressure,
/// humidity, visibility, wind speed, max wind gust.
pub const FEATURE_FIELDS: [&str; FEATURE_COUNT] =
    ["T", "TM", "Tm", "SLP", "H", "VV", "V", "VM"];

/// Eight weather measurements in fixed order. Built fresh per request,
/// discarded after the prediction call. No range validation; values are
/// accepted as given.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Parse the eight named form fields. Fails on the first missing or
    /// non-numeric field, naming it and the parse failure.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, AppError> {
        let mut values = [0.0f32; FEATURE_COUNT];

        for (i, field) in FEATURE_FIELDS.iter().enumerate() {
            let raw = form
                .get(*field)
                .ok_or_else(|| AppError::InvalidInput(format!("missing field `{}`", field)))?;

            values[i] = raw.trim().parse::<f32>().map_err(|e| {
                AppError::InvalidInput(format!("field `{}` = {:?}: {}", field, raw, e))
            })?;
        }

        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    const VALID: [(&str, &str); 8] = [
        ("T", "20"),
        ("TM", "25"),
        ("Tm", "15"),
        ("SLP", "1010"),
        ("H", "60"),
        ("VV", "5"),
        ("V", "10"),
        ("VM", "15"),
    ];

    #[test]
    fn parses_fields_in_model_order() {
        let features = FeatureVector::from_form(&form(&VALID)).unwrap();
        assert_eq!(
            features.as_slice(),
            &[20.0, 25.0, 15.0, 1010.0, 60.0, 5.0, 10.0, 15.0]
        );
    }

    #[test]
    fn missing_field_is_named() {
        let mut f = form(&VALID);
        f.remove("H");

        let err = FeatureVector::from_form(&f).unwrap_err();
        assert!(err.to_string().contains("missing field `H`"));
    }

    #[test]
    fn non_numeric_field_reports_parse_failure() {
        let mut f = form(&VALID);
        f.insert("T".to_string(), "abc".to_string());

        let err = FeatureVector::from_form(&f).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("`T`"));
        assert!(msg.contains("invalid float literal"));
    }

    #[test]
    fn whitespace_and_extra_fields_are_tolerated() {
        let mut f = form(&VALID);
        f.insert("T".to_string(), " 20.5 ".to_string());
        f.insert("unused".to_string(), "xyz".to_string());

        let features = FeatureVector::from_form(&f).unwrap();
        assert_eq!(features.as_slice()[0], 20.5);
    }
}
