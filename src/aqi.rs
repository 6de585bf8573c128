//! AQI severity classification
//!
//! Pure mapping from a numeric AQI value to a severity bucket with
//! fixed, ascending, inclusive-upper-bound thresholds.

/// Severity buckets, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AqiCategory {
    Good,
    Moderate,
    SensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Classify an AQI value. Total over all floats: negative values fall
    /// into `Good`, NaN fails every bound check and lands in `Hazardous`.
    pub fn from_value(value: f32) -> Self {
        if value <= 50.0 {
            AqiCategory::Good
        } else if value <= 100.0 {
            AqiCategory::Moderate
        } else if value <= 150.0 {
            AqiCategory::SensitiveGroups
        } else if value <= 200.0 {
            AqiCategory::Unhealthy
        } else if value <= 300.0 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    /// Human-readable display label
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::SensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Short tier code, also used as the CSS class on the result page
    pub fn tier(&self) -> &'static str {
        match self {
            AqiCategory::Good => "good",
            AqiCategory::Moderate => "moderate",
            AqiCategory::SensitiveGroups => "sensitive",
            AqiCategory::Unhealthy => "unhealthy",
            AqiCategory::VeryUnhealthy => "very-unhealthy",
            AqiCategory::Hazardous => "hazardous",
        }
    }
}
