//! Validation - Rule/Policy Separation
//!
//! Rules produce structured violations.
//! Policy: errors reject the render, warnings are logged and drawn anyway.

use serde::{Deserialize, Serialize};

use crate::model::{Crew, TemplateConfig};

pub const MAX_DIMENSION: u32 = 8192;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == ViolationSeverity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.violations
            .iter()
            .filter(|v| v.severity == ViolationSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.violations
            .iter()
            .filter(|v| v.severity == ViolationSeverity::Warning)
    }

    /// `rule: message` pairs joined for an error message.
    pub fn summary(&self) -> String {
        self.errors()
            .map(|v| format!("{}: {}", v.rule, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn validate(&self, crew: &Crew, config: &TemplateConfig) -> Vec<ValidationViolation>;
}

// --- Concrete Rules ---

pub struct CrewNamesRule;

impl ValidationRule for CrewNamesRule {
    fn name(&self) -> &'static str {
        "crew_names"
    }

    fn validate(&self, crew: &Crew, _config: &TemplateConfig) -> Vec<ValidationViolation> {
        if crew.crew_names.is_empty() {
            vec![ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                message: "crewNames must list at least one rower".to_string(),
                expected: Some("non-empty array".to_string()),
                actual: Some("0 names".to_string()),
            }]
        } else {
            vec![]
        }
    }
}

pub struct DimensionsRule;

impl ValidationRule for DimensionsRule {
    fn name(&self) -> &'static str {
        "dimensions"
    }

    fn validate(&self, _crew: &Crew, config: &TemplateConfig) -> Vec<ValidationViolation> {
        let dims = config.dimensions;
        let in_range = |v: u32| (1..=MAX_DIMENSION).contains(&v);
        if in_range(dims.width) && in_range(dims.height) {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message: "Canvas dimensions out of range".to_string(),
            expected: Some(format!("1..={MAX_DIMENSION} on each side")),
            actual: Some(format!("{}x{}", dims.width, dims.height)),
        }]
    }
}

pub struct SeatCountRule;

impl ValidationRule for SeatCountRule {
    fn name(&self) -> &'static str {
        "seat_count"
    }

    fn validate(&self, crew: &Crew, _config: &TemplateConfig) -> Vec<ValidationViolation> {
        let seats = crew.boat_type.seats as usize;
        if crew.crew_names.len() == seats {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Warning,
            message: "Roster length differs from boat seats; numeric labels fill the gap"
                .to_string(),
            expected: Some(format!("{seats} names")),
            actual: Some(format!("{} names", crew.crew_names.len())),
        }]
    }
}

pub struct BlankNamesRule;

impl ValidationRule for BlankNamesRule {
    fn name(&self) -> &'static str {
        "blank_names"
    }

    fn validate(&self, crew: &Crew, _config: &TemplateConfig) -> Vec<ValidationViolation> {
        let blank: Vec<String> = crew
            .crew_names
            .iter()
            .enumerate()
            .filter(|(_, n)| n.trim().is_empty())
            .map(|(i, _)| (i + 1).to_string())
            .collect();
        if blank.is_empty() {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Warning,
            message: "Some seats have no name".to_string(),
            expected: None,
            actual: Some(format!("blank seats: {}", blank.join(", "))),
        }]
    }
}

/// Validator orchestrates rules and applies policy
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(CrewNamesRule),
                Box::new(DimensionsRule),
                Box::new(SeatCountRule),
                Box::new(BlankNamesRule),
            ],
        }
    }

    pub fn validate(&self, crew: &Crew, config: &TemplateConfig) -> ValidationResult {
        let violations: Vec<_> = self
            .rules
            .iter()
            .flat_map(|rule| rule.validate(crew, config))
            .collect();
        let valid = !violations
            .iter()
            .any(|v| v.severity == ViolationSeverity::Error);
        ValidationResult { valid, violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoatType, CanvasDimensions, ColorScheme};

    fn crew(seats: u32, names: &[&str]) -> Crew {
        Crew {
            name: "Crew".into(),
            club_name: String::new(),
            race_name: String::new(),
            boat_type: BoatType::new(seats, "", ""),
            crew_names: names.iter().map(|n| n.to_string()).collect(),
            cox_name: None,
            coach_name: None,
        }
    }

    fn config(w: u32, h: u32) -> TemplateConfig {
        TemplateConfig::new(CanvasDimensions::new(w, h), ColorScheme::default())
    }

    #[test]
    fn empty_roster_is_an_error() {
        let result = Validator::new().validate(&crew(1, &[]), &config(1080, 1080));
        assert!(!result.valid);
        assert_eq!(result.errors().next().unwrap().rule, "crew_names");
    }

    #[test]
    fn zero_and_huge_dimensions_rejected() {
        let v = Validator::new();
        assert!(!v.validate(&crew(1, &["A"]), &config(0, 1080)).valid);
        assert!(!v.validate(&crew(1, &["A"]), &config(1080, MAX_DIMENSION + 1)).valid);
        assert!(v.validate(&crew(1, &["A"]), &config(1080, 1350)).valid);
    }

    #[test]
    fn mismatch_and_blank_are_warnings_only() {
        let result = Validator::new().validate(&crew(8, &["A", " "]), &config(1080, 1080));
        assert!(result.valid);
        let rules: Vec<_> = result.warnings().map(|w| w.rule.as_str()).collect();
        assert_eq!(rules, ["seat_count", "blank_names"]);
        assert!(!result.has_errors());
    }
}
