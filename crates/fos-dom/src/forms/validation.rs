//! Form Validation
//!
//! Constraint Validation API implementation: computes the validity state
//! vector of a control from its declared attributes and current value.

use regex::Regex;

use super::control::{ControlKind, InputType, SelectedFile};
use crate::ElementData;

/// Validity state for form controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    /// The element's value is missing (for required)
    pub value_missing: bool,
    /// The element's value doesn't match the type
    pub type_mismatch: bool,
    /// The element's value doesn't match the pattern
    pub pattern_mismatch: bool,
    /// The element's value is too long
    pub too_long: bool,
    /// The element's value is too short
    pub too_short: bool,
    /// The element's value is above the maximum
    pub range_overflow: bool,
    /// The element's value is below the minimum
    pub range_underflow: bool,
    /// The element's value doesn't match step
    pub step_mismatch: bool,
    /// The element has a bad input format
    pub bad_input: bool,
}

impl ValidityState {
    /// Check if the element is valid
    pub fn is_valid(&self) -> bool {
        !self.value_missing &&
        !self.type_mismatch &&
        !self.pattern_mismatch &&
        !self.too_long &&
        !self.too_short &&
        !self.range_overflow &&
        !self.range_underflow &&
        !self.step_mismatch &&
        !self.bad_input
    }
}

/// Step constraint of a numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// `step="any"`
    Any,
    Value(f64),
}

/// Validation constraints declared on a control
#[derive(Debug, Clone, Default)]
pub struct ValidationConstraints {
    pub kind: Option<ControlKind>,
    pub required: bool,
    pub pattern: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub step: Option<Step>,
}

impl ValidationConstraints {
    /// Read constraints from element attributes
    pub fn from_element(elem: &ElementData) -> Self {
        let parse_f64 = |name: &str| elem.get_attr(name).and_then(|v| v.trim().parse::<f64>().ok());
        let parse_len = |name: &str| elem.get_attr(name).and_then(|v| v.trim().parse::<usize>().ok());

        let step = elem.get_attr("step").and_then(|v| {
            let v = v.trim();
            if v.eq_ignore_ascii_case("any") {
                Some(Step::Any)
            } else {
                // Zero, negative or garbage steps fall back to the default
                v.parse::<f64>().ok().filter(|s| *s > 0.0).map(Step::Value)
            }
        });

        Self {
            kind: ControlKind::classify(&elem.tag, elem.get_attr("type")),
            required: elem.has_attr("required"),
            pattern: elem.get_attr("pattern").map(str::to_string),
            min: parse_f64("min"),
            max: parse_f64("max"),
            min_length: parse_len("minlength"),
            max_length: parse_len("maxlength"),
            step,
        }
    }

    fn input_type(&self) -> Option<InputType> {
        match self.kind {
            Some(ControlKind::Input(t)) => Some(t),
            _ => None,
        }
    }

    /// Validate the current value (and file selection for file inputs)
    pub fn validate(&self, value: &str, files: &[SelectedFile]) -> ValidityState {
        let mut state = ValidityState::default();
        let input_type = self.input_type();

        if matches!(self.kind, Some(ControlKind::Button { .. }) | None)
            || input_type.is_some_and(|t| t.is_button() || t == InputType::Hidden)
        {
            return state;
        }

        if input_type == Some(InputType::File) {
            state.value_missing = self.required && files.is_empty();
            return state;
        }

        if value.is_empty() {
            state.value_missing = self.required;
            return state;
        }

        match input_type {
            Some(InputType::Email) => state.type_mismatch = !is_valid_email(value),
            Some(InputType::Url) => state.type_mismatch = !is_valid_url(value),
            Some(t) if t.is_numeric() => {
                self.validate_number(value, &mut state);
                return state;
            }
            _ => {}
        }

        if let Some(ref pattern) = self.pattern {
            state.pattern_mismatch = !matches_pattern(value, pattern);
        }

        let len = value.chars().count();
        if let Some(max) = self.max_length {
            state.too_long = len > max;
        }
        if let Some(min) = self.min_length {
            state.too_short = len < min;
        }

        state
    }

    fn validate_number(&self, value: &str, state: &mut ValidityState) {
        let Ok(num) = value.trim().parse::<f64>() else {
            state.bad_input = true;
            return;
        };
        if !num.is_finite() {
            state.bad_input = true;
            return;
        }

        if let Some(max) = self.max {
            state.range_overflow = num > max;
        }
        if let Some(min) = self.min {
            state.range_underflow = num < min;
        }

        let step = match self.step {
            Some(Step::Any) => return,
            Some(Step::Value(step)) => step,
            None => 1.0,
        };
        let base = self.min.unwrap_or(0.0);
        let ratio = (num - base) / step;
        if (ratio - ratio.round()).abs() > 1e-9 {
            state.step_mismatch = true;
        }
    }
}

/// Full-string match of an HTML `pattern`; patterns that fail to compile never mismatch
fn matches_pattern(value: &str, pattern: &str) -> bool {
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(re) => re.is_match(value),
        Err(err) => {
            tracing::debug!("Ignoring uncompilable pattern {:?}: {}", pattern, err);
            true
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !local.chars().any(|c| c.is_whitespace() || c == '@')
        && !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

fn is_valid_url(value: &str) -> bool {
    let Some((scheme, rest)) = value.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
        && !value.chars().any(char::is_whitespace)
}
