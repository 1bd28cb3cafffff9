//! Validity kinds and their messages
//!
//! The nine platform validity flags plus the two extensions (file accept and
//! value confirmation). Each kind owns an override attribute and a built-in
//! default message. `NATIVE_PRIORITY` is the order in which flags are
//! reported when several are set at once.

use fos_dom::NodeId;
use fos_dom::forms::ValidityState;

use crate::host::FormHost;

/// Attribute holding the message shown for a valid control
pub const SUCCESS_ATTR: &str = "data-success";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidityKind {
    ValueMissing,
    TypeMismatch,
    PatternMismatch,
    TooLong,
    TooShort,
    RangeOverflow,
    RangeUnderflow,
    StepMismatch,
    BadInput,
    FileAccept,
    ConfirmMismatch,
}

impl ValidityKind {
    /// Platform flags in reporting order; the first set flag wins
    pub const NATIVE_PRIORITY: [ValidityKind; 9] = [
        Self::ValueMissing,
        Self::TypeMismatch,
        Self::PatternMismatch,
        Self::TooLong,
        Self::TooShort,
        Self::RangeOverflow,
        Self::RangeUnderflow,
        Self::StepMismatch,
        Self::BadInput,
    ];

    /// Attribute that overrides the default message
    pub fn override_attr(self) -> &'static str {
        match self {
            Self::ValueMissing => "data-required-err",
            // Bad input shares the type override
            Self::TypeMismatch | Self::BadInput => "data-type-err",
            Self::PatternMismatch => "data-pattern-err",
            Self::TooLong => "data-maxlength-err",
            Self::TooShort => "data-minlength-err",
            Self::RangeOverflow => "data-max-err",
            Self::RangeUnderflow => "data-min-err",
            Self::StepMismatch => "data-step-err",
            Self::FileAccept => "data-accept-err",
            Self::ConfirmMismatch => "data-confirm-err",
        }
    }

    /// Built-in message
    pub fn default_message(self) -> &'static str {
        match self {
            Self::ValueMissing => "This field is required.",
            Self::TypeMismatch => "The value is not the correct type.",
            Self::PatternMismatch => "The value does not match the required pattern.",
            Self::TooLong => "The value is too long.",
            Self::TooShort => "The value is too short.",
            Self::RangeOverflow => "The value is too large.",
            Self::RangeUnderflow => "The value is too small.",
            Self::StepMismatch => "The value does not match the step interval.",
            Self::BadInput => "The input value is invalid.",
            Self::FileAccept => "Invalid file type.",
            Self::ConfirmMismatch => "Values do not match.",
        }
    }

    /// Whether the platform vector reports this kind; always false for the extensions
    pub fn is_flagged(self, validity: &ValidityState) -> bool {
        match self {
            Self::ValueMissing => validity.value_missing,
            Self::TypeMismatch => validity.type_mismatch,
            Self::PatternMismatch => validity.pattern_mismatch,
            Self::TooLong => validity.too_long,
            Self::TooShort => validity.too_short,
            Self::RangeOverflow => validity.range_overflow,
            Self::RangeUnderflow => validity.range_underflow,
            Self::StepMismatch => validity.step_mismatch,
            Self::BadInput => validity.bad_input,
            Self::FileAccept | Self::ConfirmMismatch => false,
        }
    }

    /// First flagged kind in priority order
    pub fn first_flagged(validity: &ValidityState) -> Option<Self> {
        Self::NATIVE_PRIORITY.into_iter().find(|kind| kind.is_flagged(validity))
    }

    /// Message for this kind on `control`: a non-empty override, else the default
    pub fn message<H: FormHost + ?Sized>(self, host: &H, control: NodeId) -> String {
        host.attribute(control, self.override_attr())
            .filter(|custom| !custom.is_empty())
            .unwrap_or(self.default_message())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let all = ValidityState {
            value_missing: true,
            type_mismatch: true,
            pattern_mismatch: true,
            too_long: true,
            too_short: true,
            range_overflow: true,
            range_underflow: true,
            step_mismatch: true,
            bad_input: true,
        };
        assert_eq!(ValidityKind::first_flagged(&all), Some(ValidityKind::ValueMissing));
        assert_eq!(ValidityKind::first_flagged(&ValidityState::default()), None);
    }

    #[test]
    fn test_extensions_never_flagged() {
        let validity = ValidityState { bad_input: true, ..Default::default() };
        assert!(!ValidityKind::FileAccept.is_flagged(&validity));
        assert!(!ValidityKind::ConfirmMismatch.is_flagged(&validity));
    }

    #[test]
    fn test_bad_input_shares_type_override() {
        assert_eq!(ValidityKind::BadInput.override_attr(), ValidityKind::TypeMismatch.override_attr());
        assert_ne!(ValidityKind::BadInput.default_message(), ValidityKind::TypeMismatch.default_message());
    }
}
