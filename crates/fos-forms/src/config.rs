//! Validation Configuration

/// Names of the attributes and classes the validation layer reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Form-level marker opting a form in
    pub form_marker: String,

    /// Control-level opt-out flag
    pub opt_out: String,

    /// Selector of the control this one must equal
    pub confirm_ref: String,

    /// Id reference of the message target (first token is used)
    pub message_ref: String,

    /// Marker for submit controls whose enabled state follows validity
    pub submit_marker: String,

    /// Message target class for a valid control
    pub valid_class: String,

    /// Message target class for an invalid control
    pub invalid_class: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form_marker: "data-validate".into(),
            opt_out: "data-novalidate".into(),
            confirm_ref: "data-confirm".into(),
            message_ref: "aria-describedby".into(),
            submit_marker: "data-validate-submit".into(),
            valid_class: "valid".into(),
            invalid_class: "invalid".into(),
        }
    }
}
