//! Form control kinds
//!
//! Input types and the file-selection model used by `<input type=file>`.

/// HTML input types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Tel,
    Url,
    Search,
    Date,
    Time,
    DatetimeLocal,
    Month,
    Week,
    Color,
    Range,
    File,
    Hidden,
    Checkbox,
    Radio,
    Submit,
    Reset,
    Button,
    Image,
}

impl InputType {
    /// Parse from the `type` attribute; unknown values fall back to text
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "password" => Self::Password,
            "email" => Self::Email,
            "number" => Self::Number,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "search" => Self::Search,
            "date" => Self::Date,
            "time" => Self::Time,
            "datetime-local" => Self::DatetimeLocal,
            "month" => Self::Month,
            "week" => Self::Week,
            "color" => Self::Color,
            "range" => Self::Range,
            "file" => Self::File,
            "hidden" => Self::Hidden,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "submit" => Self::Submit,
            "reset" => Self::Reset,
            "button" => Self::Button,
            "image" => Self::Image,
            _ => Self::Text,
        }
    }

    /// Numeric inputs get range/step/bad-input checks
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Range)
    }

    /// Check if this is a button type
    pub fn is_button(&self) -> bool {
        matches!(self, Self::Submit | Self::Reset | Self::Button | Self::Image)
    }

    /// Whether activating this input submits its form
    pub fn submits(&self) -> bool {
        matches!(self, Self::Submit | Self::Image)
    }
}

/// Kind of form-associated element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Input(InputType),
    Textarea,
    Select,
    /// `<button>`, with whether it is a submit button
    Button { submits: bool },
}

impl ControlKind {
    /// Classify an element from its tag and `type` attribute
    pub fn classify(tag: &str, type_attr: Option<&str>) -> Option<Self> {
        match tag {
            "input" => Some(Self::Input(type_attr.map(InputType::parse).unwrap_or_default())),
            "textarea" => Some(Self::Textarea),
            "select" => Some(Self::Select),
            "button" => {
                // Missing or unknown type means submit
                let submits = match type_attr.map(|t| t.trim().to_ascii_lowercase()) {
                    Some(t) => t != "button" && t != "reset",
                    None => true,
                };
                Some(Self::Button { submits })
            }
            _ => None,
        }
    }

    /// Whether this is `<input type=file>`
    pub fn is_file(&self) -> bool {
        matches!(self, Self::Input(InputType::File))
    }

    /// Whether activating the element submits its form
    pub fn submits(&self) -> bool {
        match self {
            Self::Input(t) => t.submits(),
            Self::Button { submits } => *submits,
            _ => false,
        }
    }
}

/// A file picked in a file input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name without directory
    pub name: String,
    /// MIME type reported for the file (may be empty)
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}
