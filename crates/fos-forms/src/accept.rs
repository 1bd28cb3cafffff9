//! File accept filter
//!
//! Matches selected files against an `accept` attribute such as
//! `".png,image/*,application/pdf"`. Comparison is case-insensitive.

use fos_dom::forms::SelectedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
enum AcceptToken {
    /// `.png`: filename suffix
    Extension(String),
    /// `image/*`: MIME prefix, stored without the `*`
    MimePrefix(String),
    /// `application/pdf`: exact MIME type
    Mime(String),
}

impl AcceptToken {
    fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim().to_ascii_lowercase();
        if token.is_empty() {
            return None;
        }
        Some(if token.starts_with('.') {
            Self::Extension(token)
        } else if let Some(prefix) = token.strip_suffix('*').filter(|p| p.ends_with('/')) {
            Self::MimePrefix(prefix.to_string())
        } else {
            Self::Mime(token)
        })
    }

    fn matches(&self, file: &SelectedFile) -> bool {
        match self {
            Self::Extension(ext) => file.name.to_lowercase().ends_with(ext.as_str()),
            Self::MimePrefix(prefix) => file.mime_type.to_ascii_lowercase().starts_with(prefix.as_str()),
            Self::Mime(mime) => file.mime_type.eq_ignore_ascii_case(mime),
        }
    }
}

/// Parsed `accept` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptFilter {
    tokens: Vec<AcceptToken>,
}

impl AcceptFilter {
    /// Parse a comma-separated filter; `None` when it declares no tokens
    pub fn parse(accept: &str) -> Option<Self> {
        let tokens: Vec<AcceptToken> = accept.split(',').filter_map(AcceptToken::parse).collect();
        (!tokens.is_empty()).then_some(Self { tokens })
    }

    /// Whether one file matches at least one token
    pub fn accepts(&self, file: &SelectedFile) -> bool {
        self.tokens.iter().any(|token| token.matches(file))
    }

    /// Whether every file matches; an empty selection always passes
    pub fn accepts_all(&self, files: &[SelectedFile]) -> bool {
        files.iter().all(|file| self.accepts(file))
    }
}
