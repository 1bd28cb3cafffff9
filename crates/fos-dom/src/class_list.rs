//! DOMTokenList (classList)
//!
//! Space-separated class tokens of an element.

/// Ordered set of class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DOMTokenList {
    tokens: Vec<String>,
}

impl DOMTokenList {
    /// Create empty token list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from space-separated string, dropping duplicates
    pub fn from_string(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(&[token]);
        }
        list
    }

    /// Get number of tokens
    pub fn length(&self) -> usize {
        self.tokens.len()
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add token(s); returns whether the list changed
    pub fn add(&mut self, tokens: &[&str]) -> bool {
        let before = self.tokens.len();
        for token in tokens {
            if !token.is_empty() && !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
        self.tokens.len() != before
    }

    /// Remove token(s); returns whether the list changed
    pub fn remove(&mut self, tokens: &[&str]) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| !tokens.contains(&t.as_str()));
        self.tokens.len() != before
    }

    /// Force a token on or off
    pub fn toggle(&mut self, token: &str, force: bool) {
        if force {
            self.add(&[token]);
        } else {
            self.remove(&[token]);
        }
    }

    /// Serialized attribute value
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    /// Iterate over tokens
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }
}

impl std::fmt::Display for DOMTokenList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
