//! Element Query
//!
//! Compound-selector matching for `querySelector`-style lookups:
//! `tag`, `#id`, `.class`, `[attr]`, `[attr=value]` and comma-separated lists.
//! Combinators are not supported.

use crate::ElementData;

/// One simple selector component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Attr { name: String, value: Option<String> },
    Universal,
}

impl SimpleSelector {
    fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.tag.eq_ignore_ascii_case(tag),
            Self::Id(id) => elem.id() == Some(id.as_str()),
            Self::Class(class) => elem.classes.contains(class),
            Self::Attr { name, value: None } => elem.has_attr(name),
            Self::Attr { name, value: Some(v) } => elem.get_attr(name) == Some(v.as_str()),
        }
    }
}

/// A list of compound selectors; matches if any compound matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Vec<SimpleSelector>>,
}

impl Selector {
    /// Parse a selector string, returning `None` for empty or unsupported input
    pub fn parse(s: &str) -> Option<Self> {
        let compounds = s
            .split(',')
            .map(|part| parse_compound(part.trim()))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { compounds })
    }

    /// Check if an element matches
    pub fn matches(&self, elem: &ElementData) -> bool {
        self.compounds
            .iter()
            .any(|compound| compound.iter().all(|simple| simple.matches(elem)))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(s: &str) -> Option<Vec<SimpleSelector>> {
    if s.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        match c {
            '*' => {
                parts.push(SimpleSelector::Universal);
                rest = &rest[1..];
            }
            '#' | '.' => {
                let body = &rest[1..];
                let end = body.find(|c: char| !is_ident_char(c)).unwrap_or(body.len());
                if end == 0 {
                    return None;
                }
                let ident = body[..end].to_string();
                parts.push(if c == '#' { SimpleSelector::Id(ident) } else { SimpleSelector::Class(ident) });
                rest = &body[end..];
            }
            '[' => {
                let close = rest.find(']')?;
                let inner = rest[1..close].trim();
                let attr = match inner.split_once('=') {
                    Some((name, value)) => SimpleSelector::Attr {
                        name: name.trim().to_ascii_lowercase(),
                        value: Some(value.trim().trim_matches(|q| q == '"' || q == '\'').to_string()),
                    },
                    None => SimpleSelector::Attr { name: inner.to_ascii_lowercase(), value: None },
                };
                if matches!(&attr, SimpleSelector::Attr { name, .. } if name.is_empty() || !name.chars().all(is_ident_char)) {
                    return None;
                }
                parts.push(attr);
                rest = &rest[close + 1..];
            }
            c if is_ident_char(c) && parts.is_empty() => {
                let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
                parts.push(SimpleSelector::Tag(rest[..end].to_ascii_lowercase()));
                rest = &rest[end..];
            }
            _ => {
                tracing::debug!("Unsupported selector syntax: {:?}", s);
                return None;
            }
        }
    }

    Some(parts)
}
