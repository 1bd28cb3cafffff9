//! fOS HTML Parser
//!
//! HTML5 parser built on html5ever, producing `fos_dom::Document` trees.

mod parser;

pub use parser::HtmlParser;
pub use fos_dom::Document;

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
