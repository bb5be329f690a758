//! Structured documents produced by rendering a template.

use crate::error::{Error, Result};
use serde::Serialize;

/// A parsed JSON document.
///
/// Object keys keep the order in which they first appear in the source text.
/// A repeated key keeps its first position and takes the last value. Numbers
/// keep their literal text, so large integers and `-0` pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(serde_json::Value);

impl Document {
    /// Parses `text` as a JSON document.
    pub fn parse(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Document)
    }

    /// Serializes the document with two-space indentation.
    ///
    /// The output has no trailing newline and is byte-identical for equal documents.
    pub fn to_pretty_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.0).map_err(Error::SerializationError)
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        Document(value)
    }
}
