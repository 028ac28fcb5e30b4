// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Embedded scheduling metadata in issue descriptions.
//!
//! A description may open with a block of `key: value` lines fenced by
//! `---` lines:
//!
//! ```text
//! ---
//! start: 2024-08-05
//! progress: 50
//! ---
//! Regular markdown body.
//! ```
//!
//! The block must start on the very first line. Values that read as numbers
//! are stored as numbers, everything else as trimmed text. Only `start` and
//! `progress` mean anything to the timeline; other keys are kept as-is.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Key holding the start date.
pub const START_KEY: &str = "start";
/// Key holding the completion percentage.
pub const PROGRESS_KEY: &str = "progress";

// Opening fence, optional body, closing fence. Both fences are whole lines.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"\A---\r?\n(?s:(.*?)\r?\n)?---(?:\r?\n|\z)") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// A single metadata value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Number(f64),
    Text(String),
}

impl MetaValue {
    /// Coerces a raw value: finite decimal numbers become [`MetaValue::Number`].
    pub fn coerce(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => MetaValue::Number(n),
            _ => MetaValue::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetaValue::Number(n) => Some(*n),
            MetaValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::Number(_) => None,
        }
    }

    /// Returns false for empty text and zero, which count as "not set".
    pub fn is_set(&self) -> bool {
        match self {
            MetaValue::Number(n) => *n != 0.0,
            MetaValue::Text(s) => !s.is_empty(),
        }
    }
}

/// Key/value pairs recovered from a leading metadata block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddedMetadata {
    fields: BTreeMap<String, MetaValue>,
}

impl EmbeddedMetadata {
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.fields.get(key)
    }

    /// The `start` value, if set to something non-empty.
    pub fn start(&self) -> Option<&MetaValue> {
        self.get(START_KEY).filter(|v| v.is_set())
    }

    /// The `progress` value, if it is numeric.
    pub fn progress(&self) -> Option<f64> {
        self.get(PROGRESS_KEY).and_then(MetaValue::as_number)
    }

    fn parse_lines(block: &str) -> Self {
        let mut fields = BTreeMap::new();
        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            fields.insert(key.to_string(), MetaValue::coerce(value));
        }
        EmbeddedMetadata { fields }
    }
}

/// A description split into its metadata block and remaining body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub metadata: EmbeddedMetadata,
    /// Text after the closing fence, trimmed.
    pub body: String,
}

/// Splits `text` into metadata and body.
///
/// Returns `None` when the text is empty, does not open with a fenced block,
/// or the block has no content.
pub fn parse(text: &str) -> Option<FrontMatter> {
    if text.is_empty() {
        return None;
    }
    let caps = BLOCK_RE.captures(text)?;
    let block = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    if block.trim().is_empty() {
        return None;
    }
    let end = caps.get(0).map(|m| m.end()).unwrap_or_default();
    Some(FrontMatter {
        metadata: EmbeddedMetadata::parse_lines(block),
        body: text[end..].trim().to_string(),
    })
}

/// Extracts the metadata block from `text`, discarding the body.
pub fn extract(text: &str) -> Option<EmbeddedMetadata> {
    parse(text).map(|fm| fm.metadata)
}

#[cfg(test)]
#[path = "frontmatter_tests.rs"]
mod tests;
