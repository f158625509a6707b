use regex::Regex;

use crate::error::FinderError;
use crate::error::Result;

/// A validated query fragment together with its fuzzy pattern.
///
/// The pattern matches the query characters in order, each escaped
/// literally, with `.*?` between neighbours. Matching is case-sensitive.
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    pattern: Regex,
}

impl Query {
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(FinderError::EmptyQuery);
        }
        let pattern = Regex::new(&fuzzy_pattern(text))?;
        Ok(Self {
            text: text.to_string(),
            pattern,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// First leftmost match span of the fuzzy pattern in `haystack`, as byte
    /// offsets.
    pub fn find_in(&self, haystack: &str) -> Option<(usize, usize)> {
        self.pattern.find(haystack).map(|m| (m.start(), m.end()))
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn fuzzy_pattern(text: &str) -> String {
    text.chars()
        .map(|ch| regex::escape(ch.encode_utf8(&mut [0; 4])))
        .collect::<Vec<_>>()
        .join(".*?")
}
