use std::collections::HashMap;

use tracing::debug;

use crate::query::Query;

/// Score of a path that ends with the literal query.
pub const MAX_SCORE: i64 = 100;

/// Relevance scoring of candidate paths against a query.
///
/// Scores have a ceiling of [`MAX_SCORE`] and no floor; anything at or below
/// zero is not a match. Lengths and offsets are byte positions in the path
/// string.
///
/// The scorer memoizes the adjacent-character pairs of each query it sees so
/// that ranking a whole tree computes them once.
#[derive(Debug, Default)]
pub struct Scorer {
    bigram_cache: HashMap<String, Vec<String>>,
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&mut self, query: &Query, path: &str) -> i64 {
        let score = self.compute(query, path);
        if score > 0 {
            debug!("score {score:>4} {path}");
        }
        score
    }

    fn compute(&mut self, query: &Query, path: &str) -> i64 {
        let text = query.as_str();
        if path.ends_with(text) {
            return MAX_SCORE;
        }

        let Some((start, end)) = query.find_in(path) else {
            return 0;
        };
        let tail = (path.len() - end) as i64;

        if path.contains(text) {
            return MAX_SCORE - tail;
        }

        // In-order characters with no adjacent pair in common are noise.
        let bigrams = self.bigrams(text);
        if !bigrams.is_empty() && !bigrams.iter().any(|pair| path.contains(pair.as_str())) {
            return 0;
        }

        MAX_SCORE - tail - (end - start) as i64
    }

    /// Adjacent character pairs of `query`, e.g. `"abc"` gives `["ab", "bc"]`.
    pub fn bigrams(&mut self, query: &str) -> &[String] {
        self.bigram_cache
            .entry(query.to_string())
            .or_insert_with(|| char_pairs(query))
    }

    pub fn cached_queries(&self) -> usize {
        self.bigram_cache.len()
    }
}

fn char_pairs(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(2)
        .map(|pair| pair.iter().collect())
        .collect()
}
