use std::cmp::Reverse;
use std::path::PathBuf;

use tracing::debug;

use crate::query::Query;
use crate::scorer::Scorer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub path: PathBuf,
    pub score: i64,
}

/// Scores every path, keeps the positive ones and orders them best first.
///
/// The sort is stable, so equal scores keep their discovery order.
pub fn rank_scored(
    scorer: &mut Scorer,
    query: &Query,
    paths: Vec<PathBuf>,
) -> Vec<ScoredCandidate> {
    let total = paths.len();
    let mut scored: Vec<ScoredCandidate> = paths
        .into_iter()
        .filter_map(|path| {
            let score = scorer.score(query, &path.to_string_lossy());
            (score > 0).then_some(ScoredCandidate { path, score })
        })
        .collect();
    scored.sort_by_key(|candidate| Reverse(candidate.score));
    debug!("{} of {total} files match '{query}'", scored.len());
    scored
}

pub fn rank(scorer: &mut Scorer, query: &Query, paths: Vec<PathBuf>) -> Vec<PathBuf> {
    rank_scored(scorer, query, paths)
        .into_iter()
        .map(|candidate| candidate.path)
        .collect()
}
