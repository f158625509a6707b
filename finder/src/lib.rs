//! # v finder
//!
//! Locates a file under a directory from a partial, possibly fuzzy, name.
//!
//! ```text
//! root ──> PathCollector ──> rank (Scorer) ──> Selector ──> path
//! ```
//!
//! Every regular file under the root is scored against the query:
//!
//! - the path ends with the query: 100
//! - the query occurs verbatim: 100 minus the bytes after the fuzzy match
//! - the query characters occur in order and at least one adjacent pair of
//!   them occurs verbatim: as above, minus the length of the matched span
//!
//! Paths scoring zero or less are dropped. When more than one path remains
//! the [`Selector`] asks which one to use.

mod collector;
mod config;
mod error;
mod query;
mod ranker;
mod scorer;
mod selector;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

pub use collector::PathCollector;
pub use config::FinderConfig;
pub use error::FinderError;
pub use error::Result;
pub use query::Query;
pub use ranker::ScoredCandidate;
pub use ranker::rank;
pub use ranker::rank_scored;
pub use scorer::MAX_SCORE;
pub use scorer::Scorer;
pub use selector::BufReadLines;
pub use selector::LineSource;
pub use selector::Selector;
pub use selector::stdin_lines;

/// Runs a whole search under `root` and resolves it to a single file.
pub fn find<I, W>(
    config: &FinderConfig,
    root: &Path,
    query: &str,
    selector: &mut Selector<I, W>,
) -> Result<PathBuf>
where
    I: LineSource,
    W: Write,
{
    let query = Query::parse(query)?;
    let paths = PathCollector::new(config).collect(root)?;
    let mut scorer = Scorer::new();
    let ranked: Vec<PathBuf> = rank_scored(&mut scorer, &query, paths)
        .into_iter()
        .enumerate()
        .map(|(position, candidate)| {
            debug!("#{position} ({}) {}", candidate.score, candidate.path.display());
            candidate.path
        })
        .collect();
    selector.select(&query, &ranked)
}
