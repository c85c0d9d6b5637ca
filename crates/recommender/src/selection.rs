//! Best-of selection: highest score, ties to the alphabetically first id.

use std::cmp::Ordering;

use crate::candidates::CandidateSet;
use crate::collation::locale_cmp;
use crate::scoring::ScoreBoard;

/// Pick the winning candidate.
///
/// Walks candidates in order and replaces the current best when a candidate
/// scores higher, or scores the same and collates strictly before it. The
/// outcome does not depend on candidate order. Returns `None` only for an
/// empty candidate set.
pub fn select_best<'a>(candidates: &'a CandidateSet, scores: &ScoreBoard) -> Option<&'a str> {
    let mut best = candidates.first()?;
    for key in candidates.iter() {
        let (key_score, best_score) = (scores.count(key), scores.count(best));
        if key_score > best_score
            || (key_score == best_score && locale_cmp(key, best) == Ordering::Less)
        {
            best = key;
        }
    }
    Some(best)
}
