//! Ordered, duplicate-free candidate sets.

use catalog::PeakId;
use std::collections::HashSet;

/// Deduplicate ids, keeping the first occurrence of each
pub(crate) fn dedup_ids<I>(ids: I) -> Vec<PeakId>
where
    I: IntoIterator,
    I::Item: Into<PeakId>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .map(Into::into)
        .filter(|id: &PeakId| seen.insert(id.clone()))
        .collect()
}

/// Peak ids still eligible for recommendation.
///
/// Keeps insertion order (selection walks candidates in this order) and a
/// membership set for O(1) `contains` during scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    order: Vec<PeakId>,
    members: HashSet<PeakId>,
}

impl CandidateSet {
    /// Build a candidate set, dropping duplicates after their first occurrence
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PeakId>,
    {
        let order = dedup_ids(ids);
        let members = order.iter().cloned().collect();
        Self { order, members }
    }

    /// Keep only candidates that also appear in `endorsed`, in this set's order
    pub fn intersect(&self, endorsed: &[PeakId]) -> Self {
        let endorsed: HashSet<&str> = endorsed.iter().map(String::as_str).collect();
        Self::from_ids(
            self.order
                .iter()
                .filter(|id| endorsed.contains(id.as_str()))
                .cloned(),
        )
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    pub fn first(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[PeakId] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<PeakId> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
