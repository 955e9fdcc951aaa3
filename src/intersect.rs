// src/intersect.rs
//! Shared-code counts between category pairs.

use crate::error::Result;
use crate::store::CategorySet;
use crate::types::{Category, CategoryPair, IntersectionResult, Record};
use std::collections::BTreeSet;
use tracing::debug;

/// Distinct codes present in a collection.
#[must_use]
pub fn distinct_codes(records: &[Record]) -> BTreeSet<u32> {
    records.iter().map(|r| r.code).collect()
}

/// Codes appearing in both categories of `pair`.
///
/// # Errors
/// Returns `MissingCategory` if either category is absent from `set`.
pub fn shared_codes(set: &CategorySet, pair: CategoryPair) -> Result<BTreeSet<u32>> {
    let (a, b) = pair.categories();
    let left = distinct_codes(set.get(a)?);
    let right = distinct_codes(set.get(b)?);
    Ok(left.intersection(&right).copied().collect())
}

/// Counts distinct codes shared by every pair of categories.
///
/// # Errors
/// Returns `MissingCategory` if any of the three categories is absent.
pub fn intersect_counts(set: &CategorySet) -> Result<IntersectionResult> {
    let resolved = distinct_codes(set.get(Category::Resolved)?);
    let unresolved = distinct_codes(set.get(Category::Unresolved)?);
    let backlog = distinct_codes(set.get(Category::Backlog)?);

    let result = IntersectionResult {
        resolved_unresolved: resolved.intersection(&unresolved).count(),
        resolved_backlog: resolved.intersection(&backlog).count(),
        unresolved_backlog: unresolved.intersection(&backlog).count(),
    };
    debug!(?result, "computed intersection counts");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;

    fn with_codes(codes: &[u32]) -> Vec<Record> {
        codes
            .iter()
            .enumerate()
            .map(|(i, c)| Record::new(i, *c, "t", "OPERATOR A"))
            .collect()
    }

    #[test]
    fn duplicates_within_a_category_collapse() {
        let set = CategorySet::new()
            .with(Category::Resolved, with_codes(&[7, 7, 7, 8]))
            .with(Category::Unresolved, with_codes(&[7, 7]))
            .with(Category::Backlog, with_codes(&[]));
        let result = intersect_counts(&set).unwrap_or_default();
        assert_eq!(result.resolved_unresolved, 1);
        assert_eq!(result.resolved_backlog, 0);
        assert_eq!(result.unresolved_backlog, 0);
    }

    #[test]
    fn missing_backlog_fails() {
        let set = CategorySet::new()
            .with(Category::Resolved, with_codes(&[1]))
            .with(Category::Unresolved, with_codes(&[1]));
        assert!(matches!(
            intersect_counts(&set),
            Err(TallyError::MissingCategory(name)) if name == "backlog"
        ));
        // The pair that does not touch backlog still resolves.
        let shared = shared_codes(&set, CategoryPair::ResolvedUnresolved).unwrap_or_default();
        assert_eq!(shared.into_iter().collect::<Vec<_>>(), vec![1]);
    }
}
