// tests/integration_intersect.rs
use anyhow::Result;
use tally_core::generate::{GeneratorSettings, RecordSource, SeededSource};
use tally_core::intersect::{distinct_codes, intersect_counts, shared_codes};
use tally_core::{Category, CategoryPair, CategorySet, IntersectionResult, Record, TallyError};

fn with_codes(codes: &[u32]) -> Vec<Record> {
    codes
        .iter()
        .enumerate()
        .map(|(i, c)| Record::new(i, *c, "t", "OPERATOR B"))
        .collect()
}

fn three(resolved: &[u32], unresolved: &[u32], backlog: &[u32]) -> CategorySet {
    CategorySet::new()
        .with(Category::Resolved, with_codes(resolved))
        .with(Category::Unresolved, with_codes(unresolved))
        .with(Category::Backlog, with_codes(backlog))
}

#[test]
fn test_pairwise_shared_codes() -> Result<()> {
    let set = three(&[1, 2, 3], &[2, 3, 4], &[4, 5]);
    let result = intersect_counts(&set)?;
    assert_eq!(
        result,
        IntersectionResult {
            resolved_unresolved: 2,
            resolved_backlog: 0,
            unresolved_backlog: 1,
        }
    );
    Ok(())
}

#[test]
fn test_json_keys() -> Result<()> {
    let result = intersect_counts(&three(&[1], &[1], &[1]))?;
    let json = serde_json::to_value(result)?;
    assert_eq!(
        json,
        serde_json::json!({"resolved_unresolved": 1, "resolved_backlog": 1, "unresolved_backlog": 1})
    );
    Ok(())
}

#[test]
fn test_symmetric_under_swap() -> Result<()> {
    let set = three(&[1, 2, 3, 9], &[2, 3, 4], &[4, 9]);
    let swapped = three(&[2, 3, 4], &[1, 2, 3, 9], &[4, 9]);
    let a = intersect_counts(&set)?;
    let b = intersect_counts(&swapped)?;
    assert_eq!(a.resolved_unresolved, b.resolved_unresolved);
    assert_eq!(a.between(Category::Resolved, Category::Unresolved), a.between(Category::Unresolved, Category::Resolved));
    assert_eq!(a.resolved_backlog, b.unresolved_backlog);
    Ok(())
}

#[test]
fn test_bounded_by_smaller_code_set() -> Result<()> {
    let mut source = SeededSource::new(GeneratorSettings::default(), 99)?;
    let set = source.generate();
    let result = intersect_counts(&set)?;
    for (pair, count) in result.iter() {
        let (a, b) = pair.categories();
        let left = distinct_codes(set.get(a)?).len();
        let right = distinct_codes(set.get(b)?).len();
        assert!(count <= left.min(right), "{} exceeds bound", pair.key());
        assert_eq!(shared_codes(&set, pair)?.len(), count);
    }
    Ok(())
}

#[test]
fn test_no_overlap_reports_zero() -> Result<()> {
    let result = intersect_counts(&three(&[1], &[2], &[3]))?;
    assert!(result.iter().all(|(_, n)| n == 0));
    Ok(())
}

#[test]
fn test_missing_category() {
    let set = CategorySet::new()
        .with(Category::Unresolved, with_codes(&[1]))
        .with(Category::Backlog, with_codes(&[1]));
    assert!(matches!(
        intersect_counts(&set),
        Err(TallyError::MissingCategory(name)) if name == "resolved"
    ));
    assert!(shared_codes(&set, CategoryPair::UnresolvedBacklog).is_ok());
}
