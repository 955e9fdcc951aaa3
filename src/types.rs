// src/types.rs
use crate::error::{Result, TallyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single incident entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub index: usize,
    pub code: u32,
    pub text: String,
    pub operator_name: String,
}

impl Record {
    #[must_use]
    pub fn new(index: usize, code: u32, text: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            index,
            code,
            text: text.into(),
            operator_name: operator.into(),
        }
    }
}

/// The three fixed incident groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Resolved,
    Unresolved,
    Backlog,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Resolved, Category::Unresolved, Category::Backlog];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Unresolved => "unresolved",
            Self::Backlog => "backlog",
        }
    }

    /// Position in the fixed ordering, used to lay out index ranges.
    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            Self::Resolved => 0,
            Self::Unresolved => 1,
            Self::Backlog => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resolved" => Ok(Self::Resolved),
            "unresolved" => Ok(Self::Unresolved),
            "backlog" => Ok(Self::Backlog),
            _ => Err(TallyError::MissingCategory(s.to_string())),
        }
    }
}

/// Attribute a collection can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Code,
    OperatorName,
}

impl Field {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::OperatorName => "operator_name",
        }
    }

    /// Extracts this field's value from a record.
    #[must_use]
    pub fn value_of(self, record: &Record) -> GroupValue {
        match self {
            Self::Code => GroupValue::Code(record.code),
            Self::OperatorName => GroupValue::Operator(record.operator_name.clone()),
        }
    }

    /// Parses a raw lookup value into this field's domain.
    ///
    /// # Errors
    /// Returns `ValueNotFound` when the text cannot name any value of the field
    /// (a non-numeric code can never occur).
    pub fn parse_value(self, raw: &str) -> Result<GroupValue> {
        match self {
            Self::Code => raw.trim().parse::<u32>().map(GroupValue::Code).map_err(|_| {
                TallyError::ValueNotFound {
                    field: self.as_str().to_string(),
                    value: raw.to_string(),
                }
            }),
            Self::OperatorName => Ok(GroupValue::Operator(raw.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "code" => Ok(Self::Code),
            "operator_name" | "operator" => Ok(Self::OperatorName),
            other => Err(TallyError::UnsupportedField(other.to_string())),
        }
    }
}

/// A value of a grouping field. Ordering is numeric for codes and
/// lexicographic for operator names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum GroupValue {
    Code(u32),
    Operator(String),
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(c) => write!(f, "{c}"),
            Self::Operator(name) => f.write_str(name),
        }
    }
}

/// One output row of the aggregator.
///
/// Each variant carries exactly the attributes its grouping field retains.
/// Field order matters: the derived `Ord` sorts by grouping value first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum AggregatedRow {
    Code {
        code: u32,
        text: String,
        count: usize,
    },
    Operator {
        operator_name: String,
        count: usize,
    },
}

impl AggregatedRow {
    /// Projects a record onto the attributes retained for `field`.
    #[must_use]
    pub fn project(record: &Record, field: Field, count: usize) -> Self {
        match field {
            Field::Code => Self::Code {
                code: record.code,
                text: record.text.clone(),
                count,
            },
            Field::OperatorName => Self::Operator {
                operator_name: record.operator_name.clone(),
                count,
            },
        }
    }

    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Code { .. } => Field::Code,
            Self::Operator { .. } => Field::OperatorName,
        }
    }

    #[must_use]
    pub fn group_value(&self) -> GroupValue {
        match self {
            Self::Code { code, .. } => GroupValue::Code(*code),
            Self::Operator { operator_name, .. } => GroupValue::Operator(operator_name.clone()),
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Code { count, .. } | Self::Operator { count, .. } => *count,
        }
    }
}

/// An unordered pair of distinct categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryPair {
    ResolvedUnresolved,
    ResolvedBacklog,
    UnresolvedBacklog,
}

impl CategoryPair {
    pub const ALL: [CategoryPair; 3] = [
        CategoryPair::ResolvedUnresolved,
        CategoryPair::ResolvedBacklog,
        CategoryPair::UnresolvedBacklog,
    ];

    /// Returns the pair for two categories in either order, or `None` if they are equal.
    #[must_use]
    pub fn of(a: Category, b: Category) -> Option<Self> {
        use Category::{Backlog, Resolved, Unresolved};
        match (a, b) {
            (Resolved, Unresolved) | (Unresolved, Resolved) => Some(Self::ResolvedUnresolved),
            (Resolved, Backlog) | (Backlog, Resolved) => Some(Self::ResolvedBacklog),
            (Unresolved, Backlog) | (Backlog, Unresolved) => Some(Self::UnresolvedBacklog),
            _ => None,
        }
    }

    #[must_use]
    pub fn categories(self) -> (Category, Category) {
        match self {
            Self::ResolvedUnresolved => (Category::Resolved, Category::Unresolved),
            Self::ResolvedBacklog => (Category::Resolved, Category::Backlog),
            Self::UnresolvedBacklog => (Category::Unresolved, Category::Backlog),
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::ResolvedUnresolved => "resolved_unresolved",
            Self::ResolvedBacklog => "resolved_backlog",
            Self::UnresolvedBacklog => "unresolved_backlog",
        }
    }
}

/// Count of shared distinct codes for every category pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntersectionResult {
    pub resolved_unresolved: usize,
    pub resolved_backlog: usize,
    pub unresolved_backlog: usize,
}

impl IntersectionResult {
    #[must_use]
    pub fn get(&self, pair: CategoryPair) -> usize {
        match pair {
            CategoryPair::ResolvedUnresolved => self.resolved_unresolved,
            CategoryPair::ResolvedBacklog => self.resolved_backlog,
            CategoryPair::UnresolvedBacklog => self.unresolved_backlog,
        }
    }

    /// Looks up a count by categories in either order.
    #[must_use]
    pub fn between(&self, a: Category, b: Category) -> Option<usize> {
        CategoryPair::of(a, b).map(|pair| self.get(pair))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryPair, usize)> + '_ {
        CategoryPair::ALL.into_iter().map(|pair| (pair, self.get(pair)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parsing() {
        assert_eq!("code".parse::<Field>().ok(), Some(Field::Code));
        assert_eq!("operator_name".parse::<Field>().ok(), Some(Field::OperatorName));
        assert!(matches!(
            "text".parse::<Field>(),
            Err(TallyError::UnsupportedField(f)) if f == "text"
        ));
    }

    #[test]
    fn unknown_category_is_missing() {
        assert!(matches!(
            "archived".parse::<Category>(),
            Err(TallyError::MissingCategory(_))
        ));
        assert_eq!("Backlog".parse::<Category>().ok(), Some(Category::Backlog));
    }

    #[test]
    fn pair_is_unordered() {
        for pair in CategoryPair::ALL {
            let (a, b) = pair.categories();
            assert_eq!(CategoryPair::of(a, b), Some(pair));
            assert_eq!(CategoryPair::of(b, a), Some(pair));
        }
        assert_eq!(CategoryPair::of(Category::Backlog, Category::Backlog), None);
    }

    #[test]
    fn group_values_order_naturally() {
        assert!(GroupValue::Code(2) < GroupValue::Code(10));
        assert!(GroupValue::Operator("OPERATOR A".into()) < GroupValue::Operator("OPERATOR B".into()));
    }

    #[test]
    fn non_numeric_code_is_not_found() {
        assert!(matches!(
            Field::Code.parse_value("abc"),
            Err(TallyError::ValueNotFound { .. })
        ));
        assert_eq!(Field::Code.parse_value(" 7 ").ok(), Some(GroupValue::Code(7)));
    }

    #[test]
    fn aggregated_row_serializes_retained_fields_only() {
        let rec = Record::new(3, 4, "x", "OPERATOR A");
        let row = AggregatedRow::project(&rec, Field::OperatorName, 2);
        let json = serde_json::to_value(&row).unwrap_or_default();
        assert_eq!(json, serde_json::json!({"operator_name": "OPERATOR A", "count": 2}));
    }
}
