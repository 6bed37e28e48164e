//! Row filters understood by the row-store boundary
//!
//! A [`Filter`] is a small expression tree a store can translate into its own
//! query language. Only the operators pagination needs are supported:
//! equality, strict less-than and strict greater-than on named fields, plus
//! `AND` / `OR`. Nothing here depends on indexes or tuple comparison.
//!
//! [`Filter::matches`] evaluates a filter against any [`Record`], which is how
//! in-memory stores execute it. The `Display` impl renders a SQL-like
//! fragment for logs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::contract::Primary;

/// Scalar value of a named row field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text, compared byte-wise
    Text(String),
    /// Calendar date
    Date(NaiveDate),
    /// Instant in UTC
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Compare two values of the same kind
    ///
    /// Returns `None` when the kinds differ; such pairs never satisfy a
    /// comparison.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<Primary> for FieldValue {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Date(date) => FieldValue::Date(date),
            Primary::Timestamp(ts) => FieldValue::Timestamp(ts),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(date: NaiveDate) -> Self {
        FieldValue::Date(date)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(ts: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(ts)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            FieldValue::Date(d) => write!(f, "'{}'", Primary::Date(*d).canonical()),
            FieldValue::Timestamp(ts) => write!(f, "'{}'", Primary::Timestamp(*ts).canonical()),
        }
    }
}

/// A row whose fields can be read by name
pub trait Record {
    /// Value of the named field, or `None` if the row has no such field
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// Boolean expression over row fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// `field = value`
    Eq(String, FieldValue),
    /// `field < value`
    Lt(String, FieldValue),
    /// `field > value`
    Gt(String, FieldValue),
    /// All sub-filters hold; empty matches everything
    And(Vec<Filter>),
    /// Any sub-filter holds; empty matches nothing
    Or(Vec<Filter>),
}

impl Filter {
    /// Filter that matches every row
    pub fn all() -> Self {
        Filter::And(Vec::new())
    }

    /// `field = value`
    pub fn eq(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Filter::Eq(field.into(), value.into())
    }

    /// `field < value`
    pub fn lt(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Filter::Lt(field.into(), value.into())
    }

    /// `field > value`
    pub fn gt(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Filter::Gt(field.into(), value.into())
    }

    /// Conjunction with another filter
    ///
    /// Flattens nested `And`s so repeated conjunction stays shallow.
    pub fn and(self, other: Filter) -> Self {
        let mut clauses = match self {
            Filter::And(clauses) => clauses,
            single => vec![single],
        };
        match other {
            Filter::And(more) => clauses.extend(more),
            single => clauses.push(single),
        }
        Filter::And(clauses)
    }

    /// True if this filter matches every row
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::And(clauses) if clauses.iter().all(Filter::is_all))
    }

    /// Evaluate against a row
    ///
    /// A missing field or a comparison across value kinds is `false`.
    pub fn matches<R: Record + ?Sized>(&self, row: &R) -> bool {
        match self {
            Filter::Eq(field, value) => compare_field(row, field, value) == Some(Ordering::Equal),
            Filter::Lt(field, value) => compare_field(row, field, value) == Some(Ordering::Less),
            Filter::Gt(field, value) => compare_field(row, field, value) == Some(Ordering::Greater),
            Filter::And(clauses) => clauses.iter().all(|c| c.matches(row)),
            Filter::Or(clauses) => clauses.iter().any(|c| c.matches(row)),
        }
    }
}

fn compare_field<R: Record + ?Sized>(row: &R, field: &str, value: &FieldValue) -> Option<Ordering> {
    row.field(field)?.compare(value)
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Eq(field, value) => write!(f, "{} = {}", field, value),
            Filter::Lt(field, value) => write!(f, "{} < {}", field, value),
            Filter::Gt(field, value) => write!(f, "{} > {}", field, value),
            Filter::And(clauses) if clauses.is_empty() => f.write_str("TRUE"),
            Filter::Or(clauses) if clauses.is_empty() => f.write_str("FALSE"),
            Filter::And(clauses) => write_joined(f, clauses, " AND "),
            Filter::Or(clauses) => write_joined(f, clauses, " OR "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, clauses: &[Filter], sep: &str) -> fmt::Result {
    if clauses.len() == 1 {
        return write!(f, "{}", clauses[0]);
    }
    f.write_str("(")?;
    for (i, clause) in clauses.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", clause)?;
    }
    f.write_str(")")
}
