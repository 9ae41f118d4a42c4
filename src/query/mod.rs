use std::cmp::Ordering;

use log::trace;

use crate::traversal::traverse::get;
use crate::traversal::utils::loose_cmp;
use crate::traversal::{Fallback, Path};
use crate::Value;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(non_camel_case_types)]
pub enum Compare {
    equals,
    not_equals,
    less_than,
    greater_than,
    less_than_eq,
    greater_than_eq,
}

impl Compare {
    /// Map an operator string to a comparison. Strict and loose spellings mean the same
    /// thing on plain data; anything unrecognised compares for equality.
    pub fn parse(operator: &str) -> Compare {
        match operator {
            "=" | "==" | "===" => Compare::equals,
            "!=" | "<>" | "!==" => Compare::not_equals,
            "<" => Compare::less_than,
            ">" => Compare::greater_than,
            "<=" => Compare::less_than_eq,
            ">=" => Compare::greater_than_eq,
            unknown => {
                trace!("unknown operator '{}', comparing for equality", unknown);
                Compare::equals
            }
        }
    }

    pub fn negate(self) -> Compare {
        match self {
            Compare::equals => Compare::not_equals,
            Compare::not_equals => Compare::equals,
            Compare::less_than => Compare::greater_than_eq,
            Compare::greater_than_eq => Compare::less_than,
            Compare::greater_than => Compare::less_than_eq,
            Compare::less_than_eq => Compare::greater_than,
        }
    }

    pub fn test(self, left: &Value, right: &Value) -> bool {
        match self {
            Compare::equals => left == right,
            Compare::not_equals => left != right,
            Compare::less_than => loose_cmp(left, right) == Ordering::Less,
            Compare::greater_than => loose_cmp(left, right) == Ordering::Greater,
            Compare::less_than_eq => loose_cmp(left, right) != Ordering::Greater,
            Compare::greater_than_eq => loose_cmp(left, right) != Ordering::Less,
        }
    }
}

/// Predicate for `filter` that compares what `path` resolves to on each item with `value`.
pub fn operator_for_where(path: Path, compare: Compare, value: Value) -> impl Fn(&Value, &Value) -> bool {
    move |item: &Value, _key: &Value| {
        let retrieved = get(item, &path, Fallback::none());
        compare.test(&retrieved, &value)
    }
}
