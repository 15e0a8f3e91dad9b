// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Sort keys for single-column ordering
//!
//! Field values are classified once into a three-way key: integers compare
//! numerically, other text compares lexicographically, and empty values sort
//! after everything else.

use std::cmp::Ordering;

/// Classified field value used by the sort comparator
///
/// Variant order is the ascending order between classes:
/// numbers, then text, then empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    Number(Integer<'a>),
    Text(&'a str),
    Empty,
}

impl<'a> SortKey<'a> {
    /// Classify a field value, `None` meaning the field is missing
    pub fn classify(value: Option<&'a str>) -> Self {
        match value {
            None | Some("") => SortKey::Empty,
            Some(text) => match Integer::parse(text) {
                Some(number) => SortKey::Number(number),
                None => SortKey::Text(text),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SortKey::Empty)
    }
}

/// Optionally signed decimal integer of arbitrary length
///
/// Stored as a borrowed digit string without leading zeros, so comparison
/// never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer<'a> {
    negative: bool,
    digits: &'a str,
}

impl<'a> Integer<'a> {
    pub fn parse(text: &'a str) -> Option<Self> {
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = digits.trim_start_matches('0');
        Some(Self {
            // -0 is zero
            negative: negative && !digits.is_empty(),
            digits,
        })
    }

    /// Value as an `i64`, or `None` when it is out of range
    pub fn to_i64(&self) -> Option<i64> {
        // i64::MIN has 19 digits
        if self.digits.len() > 19 {
            return None;
        }
        let magnitude: i128 = if self.digits.is_empty() {
            0
        } else {
            self.digits.parse().ok()?
        };
        let value = if self.negative { -magnitude } else { magnitude };
        i64::try_from(value).ok()
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(other.digits))
    }
}

impl Ord for Integer<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Integer<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
