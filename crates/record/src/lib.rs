//! A small immutable key type with a hand-written ordering contract.
//!
//! A [`Record`] pairs a label with a count. Records order by label in
//! *descending* lexical order, and records with equal labels order by count
//! in *ascending* order:
//!
//! ```
//! use record::Record;
//!
//! let mut records = vec![
//!     Record::new("Udavchyk", 18),
//!     Record::new("Aspid", 35),
//!     Record::new("Udavchyk", 15),
//! ];
//! records.sort();
//!
//! assert_eq!(records, vec![
//!     Record::new("Udavchyk", 15),
//!     Record::new("Udavchyk", 18),
//!     Record::new("Aspid", 35),
//! ]);
//! ```
//!
//! Either field may be missing. A missing label sorts after every present
//! label; a missing count sorts before every present count.
//!
//! # Hash contract
//!
//! Equality, ordering and hashing all look at both fields and nothing else:
//!
//! - `a == b` if and only if `a.cmp(&b) == Ordering::Equal`
//! - `a == b` implies `a.hash_code() == b.hash_code()`
//!
//! The hash code is the classic multiply-and-add combination,
//! `31 * label_hash + count_hash`, in wrapping 32-bit arithmetic. The
//! [`Hash`] impl feeds exactly that value to the hasher.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

/// Multiplier used to combine field hashes.
pub const HASH_MULTIPLIER: i32 = 31;

/// An immutable `(label, count)` pair.
#[derive(Clone, Debug)]
pub struct Record {
    label: Option<String>,
    count: Option<i32>,
}

impl Record {
    /// Create a record with both fields present.
    pub fn new(label: impl Into<String>, count: i32) -> Record {
        return Record {
            label: Some(label.into()),
            count: Some(count),
        };
    }

    /// Create a record from optional parts.
    pub fn from_parts(label: Option<String>, count: Option<i32>) -> Record {
        return Record { label, count };
    }

    pub fn label(&self) -> Option<&str> {
        return self.label.as_deref();
    }

    pub fn count(&self) -> Option<i32> {
        return self.count;
    }

    /// The 32-bit hash code: `31 * label_hash + count_hash`.
    ///
    /// A missing field contributes 0.
    pub fn hash_code(&self) -> i32 {
        let label_hash = self.label.as_deref().map(string_hash).unwrap_or(0);
        let count_hash = self.count.unwrap_or(0);
        return HASH_MULTIPLIER.wrapping_mul(label_hash).wrapping_add(count_hash);
    }
}

/// Polynomial string hash over UTF-16 code units:
/// `s[0]*31^(n-1) + s[1]*31^(n-2) + ... + s[n-1]`, wrapping.
pub fn string_hash(s: &str) -> i32 {
    return s
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(unit as i32));
}

/// Lexical comparison by UTF-16 code unit, matching the string hash domain.
fn compare_labels(a: &str, b: &str) -> Ordering {
    return a.encode_utf16().cmp(b.encode_utf16());
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        // Descending label, missing labels last.
        let by_label = match (&self.label, &other.label) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => compare_labels(b, a),
        };
        if by_label != Ordering::Equal {
            return by_label;
        }

        // Ascending count, missing counts first. `Option`'s own ordering
        // already puts `None` before `Some`.
        return self.count.cmp(&other.count);
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        return self.label == other.label && self.count == other.count;
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

struct Nullable<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "null"),
        };
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "Record{{label='{}', count={}, hash={}}}",
            Nullable(&self.label),
            Nullable(&self.count),
            self.hash_code(),
        );
    }
}
