//! Operation-level test harness for the securestr library.
//!
//! This crate provides:
//! - a named-operation dispatcher over two optional working buffers
//! - fixed-label result rendering (`PASS`/`FAIL`/`TRUE`/`FALSE`, positions,
//!   `NPOS`)
//! - a serde JSON run record for machine-readable output
//!
//! The harness interprets result codes and decides process exit status; the
//! core library itself never prints or terminates.

#![forbid(unsafe_code)]

pub mod render;
pub mod report;

use securestr_core::{SecureStr, StrError, StrResult};

/// Capacity of the working buffers `string_A` and `string_B`.
pub const STR_CAPACITY: usize = 200;

/// A named operation together with its scalar arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Overwrite `string_B` with `string_A`.
    Cpy,
    /// Append `string_A` after `string_B`'s content.
    Appd,
    /// Append one byte to `string_A`.
    AppdChar(u8),
    /// Overwrite `string_B` with a window of `string_A`.
    Substr { start: usize, count: usize },
    /// Append a window of `string_A` after `string_B`'s content.
    AppdSubstr { start: usize, count: usize },
    /// Content equality of `string_A` and `string_B`.
    Cmp,
    /// Whether `string_A` starts with `string_B`.
    StartsWith,
    /// Whether `string_A` ends with `string_B`.
    EndsWith,
    /// Leftmost occurrence of `string_B` in `string_A`.
    IndexOf,
    /// Exchange `string_A` and `string_B`.
    Swap,
    /// Shorten `string_A` to the given length.
    Trunc(usize),
    /// Reset `string_A`'s length to zero.
    Clear,
    /// Zeroize `string_A`'s entire backing storage.
    Wipe,
    /// Read the byte at a position in `string_A`.
    GetChar(usize),
    /// Overwrite the byte at a position in `string_A`.
    SetChar(usize, u8),
    /// Content length of `string_A`.
    Len,
    /// Capacity of `string_A`.
    Cap,
}

impl Operation {
    /// Call-form rendering, e.g. `cpy(string_A, string_B)`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Operation::Cpy => "cpy(string_A, string_B)".to_string(),
            Operation::Appd => "appd(string_A, string_B)".to_string(),
            Operation::AppdChar(byte) => {
                format!("appd-char(string_A, '{}')", byte.escape_ascii())
            }
            Operation::Substr { start, count } => {
                format!("substr(string_A, string_B, {start}, {count})")
            }
            Operation::AppdSubstr { start, count } => {
                format!("appd-substr(string_A, string_B, {start}, {count})")
            }
            Operation::Cmp => "cmp(string_A, string_B)".to_string(),
            Operation::StartsWith => "starts-with(string_A, string_B)".to_string(),
            Operation::EndsWith => "ends-with(string_A, string_B)".to_string(),
            Operation::IndexOf => "index-of(string_A, string_B)".to_string(),
            Operation::Swap => "swap(string_A, string_B)".to_string(),
            Operation::Trunc(new_len) => format!("trunc(string_A, {new_len})"),
            Operation::Clear => "clear(string_A)".to_string(),
            Operation::Wipe => "wipe(string_A)".to_string(),
            Operation::GetChar(index) => format!("get-char(string_A, {index})"),
            Operation::SetChar(index, byte) => {
                format!("set-char(string_A, {index}, '{}')", byte.escape_ascii())
            }
            Operation::Len => "len(string_A)".to_string(),
            Operation::Cap => "cap(string_A)".to_string(),
        }
    }

    /// Whether the operation consumes `string_B`.
    #[must_use]
    pub fn uses_string_b(&self) -> bool {
        matches!(
            self,
            Operation::Cpy
                | Operation::Appd
                | Operation::Substr { .. }
                | Operation::AppdSubstr { .. }
                | Operation::Cmp
                | Operation::StartsWith
                | Operation::EndsWith
                | Operation::IndexOf
                | Operation::Swap
        )
    }
}

/// Result code of one dispatched operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Mutating operation succeeded.
    Pass,
    /// Operation failed, or a required buffer argument was absent.
    Fail,
    /// Predicate held.
    True,
    /// Predicate did not hold.
    False,
    /// Search hit at this offset.
    Position(usize),
    /// Search missed (or the search received an absent argument).
    NotFound,
    /// Introspection value: a length or a capacity.
    Size(usize),
    /// Retrieved byte.
    Byte(u8),
}

/// Buffers and result of one completed harness run.
#[derive(Debug)]
pub struct RunOutput {
    /// The operation that was dispatched.
    pub operation: Operation,
    /// Its result code.
    pub outcome: Outcome,
    /// Failure detail, when the core operation reported an error value.
    pub error: Option<StrError>,
    /// `string_A` after the operation, `None` for the `=null` marker.
    pub string_a: Option<SecureStr>,
    /// `string_B` after the operation.
    pub string_b: Option<SecureStr>,
}

/// Executes one operation against the given working buffers.
///
/// An absent required buffer reports [`Outcome::Fail`] (or
/// [`Outcome::NotFound`] for the search, which has no failure arm of its
/// own). The buffers are returned so the caller can render their final
/// contents.
#[must_use]
pub fn dispatch(
    operation: Operation,
    string_a: Option<SecureStr>,
    string_b: Option<SecureStr>,
) -> RunOutput {
    let mut a = string_a;
    let mut b = string_b;
    let mut error = None;

    let outcome = match operation {
        Operation::Cpy => match (a.as_ref(), b.as_mut()) {
            (Some(src), Some(dst)) => status(dst.copy_from(src), &mut error),
            _ => Outcome::Fail,
        },
        Operation::Appd => match (a.as_ref(), b.as_mut()) {
            (Some(src), Some(dst)) => status(dst.append_from(src), &mut error),
            _ => Outcome::Fail,
        },
        Operation::AppdChar(byte) => match a.as_mut() {
            Some(dst) => status(dst.append_byte(byte), &mut error),
            None => Outcome::Fail,
        },
        Operation::Substr { start, count } => match (a.as_ref(), b.as_mut()) {
            (Some(src), Some(dst)) => status(dst.substr_from(src, start, count), &mut error),
            _ => Outcome::Fail,
        },
        Operation::AppdSubstr { start, count } => match (a.as_ref(), b.as_mut()) {
            (Some(src), Some(dst)) => status(dst.append_substr_from(src, start, count), &mut error),
            _ => Outcome::Fail,
        },
        Operation::Cmp => match (a.as_ref(), b.as_ref()) {
            (Some(lhs), Some(rhs)) => predicate(lhs == rhs),
            _ => Outcome::Fail,
        },
        Operation::StartsWith => match (a.as_ref(), b.as_ref()) {
            (Some(s), Some(pattern)) => predicate(s.starts_with(pattern)),
            _ => Outcome::Fail,
        },
        Operation::EndsWith => match (a.as_ref(), b.as_ref()) {
            (Some(s), Some(pattern)) => predicate(s.ends_with(pattern)),
            _ => Outcome::Fail,
        },
        Operation::IndexOf => match (a.as_ref(), b.as_ref()) {
            (Some(haystack), Some(pattern)) => match haystack.index_of(pattern) {
                Some(position) => Outcome::Position(position),
                None => Outcome::NotFound,
            },
            _ => Outcome::NotFound,
        },
        Operation::Swap => match (a.as_mut(), b.as_mut()) {
            (Some(first), Some(second)) => {
                first.swap(second);
                Outcome::Pass
            }
            _ => Outcome::Fail,
        },
        Operation::Trunc(new_len) => match a.as_mut() {
            Some(dst) => status(dst.truncate(new_len), &mut error),
            None => Outcome::Fail,
        },
        Operation::Clear => match a.as_mut() {
            Some(dst) => {
                dst.clear();
                Outcome::Pass
            }
            None => Outcome::Fail,
        },
        Operation::Wipe => match a.as_mut() {
            Some(dst) => {
                dst.wipe();
                Outcome::Pass
            }
            None => Outcome::Fail,
        },
        Operation::GetChar(index) => match a.as_ref() {
            Some(src) => match src.byte_at(index) {
                Ok(byte) => Outcome::Byte(byte),
                Err(err) => {
                    error = Some(err);
                    Outcome::Fail
                }
            },
            None => Outcome::Fail,
        },
        Operation::SetChar(index, byte) => match a.as_mut() {
            Some(dst) => status(dst.set_byte(index, byte), &mut error),
            None => Outcome::Fail,
        },
        Operation::Len => match a.as_ref() {
            Some(src) => Outcome::Size(src.len()),
            None => Outcome::Fail,
        },
        Operation::Cap => match a.as_ref() {
            Some(src) => Outcome::Size(src.capacity()),
            None => Outcome::Fail,
        },
    };

    RunOutput {
        operation,
        outcome,
        error,
        string_a: a,
        string_b: b,
    }
}

fn status(result: StrResult<()>, error: &mut Option<StrError>) -> Outcome {
    match result {
        Ok(()) => Outcome::Pass,
        Err(err) => {
            *error = Some(err);
            Outcome::Fail
        }
    }
}

fn predicate(held: bool) -> Outcome {
    if held { Outcome::True } else { Outcome::False }
}
