//! Validation of raw form input before it becomes a [`GameAction`].
//!
//! Number fields are read the way a browser's `parseInt`/`parseFloat` read
//! them: leading whitespace is skipped and the longest numeric prefix wins, so
//! `"3.9"` is 3 points and `"1.5x"` is a 1.5 multiplier.
//!
//! [`GameAction`]: crate::model::GameAction

use crate::config::MultiplierPolicy;
use crate::error::InputError;
use crate::model::Challenge;

fn sign_len(b: &[u8]) -> usize {
    matches!(b.first(), Some(b'+') | Some(b'-')) as usize
}

fn digits_from(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    i
}

fn int_prefix(raw: &str) -> Option<i64> {
    let t = raw.trim();
    let b = t.as_bytes();
    let start = sign_len(b);
    let end = digits_from(b, start);
    if end == start {
        return None;
    }
    t[..end].parse().ok()
}

fn float_prefix(raw: &str) -> Option<f64> {
    let t = raw.trim();
    let b = t.as_bytes();
    let start = sign_len(b);
    if t[start..].starts_with("Infinity") {
        return Some(if b[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    let int_end = digits_from(b, start);
    let mut end = int_end;
    let mut has_digits = int_end > start;
    if end < b.len() && b[end] == b'.' {
        let frac_end = digits_from(b, end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }
    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let exp_start = end + 1 + sign_len(&b[end + 1..]);
        let exp_end = digits_from(b, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    t[..end].parse().ok()
}

/// Points typed into a form field.
pub fn parse_points(raw: &str) -> Result<i64, InputError> {
    int_prefix(raw).ok_or_else(|| InputError::InvalidPoints(raw.to_string()))
}

/// Builds a challenge from the add-challenge form.
pub fn challenge_from_form(raw_name: &str, raw_points: &str) -> Result<Challenge, InputError> {
    if raw_name.trim().is_empty() {
        return Err(InputError::EmptyName);
    }
    let points = parse_points(raw_points)?;
    Ok(Challenge::new(raw_name, points))
}

/// Multiplier typed into the multiplier field. [`MultiplierPolicy::Reject`]
/// accepts finite values only, since JSON cannot carry the others. Under
/// [`MultiplierPolicy::Propagate`] unreadable input becomes `NaN`.
pub fn parse_multiplier(raw: &str, policy: MultiplierPolicy) -> Result<f64, InputError> {
    match (float_prefix(raw), policy) {
        (Some(v), MultiplierPolicy::Propagate) => Ok(v),
        (None, MultiplierPolicy::Propagate) => Ok(f64::NAN),
        (Some(v), MultiplierPolicy::Reject) if v.is_finite() => Ok(v),
        (_, MultiplierPolicy::Reject) => Err(InputError::InvalidMultiplier(raw.to_string())),
    }
}
