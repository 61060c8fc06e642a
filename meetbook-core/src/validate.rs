//! Validation of date-time arguments.

use crate::error::{MeetbookError, MeetbookResult, TimeField};
use crate::meeting::MeetingKey;

const MONTH_RANGE: (i32, i32) = (1, 12);
const DAY_RANGE: (i32, i32) = (1, 31);
const HOUR_RANGE: (i32, i32) = (0, 23);

/// Check that a token looks like an integer.
///
/// The first character must be a digit or `-`, and every following character
/// up to the end of the token (or the first whitespace) must be a digit.
/// A lone `-` passes this check and later converts to `0`.
pub fn is_numeric_token(token: &str) -> bool {
    let mut chars = token.chars();

    match chars.next() {
        Some(c) if c.is_ascii_digit() || c == '-' => {}
        _ => return false,
    }

    chars
        .take_while(|c| !c.is_whitespace())
        .all(|c| c.is_ascii_digit())
}

/// Validate the month, day and hour arguments of a command and build the
/// slot they describe.
///
/// Fails with `InvalidFormat` if any field is not numeric, then with
/// `OutOfRange` for the first of month, day, hour that is outside its domain.
pub fn validate_time_fields(month: &str, day: &str, hour: &str) -> MeetbookResult<MeetingKey> {
    if !is_numeric_token(month) || !is_numeric_token(day) || !is_numeric_token(hour) {
        return Err(MeetbookError::InvalidFormat);
    }

    let key = MeetingKey::new(to_int(month), to_int(day), to_int(hour));

    check_range(TimeField::Month, key.month, MONTH_RANGE)?;
    check_range(TimeField::Day, key.day, DAY_RANGE)?;
    check_range(TimeField::Hour, key.hour, HOUR_RANGE)?;

    Ok(key)
}

fn check_range(field: TimeField, value: i32, (min, max): (i32, i32)) -> MeetbookResult<()> {
    if value < min || value > max {
        return Err(MeetbookError::OutOfRange { field, min, max });
    }
    Ok(())
}

/// Convert a numeric token to an integer.
///
/// Reads an optional leading `-` followed by digits and stops at the first
/// non-digit. Values beyond `i32` saturate.
pub(crate) fn to_int(token: &str) -> i32 {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let magnitude = digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d))
        });

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
