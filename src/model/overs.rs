//! Cricket "overs.balls" notation.
//!
//! `10.3` means ten completed overs plus three balls of the eleventh, so the
//! digits after the point are a ball count rather than a decimal fraction.

use std::num::IntErrorKind;

use tracing::debug;

use crate::error::OversError;

pub const BALLS_PER_OVER: u32 = 6;

/// Parse "overs.balls" into total balls bowled.
///
/// The fractional digits are read as a literal ball count; counts of six or
/// more carry into whole overs, so `"10.12"` is read as 12 overs rather than
/// rejected. Input without a point is whole overs.
pub fn parse_notation(raw: &str) -> Result<u32, OversError> {
    let s = raw.trim();
    if s.starts_with('-') {
        return Err(OversError::Negative(raw.to_string()));
    }

    let (overs, balls) = match s.split_once('.') {
        Some((whole, frac)) => (component(whole, raw)?, component(frac, raw)?),
        None => (whole_overs(s, raw)?, 0),
    };

    let per_over = BALLS_PER_OVER as u64;
    overs
        .checked_add(balls / per_over)
        .and_then(|o| o.checked_mul(per_over))
        .and_then(|b| b.checked_add(balls % per_over))
        .and_then(|b| u32::try_from(b).ok())
        .ok_or_else(|| OversError::Overflow(raw.to_string()))
}

/// Total balls for a notation string.
///
/// Unreadable or negative notation counts as 0 balls; values too large to
/// count saturate so they still read as a completed innings.
pub fn balls_bowled(raw: &str) -> u32 {
    parse_notation(raw).unwrap_or_else(|e| match e {
        OversError::Overflow(_) => {
            debug!("Saturating overs: {}", e);
            u32::MAX
        }
        OversError::Malformed(_) | OversError::Negative(_) => {
            debug!("Treating overs as 0 balls: {}", e);
            0
        }
    })
}

/// Total balls for a numeric overs value such as `10.3`.
///
/// The value is rendered in its shortest round-trip form first, so the digits
/// the caller typed are the digits that get split.
pub fn total_balls(overs: f64) -> u32 {
    balls_bowled(&overs.to_string())
}

fn component(part: &str, raw: &str) -> Result<u64, OversError> {
    part.parse::<u64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => OversError::Overflow(raw.to_string()),
        _ => OversError::Malformed(raw.to_string()),
    })
}

fn whole_overs(s: &str, raw: &str) -> Result<u64, OversError> {
    let value: f64 = s
        .parse()
        .map_err(|_| OversError::Malformed(raw.to_string()))?;
    if !value.is_finite() {
        return Err(OversError::Malformed(raw.to_string()));
    }
    if value >= u32::MAX as f64 {
        return Err(OversError::Overflow(raw.to_string()));
    }
    Ok(value.trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_overs_only() {
        assert_eq!(parse_notation("10"), Ok(60));
        assert_eq!(parse_notation("0"), Ok(0));
        assert_eq!(parse_notation("20"), Ok(120));
        assert_eq!(total_balls(10.0), 60);
    }

    #[test]
    fn overs_and_balls() {
        assert_eq!(parse_notation("10.3"), Ok(63));
        assert_eq!(parse_notation(" 4.2 "), Ok(26));
        assert_eq!(total_balls(10.3), 63);
        assert_eq!(total_balls(0.5), 5);
    }

    #[test]
    fn six_balls_carry_into_next_over() {
        assert_eq!(parse_notation("10.6"), Ok(66));
        assert_eq!(total_balls(10.6), 66);
        assert_eq!(parse_notation("10.9"), Ok(69));
    }

    #[test]
    fn two_digit_ball_component_is_a_literal_count() {
        // 12 balls = 2 overs, 0 balls
        assert_eq!(parse_notation("10.12"), Ok(72));
        assert_eq!(total_balls(10.12), 72);
        assert_eq!(parse_notation("3.14"), Ok(3 * 6 + 14));
    }

    #[test]
    fn plain_decimal_without_point_truncates() {
        assert_eq!(parse_notation("1e1"), Ok(60));
    }

    #[test]
    fn malformed_notation() {
        for raw in ["", "abc", "10.", ".3", "1.2.3", "ten.3", "NaN", "inf"] {
            assert!(
                matches!(parse_notation(raw), Err(OversError::Malformed(_))),
                "{:?} should be malformed",
                raw
            );
            assert_eq!(balls_bowled(raw), 0);
        }
    }

    #[test]
    fn negative_and_oversized_notation() {
        assert!(matches!(parse_notation("-1.3"), Err(OversError::Negative(_))));
        assert!(matches!(
            parse_notation("99999999999999999999.1"),
            Err(OversError::Overflow(_))
        ));
        assert!(matches!(parse_notation("1e12"), Err(OversError::Overflow(_))));
        assert_eq!(balls_bowled("-2"), 0);
        assert_eq!(total_balls(-3.0), 0);
    }

    #[test]
    fn oversized_overs_saturate() {
        assert_eq!(balls_bowled("1e12"), u32::MAX);
        assert_eq!(balls_bowled("99999999999999999999.1"), u32::MAX);
        assert_eq!(total_balls(1e16), u32::MAX);
        assert_eq!(total_balls(f64::MAX), u32::MAX);
    }
}
