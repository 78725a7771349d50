use std::time::Duration;

use chrono::TimeDelta;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid duration {0:?}")]
    Invalid(String),
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("granularity must be positive, got {0:?}")]
    NonPositive(String),
}

fn unit_secs(unit: &str) -> Option<f64> {
    match unit {
        "ns" => Some(1e-9),
        "us" | "µs" => Some(1e-6),
        "ms" => Some(1e-3),
        "s" => Some(1.0),
        "m" => Some(60.0),
        "h" => Some(3600.0),
        _ => None,
    }
}

/// Parse a duration token: an optional sign, then one or more
/// `<number><unit>` groups ("90s", "1h30m", "2.5m"). The bare string "0"
/// needs no unit. Resolution is one millisecond.
pub fn parse(input: &str) -> Result<TimeDelta, ParseError> {
    let invalid = || ParseError::Invalid(input.to_string());

    let mut rest = input;
    let negative = match rest.chars().next() {
        Some('-') => {
            rest = &rest[1..];
            true
        }
        Some('+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };
    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total_secs = 0f64;
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let number = &rest[..num_end];
        let value: f64 = number.parse().map_err(|_| invalid())?;
        rest = &rest[num_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit = &rest[..unit_end];
        if unit.is_empty() {
            return Err(ParseError::MissingUnit(input.to_string()));
        }
        let scale = unit_secs(unit).ok_or_else(|| ParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;
        total_secs += value * scale;
        rest = &rest[unit_end..];
    }

    if negative {
        total_secs = -total_secs;
    }
    let millis = (total_secs * 1000.0).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return Err(invalid());
    }
    Ok(TimeDelta::milliseconds(millis as i64))
}

/// Parse the poll granularity: same grammar, but a zero or negative
/// interval would mean the completion check never runs.
pub fn parse_granularity(input: &str) -> Result<Duration, ParseError> {
    let delta = parse(input)?;
    delta
        .to_std()
        .ok()
        .filter(|d| !d.is_zero())
        .ok_or_else(|| ParseError::NonPositive(input.to_string()))
}

/// Round to the nearest whole second, half away from zero.
pub fn round_to_secs(delta: TimeDelta) -> TimeDelta {
    let millis = delta.num_milliseconds();
    let secs = if millis >= 0 {
        (millis + 500) / 1000
    } else {
        (millis - 500) / 1000
    };
    TimeDelta::seconds(secs)
}

/// Compact rendering of a whole-second duration: "45s", "1m30s",
/// "1h0m0s". Negative values carry a leading '-'. Sub-second parts are
/// dropped; callers round first.
pub fn format(delta: TimeDelta) -> String {
    let mut secs = delta.num_seconds().unsigned_abs();
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let hours = secs / 3600;
    secs %= 3600;
    let mins = secs / 60;
    secs %= 60;
    if hours > 0 {
        format!("{sign}{hours}h{mins}m{secs}s")
    } else if mins > 0 {
        format!("{sign}{mins}m{secs}s")
    } else {
        format!("{sign}{secs}s")
    }
}
