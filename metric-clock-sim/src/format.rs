//! Calendar and sub-millisecond decomposition of attosecond timestamps.
//!
//! Splits a single attosecond count into the layers the display stacks:
//! civil date, wall-clock time, then 3-digit groups for every power of a
//! thousand from milliseconds down to attoseconds.

use std::fmt;

use chrono::{TimeZone, Utc};
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::units::{
    ATTO_PER_FEMTO, ATTO_PER_MICRO, ATTO_PER_MILLI, ATTO_PER_NANO, ATTO_PER_PICO,
};

/// A fully decomposed attosecond timestamp.
///
/// Each sub-millisecond field is the 0–999 digit group of its unit, e.g.
/// `micros` is microseconds within the millisecond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParts {
    /// Civil date, `dd.mm.yyyy` (UTC).
    pub date: String,
    /// Wall-clock time, `HH:MM:SS` (UTC).
    pub time: String,
    /// Milliseconds within the second.
    pub millis: u16,
    /// Microseconds within the millisecond.
    pub micros: u16,
    /// Nanoseconds within the microsecond.
    pub nanos: u16,
    /// Picoseconds within the nanosecond.
    pub picos: u16,
    /// Femtoseconds within the picosecond.
    pub femtos: u16,
    /// Attoseconds within the femtosecond.
    pub attos: u16,
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{:03} {:03}µs {:03}ns {:03}ps {:03}fs {:03}as",
            self.date, self.time, self.millis, self.micros, self.nanos, self.picos, self.femtos,
            self.attos
        )
    }
}

/// Decompose an attosecond-since-epoch timestamp into display layers.
///
/// Pure; returns `None` only when the instant falls outside chrono's
/// representable calendar range.
pub fn decompose(timestamp: &BigInt) -> Option<TimeParts> {
    let (millis_total, sub_milli) = div_rem_floor(timestamp, ATTO_PER_MILLI);
    let millis_total = millis_total.to_i64()?;
    let datetime = Utc.timestamp_millis_opt(millis_total).single()?;

    // sub_milli is in [0, ATTO_PER_MILLI), which fits an i128 easily.
    let rem = sub_milli.to_i128()?;
    let micros = (rem / ATTO_PER_MICRO) as u16;
    let nanos = ((rem % ATTO_PER_MICRO) / ATTO_PER_NANO) as u16;
    let picos = ((rem % ATTO_PER_NANO) / ATTO_PER_PICO) as u16;
    let femtos = ((rem % ATTO_PER_PICO) / ATTO_PER_FEMTO) as u16;
    let attos = (rem % ATTO_PER_FEMTO) as u16;

    Some(TimeParts {
        date: datetime.format("%d.%m.%Y").to_string(),
        time: datetime.format("%H:%M:%S").to_string(),
        millis: millis_total.rem_euclid(1000) as u16,
        micros,
        nanos,
        picos,
        femtos,
        attos,
    })
}

/// Floor division with a non-negative remainder.
fn div_rem_floor(value: &BigInt, modulus: i128) -> (BigInt, BigInt) {
    let m = BigInt::from(modulus);
    let mut quotient = value / &m;
    let mut remainder = value % &m;
    if remainder.sign() == Sign::Minus {
        remainder += &m;
        quotient -= BigInt::from(1);
    }
    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::ATTO_PER_SECOND;

    #[test]
    fn epoch_decomposes_to_zeroes() {
        let parts = decompose(&BigInt::from(0)).unwrap();
        assert_eq!(parts.date, "01.01.1970");
        assert_eq!(parts.time, "00:00:00");
        assert_eq!(parts.millis, 0);
        assert_eq!(parts.attos, 0);
    }

    #[test]
    fn sub_millisecond_groups_split_correctly() {
        // 123 ms, 456 µs, 789 ns, 12 ps, 345 fs, 678 as past the epoch.
        let t = BigInt::from(123) * BigInt::from(ATTO_PER_MILLI)
            + BigInt::from(456) * BigInt::from(ATTO_PER_MICRO)
            + BigInt::from(789) * BigInt::from(ATTO_PER_NANO)
            + BigInt::from(12) * BigInt::from(ATTO_PER_PICO)
            + BigInt::from(345) * BigInt::from(ATTO_PER_FEMTO)
            + BigInt::from(678);
        let parts = decompose(&t).unwrap();
        assert_eq!(parts.millis, 123);
        assert_eq!(parts.micros, 456);
        assert_eq!(parts.nanos, 789);
        assert_eq!(parts.picos, 12);
        assert_eq!(parts.femtos, 345);
        assert_eq!(parts.attos, 678);
    }

    #[test]
    fn calendar_fields_follow_the_day() {
        // 2023-11-14 22:13:20 UTC.
        let t = BigInt::from(1_700_000_000_i64) * BigInt::from(ATTO_PER_SECOND);
        let parts = decompose(&t).unwrap();
        assert_eq!(parts.date, "14.11.2023");
        assert_eq!(parts.time, "22:13:20");
    }

    #[test]
    fn display_pads_groups_to_three_digits() {
        let t = BigInt::from(7) * BigInt::from(ATTO_PER_MICRO) + BigInt::from(5);
        let text = decompose(&t).unwrap().to_string();
        assert!(text.contains("007µs"), "got {}", text);
        assert!(text.contains("005as"), "got {}", text);
    }

    #[test]
    fn pre_epoch_instants_still_decompose() {
        // One attosecond before the epoch: 31.12.1969, all groups at 999.
        let t = BigInt::from(-1);
        let parts = decompose(&t).unwrap();
        assert_eq!(parts.date, "31.12.1969");
        assert_eq!(parts.attos, 999);
        assert_eq!(parts.millis, 999);
    }

    #[test]
    fn far_future_out_of_calendar_range_is_none() {
        // ~10¹⁸ years ahead: beyond any calendar.
        let t = BigInt::from(ATTO_PER_SECOND) * BigInt::from(ATTO_PER_SECOND);
        assert!(decompose(&t).is_none());
    }
}
