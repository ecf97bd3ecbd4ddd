//! Attosecond unit constants and the simulated-time scale ladder.
//!
//! All factors are exact integers. An `i128` holds every rung of the ladder
//! (years-per-second is ≈ 3.15 × 10²⁵ as/s, far below the i128 ceiling).

/// Attoseconds per femtosecond.
pub const ATTO_PER_FEMTO: i128 = 1_000;
/// Attoseconds per picosecond.
pub const ATTO_PER_PICO: i128 = 1_000 * ATTO_PER_FEMTO;
/// Attoseconds per nanosecond.
pub const ATTO_PER_NANO: i128 = 1_000 * ATTO_PER_PICO;
/// Attoseconds per microsecond.
pub const ATTO_PER_MICRO: i128 = 1_000 * ATTO_PER_NANO;
/// Attoseconds per millisecond.
pub const ATTO_PER_MILLI: i128 = 1_000 * ATTO_PER_MICRO;
/// Attoseconds per second.
pub const ATTO_PER_SECOND: i128 = 1_000 * ATTO_PER_MILLI;

const SECONDS_PER_MINUTE: i128 = 60;
const SECONDS_PER_HOUR: i128 = 3_600;
const SECONDS_PER_DAY: i128 = 86_400;
const SECONDS_PER_WEEK: i128 = 604_800;
/// 30-day month.
const SECONDS_PER_MONTH: i128 = 2_592_000;
/// 365-day year.
const SECONDS_PER_YEAR: i128 = 31_536_000;

/// How much simulated time one real second maps to.
///
/// The ladder runs from one attosecond per real second (deep zoom into
/// sub-nanosecond structure) up to years per real second (calendar-scale
/// fast-forward). Counted variants take an integer multiple, e.g.
/// `Minutes(15)` is fifteen simulated minutes per real second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeScale {
    /// One attosecond of simulated time per real second.
    Attosecond,
    /// One femtosecond per real second.
    Femtosecond,
    /// One picosecond per real second.
    Picosecond,
    /// One nanosecond per real second.
    Nanosecond,
    /// One microsecond per real second.
    Microsecond,
    /// One millisecond per real second.
    Millisecond,
    /// Real time: one simulated second per real second.
    Second,
    /// `n` simulated minutes per real second.
    Minutes(u32),
    /// `n` simulated hours per real second.
    Hours(u32),
    /// `n` simulated days per real second.
    Days(u32),
    /// `n` simulated weeks per real second.
    Weeks(u32),
    /// `n` simulated 30-day months per real second.
    Months(u32),
    /// `n` simulated 365-day years per real second.
    Years(u32),
}

impl TimeScale {
    /// Exact number of simulated attoseconds mapped onto one real second.
    pub fn atto_per_real_second(self) -> i128 {
        match self {
            TimeScale::Attosecond => 1,
            TimeScale::Femtosecond => ATTO_PER_FEMTO,
            TimeScale::Picosecond => ATTO_PER_PICO,
            TimeScale::Nanosecond => ATTO_PER_NANO,
            TimeScale::Microsecond => ATTO_PER_MICRO,
            TimeScale::Millisecond => ATTO_PER_MILLI,
            TimeScale::Second => ATTO_PER_SECOND,
            TimeScale::Minutes(n) => n as i128 * SECONDS_PER_MINUTE * ATTO_PER_SECOND,
            TimeScale::Hours(n) => n as i128 * SECONDS_PER_HOUR * ATTO_PER_SECOND,
            TimeScale::Days(n) => n as i128 * SECONDS_PER_DAY * ATTO_PER_SECOND,
            TimeScale::Weeks(n) => n as i128 * SECONDS_PER_WEEK * ATTO_PER_SECOND,
            TimeScale::Months(n) => n as i128 * SECONDS_PER_MONTH * ATTO_PER_SECOND,
            TimeScale::Years(n) => n as i128 * SECONDS_PER_YEAR * ATTO_PER_SECOND,
        }
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        TimeScale::Second
    }
}
