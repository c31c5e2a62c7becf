//! Uptime duration value and its `H:MM:SS[.ffffff]` rendering

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::UptimeError;

const MICROS_PER_SEC: u64 = 1_000_000;

/// Elapsed time since the kernel finished booting
///
/// Stored at microsecond resolution, which keeps every digit the kernel
/// exposes (`/proc/uptime` reports centiseconds).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uptime {
    micros: u64,
}

impl Uptime {
    pub const ZERO: Uptime = Uptime { micros: 0 };

    pub fn from_secs(secs: u64) -> Self {
        Self {
            micros: secs.saturating_mul(MICROS_PER_SEC),
        }
    }

    pub fn from_micros(micros: u64) -> Self {
        Self { micros }
    }

    /// Convert a fractional seconds reading, rounding to the nearest microsecond
    ///
    /// Negative, non-finite and out-of-range values are rejected as malformed.
    pub fn from_secs_f64(secs: f64) -> Result<Self, UptimeError> {
        if !secs.is_finite() {
            return Err(UptimeError::malformed("value", format!("{} is not finite", secs)));
        }
        if secs < 0.0 {
            return Err(UptimeError::malformed("value", format!("{} is negative", secs)));
        }

        let micros = (secs * MICROS_PER_SEC as f64).round();
        if micros >= u64::MAX as f64 {
            return Err(UptimeError::malformed("value", format!("{} is out of range", secs)));
        }

        Ok(Self {
            micros: micros as u64,
        })
    }

    pub fn as_micros(&self) -> u64 {
        self.micros
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.micros as f64 / MICROS_PER_SEC as f64
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_micros(self.micros)
    }
}

impl From<Duration> for Uptime {
    fn from(d: Duration) -> Self {
        let micros = u64::try_from(d.as_micros()).unwrap_or(u64::MAX);
        Self { micros }
    }
}

/// `H:MM:SS`, plus `.ffffff` when the sub-second part is non-zero.
/// Hours keep counting past 24.
impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.micros / MICROS_PER_SEC;
        let frac = self.micros % MICROS_PER_SEC;

        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;

        write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)?;
        if frac != 0 {
            write!(f, ".{:06}", frac)?;
        }
        Ok(())
    }
}

/// Error parsing a duration string back into an [`Uptime`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration string {input:?}: {reason}")]
pub struct ParseUptimeError {
    input: String,
    reason: &'static str,
}

impl FromStr for Uptime {
    type Err = ParseUptimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| ParseUptimeError {
            input: s.to_string(),
            reason,
        };

        let (clock, frac) = match s.split_once('.') {
            Some((clock, frac)) => (clock, Some(frac)),
            None => (s, None),
        };

        let mut fields = clock.split(':');
        let (Some(h), Some(m), Some(sec), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(fail("expected H:MM:SS"));
        };

        let hours = parse_digits(h).ok_or_else(|| fail("hours must be digits"))?;
        if m.len() != 2 || sec.len() != 2 {
            return Err(fail("minutes and seconds must be two digits"));
        }
        let minutes = parse_digits(m).ok_or_else(|| fail("minutes must be digits"))?;
        let seconds = parse_digits(sec).ok_or_else(|| fail("seconds must be digits"))?;
        if minutes >= 60 || seconds >= 60 {
            return Err(fail("minutes and seconds must be below 60"));
        }

        let micros_frac = match frac {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 6 => {
                return Err(fail("fraction must have 1 to 6 digits"))
            }
            Some(f) => {
                let value = parse_digits(f).ok_or_else(|| fail("fraction must be digits"))?;
                value * 10u64.pow(6 - f.len() as u32)
            }
        };

        hours
            .checked_mul(3600)
            .and_then(|s| s.checked_add(minutes * 60 + seconds))
            .and_then(|s| s.checked_mul(MICROS_PER_SEC))
            .and_then(|us| us.checked_add(micros_frac))
            .map(Uptime::from_micros)
            .ok_or_else(|| fail("out of range"))
    }
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
