//! Walk statistics

use std::fmt;

use serde::Serialize;

use super::{WalkLog, WalkQuality};

/// Totals over a set of walk logs, per quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    pub total: usize,
    pub good: usize,
    pub okay: usize,
    pub bad: usize,
}

impl WalkStats {
    pub fn from_logs<'a>(logs: impl IntoIterator<Item = &'a WalkLog>) -> Self {
        logs.into_iter().fold(Self::default(), |mut stats, log| {
            stats.total += 1;
            match log.quality {
                WalkQuality::Good => stats.good += 1,
                WalkQuality::Okay => stats.okay += 1,
                WalkQuality::Bad => stats.bad += 1,
            }
            stats
        })
    }

    /// Number of walks with the given quality.
    pub const fn count(&self, quality: WalkQuality) -> usize {
        match quality {
            WalkQuality::Good => self.good,
            WalkQuality::Okay => self.okay,
            WalkQuality::Bad => self.bad,
        }
    }
}

impl fmt::Display for WalkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} walks • {} great • {} okay • {} poor",
            self.total, self.good, self.okay, self.bad
        )
    }
}
