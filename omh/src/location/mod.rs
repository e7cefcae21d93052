//! Location fixes, fix arbitration and current-location acquisition.
//!
//! This layer never produces location readings itself. An external
//! [`FixSource`] (the OS location manager, a replay file, a test stub)
//! pushes [`Fix`]es into it; the module decides which fix wins and
//! forwards the winner's coordinate through one-shot callbacks.

use omh_types::OmhCoordinate;
use web_time::{Duration, SystemTime};

mod request;
pub use request::{
    CurrentLocationOptions, CurrentLocationRequest, FailureCallback, SuccessCallback,
};

/// Age difference past which a newer fix wins regardless of accuracy.
pub const SIGNIFICANT_TIME_DELTA: Duration = Duration::from_secs(2 * 60);

/// Largest accuracy degradation (in meters) a newer fix may carry and
/// still replace an older one.
pub const ACCURACY_DEGRADATION_LIMIT_M: f64 = 200.0;

/// A single location reading from a positioning provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    coordinate: OmhCoordinate,
    accuracy_m: f64,
    timestamp: SystemTime,
}

impl Fix {
    /// Creates a fix from its reading.
    pub fn new(coordinate: OmhCoordinate, accuracy_m: f64, timestamp: SystemTime) -> Self {
        Self {
            coordinate,
            accuracy_m,
            timestamp,
        }
    }

    /// Position of the reading.
    pub fn coordinate(&self) -> OmhCoordinate {
        self.coordinate
    }

    /// Horizontal accuracy radius in meters; smaller is better.
    pub fn accuracy_m(&self) -> f64 {
        self.accuracy_m
    }

    /// Moment the reading was taken.
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Decides whether this fix should replace the previous best one.
    ///
    /// The tie-break is asymmetric: recency can override accuracy within
    /// bounds, but a stale-but-accurate fix is preserved against a
    /// fresh-but-much-worse one.
    ///
    /// 1. With no previous fix the candidate always wins.
    /// 2. A candidate at least [`SIGNIFICANT_TIME_DELTA`] newer wins
    ///    outright.
    /// 3. A strictly more accurate candidate wins.
    /// 4. A newer candidate wins if its accuracy degraded by at most
    ///    [`ACCURACY_DEGRADATION_LIMIT_M`].
    /// 5. Otherwise the previous fix is retained.
    pub fn is_better_than(&self, previous: Option<&Fix>) -> bool {
        let Some(previous) = previous else {
            return true;
        };

        match self.timestamp.duration_since(previous.timestamp) {
            Ok(newer_by) => {
                if newer_by >= SIGNIFICANT_TIME_DELTA {
                    return true;
                }
                if self.accuracy_m < previous.accuracy_m {
                    return true;
                }
                !newer_by.is_zero()
                    && self.accuracy_m - previous.accuracy_m <= ACCURACY_DEGRADATION_LIMIT_M
            }
            // candidate is older than the previous fix
            Err(_) => self.accuracy_m < previous.accuracy_m,
        }
    }
}

/// Keeps the best fix seen so far, arbitrating each new delivery with
/// [`Fix::is_better_than`].
#[derive(Debug, Default)]
pub struct LastLocation {
    best: Option<Fix>,
}

impl LastLocation {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a new fix. Returns true when the fix replaced the stored
    /// one.
    pub fn offer(&mut self, fix: Fix) -> bool {
        if fix.is_better_than(self.best.as_ref()) {
            log::trace!(
                "new best fix: accuracy {:.1} m at {:?}",
                fix.accuracy_m(),
                fix.coordinate()
            );
            self.best = Some(fix);
            true
        } else {
            false
        }
    }

    /// The winning fix, if any was delivered yet.
    pub fn fix(&self) -> Option<&Fix> {
        self.best.as_ref()
    }

    /// Coordinate of the winning fix.
    pub fn coordinate(&self) -> Option<OmhCoordinate> {
        self.best.as_ref().map(Fix::coordinate)
    }
}

/// Callback receiving location fixes as they are produced.
pub type FixListener = Box<dyn FnMut(Fix)>;

/// An external producer of location fixes.
///
/// One listener is registered per logical operation; unregistering the
/// listener is the only form of cancellation.
pub trait FixSource {
    /// Starts delivering fixes to the given listener, replacing any
    /// previously registered one.
    fn start_updates(&mut self, listener: FixListener);

    /// Stops delivering fixes and drops the registered listener.
    fn stop_updates(&mut self);

    /// The most recent fix the source already has, if any.
    fn last_known_fix(&self) -> Option<Fix> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omh_types::latlon;

    fn fix_at(secs: u64, accuracy_m: f64) -> Fix {
        Fix::new(
            latlon!(52.0, 21.0),
            accuracy_m,
            SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
        )
    }

    #[test]
    fn no_previous_fix_always_yields_candidate() {
        let candidate = fix_at(100, 500.0);
        assert!(candidate.is_better_than(None));
    }

    #[test]
    fn significantly_newer_wins_regardless_of_accuracy() {
        let previous = fix_at(0, 5.0);
        let candidate = fix_at(3 * 60, 5_000.0);
        assert!(candidate.is_better_than(Some(&previous)));
    }

    #[test]
    fn two_minutes_newer_is_already_significant() {
        let previous = fix_at(0, 5.0);
        let candidate = fix_at(2 * 60, 5_000.0);
        assert!(candidate.is_better_than(Some(&previous)));

        let just_under = fix_at(2 * 60 - 1, 5_000.0);
        assert!(!just_under.is_better_than(Some(&previous)));
    }

    #[test]
    fn equal_time_selects_smaller_accuracy() {
        let previous = fix_at(100, 30.0);
        assert!(fix_at(100, 20.0).is_better_than(Some(&previous)));
        assert!(!fix_at(100, 30.0).is_better_than(Some(&previous)));
        assert!(!fix_at(100, 40.0).is_better_than(Some(&previous)));
    }

    #[test]
    fn newer_within_degradation_limit_wins() {
        let previous = fix_at(0, 30.0);
        assert!(fix_at(30, 230.0).is_better_than(Some(&previous)));
        assert!(!fix_at(30, 230.1).is_better_than(Some(&previous)));
    }

    #[test]
    fn older_fix_wins_only_on_accuracy() {
        let previous = fix_at(100, 30.0);
        assert!(fix_at(40, 10.0).is_better_than(Some(&previous)));
        assert!(!fix_at(40, 35.0).is_better_than(Some(&previous)));
    }

    #[test]
    fn tracker_folds_arbitration() {
        let mut tracker = LastLocation::new();
        assert!(tracker.coordinate().is_none());

        assert!(tracker.offer(fix_at(0, 100.0)));
        assert!(tracker.offer(fix_at(10, 50.0)));
        // fresh but far worse than the 200 m limit
        assert!(!tracker.offer(fix_at(20, 400.0)));

        let best = tracker.fix().expect("has best");
        assert_eq!(best.accuracy_m(), 50.0);
    }
}
