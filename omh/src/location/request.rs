//! One-shot current-location acquisition.

use omh_types::OmhCoordinate;
use web_time::{Duration, SystemTime};

use crate::error::OmhError;
use crate::location::Fix;

/// Callback invoked with the acquired coordinate.
pub type SuccessCallback = Box<dyn FnOnce(OmhCoordinate)>;
/// Callback invoked when the acquisition fails.
pub type FailureCallback = Box<dyn FnOnce(OmhError)>;

/// Tuning knobs of a [`CurrentLocationRequest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentLocationOptions {
    /// Accuracy radius (meters) at or below which a fix completes the
    /// request immediately.
    pub good_accuracy_m: f64,
    /// How long fixes are accumulated before the best one is selected.
    pub timeout: Duration,
}

impl Default for CurrentLocationOptions {
    fn default() -> Self {
        Self {
            good_accuracy_m: 50.0,
            timeout: Duration::from_secs(30),
        }
    }
}

enum RequestState {
    WaitingForFix,
    Accumulating(Vec<Fix>),
    Completed,
}

/// One-shot "where am I right now" acquisition.
///
/// The request starts waiting for a fix; the first fix with good enough
/// accuracy completes it immediately. Poorer fixes accumulate until the
/// deadline, after which the most accurate accumulated fix is selected, or
/// the request fails with [`OmhError::NullLocation`] when nothing arrived
/// at all.
///
/// The deadline is captured once when the request is started and compared
/// against the clock at each delivery; there is no background timer, so a
/// host that stops feeding fixes should tick [`poll_deadline`] or
/// [`cancel`] the request.
///
/// Callbacks are one-shot: a terminal outcome is delivered at most once
/// and the callback slots are cleared on delivery, so duplicate fix
/// deliveries after completion are ignored.
///
/// [`poll_deadline`]: Self::poll_deadline
/// [`cancel`]: Self::cancel
pub struct CurrentLocationRequest {
    options: CurrentLocationOptions,
    deadline: SystemTime,
    state: RequestState,
    on_success: Option<SuccessCallback>,
    on_failure: Option<FailureCallback>,
}

impl CurrentLocationRequest {
    /// Starts a request now.
    pub fn start(
        options: CurrentLocationOptions,
        on_success: SuccessCallback,
        on_failure: FailureCallback,
    ) -> Self {
        Self::started_at(options, SystemTime::now(), on_success, on_failure)
    }

    /// Starts a request with an explicit start instant.
    pub fn started_at(
        options: CurrentLocationOptions,
        started: SystemTime,
        on_success: SuccessCallback,
        on_failure: FailureCallback,
    ) -> Self {
        Self {
            options,
            deadline: started + options.timeout,
            state: RequestState::WaitingForFix,
            on_success: Some(on_success),
            on_failure: Some(on_failure),
        }
    }

    /// Delivers a location fix to the request.
    ///
    /// The fix's own timestamp doubles as the delivery clock for the
    /// deadline comparison.
    pub fn on_fix(&mut self, fix: Fix) {
        if self.is_completed() {
            log::trace!("ignoring fix delivered after the request completed");
            return;
        }

        let arrived_at = fix.timestamp();

        if fix.accuracy_m() <= self.options.good_accuracy_m {
            log::debug!(
                "fix with accuracy {:.1} m is good enough, completing",
                fix.accuracy_m()
            );
            self.succeed(fix.coordinate());
            return;
        }

        match &mut self.state {
            RequestState::WaitingForFix => {
                self.state = RequestState::Accumulating(vec![fix]);
            }
            RequestState::Accumulating(fixes) => fixes.push(fix),
            RequestState::Completed => {}
        }

        if arrived_at >= self.deadline {
            self.resolve_timed_out();
        }
    }

    /// Checks the deadline against an external clock, resolving the
    /// request when it has passed.
    pub fn poll_deadline(&mut self, now: SystemTime) {
        if self.is_completed() || now < self.deadline {
            return;
        }
        self.resolve_timed_out();
    }

    /// Fails the request with the given error (a fix source reporting a
    /// permission denial, for example). Delivered at most once.
    pub fn fail(&mut self, error: OmhError) {
        if self.is_completed() {
            return;
        }
        self.state = RequestState::Completed;
        self.on_success = None;
        if let Some(callback) = self.on_failure.take() {
            callback(error);
        }
    }

    /// Cancels the request. Neither callback is invoked.
    pub fn cancel(&mut self) {
        if self.is_completed() {
            return;
        }
        log::debug!("current location request cancelled");
        self.state = RequestState::Completed;
        self.on_success = None;
        self.on_failure = None;
    }

    /// True once the request reached a terminal state.
    pub fn is_completed(&self) -> bool {
        matches!(self.state, RequestState::Completed)
    }

    fn resolve_timed_out(&mut self) {
        let best = match std::mem::replace(&mut self.state, RequestState::Completed) {
            RequestState::Accumulating(fixes) => fixes.into_iter().min_by(|a, b| {
                a.accuracy_m()
                    .partial_cmp(&b.accuracy_m())
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            _ => None,
        };

        match best {
            Some(fix) => {
                log::debug!(
                    "deadline passed, selecting accumulated fix with accuracy {:.1} m",
                    fix.accuracy_m()
                );
                self.succeed(fix.coordinate());
            }
            None => {
                log::debug!("deadline passed with no fixes accumulated");
                self.fail(OmhError::NullLocation);
            }
        }
    }

    fn succeed(&mut self, coordinate: OmhCoordinate) {
        self.state = RequestState::Completed;
        self.on_failure = None;
        if let Some(callback) = self.on_success.take() {
            callback(coordinate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Fix;
    use assert_matches::assert_matches;
    use omh_types::latlon;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Outcome {
        Success(OmhCoordinate),
        Failure(OmhError),
    }

    fn start_at(
        start_secs: u64,
        options: CurrentLocationOptions,
    ) -> (CurrentLocationRequest, Rc<RefCell<Vec<Outcome>>>) {
        let outcomes = Rc::new(RefCell::new(vec![]));
        let on_success: SuccessCallback = {
            let outcomes = Rc::clone(&outcomes);
            Box::new(move |coordinate| {
                outcomes.borrow_mut().push(Outcome::Success(coordinate));
            })
        };
        let on_failure: FailureCallback = {
            let outcomes = Rc::clone(&outcomes);
            Box::new(move |error| outcomes.borrow_mut().push(Outcome::Failure(error)))
        };

        let request = CurrentLocationRequest::started_at(
            options,
            SystemTime::UNIX_EPOCH + Duration::from_secs(start_secs),
            on_success,
            on_failure,
        );
        (request, outcomes)
    }

    fn fix_at(secs: u64, accuracy_m: f64, lat: f64) -> Fix {
        Fix::new(
            latlon!(lat, 21.0),
            accuracy_m,
            SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
        )
    }

    #[test]
    fn good_first_fix_completes_immediately() {
        let (mut request, outcomes) = start_at(0, CurrentLocationOptions::default());

        request.on_fix(fix_at(1, 10.0, 52.0));

        assert!(request.is_completed());
        assert_eq!(
            *outcomes.borrow(),
            vec![Outcome::Success(latlon!(52.0, 21.0))]
        );
    }

    #[test]
    fn poor_fixes_accumulate_until_deadline() {
        let (mut request, outcomes) = start_at(0, CurrentLocationOptions::default());

        request.on_fix(fix_at(1, 300.0, 52.0));
        request.on_fix(fix_at(5, 120.0, 53.0));
        assert!(!request.is_completed());
        assert!(outcomes.borrow().is_empty());

        // delivery past the 30 s deadline resolves to the most accurate fix
        request.on_fix(fix_at(31, 500.0, 54.0));
        assert!(request.is_completed());
        assert_eq!(
            *outcomes.borrow(),
            vec![Outcome::Success(latlon!(53.0, 21.0))]
        );
    }

    #[test]
    fn later_good_fix_beats_accumulation() {
        let (mut request, outcomes) = start_at(0, CurrentLocationOptions::default());

        request.on_fix(fix_at(1, 300.0, 52.0));
        request.on_fix(fix_at(2, 40.0, 53.0));

        assert_eq!(
            *outcomes.borrow(),
            vec![Outcome::Success(latlon!(53.0, 21.0))]
        );
    }

    #[test]
    fn deadline_with_no_fixes_fails_with_null_location() {
        let (mut request, outcomes) = start_at(0, CurrentLocationOptions::default());

        request.poll_deadline(SystemTime::UNIX_EPOCH + Duration::from_secs(29));
        assert!(!request.is_completed());

        request.poll_deadline(SystemTime::UNIX_EPOCH + Duration::from_secs(30));
        assert!(request.is_completed());
        assert_eq!(
            *outcomes.borrow(),
            vec![Outcome::Failure(OmhError::NullLocation)]
        );
    }

    #[test]
    fn callbacks_fire_at_most_once() {
        let (mut request, outcomes) = start_at(0, CurrentLocationOptions::default());

        request.on_fix(fix_at(1, 10.0, 52.0));
        request.on_fix(fix_at(2, 5.0, 53.0));
        request.poll_deadline(SystemTime::UNIX_EPOCH + Duration::from_secs(60));

        assert_eq!(outcomes.borrow().len(), 1);
    }

    #[test]
    fn cancel_suppresses_callbacks() {
        let (mut request, outcomes) = start_at(0, CurrentLocationOptions::default());

        request.cancel();
        request.on_fix(fix_at(1, 10.0, 52.0));
        request.poll_deadline(SystemTime::UNIX_EPOCH + Duration::from_secs(60));

        assert!(request.is_completed());
        assert!(outcomes.borrow().is_empty());
    }

    #[test]
    fn source_reported_failure_is_forwarded_once() {
        let (mut request, outcomes) = start_at(0, CurrentLocationOptions::default());

        request.fail(OmhError::PermissionDenied);
        request.fail(OmhError::NullLocation);

        assert_eq!(outcomes.borrow().len(), 1);
        assert_matches!(outcomes.borrow()[0], Outcome::Failure(OmhError::PermissionDenied));
    }

    #[test]
    fn custom_accuracy_threshold() {
        let options = CurrentLocationOptions {
            good_accuracy_m: 5.0,
            timeout: Duration::from_secs(10),
        };
        let (mut request, outcomes) = start_at(100, options);

        request.on_fix(fix_at(101, 20.0, 52.0));
        assert!(outcomes.borrow().is_empty());

        request.on_fix(fix_at(102, 4.0, 53.0));
        assert_eq!(
            *outcomes.borrow(),
            vec![Outcome::Success(latlon!(53.0, 21.0))]
        );
    }
}
