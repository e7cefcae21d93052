//! Feeds a scripted sequence of fixes through the current-location flow.

use omh::location::{
    CurrentLocationOptions, CurrentLocationRequest, Fix, FixListener, FixSource,
};
use omh::OmhError;
use omh_types::latlon;
use web_time::{Duration, SystemTime};

/// Fix source replaying a pre-recorded track.
struct ReplaySource {
    track: Vec<Fix>,
    listener: Option<FixListener>,
}

impl ReplaySource {
    fn new(track: Vec<Fix>) -> Self {
        Self {
            track,
            listener: None,
        }
    }

    fn replay(&mut self) {
        if let Some(listener) = &mut self.listener {
            for fix in self.track.drain(..) {
                listener(fix);
            }
        }
    }
}

impl FixSource for ReplaySource {
    fn start_updates(&mut self, listener: FixListener) {
        self.listener = Some(listener);
    }

    fn stop_updates(&mut self) {
        self.listener = None;
    }
}

fn main() {
    env_logger::init();

    let start = SystemTime::now();
    let track = vec![
        Fix::new(latlon!(52.2297, 21.0122), 300.0, start),
        Fix::new(latlon!(52.2298, 21.0120), 150.0, start + Duration::from_secs(2)),
        Fix::new(latlon!(52.2299, 21.0118), 25.0, start + Duration::from_secs(4)),
    ];

    let request = CurrentLocationRequest::start(
        CurrentLocationOptions::default(),
        Box::new(|coordinate| println!("current location: {coordinate:?}")),
        Box::new(|error: OmhError| eprintln!("location failed: {error}")),
    );

    let mut source = ReplaySource::new(track);
    let request = std::rc::Rc::new(std::cell::RefCell::new(request));
    let listener_request = std::rc::Rc::clone(&request);
    source.start_updates(Box::new(move |fix| {
        listener_request.borrow_mut().on_fix(fix);
    }));

    source.replay();
    source.stop_updates();
}
