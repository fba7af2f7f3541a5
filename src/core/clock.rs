use std::cell::Cell;

/// Source of frame time in seconds. The browser build reads wall-clock epoch
/// seconds; tests drive a `ManualClock`.
pub trait Clock {
    fn now_secs(&self) -> f64;
}

#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

#[allow(dead_code)]
impl ManualClock {
    pub fn new(start_secs: f64) -> Self {
        Self {
            now: Cell::new(start_secs),
        }
    }

    pub fn set(&self, secs: f64) {
        self.now.set(secs);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}
