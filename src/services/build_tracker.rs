// src/services/build_tracker.rs
//
// Countdown of mosaics still being built.
// Interaction is only wired up once this reaches zero.

#[derive(Debug)]
pub struct BuildTracker {
    remaining: usize,
    fired: bool,
}

impl BuildTracker {
    pub fn new(expected: usize) -> Self {
        Self {
            remaining: expected,
            fired: false,
        }
    }

    /// Records one finished grid. Returns true exactly once: on the call that
    /// brings the countdown to zero.
    pub fn complete_one(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_ready(&self) -> bool {
        self.fired
    }
}
