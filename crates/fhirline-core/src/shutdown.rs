//! Cooperative stop for long conversions.
//!
//! Signal handlers flip the flag; workers poll it between batches and stop
//! before starting new output files.

use std::sync::atomic::{AtomicBool, Ordering};

static STOP: AtomicBool = AtomicBool::new(false);

/// Set from signal handlers; a second signal while set exits immediately
pub fn stop_flag() -> &'static AtomicBool {
    &STOP
}

pub fn stop_requested() -> bool {
    STOP.load(Ordering::Relaxed)
}
