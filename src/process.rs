//! Process Identity and Timing
//!
//! `sleep`, `usleep`, `getpid` and `geteuid`. These are always compiled in
//! regardless of feature flags.

use core::time::Duration;

use log::debug;

use crate::errno::{Errno, Result};
use crate::platform::{self, Platform};

/// Sleep for `dur` on the installed platform.
///
/// Returns `Err(remaining)` if the platform woke the caller early.
pub fn nanosleep(dur: Duration) -> core::result::Result<(), Duration> {
    nanosleep_on(platform::current(), dur)
}

/// Sleep for `dur` on a specific platform.
pub fn nanosleep_on(platform: &dyn Platform, dur: Duration) -> core::result::Result<(), Duration> {
    let start = platform.monotonic_time();
    platform.sleep(dur);
    let elapsed = platform.monotonic_time().saturating_sub(start);
    match dur.checked_sub(elapsed) {
        Some(remaining) if !remaining.is_zero() => {
            debug!("woke early: {:?} of {:?} left", remaining, dur);
            Err(remaining)
        }
        _ => Ok(()),
    }
}

/// Sleep for `seconds`, returning the whole seconds left unslept.
pub fn sleep_on(platform: &dyn Platform, seconds: u32) -> u32 {
    match nanosleep_on(platform, Duration::from_secs(u64::from(seconds))) {
        Ok(()) => 0,
        Err(remaining) => {
            // Round up: a partial second still counts as unslept.
            let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
            u32::try_from(secs).unwrap_or(u32::MAX)
        }
    }
}

/// Sleep for `useconds` microseconds. Fails with `EINTR` on early wakeup.
pub fn usleep_on(platform: &dyn Platform, useconds: u32) -> Result<()> {
    nanosleep_on(platform, Duration::from_micros(u64::from(useconds))).map_err(|_| Errno::Eintr)
}

/// ID of the running process.
pub fn getpid() -> i32 {
    platform::current().pid()
}

/// Effective user ID of the running process.
pub fn geteuid() -> u32 {
    platform::current().euid()
}
