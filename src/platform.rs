//! Platform Services
//!
//! The hardware-facing services the shim needs but does not own: a
//! console, a monotonic clock, a way to sleep and yield, and the identity
//! of the running process.
//!
//! The host OS installs its implementation once during boot with
//! [`install`]. Until then [`NullPlatform`] answers every request.

use core::sync::atomic::{AtomicU64, Ordering};
use core::time::Duration;

use log::warn;
use spin::Once;

use crate::config;

/// Services provided by the surrounding OS.
pub trait Platform: Send + Sync {
    /// Write bytes to the console, returning how many were accepted.
    fn console_write(&self, bytes: &[u8]) -> usize;

    /// Read pending console input into `buf`.
    ///
    /// Returns 0 when no input is available.
    fn console_read(&self, buf: &mut [u8]) -> usize;

    /// Time elapsed since boot.
    fn monotonic_time(&self) -> Duration;

    /// Suspend the caller for about `dur`.
    ///
    /// May return early; callers compare [`Platform::monotonic_time`]
    /// before and after to find out how much time is left.
    fn sleep(&self, dur: Duration);

    /// Give other tasks a chance to run while waiting on a resource.
    fn yield_now(&self) {
        core::hint::spin_loop();
    }

    /// ID of the running process.
    fn pid(&self) -> i32 {
        config::DEFAULT_PID
    }

    /// Effective user ID of the running process.
    fn euid(&self) -> u32 {
        config::DEFAULT_EUID
    }
}

/// Fallback platform used before the OS installs its own.
///
/// - Console output is discarded, console input is always at end-of-file
/// - Time is virtual: it only moves when someone sleeps
#[derive(Debug, Default)]
pub struct NullPlatform {
    /// Virtual clock in nanoseconds.
    clock_ns: AtomicU64,
}

impl NullPlatform {
    /// Create a platform whose virtual clock starts at zero.
    pub const fn new() -> Self {
        Self {
            clock_ns: AtomicU64::new(0),
        }
    }
}

impl Platform for NullPlatform {
    fn console_write(&self, bytes: &[u8]) -> usize {
        bytes.len()
    }

    fn console_read(&self, _buf: &mut [u8]) -> usize {
        0
    }

    fn monotonic_time(&self) -> Duration {
        Duration::from_nanos(self.clock_ns.load(Ordering::Acquire))
    }

    fn sleep(&self, dur: Duration) {
        let nanos = u64::try_from(dur.as_nanos()).unwrap_or(u64::MAX);
        self.clock_ns.fetch_add(nanos, Ordering::AcqRel);
    }
}

static NULL_PLATFORM: NullPlatform = NullPlatform::new();

static PLATFORM: Once<&'static dyn Platform> = Once::new();

/// Install the OS platform.
///
/// Only the first call has an effect; returns whether this call won.
pub fn install(platform: &'static dyn Platform) -> bool {
    let mut installed = false;
    PLATFORM.call_once(|| {
        installed = true;
        platform
    });
    if !installed {
        warn!("platform already installed, ignoring");
    }
    installed
}

/// The installed platform, or [`NullPlatform`] if none was installed.
pub fn current() -> &'static dyn Platform {
    match PLATFORM.get() {
        Some(platform) => *platform,
        None => &NULL_PLATFORM,
    }
}
