//! A fixed-identity platform shared by the integration tests.

use core::sync::atomic::{AtomicU64, Ordering};
use core::time::Duration;

use axunistd::Platform;

/// Platform with a virtual clock and a chosen pid and euid.
pub struct FixedIdentity {
    clock_ns: AtomicU64,
    pid: i32,
    euid: u32,
}

impl FixedIdentity {
    pub const fn new(pid: i32, euid: u32) -> Self {
        Self {
            clock_ns: AtomicU64::new(0),
            pid,
            euid,
        }
    }
}

impl Platform for FixedIdentity {
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
        self.clock_ns
            .fetch_add(dur.as_nanos() as u64, Ordering::AcqRel);
    }

    fn pid(&self) -> i32 {
        self.pid
    }

    fn euid(&self) -> u32 {
        self.euid
    }
}
