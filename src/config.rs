//! Build Configuration
//!
//! Platform constants baked in at compile time. Every value reported by
//! `sysconf` that is not computed at runtime comes from here.

/// Page size (4 KiB)
pub const PAGE_SIZE: usize = 4096;

/// Number of CPUs the system is built for
pub const SMP: usize = 1;

/// Size of physical memory (128 MiB)
pub const PHYS_MEMORY_SIZE: usize = 0x800_0000;

/// Size of the static heap region used by [`crate::mm::init_heap`] (64 KiB)
pub const HEAP_SIZE: usize = 64 * 1024;

/// Maximum number of open file descriptors
pub const FILE_LIMIT: usize = 1024;

/// Capacity of a pipe's ring buffer in bytes
pub const PIPE_BUF_SIZE: usize = 256;

/// Timer ticks per second (reported as `_SC_CLK_TCK`)
pub const TICKS_PER_SEC: usize = 100;

/// Maximum number of symbolic links followed while resolving one path
pub const SYMLOOP_MAX: usize = 40;

/// Process ID reported when the platform does not override it
pub const DEFAULT_PID: i32 = 1;

/// Effective user ID reported when the platform does not override it
pub const DEFAULT_EUID: u32 = 0;

/// POSIX limits reported by `sysconf`
pub mod limits {
    pub const ARG_MAX: usize = 131_072;
    pub const CHILD_MAX: usize = 1;
    pub const NGROUPS_MAX: usize = 32;
    pub const STREAM_MAX: usize = 16;
    pub const TZNAME_MAX: usize = 6;
    pub const LINE_MAX: usize = 2048;
    pub const RE_DUP_MAX: usize = 255;
    pub const IOV_MAX: usize = 1024;
    pub const HOST_NAME_MAX: usize = 64;
    pub const LOGIN_NAME_MAX: usize = 256;
    pub const TTY_NAME_MAX: usize = 32;
    pub const NZERO: usize = 20;
    pub const THREAD_STACK_MIN: usize = 2048;

    /// POSIX.1-2008
    pub const POSIX_VERSION: usize = 200_809;
    /// POSIX.2 (shell and utilities) version
    pub const POSIX2_VERSION: usize = 200_809;
}
