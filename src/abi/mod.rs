//! C Interface
//!
//! The `extern "C"` entry points declared by `unistd.h`.
//!
//! # Conventions
//! - Pointer arguments are validated before use (see [`validate`])
//! - Failures return `-1` (a null pointer for `getcwd`) and set `errno`
//! - Every call is traced on entry; every failure is logged at debug level
//! - With the `export` feature each function is emitted under its C name
//!
//! # Symbols
//! - `alloc`: `close`, `read`, `write`, `dup`, `dup2`, `dup3`
//! - `fs`: `readlink`, `unlink`, `rmdir`, `ftruncate`, `access`, `getcwd`,
//!   `lseek`, `fsync`, `fchown`
//! - `pipe`: `pipe`, `pipe2`
//! - always: `sleep`, `usleep`, `geteuid`, `getpid`, `sysconf`

mod sys;
pub mod validate;

#[cfg(feature = "alloc")]
mod io;
#[cfg(feature = "fs")]
mod fs;
#[cfg(feature = "pipe")]
mod pipe;

use core::fmt::Debug;

use log::debug;

use crate::ctypes::{c_char, c_int};
use crate::errno::{set_errno, Result};

pub use sys::{geteuid, getpid, sleep, sysconf, usleep};

#[cfg(feature = "alloc")]
pub use io::{close, dup, dup2, dup3, read, write};

#[cfg(feature = "fs")]
pub use fs::{access, fchown, fsync, ftruncate, getcwd, lseek, readlink, rmdir, unlink};

#[cfg(feature = "pipe")]
pub use pipe::{pipe, pipe2};

/// C symbol names compiled into this build.
pub const EXPORTED_SYMBOLS: &[&str] = &[
    #[cfg(feature = "alloc")]
    "close",
    #[cfg(feature = "alloc")]
    "read",
    #[cfg(feature = "alloc")]
    "write",
    #[cfg(feature = "fs")]
    "readlink",
    #[cfg(feature = "fs")]
    "unlink",
    #[cfg(feature = "fs")]
    "rmdir",
    #[cfg(feature = "fs")]
    "ftruncate",
    #[cfg(feature = "fs")]
    "access",
    #[cfg(feature = "fs")]
    "getcwd",
    #[cfg(feature = "fs")]
    "lseek",
    #[cfg(feature = "fs")]
    "fsync",
    #[cfg(feature = "fs")]
    "fchown",
    "sleep",
    "usleep",
    "geteuid",
    "getpid",
    #[cfg(feature = "pipe")]
    "pipe",
    #[cfg(feature = "pipe")]
    "pipe2",
    #[cfg(feature = "alloc")]
    "dup",
    #[cfg(feature = "alloc")]
    "dup2",
    #[cfg(feature = "alloc")]
    "dup3",
    "sysconf",
    "__errno_location",
];

/// Value a C function returns on failure.
trait ErrorValue: Copy + Debug {
    const ERROR: Self;
}

impl ErrorValue for c_int {
    const ERROR: Self = -1;
}

impl ErrorValue for i64 {
    const ERROR: Self = -1;
}

impl ErrorValue for isize {
    const ERROR: Self = -1;
}

impl ErrorValue for *mut c_char {
    const ERROR: Self = core::ptr::null_mut();
}

/// Convert an internal result to the C convention, setting `errno` on
/// failure.
fn ret<T: ErrorValue>(name: &str, res: Result<T>) -> T {
    match res {
        Ok(value) => value,
        Err(e) => {
            debug!("{} => {:?}", name, e);
            set_errno(e.code());
            T::ERROR
        }
    }
}

/// Widen a byte count for return through `ssize_t`.
#[cfg(feature = "alloc")]
fn count_to_ssize(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// Serialises tests that inspect the global `errno`.
#[cfg(test)]
pub(crate) static ERRNO_LOCK: spin::Mutex<()> = spin::Mutex::new(());
