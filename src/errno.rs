//! Error Codes and `errno`
//!
//! Internal layers report failures as [`Errno`] values. The C boundary
//! stores them in the process-global `errno` cell and returns `-1`.
//!
//! # Design
//! - Linux numbering so the values match what C callers compare against
//! - A single global cell: the shim runs in one address space and has no
//!   thread-local storage of its own

use core::fmt;
use core::sync::atomic::{AtomicI32, Ordering};

use crate::ctypes::c_int;

/// Result type used by every internal layer.
pub type Result<T> = core::result::Result<T, Errno>;

/// POSIX error codes (Linux numbering).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    /// Operation not permitted
    Eperm = 1,
    /// No such file or directory
    Enoent = 2,
    /// Interrupted system call
    Eintr = 4,
    /// I/O error
    Eio = 5,
    /// Bad file descriptor
    Ebadf = 9,
    /// Resource temporarily unavailable
    Eagain = 11,
    /// Permission denied
    Eacces = 13,
    /// Bad address (invalid pointer)
    Efault = 14,
    /// Device or resource busy
    Ebusy = 16,
    /// File exists
    Eexist = 17,
    /// Not a directory
    Enotdir = 20,
    /// Is a directory
    Eisdir = 21,
    /// Invalid argument
    Einval = 22,
    /// Too many open files
    Emfile = 24,
    /// File too large
    Efbig = 27,
    /// Illegal seek
    Espipe = 29,
    /// Broken pipe
    Epipe = 32,
    /// Result out of range
    Erange = 34,
    /// File name too long
    Enametoolong = 36,
    /// Directory not empty
    Enotempty = 39,
    /// Too many levels of symbolic links
    Eloop = 40,
}

impl Errno {
    /// The raw `errno` value.
    #[inline]
    pub const fn code(self) -> c_int {
        self as c_int
    }

    /// Short description, as `strerror` would print it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eperm => "Operation not permitted",
            Self::Enoent => "No such file or directory",
            Self::Eintr => "Interrupted system call",
            Self::Eio => "I/O error",
            Self::Ebadf => "Bad file descriptor",
            Self::Eagain => "Resource temporarily unavailable",
            Self::Eacces => "Permission denied",
            Self::Efault => "Bad address",
            Self::Ebusy => "Device or resource busy",
            Self::Eexist => "File exists",
            Self::Enotdir => "Not a directory",
            Self::Eisdir => "Is a directory",
            Self::Einval => "Invalid argument",
            Self::Emfile => "Too many open files",
            Self::Efbig => "File too large",
            Self::Espipe => "Illegal seek",
            Self::Epipe => "Broken pipe",
            Self::Erange => "Result out of range",
            Self::Enametoolong => "File name too long",
            Self::Enotempty => "Directory not empty",
            Self::Eloop => "Too many levels of symbolic links",
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (errno {})", self.as_str(), self.code())
    }
}

static ERRNO: AtomicI32 = AtomicI32::new(0);

/// Current value of `errno`.
pub fn errno() -> c_int {
    ERRNO.load(Ordering::Relaxed)
}

/// Overwrite `errno`.
pub fn set_errno(code: c_int) {
    ERRNO.store(code, Ordering::Relaxed);
}

/// Address of the `errno` cell, for the C `errno` macro.
#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn __errno_location() -> *mut c_int {
    ERRNO.as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_numbering() {
        assert_eq!(Errno::Ebadf.code(), 9);
        assert_eq!(Errno::Einval.code(), 22);
        assert_eq!(Errno::Espipe.code(), 29);
        assert_eq!(Errno::Eloop.code(), 40);
        assert_eq!(Errno::Eperm.code(), 1);
        assert_eq!(Errno::Eperm.as_str(), "Operation not permitted");
    }

    #[test]
    fn test_errno_location_aliases_cell() {
        let ptr = __errno_location();
        assert!(!ptr.is_null());
        assert_eq!(ptr, __errno_location());
    }
}
