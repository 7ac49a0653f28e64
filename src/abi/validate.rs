//! C Argument Validation
//!
//! Turns raw pointers handed over by C callers into slices and strings.
//!
//! # Security
//! - Every pointer is checked before a slice is built from it
//! - Failures are reported as `EFAULT`, never dereferenced
//! - Checks performed:
//!   - Null pointers with a non-zero length
//!   - `ptr + len` wrapping around the address space
//!   - `len` larger than `isize::MAX` (the `slice` limit)
//!   - Path strings without a NUL within `PATH_MAX` bytes
//!   - Path strings that are not valid UTF-8 (`EINVAL`)
//!
//! Whether the memory is actually mapped is the caller's contract; the
//! shim runs in the caller's address space and cannot probe it.

use crate::ctypes::c_void;
use crate::errno::{Errno, Result};

fn check_range(ptr: usize, len: usize) -> Result<()> {
    if ptr == 0 {
        return Err(Errno::Efault);
    }
    if isize::try_from(len).is_err() {
        return Err(Errno::Efault);
    }
    ptr.checked_add(len).ok_or(Errno::Efault)?;
    Ok(())
}

/// Validate a buffer the shim will read from.
///
/// Zero-length buffers are always valid, even when null.
///
/// # Security Checks
/// 1. Pointer is non-null
/// 2. Length fits in `isize`
/// 3. Pointer + length doesn't overflow
///
/// # Safety
/// If validation passes, `ptr` must be valid for reads of `len` bytes for
/// the returned lifetime.
pub unsafe fn validate_read<'a>(ptr: *const c_void, len: usize) -> Result<&'a [u8]> {
    if len == 0 {
        return Ok(&[]);
    }
    check_range(ptr as usize, len)?;
    // SAFETY:
    // - Pointer is non-null (checked above)
    // - Length fits in isize and the range does not wrap (checked above)
    // - Memory is readable for `len` bytes per the caller's contract
    // - u8 has alignment 1, so any address is aligned
    Ok(unsafe { core::slice::from_raw_parts(ptr.cast::<u8>(), len) })
}

/// Validate a buffer the shim will write into.
///
/// Same checks as [`validate_read`].
///
/// # Safety
/// If validation passes, `ptr` must be valid for writes of `len` bytes for
/// the returned lifetime, with no other live references to it.
pub unsafe fn validate_write<'a>(ptr: *mut c_void, len: usize) -> Result<&'a mut [u8]> {
    if len == 0 {
        return Ok(&mut []);
    }
    check_range(ptr as usize, len)?;
    // SAFETY:
    // - Pointer is non-null (checked above)
    // - Length fits in isize and the range does not wrap (checked above)
    // - Memory is writable for `len` bytes per the caller's contract
    // - No other reference aliases it, also per the caller's contract
    Ok(unsafe { core::slice::from_raw_parts_mut(ptr.cast::<u8>(), len) })
}

/// Validate a NUL-terminated path string.
///
/// # Safety
/// `ptr` must be null or point to readable memory up to its NUL
/// terminator (or `PATH_MAX` bytes, whichever comes first).
#[cfg(feature = "fs")]
pub unsafe fn validate_path<'a>(ptr: *const crate::ctypes::c_char) -> Result<&'a str> {
    use crate::fs::PATH_MAX;

    if ptr.is_null() {
        return Err(Errno::Efault);
    }
    let bytes = ptr.cast::<u8>();
    let mut len = 0;
    // SAFETY:
    // - Pointer is non-null (checked above)
    // - Every byte up to the terminator is readable per the caller's contract
    // - The scan stops at the first NUL or at PATH_MAX, whichever is first
    while unsafe { *bytes.add(len) } != 0 {
        len += 1;
        if len >= PATH_MAX {
            return Err(Errno::Enametoolong);
        }
    }
    // SAFETY:
    // - The `len` bytes before the terminator were each read by the scan
    // - `len < PATH_MAX`, so the slice length cannot overflow
    let raw = unsafe { core::slice::from_raw_parts(bytes, len) };
    core::str::from_utf8(raw).map_err(|_| Errno::Einval)
}
