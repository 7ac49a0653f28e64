//! Pipe entry points (`pipe` feature).

use log::trace;

use crate::ctypes::c_int;
use crate::errno::{Errno, Result};
use crate::pipe;

use super::ret;

/// Store a fresh `[read, write]` descriptor pair into `fds`.
///
/// # Safety
/// `fds` must be null or valid for writes of two `c_int`s.
unsafe fn store_pair(fds: *mut c_int, make: impl FnOnce() -> Result<[i32; 2]>) -> Result<c_int> {
    if fds.is_null() {
        return Err(Errno::Efault);
    }
    let pair = make()?;
    // SAFETY: non-null and writable for two ints per the caller's contract.
    let out = unsafe { core::slice::from_raw_parts_mut(fds, 2) };
    out.copy_from_slice(&pair);
    Ok(0)
}

/// # Safety
/// `fds` must be valid for writes of two `c_int`s.
#[cfg_attr(feature = "export", no_mangle)]
pub unsafe extern "C" fn pipe(fds: *mut c_int) -> c_int {
    trace!("pipe <= fds: {:p}", fds);
    // SAFETY: forwarded from the caller's contract.
    ret("pipe", unsafe { store_pair(fds, pipe::pipe) })
}

/// Like [`pipe`], with `O_CLOEXEC` and `O_NONBLOCK` accepted in `flags`.
///
/// # Safety
/// `fds` must be valid for writes of two `c_int`s.
#[cfg_attr(feature = "export", no_mangle)]
pub unsafe extern "C" fn pipe2(fds: *mut c_int, flags: c_int) -> c_int {
    trace!("pipe2 <= fds: {:p}, flags: {:#x}", fds, flags);
    // SAFETY: forwarded from the caller's contract.
    ret("pipe2", unsafe { store_pair(fds, || pipe::pipe2(flags as u32)) })
}
