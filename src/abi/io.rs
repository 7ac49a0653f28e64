//! Descriptor I/O entry points (`alloc` feature).

use log::trace;

use crate::ctypes::{c_int, c_void, size_t, ssize_t};
use crate::fd;

use super::validate::{validate_read, validate_write};
use super::{count_to_ssize, ret};

#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn close(fd: c_int) -> c_int {
    trace!("close <= fd: {}", fd);
    ret("close", fd::close(fd).map(|()| 0))
}

/// Read up to `count` bytes from `fd` into `buf`.
///
/// # Safety
/// `buf` must be valid for writes of `count` bytes.
#[cfg_attr(feature = "export", no_mangle)]
pub unsafe extern "C" fn read(fd: c_int, buf: *mut c_void, count: size_t) -> ssize_t {
    trace!("read <= fd: {}, buf: {:p}, count: {}", fd, buf, count);
    let res = (|| {
        // A bad descriptor wins over a bad buffer.
        fd::get_file(fd)?;
        // SAFETY: forwarded from the caller's contract.
        let dst = unsafe { validate_write(buf, count) }?;
        fd::read(fd, dst).map(count_to_ssize)
    })();
    ret("read", res)
}

/// Write up to `count` bytes from `buf` to `fd`.
///
/// # Safety
/// `buf` must be valid for reads of `count` bytes.
#[cfg_attr(feature = "export", no_mangle)]
pub unsafe extern "C" fn write(fd: c_int, buf: *const c_void, count: size_t) -> ssize_t {
    trace!("write <= fd: {}, buf: {:p}, count: {}", fd, buf, count);
    let res = (|| {
        fd::get_file(fd)?;
        // SAFETY: forwarded from the caller's contract.
        let src = unsafe { validate_read(buf, count) }?;
        fd::write(fd, src).map(count_to_ssize)
    })();
    ret("write", res)
}

#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn dup(old: c_int) -> c_int {
    trace!("dup <= old: {}", old);
    ret("dup", fd::dup(old))
}

#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn dup2(old: c_int, new: c_int) -> c_int {
    trace!("dup2 <= old: {}, new: {}", old, new);
    ret("dup2", fd::dup2(old, new))
}

#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn dup3(old: c_int, new: c_int, flags: c_int) -> c_int {
    trace!("dup3 <= old: {}, new: {}, flags: {:#x}", old, new, flags);
    ret("dup3", fd::dup3(old, new, flags as u32))
}
