//! File-system entry points (`fs` feature).

use log::trace;

use crate::ctypes::{c_char, c_int, gid_t, off_t, size_t, ssize_t, uid_t};
use crate::errno::{Errno, Result};
use crate::fs;

use super::validate::{validate_path, validate_write};
use super::{count_to_ssize, ret};

/// Copy the target of the symbolic link `path` into `buf`.
///
/// The result is not NUL-terminated and is silently truncated to `bufsiz`.
///
/// # Safety
/// `path` must be a NUL-terminated string; `buf` must be valid for writes
/// of `bufsiz` bytes.
#[cfg_attr(feature = "export", no_mangle)]
pub unsafe extern "C" fn readlink(path: *const c_char, buf: *mut c_char, bufsiz: size_t) -> ssize_t {
    let res = (|| {
        // SAFETY: forwarded from the caller's contract.
        let path = unsafe { validate_path(path) }?;
        trace!("readlink <= path: {:?}, bufsiz: {}", path, bufsiz);
        if bufsiz == 0 {
            return Err(Errno::Einval);
        }
        // SAFETY: forwarded from the caller's contract.
        let dst = unsafe { validate_write(buf.cast(), bufsiz) }?;
        let target = fs::readlink(path)?;
        let n = target.len().min(dst.len());
        dst[..n].copy_from_slice(&target.as_bytes()[..n]);
        Ok(count_to_ssize(n))
    })();
    ret("readlink", res)
}

/// # Safety
/// `path` must be a NUL-terminated string.
#[cfg_attr(feature = "export", no_mangle)]
pub unsafe extern "C" fn unlink(path: *const c_char) -> c_int {
    // SAFETY: forwarded from the caller's contract.
    let res = unsafe { validate_path(path) }.and_then(|path| {
        trace!("unlink <= path: {:?}", path);
        fs::unlink(path)
    });
    ret("unlink", res.map(|()| 0))
}

/// # Safety
/// `path` must be a NUL-terminated string.
#[cfg_attr(feature = "export", no_mangle)]
pub unsafe extern "C" fn rmdir(path: *const c_char) -> c_int {
    // SAFETY: forwarded from the caller's contract.
    let res = unsafe { validate_path(path) }.and_then(|path| {
        trace!("rmdir <= path: {:?}", path);
        fs::rmdir(path)
    });
    ret("rmdir", res.map(|()| 0))
}

#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn ftruncate(fd: c_int, length: off_t) -> c_int {
    trace!("ftruncate <= fd: {}, length: {}", fd, length);
    ret("ftruncate", fs::ftruncate(fd, length).map(|()| 0))
}

/// # Safety
/// `path` must be a NUL-terminated string.
#[cfg_attr(feature = "export", no_mangle)]
pub unsafe extern "C" fn access(path: *const c_char, mode: c_int) -> c_int {
    // SAFETY: forwarded from the caller's contract.
    let res = unsafe { validate_path(path) }.and_then(|path| {
        trace!("access <= path: {:?}, mode: {:#o}", path, mode);
        fs::access(path, mode)
    });
    ret("access", res.map(|()| 0))
}

/// Copy the current working directory, NUL-terminated, into `buf`.
///
/// Returns `buf`, or null with `ERANGE` if `size` is too small.
///
/// # Safety
/// `buf` must be valid for writes of `size` bytes.
#[cfg_attr(feature = "export", no_mangle)]
pub unsafe extern "C" fn getcwd(buf: *mut c_char, size: size_t) -> *mut c_char {
    trace!("getcwd <= buf: {:p}, size: {}", buf, size);
    let res: Result<*mut c_char> = (|| {
        if buf.is_null() || size == 0 {
            return Err(Errno::Einval);
        }
        let cwd = fs::getcwd();
        if cwd.len() + 1 > size {
            return Err(Errno::Erange);
        }
        // SAFETY: forwarded from the caller's contract.
        let dst = unsafe { validate_write(buf.cast(), size) }?;
        dst[..cwd.len()].copy_from_slice(cwd.as_bytes());
        dst[cwd.len()] = 0;
        Ok(buf)
    })();
    ret("getcwd", res)
}

#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn lseek(fd: c_int, offset: off_t, whence: c_int) -> off_t {
    trace!("lseek <= fd: {}, offset: {}, whence: {}", fd, offset, whence);
    ret("lseek", fs::lseek(fd, offset, whence))
}

#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn fsync(fd: c_int) -> c_int {
    trace!("fsync <= fd: {}", fd);
    ret("fsync", fs::fsync(fd).map(|()| 0))
}

/// Change owner and group of `fd`; an id of `-1` is left unchanged.
#[cfg_attr(feature = "export", no_mangle)]
pub extern "C" fn fchown(fd: c_int, owner: uid_t, group: gid_t) -> c_int {
    trace!("fchown <= fd: {}, owner: {}, group: {}", fd, owner, group);
    ret("fchown", fs::fchown(fd, owner, group).map(|()| 0))
}
