//! File-System Operations
//!
//! The process-wide [`RamFs`] and the `unistd.h` calls on top of it:
//! `readlink`, `unlink`, `rmdir`, `ftruncate`, `access`, `getcwd`,
//! `lseek`, `fsync`, `fchown`.
//!
//! `open`, `mkdir`, `symlink`, `chdir` and `metadata` are not part of
//! `unistd.h` but are needed to populate the tree and are exported at the
//! Rust level only.

mod file;
mod path;
mod ramfs;

use alloc::string::String;
use alloc::sync::Arc;

use spin::Lazy;

use crate::errno::{Errno, Result};
use crate::fd::{self, OpenFlags, SeekFrom};
use crate::process;

pub use file::RamFile;
pub use ramfs::{access, Metadata, Node, NodeType, RamFs, MAX_FILE_SIZE, NAME_MAX, PATH_MAX};

/// `lseek` whence values.
pub mod whence {
    pub const SEEK_SET: i32 = 0;
    pub const SEEK_CUR: i32 = 1;
    pub const SEEK_END: i32 = 2;
}

static ROOT_FS: Lazy<RamFs> = Lazy::new(RamFs::new);

/// The process-wide file system.
pub fn root() -> &'static RamFs {
    &ROOT_FS
}

fn owner() -> (u32, u32) {
    let euid = process::geteuid();
    (euid, euid)
}

/// Open `path` and install it on the lowest free descriptor.
pub fn open(path: &str, flags: OpenFlags, mode: u32) -> Result<i32> {
    let node = ROOT_FS.open(path, flags, mode, process::geteuid())?;
    let file = RamFile::new(node, flags);
    fd::add_file(Arc::new(file), flags.contains(OpenFlags::CLOEXEC))
}

/// Create a directory.
pub fn mkdir(path: &str, mode: u32) -> Result<()> {
    ROOT_FS.mkdir(path, mode, owner()).map(drop)
}

/// Create a symbolic link at `path` pointing to `target`.
pub fn symlink(target: &str, path: &str) -> Result<()> {
    ROOT_FS.symlink(target, path, owner()).map(drop)
}

/// Change the current working directory.
pub fn chdir(path: &str) -> Result<()> {
    ROOT_FS.chdir(path)
}

/// Attributes of `path`, following a final symbolic link.
pub fn metadata(path: &str) -> Result<Metadata> {
    ROOT_FS.metadata(path, true)
}

/// Target of a symbolic link.
pub fn readlink(path: &str) -> Result<String> {
    ROOT_FS.readlink(path)
}

/// Remove a file or symbolic link.
pub fn unlink(path: &str) -> Result<()> {
    ROOT_FS.unlink(path)
}

/// Remove an empty directory.
pub fn rmdir(path: &str) -> Result<()> {
    ROOT_FS.rmdir(path)
}

/// Check the caller's access to `path`.
pub fn access(path: &str, mode: i32) -> Result<()> {
    ROOT_FS.access(path, mode, process::geteuid())
}

/// Current working directory.
pub fn getcwd() -> String {
    ROOT_FS.cwd()
}

/// Truncate or zero-extend the file behind `fd`.
pub fn ftruncate(fd: i32, length: i64) -> Result<()> {
    let file = fd::get_file(fd)?;
    let length = u64::try_from(length).map_err(|_| Errno::Einval)?;
    file.truncate(length)
}

/// Move the offset of `fd`.
pub fn lseek(fd: i32, offset: i64, whence: i32) -> Result<i64> {
    let file = fd::get_file(fd)?;
    let target = match whence {
        whence::SEEK_SET => SeekFrom::Start(u64::try_from(offset).map_err(|_| Errno::Einval)?),
        whence::SEEK_CUR => SeekFrom::Current(offset),
        whence::SEEK_END => SeekFrom::End(offset),
        _ => return Err(Errno::Einval),
    };
    let pos = file.seek(target)?;
    i64::try_from(pos).map_err(|_| Errno::Einval)
}

/// Flush the file behind `fd`.
pub fn fsync(fd: i32) -> Result<()> {
    fd::get_file(fd)?.sync()
}

/// Change owner and group of the file behind `fd`; `u32::MAX` (C `-1`)
/// keeps the current id.
///
/// Only root may give a file away; the owner may change its group.
pub fn fchown(fd: i32, uid: u32, gid: u32) -> Result<()> {
    let keep = |id: u32| (id != u32::MAX).then_some(id);
    fd::get_file(fd)?.chown(keep(uid), keep(gid), process::geteuid())
}
