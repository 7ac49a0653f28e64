//! Descriptor I/O
//!
//! The process-wide descriptor table and the operations on it:
//! `close`, `read`, `write`, `dup`, `dup2`, `dup3`.
//!
//! # Locking
//! The table lock is held only to look up or swap slots. I/O runs on a
//! cloned `Arc` so a blocking pipe read never stalls other descriptors,
//! and displaced entries are dropped after the lock is released.

mod file;
mod stdio;
mod table;

use alloc::sync::Arc;

use log::debug;
use spin::{Lazy, RwLock};

use crate::errno::{Errno, Result};

pub use file::{FileKind, FileLike, OpenFlags, SeekFrom};
pub use stdio::{Stderr, Stdin, Stdout};
pub use table::{Fd, FdEntry, FdTable};

static FD_TABLE: Lazy<RwLock<FdTable>> = Lazy::new(|| RwLock::new(FdTable::with_stdio()));

fn to_fd(raw: i32) -> Result<Fd> {
    Fd::new(raw).ok_or(Errno::Ebadf)
}

/// Look up the file object behind a descriptor.
pub fn get_file(fd: i32) -> Result<Arc<dyn FileLike>> {
    FD_TABLE.read().get(to_fd(fd)?)
}

/// Install a file object on the lowest free descriptor.
pub fn add_file(file: Arc<dyn FileLike>, cloexec: bool) -> Result<i32> {
    let fd = FD_TABLE.write().alloc(FdEntry::new(file, cloexec))?;
    Ok(fd.as_raw())
}

/// Whether the descriptor is marked close-on-exec.
pub fn is_cloexec(fd: i32) -> Result<bool> {
    Ok(FD_TABLE.read().entry(to_fd(fd)?)?.cloexec)
}

/// Close a descriptor.
pub fn close(fd: i32) -> Result<()> {
    let entry = FD_TABLE.write().close(to_fd(fd)?)?;
    drop(entry);
    Ok(())
}

/// Read from a descriptor.
pub fn read(fd: i32, buf: &mut [u8]) -> Result<usize> {
    let file = get_file(fd)?;
    if buf.is_empty() {
        return Ok(0);
    }
    file.read(buf)
}

/// Write to a descriptor.
pub fn write(fd: i32, buf: &[u8]) -> Result<usize> {
    let file = get_file(fd)?;
    if buf.is_empty() {
        return Ok(0);
    }
    file.write(buf)
}

/// Duplicate onto the lowest free descriptor.
pub fn dup(old: i32) -> Result<i32> {
    let fd = FD_TABLE.write().dup(to_fd(old)?)?;
    Ok(fd.as_raw())
}

/// Duplicate onto `new`, closing it first if open.
pub fn dup2(old: i32, new: i32) -> Result<i32> {
    let old_fd = to_fd(old)?;
    if old == new {
        FD_TABLE.read().entry(old_fd)?;
        return Ok(new);
    }
    let displaced = FD_TABLE.write().dup_to(old_fd, to_fd(new)?, false)?;
    if displaced.is_some() {
        debug!("dup2: closed fd {} to make room", new);
    }
    Ok(new)
}

/// Like [`dup2`], but `old == new` is an error and `O_CLOEXEC` may be set.
pub fn dup3(old: i32, new: i32, flags: u32) -> Result<i32> {
    let flags = OpenFlags::from_bits(flags).ok_or(Errno::Einval)?;
    if !(flags - OpenFlags::CLOEXEC).is_empty() || old == new {
        return Err(Errno::Einval);
    }
    let displaced =
        FD_TABLE
            .write()
            .dup_to(to_fd(old)?, to_fd(new)?, flags.contains(OpenFlags::CLOEXEC))?;
    drop(displaced);
    Ok(new)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory file that records every byte written to it.
    struct Sink(spin::Mutex<alloc::vec::Vec<u8>>);

    impl FileLike for Sink {
        fn kind(&self) -> FileKind {
            FileKind::Regular
        }

        fn read(&self, buf: &mut [u8]) -> Result<usize> {
            let data = self.0.lock();
            let n = data.len().min(buf.len());
            buf[..n].copy_from_slice(&data[..n]);
            Ok(n)
        }

        fn write(&self, buf: &[u8]) -> Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }
    }

    fn sink() -> Arc<Sink> {
        Arc::new(Sink(spin::Mutex::new(alloc::vec::Vec::new())))
    }

    #[test]
    fn test_stdio_directions() {
        assert_eq!(write(1, b"hello\n"), Ok(6));
        assert_eq!(write(2, b"oops\n"), Ok(5));
        let mut buf = [0u8; 8];
        assert_eq!(read(1, &mut buf), Err(Errno::Ebadf));
        assert_eq!(write(0, b"x"), Err(Errno::Ebadf));
    }

    #[test]
    fn test_bad_descriptors() {
        let mut buf = [0u8; 4];
        assert_eq!(read(-1, &mut buf), Err(Errno::Ebadf));
        assert_eq!(write(1_000_000, b"x"), Err(Errno::Ebadf));
        assert_eq!(close(-5), Err(Errno::Ebadf));
        assert_eq!(dup(-1), Err(Errno::Ebadf));
    }

    #[test]
    fn test_dup_and_close() {
        let file = sink();
        let fd = add_file(file.clone(), false).unwrap();
        let copy = dup(fd).unwrap();
        assert_ne!(fd, copy);

        close(fd).unwrap();
        assert_eq!(write(copy, b"still open"), Ok(10));
        assert_eq!(&*file.0.lock(), b"still open");
        close(copy).unwrap();
        assert_eq!(Arc::strong_count(&file), 1);
    }

    #[test]
    fn test_dup2_semantics() {
        let first = sink();
        let second = sink();
        let a = add_file(first.clone(), false).unwrap();
        let b = add_file(second.clone(), false).unwrap();

        assert_eq!(dup2(a, a), Ok(a));
        assert_eq!(dup2(a, b), Ok(b));
        // The object previously on `b` is no longer referenced by the table.
        assert_eq!(Arc::strong_count(&second), 1);
        write(b, b"via b").unwrap();
        assert_eq!(&*first.0.lock(), b"via b");

        assert_eq!(dup2(a, -1), Err(Errno::Ebadf));
        assert_eq!(dup2(-1, a), Err(Errno::Ebadf));
        close(a).unwrap();
        close(b).unwrap();
    }

    #[test]
    fn test_dup3_semantics() {
        let a = add_file(sink(), false).unwrap();
        let b = add_file(sink(), false).unwrap();

        assert_eq!(dup3(a, a, 0), Err(Errno::Einval));
        assert_eq!(dup3(a, b, OpenFlags::NONBLOCK.bits()), Err(Errno::Einval));
        assert_eq!(dup3(a, b, OpenFlags::CLOEXEC.bits()), Ok(b));
        assert_eq!(is_cloexec(b), Ok(true));
        assert_eq!(dup2(a, b), Ok(b));
        assert_eq!(is_cloexec(b), Ok(false));

        close(a).unwrap();
        close(b).unwrap();
    }

    #[test]
    fn test_zero_length_io() {
        let fd = add_file(sink(), false).unwrap();
        assert_eq!(write(fd, b""), Ok(0));
        assert_eq!(read(fd, &mut []), Ok(0));
        close(fd).unwrap();
    }
}
