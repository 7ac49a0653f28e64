//! Open File Objects
//!
//! Everything a descriptor can refer to implements [`FileLike`]: the
//! console streams, pipe ends and file-system files. Operations that make
//! no sense for a kind of object fall back to the POSIX error for it.

use bitflags::bitflags;

use crate::errno::{Errno, Result};

bitflags! {
    /// `open`/`pipe2`/`dup3` flags (Linux values).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        const WRONLY = 0o1;
        const RDWR = 0o2;
        const CREAT = 0o100;
        const EXCL = 0o200;
        const TRUNC = 0o1000;
        const APPEND = 0o2000;
        const NONBLOCK = 0o4000;
        const DIRECTORY = 0o200000;
        const CLOEXEC = 0o2000000;
    }
}

impl OpenFlags {
    /// `O_RDONLY` is the absence of both access bits.
    pub const RDONLY: Self = Self::empty();

    /// Whether the access mode allows reading.
    #[inline]
    pub fn readable(self) -> bool {
        !self.contains(Self::WRONLY)
    }

    /// Whether the access mode allows writing.
    #[inline]
    pub fn writable(self) -> bool {
        self.intersects(Self::WRONLY | Self::RDWR)
    }
}

/// Target of a seek.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeekFrom {
    Start(u64),
    Current(i64),
    End(i64),
}

/// What a descriptor refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Console,
    Pipe,
    Regular,
    Directory,
}

/// An open file object shared by every descriptor duplicated from it.
pub trait FileLike: Send + Sync {
    fn kind(&self) -> FileKind;

    fn read(&self, buf: &mut [u8]) -> Result<usize>;

    fn write(&self, buf: &[u8]) -> Result<usize>;

    /// Move the file offset, returning the new one.
    fn seek(&self, _pos: SeekFrom) -> Result<u64> {
        Err(Errno::Espipe)
    }

    /// Truncate or zero-extend to `len` bytes.
    fn truncate(&self, _len: u64) -> Result<()> {
        Err(Errno::Einval)
    }

    /// Flush to stable storage.
    fn sync(&self) -> Result<()> {
        Err(Errno::Einval)
    }

    /// Change owner and/or group on behalf of `euid`; `None` keeps the
    /// current id.
    fn chown(&self, _uid: Option<u32>, _gid: Option<u32>, _euid: u32) -> Result<()> {
        Err(Errno::Einval)
    }

    /// Switch between blocking and non-blocking I/O.
    fn set_nonblocking(&self, _nonblocking: bool) {}
}
