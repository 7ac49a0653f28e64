//! Console streams behind descriptors 0, 1 and 2.

use crate::errno::{Errno, Result};
use crate::platform;

use super::file::{FileKind, FileLike};

/// Standard input (read-only).
pub struct Stdin;

/// Standard output (write-only).
pub struct Stdout;

/// Standard error (write-only).
pub struct Stderr;

impl FileLike for Stdin {
    fn kind(&self) -> FileKind {
        FileKind::Console
    }

    /// Returns whatever input is pending; 0 means none.
    fn read(&self, buf: &mut [u8]) -> Result<usize> {
        Ok(platform::current().console_read(buf))
    }

    fn write(&self, _buf: &[u8]) -> Result<usize> {
        Err(Errno::Ebadf)
    }
}

fn console_write(buf: &[u8]) -> Result<usize> {
    let written = platform::current().console_write(buf);
    if written == 0 && !buf.is_empty() {
        return Err(Errno::Eio);
    }
    Ok(written)
}

impl FileLike for Stdout {
    fn kind(&self) -> FileKind {
        FileKind::Console
    }

    fn read(&self, _buf: &mut [u8]) -> Result<usize> {
        Err(Errno::Ebadf)
    }

    fn write(&self, buf: &[u8]) -> Result<usize> {
        console_write(buf)
    }
}

impl FileLike for Stderr {
    fn kind(&self) -> FileKind {
        FileKind::Console
    }

    fn read(&self, _buf: &mut [u8]) -> Result<usize> {
        Err(Errno::Ebadf)
    }

    fn write(&self, buf: &[u8]) -> Result<usize> {
        console_write(buf)
    }
}
