//! Pipes
//!
//! A fixed-capacity byte ring shared by one read end and one write end.
//!
//! # Semantics
//! - A read returns as soon as any byte is available, and returns 0 once
//!   the write end is gone and the ring is drained
//! - A blocking write waits for room until every byte is queued
//! - Writing with the read end gone fails with `EPIPE`
//! - In non-blocking mode waits become `EAGAIN`; a write that queued some
//!   bytes before filling the ring reports that partial count
//!
//! Waiting never holds the ring lock; the waiter yields to the platform
//! between attempts.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use log::trace;
use spin::Mutex;

use crate::config::PIPE_BUF_SIZE;
use crate::errno::{Errno, Result};
use crate::fd::{self, FileKind, FileLike, OpenFlags};
use crate::platform;

/// Byte ring buffer with head/tail indices.
struct RingBuffer {
    buf: [u8; PIPE_BUF_SIZE],
    head: usize,
    len: usize,
}

impl RingBuffer {
    const fn new() -> Self {
        Self {
            buf: [0; PIPE_BUF_SIZE],
            head: 0,
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn space(&self) -> usize {
        PIPE_BUF_SIZE - self.len
    }

    fn push(&mut self, data: &[u8]) -> usize {
        let n = data.len().min(self.space());
        for (i, &byte) in data[..n].iter().enumerate() {
            let slot = (self.head + self.len + i) % PIPE_BUF_SIZE;
            self.buf[slot] = byte;
        }
        self.len += n;
        n
    }

    fn pop(&mut self, out: &mut [u8]) -> usize {
        let n = out.len().min(self.len);
        for (i, byte) in out[..n].iter_mut().enumerate() {
            *byte = self.buf[(self.head + i) % PIPE_BUF_SIZE];
        }
        self.head = (self.head + n) % PIPE_BUF_SIZE;
        self.len -= n;
        n
    }
}

struct Shared {
    ring: Mutex<RingBuffer>,
    reader_closed: AtomicBool,
    writer_closed: AtomicBool,
}

/// One end of a pipe.
pub struct PipeEnd {
    shared: Arc<Shared>,
    readable: bool,
    nonblocking: AtomicBool,
}

impl PipeEnd {
    /// Create a connected `(read end, write end)` pair.
    pub fn pair(nonblocking: bool) -> (Self, Self) {
        let shared = Arc::new(Shared {
            ring: Mutex::new(RingBuffer::new()),
            reader_closed: AtomicBool::new(false),
            writer_closed: AtomicBool::new(false),
        });
        let end = |readable| Self {
            shared: shared.clone(),
            readable,
            nonblocking: AtomicBool::new(nonblocking),
        };
        (end(true), end(false))
    }

    fn is_nonblocking(&self) -> bool {
        self.nonblocking.load(Ordering::Acquire)
    }

    fn peer_closed(&self) -> bool {
        if self.readable {
            self.shared.writer_closed.load(Ordering::Acquire)
        } else {
            self.shared.reader_closed.load(Ordering::Acquire)
        }
    }
}

impl FileLike for PipeEnd {
    fn kind(&self) -> FileKind {
        FileKind::Pipe
    }

    fn read(&self, buf: &mut [u8]) -> Result<usize> {
        if !self.readable {
            return Err(Errno::Ebadf);
        }
        loop {
            {
                let mut ring = self.shared.ring.lock();
                if !ring.is_empty() {
                    return Ok(ring.pop(buf));
                }
            }
            // Check after the ring: a writer that queued data and then
            // closed must not look like end-of-file.
            if self.peer_closed() && self.shared.ring.lock().is_empty() {
                return Ok(0);
            }
            if self.is_nonblocking() {
                return Err(Errno::Eagain);
            }
            platform::current().yield_now();
        }
    }

    fn write(&self, buf: &[u8]) -> Result<usize> {
        if self.readable {
            return Err(Errno::Ebadf);
        }
        let mut written = 0;
        while written < buf.len() {
            if self.peer_closed() {
                return if written > 0 { Ok(written) } else { Err(Errno::Epipe) };
            }
            let n = self.shared.ring.lock().push(&buf[written..]);
            written += n;
            if n == 0 {
                if self.is_nonblocking() {
                    return if written > 0 { Ok(written) } else { Err(Errno::Eagain) };
                }
                platform::current().yield_now();
            }
        }
        Ok(written)
    }

    fn set_nonblocking(&self, nonblocking: bool) {
        self.nonblocking.store(nonblocking, Ordering::Release);
    }
}

impl Drop for PipeEnd {
    fn drop(&mut self) {
        let flag = if self.readable {
            &self.shared.reader_closed
        } else {
            &self.shared.writer_closed
        };
        flag.store(true, Ordering::Release);
    }
}

/// Create a pipe and install both ends, returning `[read_fd, write_fd]`.
///
/// Only `O_CLOEXEC` and `O_NONBLOCK` are accepted in `flags`.
pub fn pipe2(flags: u32) -> Result<[i32; 2]> {
    let flags = OpenFlags::from_bits(flags).ok_or(Errno::Einval)?;
    if !(flags - (OpenFlags::CLOEXEC | OpenFlags::NONBLOCK)).is_empty() {
        return Err(Errno::Einval);
    }
    let cloexec = flags.contains(OpenFlags::CLOEXEC);
    let (reader, writer) = PipeEnd::pair(flags.contains(OpenFlags::NONBLOCK));

    let read_fd = fd::add_file(Arc::new(reader), cloexec)?;
    let write_fd = match fd::add_file(Arc::new(writer), cloexec) {
        Ok(fd) => fd,
        Err(e) => {
            let _ = fd::close(read_fd);
            return Err(e);
        }
    };
    trace!("pipe2 => [{}, {}]", read_fd, write_fd);
    Ok([read_fd, write_fd])
}

/// Create a blocking pipe.
pub fn pipe() -> Result<[i32; 2]> {
    pipe2(0)
}
