//! File Descriptor Table
//!
//! Maps small integers to open file objects.
//!
//! # Design
//! - Slots grow on demand up to `FILE_LIMIT`
//! - New descriptors always take the lowest free slot
//! - Duplicates share the same `Arc<dyn FileLike>`; the object is dropped
//!   when its last descriptor is closed
//! - The close-on-exec flag belongs to the slot, not the object

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::config::FILE_LIMIT;
use crate::errno::{Errno, Result};

use super::file::FileLike;
use super::stdio::{Stderr, Stdin, Stdout};

/// A descriptor number known to be inside the table's range.
///
/// This is a newtype to prevent using arbitrary integers as slot indices.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct Fd(u32);

impl Fd {
    /// Create a descriptor.
    ///
    /// Returns None if the number is negative or beyond `FILE_LIMIT`.
    #[inline]
    pub fn new(raw: i32) -> Option<Self> {
        let index = u32::try_from(raw).ok()?;
        if (index as usize) < FILE_LIMIT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the index value.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The descriptor as a C `int`.
    #[inline]
    pub const fn as_raw(self) -> i32 {
        self.0 as i32
    }

    /// Standard input.
    pub const STDIN: Self = Self(0);

    /// Standard output.
    pub const STDOUT: Self = Self(1);

    /// Standard error.
    pub const STDERR: Self = Self(2);
}

/// One occupied slot.
#[derive(Clone)]
pub struct FdEntry {
    pub file: Arc<dyn FileLike>,
    pub cloexec: bool,
}

impl FdEntry {
    pub fn new(file: Arc<dyn FileLike>, cloexec: bool) -> Self {
        Self { file, cloexec }
    }
}

/// Descriptor table of the process.
pub struct FdTable {
    /// Sparse slots (None = free).
    slots: Vec<Option<FdEntry>>,
    limit: usize,
}

impl FdTable {
    /// Create an empty table holding at most `limit` descriptors.
    pub const fn new(limit: usize) -> Self {
        Self {
            slots: Vec::new(),
            limit,
        }
    }

    /// Create a table with stdin/stdout/stderr on 0/1/2.
    pub fn with_stdio() -> Self {
        let mut table = Self::new(FILE_LIMIT);
        table.slots.push(Some(FdEntry::new(Arc::new(Stdin), false)));
        table.slots.push(Some(FdEntry::new(Arc::new(Stdout), false)));
        table.slots.push(Some(FdEntry::new(Arc::new(Stderr), false)));
        table
    }

    fn check_range(&self, fd: Fd) -> Result<()> {
        if fd.index() < self.limit {
            Ok(())
        } else {
            Err(Errno::Ebadf)
        }
    }

    /// Look up the entry in a slot.
    pub fn entry(&self, fd: Fd) -> Result<&FdEntry> {
        self.slots
            .get(fd.index())
            .and_then(Option::as_ref)
            .ok_or(Errno::Ebadf)
    }

    /// Look up the file object behind a descriptor.
    pub fn get(&self, fd: Fd) -> Result<Arc<dyn FileLike>> {
        self.entry(fd).map(|entry| entry.file.clone())
    }

    /// Find the lowest free slot >= `start_from`.
    pub fn find_free(&self, start_from: usize) -> Option<Fd> {
        let end = self.limit.min(FILE_LIMIT);
        (start_from..end)
            .find(|&i| self.slots.get(i).map_or(true, Option::is_none))
            .map(|i| Fd(i as u32))
    }

    /// Install an entry in the lowest free slot.
    pub fn alloc(&mut self, entry: FdEntry) -> Result<Fd> {
        let fd = self.find_free(0).ok_or(Errno::Emfile)?;
        self.slots_upto(fd)[fd.index()] = Some(entry);
        Ok(fd)
    }

    /// Install an entry at a fixed slot, returning what was there.
    pub fn replace(&mut self, fd: Fd, entry: FdEntry) -> Result<Option<FdEntry>> {
        self.check_range(fd)?;
        Ok(self.slots_upto(fd)[fd.index()].replace(entry))
    }

    /// Empty a slot, returning the entry it held.
    pub fn close(&mut self, fd: Fd) -> Result<FdEntry> {
        let entry = self
            .slots
            .get_mut(fd.index())
            .and_then(Option::take)
            .ok_or(Errno::Ebadf)?;
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        Ok(entry)
    }

    /// Duplicate onto the lowest free slot. The copy never has close-on-exec.
    pub fn dup(&mut self, old: Fd) -> Result<Fd> {
        let file = self.get(old)?;
        self.alloc(FdEntry::new(file, false))
    }

    /// Duplicate onto `new`, closing whatever `new` held.
    ///
    /// Returns the displaced entry so the caller can drop it outside the
    /// table lock.
    pub fn dup_to(&mut self, old: Fd, new: Fd, cloexec: bool) -> Result<Option<FdEntry>> {
        let file = self.get(old)?;
        self.replace(new, FdEntry::new(file, cloexec))
    }

    /// Number of open descriptors.
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Grow the slot vector so that `fd` is addressable.
    fn slots_upto(&mut self, fd: Fd) -> &mut Vec<Option<FdEntry>> {
        if self.slots.len() <= fd.index() {
            self.slots.resize_with(fd.index() + 1, || None);
        }
        &mut self.slots
    }
}

impl Default for FdTable {
    fn default() -> Self {
        Self::with_stdio()
    }
}
