//! Open file-system files.

use alloc::sync::Arc;

use spin::Mutex;

use crate::errno::{Errno, Result};
use crate::fd::{FileKind, FileLike, OpenFlags, SeekFrom};

use super::ramfs::{Node, NodeType};

/// A file-system node opened through a descriptor.
pub struct RamFile {
    node: Arc<Node>,
    flags: OpenFlags,
    pos: Mutex<u64>,
}

impl RamFile {
    pub fn new(node: Arc<Node>, flags: OpenFlags) -> Self {
        Self {
            node,
            flags,
            pos: Mutex::new(0),
        }
    }

    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }
}

impl FileLike for RamFile {
    fn kind(&self) -> FileKind {
        match self.node.kind() {
            NodeType::Dir => FileKind::Directory,
            _ => FileKind::Regular,
        }
    }

    fn read(&self, buf: &mut [u8]) -> Result<usize> {
        if !self.flags.readable() {
            return Err(Errno::Ebadf);
        }
        let mut pos = self.pos.lock();
        let n = self.node.read_at(*pos, buf)?;
        *pos += n as u64;
        Ok(n)
    }

    fn write(&self, buf: &[u8]) -> Result<usize> {
        if !self.flags.writable() {
            return Err(Errno::Ebadf);
        }
        let mut pos = self.pos.lock();
        if self.flags.contains(OpenFlags::APPEND) {
            *pos = self.node.append(buf)?;
            return Ok(buf.len());
        }
        let n = self.node.write_at(*pos, buf)?;
        *pos += n as u64;
        Ok(n)
    }

    fn seek(&self, target: SeekFrom) -> Result<u64> {
        let mut pos = self.pos.lock();
        let base = match target {
            SeekFrom::Start(offset) => {
                *pos = offset;
                return Ok(offset);
            }
            SeekFrom::Current(_) => *pos,
            SeekFrom::End(_) => match self.node.kind() {
                NodeType::Dir => 0,
                _ => self.node.len()?,
            },
        };
        let delta = match target {
            SeekFrom::Current(delta) | SeekFrom::End(delta) => delta,
            SeekFrom::Start(_) => 0,
        };
        let new = base
            .checked_add_signed(delta)
            .filter(|&new| i64::try_from(new).is_ok())
            .ok_or(Errno::Einval)?;
        *pos = new;
        Ok(new)
    }

    fn truncate(&self, len: u64) -> Result<()> {
        if !self.flags.writable() {
            return Err(Errno::Einval);
        }
        self.node.truncate(len)
    }

    fn sync(&self) -> Result<()> {
        Ok(())
    }

    fn chown(&self, uid: Option<u32>, gid: Option<u32>, euid: u32) -> Result<()> {
        self.node.chown(uid, gid, euid)
    }
}
