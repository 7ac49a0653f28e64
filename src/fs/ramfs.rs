//! In-Memory File System
//!
//! A tree of directories, regular files and symbolic links held entirely
//! in the heap.
//!
//! # Design
//! - Paths are normalised lexically against the current directory, then
//!   walked from the root one component at a time
//! - A symbolic link met on the way restarts the walk on the rewritten
//!   path; more than `SYMLOOP_MAX` restarts fail with `ELOOP`
//! - Every node carries permission bits, an owner and a group
//! - Locks are taken parent before child, never the other way round

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use spin::Mutex;

use crate::config::{PHYS_MEMORY_SIZE, SYMLOOP_MAX};
use crate::errno::{Errno, Result};
use crate::fd::OpenFlags;

use super::path;

/// Longest single path component.
pub const NAME_MAX: usize = 255;

/// Longest path accepted by any operation, including the terminating NUL.
pub const PATH_MAX: usize = 4096;

/// Largest size a regular file may grow to.
pub const MAX_FILE_SIZE: u64 = PHYS_MEMORY_SIZE as u64;

/// Permission bits of the `access` mode argument.
pub mod access {
    pub const F_OK: i32 = 0;
    pub const X_OK: i32 = 1;
    pub const W_OK: i32 = 2;
    pub const R_OK: i32 = 4;
}

/// Kind of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeType {
    Dir,
    File,
    Symlink,
}

/// Snapshot of a node's attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub kind: NodeType,
    /// Permission bits (`0o7777` mask).
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    /// Bytes for files, target length for links, entry count for directories.
    pub size: u64,
}

#[derive(Clone, Copy, Debug)]
struct Attr {
    mode: u32,
    uid: u32,
    gid: u32,
}

enum Content {
    Dir(Mutex<BTreeMap<String, Arc<Node>>>),
    File(Mutex<Vec<u8>>),
    Symlink(String),
}

/// A node in the tree.
pub struct Node {
    attr: Mutex<Attr>,
    content: Content,
}

impl Node {
    fn new(content: Content, mode: u32, uid: u32, gid: u32) -> Arc<Self> {
        Arc::new(Self {
            attr: Mutex::new(Attr {
                mode: mode & 0o7777,
                uid,
                gid,
            }),
            content,
        })
    }

    pub fn kind(&self) -> NodeType {
        match self.content {
            Content::Dir(_) => NodeType::Dir,
            Content::File(_) => NodeType::File,
            Content::Symlink(_) => NodeType::Symlink,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == NodeType::Dir
    }

    pub fn metadata(&self) -> Metadata {
        let attr = *self.attr.lock();
        let size = match &self.content {
            Content::Dir(entries) => entries.lock().len() as u64,
            Content::File(data) => data.lock().len() as u64,
            Content::Symlink(target) => target.len() as u64,
        };
        Metadata {
            kind: self.kind(),
            mode: attr.mode,
            uid: attr.uid,
            gid: attr.gid,
            size,
        }
    }

    /// Change owner and/or group on behalf of `euid`; `None` keeps the
    /// current id.
    ///
    /// # Security
    /// - Root may change both ids freely
    /// - Anyone else must own the node and may only change its group
    /// - Denied requests fail with `EPERM` and change nothing
    pub fn chown(&self, uid: Option<u32>, gid: Option<u32>, euid: u32) -> Result<()> {
        let mut attr = self.attr.lock();
        if euid != 0 {
            let gives_away = uid.is_some_and(|uid| uid != attr.uid);
            if attr.uid != euid || gives_away {
                return Err(Errno::Eperm);
            }
        }
        if let Some(uid) = uid {
            attr.uid = uid;
        }
        if let Some(gid) = gid {
            attr.gid = gid;
        }
        Ok(())
    }

    fn file_data(&self) -> Result<&Mutex<Vec<u8>>> {
        match &self.content {
            Content::File(data) => Ok(data),
            Content::Dir(_) => Err(Errno::Eisdir),
            Content::Symlink(_) => Err(Errno::Einval),
        }
    }

    fn entries(&self) -> Result<&Mutex<BTreeMap<String, Arc<Node>>>> {
        match &self.content {
            Content::Dir(entries) => Ok(entries),
            _ => Err(Errno::Enotdir),
        }
    }

    fn child(&self, name: &str) -> Result<Arc<Node>> {
        self.entries()?
            .lock()
            .get(name)
            .cloned()
            .ok_or(Errno::Enoent)
    }

    /// Read file bytes starting at `offset`.
    pub fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize> {
        let data = self.file_data()?.lock();
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(data.len());
        let n = buf.len().min(data.len() - start);
        buf[..n].copy_from_slice(&data[start..start + n]);
        Ok(n)
    }

    /// Write file bytes at `offset`, zero-filling any gap.
    pub fn write_at(&self, offset: u64, buf: &[u8]) -> Result<usize> {
        let mut data = self.file_data()?.lock();
        let end = offset
            .checked_add(buf.len() as u64)
            .filter(|&end| end <= MAX_FILE_SIZE)
            .ok_or(Errno::Efbig)?;
        let (start, end) = (offset as usize, end as usize);
        if data.len() < end {
            data.resize(end, 0);
        }
        data[start..end].copy_from_slice(buf);
        Ok(buf.len())
    }

    /// Append bytes, returning the new end of file.
    pub fn append(&self, buf: &[u8]) -> Result<u64> {
        let mut data = self.file_data()?.lock();
        let end = data.len() as u64 + buf.len() as u64;
        if end > MAX_FILE_SIZE {
            return Err(Errno::Efbig);
        }
        data.extend_from_slice(buf);
        Ok(end)
    }

    /// Truncate or zero-extend to `len` bytes.
    pub fn truncate(&self, len: u64) -> Result<()> {
        if len > MAX_FILE_SIZE {
            return Err(Errno::Efbig);
        }
        self.file_data()?.lock().resize(len as usize, 0);
        Ok(())
    }

    /// Size of a regular file.
    pub fn len(&self) -> Result<u64> {
        Ok(self.file_data()?.lock().len() as u64)
    }

    /// Whether `euid` may access the node with the `access` bits in `want`.
    ///
    /// Root may always read and write, and may execute anything with at
    /// least one execute bit (directories are always searchable). Other
    /// users get the owner bits when they own the node, the "other" bits
    /// otherwise.
    pub fn permits(&self, want: i32, euid: u32) -> bool {
        let attr = *self.attr.lock();
        if euid == 0 {
            return want & access::X_OK == 0 || self.is_dir() || attr.mode & 0o111 != 0;
        }
        let granted = if attr.uid == euid {
            (attr.mode >> 6) & 0o7
        } else {
            attr.mode & 0o7
        };
        (want as u32) & !granted == 0
    }
}

/// Outcome of one walk over a path.
enum Walk {
    Found(Arc<Node>),
    /// A symbolic link was met; walk again from the root on this path.
    Redirect(String),
}

/// The file system.
pub struct RamFs {
    root: Arc<Node>,
    cwd: Mutex<String>,
}

impl RamFs {
    /// Create a file system holding `/` and `/tmp`, both owned by root.
    pub fn new() -> Self {
        let root = Node::new(Content::Dir(Mutex::new(BTreeMap::new())), 0o755, 0, 0);
        let tmp = Node::new(Content::Dir(Mutex::new(BTreeMap::new())), 0o1777, 0, 0);
        if let Content::Dir(entries) = &root.content {
            entries.lock().insert(String::from("tmp"), tmp);
        }
        Self {
            root,
            cwd: Mutex::new(String::from("/")),
        }
    }

    /// Current working directory.
    pub fn cwd(&self) -> String {
        self.cwd.lock().clone()
    }

    /// Make `path` absolute and normalised.
    pub fn absolute(&self, path: &str) -> Result<String> {
        if path.is_empty() {
            return Err(Errno::Enoent);
        }
        if path.len() >= PATH_MAX {
            return Err(Errno::Enametoolong);
        }
        let cwd = self.cwd.lock();
        Ok(path::normalize(&cwd, path))
    }

    fn walk(&self, abs: &str, follow_last: bool) -> Result<Walk> {
        let parts: Vec<&str> = path::components(abs).collect();
        let mut node = self.root.clone();
        for (i, name) in parts.iter().enumerate() {
            let child = node.child(name)?;
            let last = i + 1 == parts.len();
            if let Content::Symlink(target) = &child.content {
                if !last || follow_last {
                    let dir = path::join(&parts[..i]);
                    let mut next = path::normalize(&dir, target);
                    for rest in &parts[i + 1..] {
                        next.push('/');
                        next.push_str(rest);
                    }
                    return Ok(Walk::Redirect(next));
                }
            }
            node = child;
        }
        Ok(Walk::Found(node))
    }

    /// Resolve a path to its node and the link-free path that reached it.
    pub fn resolve(&self, path: &str, follow_last: bool) -> Result<(Arc<Node>, String)> {
        let mut current = self.absolute(path)?;
        for _ in 0..=SYMLOOP_MAX {
            match self.walk(&current, follow_last)? {
                Walk::Found(node) => return Ok((node, current)),
                Walk::Redirect(next) => current = next,
            }
        }
        Err(Errno::Eloop)
    }

    /// Resolve a path to its node.
    pub fn lookup(&self, path: &str, follow_last: bool) -> Result<Arc<Node>> {
        self.resolve(path, follow_last).map(|(node, _)| node)
    }

    /// Resolve the directory holding the last component of `path`.
    ///
    /// Returns `None` for the root, which has no parent entry.
    fn lookup_parent(&self, path: &str) -> Result<Option<(Arc<Node>, String)>> {
        let abs = self.absolute(path)?;
        let Some((parent, name)) = path::split_parent(&abs) else {
            return Ok(None);
        };
        let dir = self.lookup(parent, true)?;
        if !dir.is_dir() {
            return Err(Errno::Enotdir);
        }
        Ok(Some((dir, name.to_string())))
    }

    fn insert(&self, path: &str, content: Content, mode: u32, owner: (u32, u32)) -> Result<Arc<Node>> {
        let (dir, name) = self.lookup_parent(path)?.ok_or(Errno::Eexist)?;
        if name.len() > NAME_MAX {
            return Err(Errno::Enametoolong);
        }
        let mut entries = dir.entries()?.lock();
        if entries.contains_key(&name) {
            return Err(Errno::Eexist);
        }
        let node = Node::new(content, mode, owner.0, owner.1);
        entries.insert(name, node.clone());
        Ok(node)
    }

    /// Create a directory.
    pub fn mkdir(&self, path: &str, mode: u32, owner: (u32, u32)) -> Result<Arc<Node>> {
        self.insert(path, Content::Dir(Mutex::new(BTreeMap::new())), mode, owner)
    }

    /// Create an empty regular file.
    pub fn create_file(&self, path: &str, mode: u32, owner: (u32, u32)) -> Result<Arc<Node>> {
        self.insert(path, Content::File(Mutex::new(Vec::new())), mode, owner)
    }

    /// Create a symbolic link at `path` pointing to `target`.
    pub fn symlink(&self, target: &str, path: &str, owner: (u32, u32)) -> Result<Arc<Node>> {
        if target.is_empty() {
            return Err(Errno::Enoent);
        }
        if target.len() >= PATH_MAX {
            return Err(Errno::Enametoolong);
        }
        self.insert(path, Content::Symlink(target.to_string()), 0o777, owner)
    }

    /// Open (and possibly create) a node according to `flags`.
    pub fn open(&self, path: &str, flags: OpenFlags, mode: u32, euid: u32) -> Result<Arc<Node>> {
        let node = match self.lookup(path, true) {
            Ok(node) => {
                if flags.contains(OpenFlags::CREAT | OpenFlags::EXCL) {
                    return Err(Errno::Eexist);
                }
                node
            }
            Err(Errno::Enoent) if flags.contains(OpenFlags::CREAT) => {
                if flags.contains(OpenFlags::DIRECTORY) {
                    return Err(Errno::Einval);
                }
                // A fresh file is opened with the access the caller asked for,
                // whatever permission bits it was created with.
                return self.create_file(path, mode, (euid, euid));
            }
            Err(e) => return Err(e),
        };

        if node.is_dir() {
            if flags.writable() || flags.contains(OpenFlags::TRUNC) {
                return Err(Errno::Eisdir);
            }
        } else if flags.contains(OpenFlags::DIRECTORY) {
            return Err(Errno::Enotdir);
        }

        let mut want = 0;
        if flags.readable() {
            want |= access::R_OK;
        }
        if flags.writable() {
            want |= access::W_OK;
        }
        if !node.permits(want, euid) {
            return Err(Errno::Eacces);
        }

        if flags.contains(OpenFlags::TRUNC) && flags.writable() {
            node.truncate(0)?;
        }
        Ok(node)
    }

    /// Remove a file or symbolic link.
    pub fn unlink(&self, path: &str) -> Result<()> {
        let (dir, name) = self.lookup_parent(path)?.ok_or(Errno::Eisdir)?;
        let mut entries = dir.entries()?.lock();
        let node = entries.get(&name).ok_or(Errno::Enoent)?;
        if node.is_dir() {
            return Err(Errno::Eisdir);
        }
        entries.remove(&name);
        Ok(())
    }

    /// Remove an empty directory.
    pub fn rmdir(&self, path: &str) -> Result<()> {
        let last = path.trim_end_matches('/').rsplit('/').next();
        if last == Some(".") {
            return Err(Errno::Einval);
        }
        if last == Some("..") {
            return Err(Errno::Enotempty);
        }
        let (dir, name) = self.lookup_parent(path)?.ok_or(Errno::Ebusy)?;
        let mut entries = dir.entries()?.lock();
        let node = entries.get(&name).ok_or(Errno::Enoent)?;
        if !node.entries()?.lock().is_empty() {
            return Err(Errno::Enotempty);
        }
        entries.remove(&name);
        Ok(())
    }

    /// Target of a symbolic link.
    pub fn readlink(&self, path: &str) -> Result<String> {
        let node = self.lookup(path, false)?;
        match &node.content {
            Content::Symlink(target) => Ok(target.clone()),
            _ => Err(Errno::Einval),
        }
    }

    /// Check whether `euid` may access `path` with the `access` bits in `mode`.
    pub fn access(&self, path: &str, mode: i32, euid: u32) -> Result<()> {
        if mode & !(access::R_OK | access::W_OK | access::X_OK) != 0 {
            return Err(Errno::Einval);
        }
        let node = self.lookup(path, true)?;
        if mode == access::F_OK || node.permits(mode, euid) {
            Ok(())
        } else {
            Err(Errno::Eacces)
        }
    }

    /// Change the current working directory.
    pub fn chdir(&self, path: &str) -> Result<()> {
        let (node, real) = self.resolve(path, true)?;
        if !node.is_dir() {
            return Err(Errno::Enotdir);
        }
        *self.cwd.lock() = real;
        Ok(())
    }

    /// Attributes of the node at `path`.
    pub fn metadata(&self, path: &str, follow_last: bool) -> Result<Metadata> {
        Ok(self.lookup(path, follow_last)?.metadata())
    }
}

impl Default for RamFs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: (u32, u32) = (0, 0);

    fn fs_with_tree() -> RamFs {
        let fs = RamFs::new();
        fs.mkdir("/a", 0o755, ROOT).unwrap();
        fs.mkdir("/a/b", 0o755, ROOT).unwrap();
        fs.create_file("/a/b/file", 0o644, ROOT).unwrap();
        fs.symlink("b", "/a/link", ROOT).unwrap();
        fs.symlink("/a/b/file", "/abs", ROOT).unwrap();
        fs
    }

    #[test]
    fn test_lookup_follows_links() {
        let fs = fs_with_tree();
        assert_eq!(fs.lookup("/a/link/file", true).unwrap().kind(), NodeType::File);
        assert_eq!(fs.lookup("/abs", true).unwrap().kind(), NodeType::File);
        assert_eq!(fs.lookup("/abs", false).unwrap().kind(), NodeType::Symlink);
        assert_eq!(fs.lookup("/a/missing", true).err(), Some(Errno::Enoent));
        assert_eq!(fs.lookup("/a/b/file/x", true).err(), Some(Errno::Enotdir));
        assert_eq!(fs.lookup("", true).err(), Some(Errno::Enoent));
    }

    #[test]
    fn test_symlink_loop() {
        let fs = RamFs::new();
        fs.symlink("/loop2", "/loop1", ROOT).unwrap();
        fs.symlink("/loop1", "/loop2", ROOT).unwrap();
        assert_eq!(fs.lookup("/loop1", true).err(), Some(Errno::Eloop));
        // The link itself is still reachable.
        assert_eq!(fs.readlink("/loop1").unwrap(), "/loop2");
    }

    #[test]
    fn test_relative_paths_and_chdir() {
        let fs = fs_with_tree();
        assert_eq!(fs.cwd(), "/");
        fs.chdir("a/link").unwrap();
        assert_eq!(fs.cwd(), "/a/b");
        assert_eq!(fs.lookup("file", true).unwrap().kind(), NodeType::File);
        assert_eq!(fs.chdir("file").err(), Some(Errno::Enotdir));
        fs.chdir("..").unwrap();
        assert_eq!(fs.cwd(), "/a");
    }

    #[test]
    fn test_readlink() {
        let fs = fs_with_tree();
        assert_eq!(fs.readlink("/a/link").unwrap(), "b");
        assert_eq!(fs.readlink("/a/b").err(), Some(Errno::Einval));
        assert_eq!(fs.readlink("/nope").err(), Some(Errno::Enoent));
    }

    #[test]
    fn test_unlink() {
        let fs = fs_with_tree();
        assert_eq!(fs.unlink("/a/b").err(), Some(Errno::Eisdir));
        assert_eq!(fs.unlink("/").err(), Some(Errno::Eisdir));
        // Removing the link leaves the target alone.
        fs.unlink("/abs").unwrap();
        assert!(fs.lookup("/a/b/file", true).is_ok());
        fs.unlink("/a/link/file").unwrap();
        assert_eq!(fs.unlink("/a/b/file").err(), Some(Errno::Enoent));
    }

    #[test]
    fn test_rmdir() {
        let fs = fs_with_tree();
        assert_eq!(fs.rmdir("/").err(), Some(Errno::Ebusy));
        assert_eq!(fs.rmdir("/a/b").err(), Some(Errno::Enotempty));
        assert_eq!(fs.rmdir("/a/b/file").err(), Some(Errno::Enotdir));
        assert_eq!(fs.rmdir("/a/link").err(), Some(Errno::Enotdir));
        assert_eq!(fs.rmdir("/a/b/.").err(), Some(Errno::Einval));
        fs.unlink("/a/b/file").unwrap();
        fs.rmdir("/a/b/").unwrap();
        assert_eq!(fs.lookup("/a/b", true).err(), Some(Errno::Enoent));
    }

    #[test]
    fn test_create_conflicts() {
        let fs = fs_with_tree();
        assert_eq!(fs.mkdir("/a", 0o755, ROOT).err(), Some(Errno::Eexist));
        assert_eq!(fs.mkdir("/", 0o755, ROOT).err(), Some(Errno::Eexist));
        assert_eq!(fs.create_file("/nodir/x", 0o644, ROOT).err(), Some(Errno::Enoent));
        assert_eq!(fs.create_file("/a/b/file/x", 0o644, ROOT).err(), Some(Errno::Enotdir));
        let long = "x".repeat(NAME_MAX + 1);
        assert_eq!(
            fs.create_file(&alloc::format!("/{}", long), 0o644, ROOT).err(),
            Some(Errno::Enametoolong)
        );
        assert_eq!(fs.symlink("", "/empty", ROOT).err(), Some(Errno::Enoent));
    }

    #[test]
    fn test_open_flags() {
        let fs = fs_with_tree();
        let created = fs.open("/a/new", OpenFlags::CREAT | OpenFlags::WRONLY, 0o600, 0);
        assert!(created.is_ok());
        assert_eq!(
            fs.open("/a/new", OpenFlags::CREAT | OpenFlags::EXCL, 0o600, 0).err(),
            Some(Errno::Eexist)
        );
        assert_eq!(fs.open("/a", OpenFlags::RDWR, 0, 0).err(), Some(Errno::Eisdir));
        assert!(fs.open("/a", OpenFlags::RDONLY, 0, 0).is_ok());
        assert_eq!(
            fs.open("/a/new", OpenFlags::DIRECTORY, 0, 0).err(),
            Some(Errno::Enotdir)
        );
        assert_eq!(fs.open("/a/none", OpenFlags::RDONLY, 0, 0).err(), Some(Errno::Enoent));

        let node = fs.lookup("/a/new", true).unwrap();
        node.write_at(0, b"abc").unwrap();
        fs.open("/a/new", OpenFlags::WRONLY | OpenFlags::TRUNC, 0, 0).unwrap();
        assert_eq!(node.len(), Ok(0));
    }

    #[test]
    fn test_file_data() {
        let fs = fs_with_tree();
        let node = fs.lookup("/a/b/file", true).unwrap();
        assert_eq!(node.write_at(4, b"xy"), Ok(2));
        let mut buf = [0xffu8; 8];
        assert_eq!(node.read_at(0, &mut buf), Ok(6));
        assert_eq!(&buf[..6], b"\0\0\0\0xy");
        assert_eq!(node.read_at(100, &mut buf), Ok(0));
        assert_eq!(node.append(b"z"), Ok(7));
        node.truncate(2).unwrap();
        assert_eq!(node.metadata().size, 2);
        assert_eq!(node.write_at(MAX_FILE_SIZE, b"x"), Err(Errno::Efbig));

        let dir = fs.lookup("/a", true).unwrap();
        assert_eq!(dir.read_at(0, &mut buf), Err(Errno::Eisdir));
    }

    #[test]
    fn test_access_checks() {
        let fs = fs_with_tree();
        fs.create_file("/a/secret", 0o600, (1000, 1000)).unwrap();
        fs.create_file("/a/script", 0o755, ROOT).unwrap();

        assert!(fs.access("/a/secret", access::F_OK, 7).is_ok());
        assert!(fs.access("/a/secret", access::R_OK | access::W_OK, 1000).is_ok());
        assert_eq!(fs.access("/a/secret", access::R_OK, 7).err(), Some(Errno::Eacces));
        // Root bypasses read/write checks but needs an execute bit.
        assert!(fs.access("/a/secret", access::R_OK | access::W_OK, 0).is_ok());
        assert_eq!(fs.access("/a/secret", access::X_OK, 0).err(), Some(Errno::Eacces));
        assert!(fs.access("/a/script", access::X_OK, 0).is_ok());
        assert!(fs.access("/a/script", access::R_OK | access::X_OK, 7).is_ok());
        assert_eq!(fs.access("/a/script", access::W_OK, 7).err(), Some(Errno::Eacces));

        assert_eq!(fs.access("/a/secret", 8, 0).err(), Some(Errno::Einval));
        assert_eq!(fs.access("/a/none", access::F_OK, 0).err(), Some(Errno::Enoent));
        assert_eq!(
            fs.open("/a/secret", OpenFlags::RDONLY, 0, 7).err(),
            Some(Errno::Eacces)
        );
    }

    #[test]
    fn test_chown_keeps_unset_ids() {
        let fs = fs_with_tree();
        let node = fs.lookup("/a/b/file", true).unwrap();
        node.chown(Some(5), None, 0).unwrap();
        let meta = node.metadata();
        assert_eq!((meta.uid, meta.gid), (5, 0));
        node.chown(None, Some(9), 0).unwrap();
        assert_eq!(fs.metadata("/abs", true).unwrap().gid, 9);
        assert_eq!(fs.metadata("/abs", false).unwrap().kind, NodeType::Symlink);
    }

    #[test]
    fn test_chown_requires_ownership() {
        let fs = fs_with_tree();
        let node = fs.create_file("/a/theirs", 0o644, (1000, 1000)).unwrap();

        // Someone else's file: no id may change.
        assert_eq!(node.chown(Some(7), None, 7), Err(Errno::Eperm));
        assert_eq!(node.chown(None, Some(7), 7), Err(Errno::Eperm));
        assert_eq!(node.chown(Some(1000), None, 7), Err(Errno::Eperm));
        let meta = node.metadata();
        assert_eq!((meta.uid, meta.gid), (1000, 1000));
        assert!(!node.permits(access::W_OK, 7));

        // The owner may regroup but not give the file away.
        assert_eq!(node.chown(None, Some(20), 1000), Ok(()));
        assert_eq!(node.chown(Some(1000), None, 1000), Ok(()));
        assert_eq!(node.chown(Some(7), None, 1000), Err(Errno::Eperm));
        let meta = node.metadata();
        assert_eq!((meta.uid, meta.gid), (1000, 20));

        assert_eq!(node.chown(Some(7), Some(7), 0), Ok(()));
        assert!(node.permits(access::W_OK, 7));
    }
}
