//! `fchown` and `access` as seen by an unprivileged process.

#![cfg(feature = "fs")]

mod common;

use axunistd::fd::{self, OpenFlags};
use axunistd::fs::{self, access};
use axunistd::{platform, Errno};

use common::FixedIdentity;

static USER: FixedIdentity = FixedIdentity::new(3, 7);

fn as_user() {
    // Every test installs the same platform; only the first call wins.
    platform::install(&USER);
}

#[test]
fn test_cannot_take_someone_elses_file() {
    as_user();
    fs::mkdir("/tmp/fchown_theirs", 0o755).unwrap();
    let path = "/tmp/fchown_theirs/file";
    fs::root().create_file(path, 0o644, (1000, 1000)).unwrap();

    let fd = fs::open(path, OpenFlags::RDONLY, 0).unwrap();
    assert_eq!(fs::access(path, access::W_OK), Err(Errno::Eacces));
    assert_eq!(fs::fchown(fd, 7, u32::MAX), Err(Errno::Eperm));
    assert_eq!(fs::fchown(fd, u32::MAX, 7), Err(Errno::Eperm));
    assert_eq!(fs::access(path, access::W_OK), Err(Errno::Eacces));

    let meta = fs::metadata(path).unwrap();
    assert_eq!((meta.uid, meta.gid), (1000, 1000));
    fd::close(fd).unwrap();
}

#[test]
fn test_owner_may_only_regroup() {
    as_user();
    fs::mkdir("/tmp/fchown_mine", 0o755).unwrap();
    let path = "/tmp/fchown_mine/file";
    let fd = fs::open(path, OpenFlags::CREAT | OpenFlags::RDWR, 0o600).unwrap();
    assert_eq!(fs::metadata(path).unwrap().uid, 7);

    assert_eq!(fs::fchown(fd, u32::MAX, 20), Ok(()));
    assert_eq!(fs::fchown(fd, 7, u32::MAX), Ok(()));
    assert_eq!(fs::fchown(fd, 0, u32::MAX), Err(Errno::Eperm));

    let meta = fs::metadata(path).unwrap();
    assert_eq!((meta.uid, meta.gid), (7, 20));
    fd::close(fd).unwrap();
}
