//! axunistd - `<unistd.h>` for a minimal embedded C library shim
//!
//! Provides the POSIX descriptor, file-system, pipe, process and
//! `sysconf` entry points of `unistd.h`, backed by small in-crate
//! subsystems that a freestanding OS can use as-is or replace piece
//! by piece through the [`platform::Platform`] seam.
//!
//! # Feature Flags
//! - `alloc`: descriptor I/O (`close`, `read`, `write`, `dup`, `dup2`, `dup3`)
//! - `fs`: file-system calls (`readlink`, `unlink`, `rmdir`, `ftruncate`,
//!   `access`, `getcwd`, `lseek`, `fsync`, `fchown`); implies `alloc`
//! - `pipe`: `pipe`, `pipe2`; implies `alloc`
//! - `export`: emit the C entry points under their unmangled names
//! - `global-heap`: register [`mm::HEAP`] as the global allocator
//!
//! `sleep`, `usleep`, `geteuid`, `getpid` and `sysconf` are always present.
//!
//! # Error Convention
//! Every internal layer returns `Result<T, Errno>`. Only the C boundary in
//! [`abi`] turns an error into `-1` (or a null pointer) plus `errno`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod abi;
pub mod config;
pub mod ctypes;
pub mod errno;
pub mod mm;
pub mod platform;
pub mod process;
pub mod sysconf;

#[cfg(feature = "alloc")]
pub mod fd;
#[cfg(feature = "fs")]
pub mod fs;
#[cfg(feature = "pipe")]
pub mod pipe;

pub use errno::{Errno, Result};
pub use platform::Platform;
