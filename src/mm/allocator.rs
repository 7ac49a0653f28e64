//! Shim Heap Allocator
//!
//! Uses `linked_list_allocator` for heap management.
//!
//! # Memory Layout
//! The heap is either the static `HEAP_MEMORY` region ([`init_heap`]) or a
//! region handed over by the OS ([`init_heap_region`]). Only the first
//! initialisation takes effect.
//!
//! With the `global-heap` feature the heap also backs Rust's global
//! allocator; otherwise it is a private pool whose free space is what
//! `sysconf(_SC_AVPHYS_PAGES)` reports.

use linked_list_allocator::LockedHeap;
use spin::Once;

use crate::config::{HEAP_SIZE, PAGE_SIZE, PHYS_MEMORY_SIZE};

/// Heap instance
#[cfg_attr(feature = "global-heap", global_allocator)]
pub static HEAP: LockedHeap = LockedHeap::empty();

/// Static heap memory region
static mut HEAP_MEMORY: [u8; HEAP_SIZE] = [0; HEAP_SIZE];

static HEAP_READY: Once<()> = Once::new();

/// Heap usage snapshot in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapStats {
    pub total: usize,
    pub used: usize,
    pub free: usize,
}

/// Initialise the heap over the static region.
///
/// Returns `false` if the heap was already initialised.
pub fn init_heap() -> bool {
    let mut fresh = false;
    HEAP_READY.call_once(|| {
        // SAFETY:
        // - HEAP_MEMORY is a valid static array of HEAP_SIZE bytes
        // - HEAP_READY guarantees this runs once, so the region is handed
        //   to the allocator exactly once and never touched elsewhere
        unsafe {
            let start = core::ptr::addr_of_mut!(HEAP_MEMORY).cast::<u8>();
            HEAP.lock().init(start, HEAP_SIZE);
        }
        fresh = true;
    });
    fresh
}

/// Initialise the heap over a region provided by the OS.
///
/// Returns `false` if the heap was already initialised.
///
/// # Safety
/// `start..start + size` must be valid, writable, unused memory that lives
/// for the rest of the program.
pub unsafe fn init_heap_region(start: *mut u8, size: usize) -> bool {
    let mut fresh = false;
    HEAP_READY.call_once(|| {
        // SAFETY: the caller guarantees the region; HEAP_READY runs this once.
        unsafe { HEAP.lock().init(start, size) };
        fresh = true;
    });
    fresh
}

/// Current heap usage, or `None` before initialisation.
pub fn heap_stats() -> Option<HeapStats> {
    HEAP_READY.get()?;
    let heap = HEAP.lock();
    Some(HeapStats {
        total: heap.size(),
        used: heap.used(),
        free: heap.free(),
    })
}

/// Number of physical pages in the system.
pub fn phys_pages() -> usize {
    PHYS_MEMORY_SIZE / PAGE_SIZE
}

/// Number of pages still available for allocation.
///
/// Before the heap exists every physical page counts as available.
pub fn avail_pages() -> usize {
    match heap_stats() {
        Some(stats) => (stats.free / PAGE_SIZE).min(phys_pages()),
        None => phys_pages(),
    }
}
