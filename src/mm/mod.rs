//! Memory management module for axunistd
//!
//! Provides:
//! - The shim heap (optionally the global allocator)
//! - Page accounting for `sysconf`

mod allocator;

pub use allocator::{
    avail_pages, heap_stats, init_heap, init_heap_region, phys_pages, HeapStats, HEAP,
};
