//! Consignment store adapters.

mod memory;

pub use memory::MemoryStore;
