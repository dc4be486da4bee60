//! Outbound adapters - implementations of domain ports

pub mod memory;

pub use memory::MemoryPropertyStorage;
