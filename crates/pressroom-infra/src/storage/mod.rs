//! Storage backends - in-memory map and JSON files on disk.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::InMemoryStorage;
