//! Directory adapters - seeded in-memory editor and subscriber registries.

mod editors;
mod subscribers;

pub use editors::InMemoryEditorDirectory;
pub use subscribers::InMemorySubscriberDirectory;
