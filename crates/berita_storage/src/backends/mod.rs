pub mod json;
pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongo;

pub use json::JsonFileSource;
pub use memory::InMemorySource;

#[cfg(feature = "mongodb")]
pub use mongo::MongoSource;
