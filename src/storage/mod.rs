mod json_store;

pub use json_store::{JsonFileStore, ReadPolicy};
