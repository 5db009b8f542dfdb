#![allow(dead_code)]

use serde::Serialize;
use serde_json::Value;

use showcase_store::{DatabaseStore, MemoryStore};

pub const IN_MEMORY_SQLITE: &str = "sqlite::memory:";

pub fn memory_store() -> MemoryStore {
    MemoryStore::empty()
}

pub async fn database_store() -> DatabaseStore {
    DatabaseStore::connect(IN_MEMORY_SQLITE)
        .await
        .expect("in-memory database should open")
}

/// JSON form of a record without the write timestamps, which differ
/// between two stores fed the same requests.
pub fn without_timestamps<T: Serialize>(record: &T) -> Value {
    let mut value = serde_json::to_value(record).expect("records serialize");
    if let Some(object) = value.as_object_mut() {
        object.remove("createdAt");
        object.remove("updatedAt");
    }
    value
}
