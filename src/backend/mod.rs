//! Storage abstraction with interchangeable backends.
//!
//! This module defines the repository contract every backend implements for
//! every content kind, along with the storage error type. Callers hold an
//! `Arc<dyn ContentStore>` and cannot tell which backend is active.

use std::fmt::Display;

use async_trait::async_trait;

use crate::content::{ContentKind, Record};
use crate::entities::{
    achievement, act, contact_submission, feature, gallery_item, media_item, news_post, performer, review, service,
    testimonial, workshop_testimonial,
};
use crate::validation::ValidationError;
use crate::visibility;

pub mod database;
pub mod factory;
pub mod memory;
pub mod seed;

pub use database::DatabaseStore;
pub use memory::MemoryStore;

/// Error types for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: ContentKind, key: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("No free identity left for new {kind}")]
    KeyExhausted { kind: ContentKind },

    #[error("{kind} does not support {operation}")]
    Unsupported { kind: ContentKind, operation: &'static str },
}

impl StoreError {
    pub fn not_found(kind: ContentKind, key: &impl Display) -> Self {
        StoreError::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository contract for one content kind.
///
/// Every successful write is visible to the next read on the same store.
#[async_trait]
pub trait Repository<M: Record>: Send + Sync {
    /// The record with this identity, or `None`.
    async fn get(&self, key: &M::Key) -> StoreResult<Option<M>>;

    /// Every record, hidden ones included, in insertion order.
    async fn get_all(&self) -> StoreResult<Vec<M>>;

    /// Fill gaps with defaults, assign identity and timestamps, store.
    async fn create(&self, draft: M::Draft) -> StoreResult<M>;

    /// Shallow merge of `draft` over the stored record.
    ///
    /// Fails with [`StoreError::NotFound`] when the identity is unknown.
    async fn update(&self, key: &M::Key, draft: M::Draft) -> StoreResult<M>;

    /// Remove a record, reporting whether anything was removed.
    async fn delete(&self, key: &M::Key) -> StoreResult<bool>;

    /// Records allowed on public pages, sorted by `sortOrder` where the kind
    /// has one.
    async fn get_all_visible(&self) -> StoreResult<Vec<M>> {
        Ok(visibility::visible_set(self.get_all().await?))
    }

    /// Visible records of one category.
    async fn get_visible_in_category(&self, category: &str) -> StoreResult<Vec<M>> {
        Ok(visibility::in_category(self.get_all_visible().await?, category))
    }
}

/// A store holding every content kind.
pub trait ContentStore:
    Repository<achievement::Model>
    + Repository<feature::Model>
    + Repository<review::Model>
    + Repository<workshop_testimonial::Model>
    + Repository<performer::Model>
    + Repository<service::Model>
    + Repository<gallery_item::Model>
    + Repository<testimonial::Model>
    + Repository<contact_submission::Model>
    + Repository<act::Model>
    + Repository<media_item::Model>
    + Repository<news_post::Model>
{
}

impl<T> ContentStore for T where
    T: Repository<achievement::Model>
        + Repository<feature::Model>
        + Repository<review::Model>
        + Repository<workshop_testimonial::Model>
        + Repository<performer::Model>
        + Repository<service::Model>
        + Repository<gallery_item::Model>
        + Repository<testimonial::Model>
        + Repository<contact_submission::Model>
        + Repository<act::Model>
        + Repository<media_item::Model>
        + Repository<news_post::Model>
        + ?Sized
{
}
