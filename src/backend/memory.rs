//! In-process backend keeping every collection in memory.
//!
//! Each collection owns its identity counter, and both sit behind one
//! `RwLock`, so allocating an identity and inserting the record happen
//! under the same write lock.

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;

use super::{seed, Repository, StoreError, StoreResult};
use crate::constants::MAX_KEY_ATTEMPTS;
use crate::content::Record;
use crate::entities::{
    achievement, act, contact_submission, feature, gallery_item, media_item, news_post, performer, review, service,
    testimonial, workshop_testimonial,
};
use crate::utils::datetime;

/// Records of one kind in insertion order, plus the next identity value.
#[derive(Debug)]
pub struct Collection<M: Record> {
    next_sequence: i32,
    rows: IndexMap<M::Key, M>,
}

impl<M: Record> Default for Collection<M> {
    fn default() -> Self {
        Self {
            next_sequence: 1,
            rows: IndexMap::new(),
        }
    }
}

impl<M: Record> Collection<M> {
    /// Consume the next sequence value. Values are never handed out twice.
    fn allocate(&mut self) -> StoreResult<i32> {
        let value = self.next_sequence;
        self.next_sequence = value.checked_add(1).ok_or(StoreError::KeyExhausted { kind: M::KIND })?;
        Ok(value)
    }

    fn resolve_key(&self, draft: &M::Draft, sequence: i32) -> StoreResult<M::Key> {
        (0..MAX_KEY_ATTEMPTS)
            .map(|attempt| M::propose_key(draft, sequence, attempt))
            .find(|key| !self.rows.contains_key(key))
            .ok_or(StoreError::KeyExhausted { kind: M::KIND })
    }
}

/// Gives the generic repository access to the collection of one kind.
pub trait MemoryBacked<M: Record> {
    fn collection(&self) -> &RwLock<Collection<M>>;
}

/// Store that lives and dies with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    achievements: RwLock<Collection<achievement::Model>>,
    features: RwLock<Collection<feature::Model>>,
    reviews: RwLock<Collection<review::Model>>,
    workshop_testimonials: RwLock<Collection<workshop_testimonial::Model>>,
    performers: RwLock<Collection<performer::Model>>,
    services: RwLock<Collection<service::Model>>,
    gallery: RwLock<Collection<gallery_item::Model>>,
    testimonials: RwLock<Collection<testimonial::Model>>,
    contact_submissions: RwLock<Collection<contact_submission::Model>>,
    acts: RwLock<Collection<act::Model>>,
    media: RwLock<Collection<media_item::Model>>,
    news: RwLock<Collection<news_post::Model>>,
}

impl MemoryStore {
    /// A store with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store populated once with the sample catalogue.
    pub async fn seeded() -> StoreResult<Self> {
        let store = Self::empty();
        seed::populate(&store).await?;
        log::info!("Memory store seeded with sample content");
        Ok(store)
    }
}

macro_rules! memory_backed {
    ($($field:ident => $module:ident),* $(,)?) => {
        $(
            impl MemoryBacked<$module::Model> for MemoryStore {
                fn collection(&self) -> &RwLock<Collection<$module::Model>> {
                    &self.$field
                }
            }
        )*
    };
}

memory_backed! {
    achievements => achievement,
    features => feature,
    reviews => review,
    workshop_testimonials => workshop_testimonial,
    performers => performer,
    services => service,
    gallery => gallery_item,
    testimonials => testimonial,
    contact_submissions => contact_submission,
    acts => act,
    media => media_item,
    news => news_post,
}

#[async_trait]
impl<M> Repository<M> for MemoryStore
where
    M: Record,
    MemoryStore: MemoryBacked<M>,
{
    async fn get(&self, key: &M::Key) -> StoreResult<Option<M>> {
        let collection = <Self as MemoryBacked<M>>::collection(self).read();
        Ok(collection.rows.get(key).cloned())
    }

    async fn get_all(&self) -> StoreResult<Vec<M>> {
        let collection = <Self as MemoryBacked<M>>::collection(self).read();
        Ok(collection.rows.values().cloned().collect())
    }

    async fn create(&self, draft: M::Draft) -> StoreResult<M> {
        let now = datetime::now();
        let mut collection = <Self as MemoryBacked<M>>::collection(self).write();
        let sequence = collection.allocate()?;
        let key = collection.resolve_key(&draft, sequence)?;
        let record = M::materialize(key.clone(), draft, now);
        collection.rows.insert(key, record.clone());
        Ok(record)
    }

    async fn update(&self, key: &M::Key, draft: M::Draft) -> StoreResult<M> {
        let now = datetime::now();
        let mut collection = <Self as MemoryBacked<M>>::collection(self).write();
        let record = collection
            .rows
            .get_mut(key)
            .ok_or_else(|| StoreError::not_found(M::KIND, key))?;
        record.apply(draft, now);
        Ok(record.clone())
    }

    async fn delete(&self, key: &M::Key) -> StoreResult<bool> {
        let mut collection = <Self as MemoryBacked<M>>::collection(self).write();
        Ok(collection.rows.shift_remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_counter_refuses_to_wrap() {
        let mut collection = Collection::<achievement::Model> {
            next_sequence: i32::MAX,
            rows: IndexMap::new(),
        };

        let err = collection.allocate().unwrap_err();
        assert!(matches!(err, StoreError::KeyExhausted { .. }));
        assert_eq!(collection.next_sequence, i32::MAX);
    }
}
