//! SQLite backend built on SeaORM.
//!
//! One table per content kind, created from the entity definitions, plus a
//! `sequences` table holding the identity counter of each kind. Defaults and
//! merges are computed by the same [`Record`] code the memory backend uses;
//! this backend only persists the result.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    DbErr, EntityTrait, FromQueryResult, IntoActiveModel, Iterable, ModelTrait, Order, PaginatorTrait,
    PrimaryKeyToColumn, QueryFilter, QueryOrder, Schema, TransactionTrait,
};

use super::{seed, Repository, StoreError, StoreResult};
use crate::constants::MAX_KEY_ATTEMPTS;
use crate::content::{ContentKind, Record};
use crate::entities::{
    achievement, act, contact_submission, feature, gallery_item, media_item, news_post, performer, review, sequence,
    service, testimonial, workshop_testimonial,
};
use crate::utils::datetime;

/// A record stored in its own table.
pub trait TableRecord: Record {
    type Table: EntityTrait<Model = Self>;
}

macro_rules! table_records {
    ($($module:ident),* $(,)?) => {
        $(
            impl TableRecord for $module::Model {
                type Table = $module::Entity;
            }
        )*
    };
}

table_records!(
    achievement,
    feature,
    review,
    workshop_testimonial,
    performer,
    service,
    gallery_item,
    testimonial,
    contact_submission,
    act,
    media_item,
    news_post,
);

/// Store persisted in a SQLite database.
#[derive(Debug, Clone)]
pub struct DatabaseStore {
    conn: DatabaseConnection,
}

impl DatabaseStore {
    /// Open the database at `url` and create any missing tables.
    ///
    /// In-memory URLs get a single pinned connection so every query sees
    /// the same database.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let mut options = ConnectOptions::new(url.to_owned());
        if url.contains(":memory:") || url.contains("mode=memory") {
            options.max_connections(1).min_connections(1);
        }
        options.sqlx_logging(false);

        let conn = Database::connect(options).await?;
        let store = Self { conn };
        store.init_schema().await?;
        log::info!("Database store ready at {}", url);
        Ok(store)
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    async fn init_schema(&self) -> Result<(), DbErr> {
        create_table(&self.conn, sequence::Entity).await?;
        create_table(&self.conn, achievement::Entity).await?;
        create_table(&self.conn, feature::Entity).await?;
        create_table(&self.conn, review::Entity).await?;
        create_table(&self.conn, workshop_testimonial::Entity).await?;
        create_table(&self.conn, performer::Entity).await?;
        create_table(&self.conn, service::Entity).await?;
        create_table(&self.conn, gallery_item::Entity).await?;
        create_table(&self.conn, testimonial::Entity).await?;
        create_table(&self.conn, contact_submission::Entity).await?;
        create_table(&self.conn, act::Entity).await?;
        create_table(&self.conn, media_item::Entity).await?;
        create_table(&self.conn, news_post::Entity).await?;
        log::debug!("Database schema initialized");
        Ok(())
    }

    /// Populate the sample catalogue if this database has never allocated an
    /// identity. Returns whether seeding ran.
    ///
    /// A database whose records were all deleted is not seeded again.
    pub async fn seed_if_empty(&self) -> StoreResult<bool> {
        let allocated = sequence::Entity::find().count(&self.conn).await?;
        if allocated > 0 {
            log::debug!("Database already initialized, skipping sample data");
            return Ok(false);
        }

        seed::populate(self).await?;
        log::info!("Database seeded with sample content");
        Ok(true)
    }
}

async fn create_table<E: EntityTrait>(conn: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();
    conn.execute(backend.build(&statement)).await?;
    Ok(())
}

/// Consume the next identity value of `kind` on `conn`.
async fn allocate_sequence<C: ConnectionTrait>(conn: &C, kind: ContentKind) -> StoreResult<i32> {
    let current = sequence::Entity::find_by_id(kind.as_str().to_string()).one(conn).await?;
    let value = current.as_ref().map_or(1, |row| row.next_value);
    let next_value = value.checked_add(1).ok_or(StoreError::KeyExhausted { kind })?;
    let row = sequence::ActiveModel {
        kind: Set(kind.as_str().to_string()),
        next_value: Set(next_value),
    };

    if current.is_some() {
        row.update(conn).await?;
    } else {
        row.insert(conn).await?;
    }
    Ok(value)
}

/// Column holding the identity of `M`.
fn key_column<M: TableRecord>() -> Result<<M::Table as EntityTrait>::Column, DbErr> {
    <M::Table as EntityTrait>::PrimaryKey::iter()
        .next()
        .map(PrimaryKeyToColumn::into_column)
        .ok_or_else(|| DbErr::Custom(format!("{} table has no primary key", M::KIND)))
}

/// Active model with every column set from `record`.
fn to_active<M>(record: &M) -> <M::Table as EntityTrait>::ActiveModel
where
    M: TableRecord + ModelTrait<Entity = <M as TableRecord>::Table>,
    <M::Table as EntityTrait>::ActiveModel: ActiveModelTrait<Entity = M::Table>,
{
    let mut active = <<M::Table as EntityTrait>::ActiveModel as ActiveModelTrait>::default();
    for column in <<M::Table as EntityTrait>::Column as Iterable>::iter() {
        active.set(column, record.get(column));
    }
    active
}

async fn find_one<M, C>(conn: &C, key: &M::Key) -> Result<Option<M>, DbErr>
where
    M: TableRecord,
    C: ConnectionTrait,
{
    <M::Table as EntityTrait>::find()
        .filter(key_column::<M>()?.eq(key.clone()))
        .one(conn)
        .await
}

async fn resolve_key<M, C>(conn: &C, draft: &M::Draft, sequence: i32) -> StoreResult<M::Key>
where
    M: TableRecord,
    C: ConnectionTrait,
{
    for attempt in 0..MAX_KEY_ATTEMPTS {
        let key = M::propose_key(draft, sequence, attempt);
        if find_one::<M, C>(conn, &key).await?.is_none() {
            return Ok(key);
        }
    }
    Err(StoreError::KeyExhausted { kind: M::KIND })
}

#[async_trait]
impl<M> Repository<M> for DatabaseStore
where
    M: TableRecord
        + ModelTrait<Entity = <M as TableRecord>::Table>
        + FromQueryResult
        + IntoActiveModel<<M::Table as EntityTrait>::ActiveModel>,
    <M::Table as EntityTrait>::ActiveModel: ActiveModelTrait<Entity = M::Table> + Send + Sync,
{
    async fn get(&self, key: &M::Key) -> StoreResult<Option<M>> {
        Ok(find_one::<M, _>(&self.conn, key).await?)
    }

    async fn get_all(&self) -> StoreResult<Vec<M>> {
        Ok(<M::Table as EntityTrait>::find()
            .order_by(Expr::cust("rowid"), Order::Asc)
            .all(&self.conn)
            .await?)
    }

    async fn create(&self, draft: M::Draft) -> StoreResult<M> {
        let now = datetime::now();
        let txn = self.conn.begin().await?;

        let sequence = allocate_sequence(&txn, M::KIND).await?;
        let key = resolve_key::<M, _>(&txn, &draft, sequence).await?;
        let record = M::materialize(key, draft, now);
        <M::Table as EntityTrait>::insert(to_active(&record))
            .exec_without_returning(&txn)
            .await?;

        txn.commit().await?;
        Ok(record)
    }

    async fn update(&self, key: &M::Key, draft: M::Draft) -> StoreResult<M> {
        let now = datetime::now();
        let txn = self.conn.begin().await?;

        let mut record = find_one::<M, _>(&txn, key)
            .await?
            .ok_or_else(|| StoreError::not_found(M::KIND, key))?;
        record.apply(draft, now);
        <M::Table as EntityTrait>::update_many()
            .set(to_active(&record))
            .filter(key_column::<M>()?.eq(key.clone()))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(record)
    }

    async fn delete(&self, key: &M::Key) -> StoreResult<bool> {
        let result = <M::Table as EntityTrait>::delete_many()
            .filter(key_column::<M>()?.eq(key.clone()))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
