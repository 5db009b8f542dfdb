use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::{ContentKind, Record};
use crate::defaults;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news_posts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    /// Publication date as YYYY-MM-DD
    pub published_at: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<String>,
    pub is_active: Option<bool>,
}

impl Record for Model {
    type Key = i32;
    type Draft = Draft;
    const KIND: ContentKind = ContentKind::News;

    fn key(&self) -> i32 {
        self.id
    }

    fn propose_key(_draft: &Draft, sequence: i32, _attempt: u32) -> i32 {
        sequence
    }

    fn materialize(key: i32, draft: Draft, now: DateTimeUtc) -> Self {
        defaults::news_post(key, draft, now)
    }

    fn apply(&mut self, draft: Draft, now: DateTimeUtc) {
        if let Some(title) = draft.title {
            self.title = title;
        }
        if let Some(content) = draft.content {
            self.content = content;
        }
        if let Some(excerpt) = draft.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(image_url) = draft.image_url {
            self.image_url = image_url;
        }
        if let Some(published_at) = draft.published_at {
            self.published_at = published_at;
        }
        if let Some(is_active) = draft.is_active {
            self.is_active = is_active;
        }
        self.updated_at = now;
    }

    fn is_visible(&self) -> bool {
        self.is_active
    }

    fn active_patch(active: bool) -> Option<Draft> {
        Some(Draft {
            is_active: Some(active),
            ..Default::default()
        })
    }
}
