use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::content::{ContentKind, Record};
use crate::defaults;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Price in cents
    pub base_price: i32,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub base_price: Option<i32>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub image_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Record for Model {
    type Key = i32;
    type Draft = Draft;
    const KIND: ContentKind = ContentKind::Services;

    fn key(&self) -> i32 {
        self.id
    }

    fn propose_key(_draft: &Draft, sequence: i32, _attempt: u32) -> i32 {
        sequence
    }

    fn materialize(key: i32, draft: Draft, now: DateTimeUtc) -> Self {
        defaults::service(key, draft, now)
    }

    fn apply(&mut self, draft: Draft, _now: DateTimeUtc) {
        if let Some(title) = draft.title {
            self.title = title;
        }
        if let Some(description) = draft.description {
            self.description = description;
        }
        if let Some(category) = draft.category {
            self.category = category;
        }
        if let Some(base_price) = draft.base_price {
            self.base_price = base_price;
        }
        if let Some(image_url) = draft.image_url {
            self.image_url = image_url;
        }
        if let Some(is_active) = draft.is_active {
            self.is_active = is_active;
        }
    }

    fn is_visible(&self) -> bool {
        self.is_active
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn active_patch(active: bool) -> Option<Draft> {
        Some(Draft {
            is_active: Some(active),
            ..Default::default()
        })
    }
}
