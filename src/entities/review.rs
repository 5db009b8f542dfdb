use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::content::{ContentKind, Record};
use crate::defaults;
use crate::visibility;

/// Customer review. Public once it is active, approved by a moderator and
/// marked public.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub rating: i32,
    pub title: String,
    pub content: String,
    pub service_type: Option<String>,
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub category: String,
    pub image_url: Option<String>,
    pub is_approved: bool,
    pub is_active: bool,
    pub is_public: bool,
    pub sort_order: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Partial review. Nullable columns distinguish "not supplied" (`None`)
/// from "set to null" (`Some(None)`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub name: Option<String>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub email: Option<Option<String>>,
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub service_type: Option<Option<String>>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub event_date: Option<Option<String>>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub location: Option<Option<String>>,
    pub category: Option<String>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub image_url: Option<Option<String>>,
    pub is_approved: Option<bool>,
    pub is_active: Option<bool>,
    pub is_public: Option<bool>,
    pub sort_order: Option<i32>,
}

impl Record for Model {
    type Key = i32;
    type Draft = Draft;
    const KIND: ContentKind = ContentKind::Reviews;

    fn key(&self) -> i32 {
        self.id
    }

    fn propose_key(_draft: &Draft, sequence: i32, _attempt: u32) -> i32 {
        sequence
    }

    fn materialize(key: i32, draft: Draft, now: DateTimeUtc) -> Self {
        defaults::review(key, draft, now)
    }

    fn apply(&mut self, draft: Draft, _now: DateTimeUtc) {
        if let Some(name) = draft.name {
            self.name = name;
        }
        if let Some(email) = draft.email {
            self.email = email;
        }
        if let Some(rating) = draft.rating {
            self.rating = rating;
        }
        if let Some(title) = draft.title {
            self.title = title;
        }
        if let Some(content) = draft.content {
            self.content = content;
        }
        if let Some(service_type) = draft.service_type {
            self.service_type = service_type;
        }
        if let Some(event_date) = draft.event_date {
            self.event_date = event_date;
        }
        if let Some(location) = draft.location {
            self.location = location;
        }
        if let Some(category) = draft.category {
            self.category = category;
        }
        if let Some(image_url) = draft.image_url {
            self.image_url = image_url;
        }
        if let Some(is_approved) = draft.is_approved {
            self.is_approved = is_approved;
        }
        if let Some(is_active) = draft.is_active {
            self.is_active = is_active;
        }
        if let Some(is_public) = draft.is_public {
            self.is_public = is_public;
        }
        if let Some(sort_order) = draft.sort_order {
            self.sort_order = sort_order;
        }
    }

    fn is_visible(&self) -> bool {
        visibility::visible_to_public(self.is_active, self.is_approved, self.is_public)
    }

    fn sort_order(&self) -> Option<i32> {
        Some(self.sort_order)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn sort_order_patch(value: i32) -> Option<Draft> {
        Some(Draft {
            sort_order: Some(value),
            ..Default::default()
        })
    }

    fn active_patch(active: bool) -> Option<Draft> {
        Some(Draft {
            is_active: Some(active),
            ..Default::default()
        })
    }
}
