use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::content::{ContentKind, Record};
use crate::defaults;
use crate::visibility;

/// Client quote. New testimonials always start unapproved.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub position: Option<String>,
    pub text: String,
    pub rating: i32,
    pub image_url: Option<String>,
    pub category: String,
    pub is_approved: bool,
    pub is_active: bool,
    pub is_public: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub name: Option<String>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub position: Option<Option<String>>,
    pub text: Option<String>,
    pub rating: Option<i32>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub image_url: Option<Option<String>>,
    pub category: Option<String>,
    pub is_approved: Option<bool>,
    pub is_active: Option<bool>,
    pub is_public: Option<bool>,
}

impl Record for Model {
    type Key = i32;
    type Draft = Draft;
    const KIND: ContentKind = ContentKind::Testimonials;

    fn key(&self) -> i32 {
        self.id
    }

    fn propose_key(_draft: &Draft, sequence: i32, _attempt: u32) -> i32 {
        sequence
    }

    fn materialize(key: i32, draft: Draft, now: DateTimeUtc) -> Self {
        defaults::testimonial(key, draft, now)
    }

    fn apply(&mut self, draft: Draft, _now: DateTimeUtc) {
        if let Some(name) = draft.name {
            self.name = name;
        }
        if let Some(position) = draft.position {
            self.position = position;
        }
        if let Some(text) = draft.text {
            self.text = text;
        }
        if let Some(rating) = draft.rating {
            self.rating = rating;
        }
        if let Some(image_url) = draft.image_url {
            self.image_url = image_url;
        }
        if let Some(category) = draft.category {
            self.category = category;
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
    }

    fn is_visible(&self) -> bool {
        visibility::visible_to_public(self.is_active, self.is_approved, self.is_public)
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
