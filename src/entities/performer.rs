use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::content::{ContentKind, Record};
use crate::defaults;

/// Artist profile. `social_links` and `contact_info` hold JSON documents
/// as text; the store does not interpret them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "performers")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub profession: String,
    pub description: Option<String>,
    /// Stars times ten (45 = 4.5)
    pub rating: Option<i32>,
    pub reviews: Option<i32>,
    pub image_url: Option<String>,
    pub social_links: Option<String>,
    pub contact_info: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub name: Option<String>,
    pub profession: Option<String>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub description: Option<Option<String>>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub rating: Option<Option<i32>>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub reviews: Option<Option<i32>>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub image_url: Option<Option<String>>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub social_links: Option<Option<String>>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub contact_info: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Record for Model {
    type Key = i32;
    type Draft = Draft;
    const KIND: ContentKind = ContentKind::Performers;

    fn key(&self) -> i32 {
        self.id
    }

    fn propose_key(_draft: &Draft, sequence: i32, _attempt: u32) -> i32 {
        sequence
    }

    fn materialize(key: i32, draft: Draft, now: DateTimeUtc) -> Self {
        defaults::performer(key, draft, now)
    }

    fn apply(&mut self, draft: Draft, _now: DateTimeUtc) {
        if let Some(name) = draft.name {
            self.name = name;
        }
        if let Some(profession) = draft.profession {
            self.profession = profession;
        }
        if let Some(description) = draft.description {
            self.description = description;
        }
        if let Some(rating) = draft.rating {
            self.rating = rating;
        }
        if let Some(reviews) = draft.reviews {
            self.reviews = reviews;
        }
        if let Some(image_url) = draft.image_url {
            self.image_url = image_url;
        }
        if let Some(social_links) = draft.social_links {
            self.social_links = social_links;
        }
        if let Some(contact_info) = draft.contact_info {
            self.contact_info = contact_info;
        }
        if let Some(is_active) = draft.is_active {
            self.is_active = is_active;
        }
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
