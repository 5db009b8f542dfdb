use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::content::{ContentKind, Record};
use crate::defaults;

/// Feedback from schools and companies that booked a workshop.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workshop_testimonials")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub text: String,
    pub rating: i32,
    pub is_active: bool,
    pub sort_order: i32,
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
    #[serde(deserialize_with = "double_option::deserialize")]
    pub company: Option<Option<String>>,
    pub text: Option<String>,
    pub rating: Option<i32>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl Record for Model {
    type Key = i32;
    type Draft = Draft;
    const KIND: ContentKind = ContentKind::WorkshopTestimonials;

    fn key(&self) -> i32 {
        self.id
    }

    fn propose_key(_draft: &Draft, sequence: i32, _attempt: u32) -> i32 {
        sequence
    }

    fn materialize(key: i32, draft: Draft, now: DateTimeUtc) -> Self {
        defaults::workshop_testimonial(key, draft, now)
    }

    fn apply(&mut self, draft: Draft, _now: DateTimeUtc) {
        if let Some(name) = draft.name {
            self.name = name;
        }
        if let Some(position) = draft.position {
            self.position = position;
        }
        if let Some(company) = draft.company {
            self.company = company;
        }
        if let Some(text) = draft.text {
            self.text = text;
        }
        if let Some(rating) = draft.rating {
            self.rating = rating;
        }
        if let Some(is_active) = draft.is_active {
            self.is_active = is_active;
        }
        if let Some(sort_order) = draft.sort_order {
            self.sort_order = sort_order;
        }
    }

    fn is_visible(&self) -> bool {
        self.is_active
    }

    fn sort_order(&self) -> Option<i32> {
        Some(self.sort_order)
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
