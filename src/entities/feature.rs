use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::{ContentKind, Record};
use crate::defaults;

/// Selling point shown on the landing page, ordered by `sort_order`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "features")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub icon_svg: String,
    pub sort_order: i32,
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
    pub icon_svg: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl Record for Model {
    type Key = i32;
    type Draft = Draft;
    const KIND: ContentKind = ContentKind::Features;

    fn key(&self) -> i32 {
        self.id
    }

    fn propose_key(_draft: &Draft, sequence: i32, _attempt: u32) -> i32 {
        sequence
    }

    fn materialize(key: i32, draft: Draft, now: DateTimeUtc) -> Self {
        defaults::feature(key, draft, now)
    }

    fn apply(&mut self, draft: Draft, _now: DateTimeUtc) {
        if let Some(title) = draft.title {
            self.title = title;
        }
        if let Some(description) = draft.description {
            self.description = description;
        }
        if let Some(icon_svg) = draft.icon_svg {
            self.icon_svg = icon_svg;
        }
        if let Some(sort_order) = draft.sort_order {
            self.sort_order = sort_order;
        }
        if let Some(is_active) = draft.is_active {
            self.is_active = is_active;
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
