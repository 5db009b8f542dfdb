use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use crate::content::{ContentKind, Record};
use crate::defaults;

/// Booking request sent through the public contact form.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_submissions")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event_date: String,
    pub event_type: String,
    pub performance_type: String,
    pub message: Option<String>,
    /// Processing state; every submission starts as "new"
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub phone: Option<Option<String>>,
    pub event_date: Option<String>,
    pub event_type: Option<String>,
    pub performance_type: Option<String>,
    #[serde(deserialize_with = "double_option::deserialize")]
    pub message: Option<Option<String>>,
    /// Ignored on create
    pub status: Option<String>,
}

impl Record for Model {
    type Key = i32;
    type Draft = Draft;
    const KIND: ContentKind = ContentKind::Contact;

    fn key(&self) -> i32 {
        self.id
    }

    fn propose_key(_draft: &Draft, sequence: i32, _attempt: u32) -> i32 {
        sequence
    }

    fn materialize(key: i32, draft: Draft, now: DateTimeUtc) -> Self {
        defaults::contact_submission(key, draft, now)
    }

    fn apply(&mut self, draft: Draft, _now: DateTimeUtc) {
        if let Some(name) = draft.name {
            self.name = name;
        }
        if let Some(email) = draft.email {
            self.email = email;
        }
        if let Some(phone) = draft.phone {
            self.phone = phone;
        }
        if let Some(event_date) = draft.event_date {
            self.event_date = event_date;
        }
        if let Some(event_type) = draft.event_type {
            self.event_type = event_type;
        }
        if let Some(performance_type) = draft.performance_type {
            self.performance_type = performance_type;
        }
        if let Some(message) = draft.message {
            self.message = message;
        }
        if let Some(status) = draft.status {
            self.status = status;
        }
    }
}
