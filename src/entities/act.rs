use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::{ContentKind, Record};
use crate::defaults;

/// Stage act, addressed by the slug of its title.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "acts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub image_url: String,
    pub category: String,
    /// Running time as "m:ss"
    pub duration: String,
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
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub is_active: Option<bool>,
}

impl Record for Model {
    type Key = String;
    type Draft = Draft;
    const KIND: ContentKind = ContentKind::Acts;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn propose_key(draft: &Draft, _sequence: i32, attempt: u32) -> String {
        defaults::act_slug(draft, attempt)
    }

    fn materialize(key: String, draft: Draft, now: DateTimeUtc) -> Self {
        defaults::act(key, draft, now)
    }

    /// Video links are normalised to their embed form. An empty video or
    /// image URL leaves the stored one untouched; when a YouTube video is
    /// supplied without an image, the video thumbnail replaces the image.
    fn apply(&mut self, draft: Draft, now: DateTimeUtc) {
        let mut thumbnail = None;
        if let Some(video_url) = draft.video_url.filter(|url| !url.is_empty()) {
            let (embed_url, video_thumbnail) = defaults::normalize_video_url(&video_url);
            self.video_url = embed_url;
            thumbnail = video_thumbnail;
        }
        match draft.image_url.filter(|url| !url.is_empty()) {
            Some(image_url) => self.image_url = image_url,
            None => {
                if let Some(thumbnail) = thumbnail {
                    self.image_url = thumbnail;
                }
            }
        }

        if let Some(title) = draft.title {
            self.title = title;
        }
        if let Some(description) = draft.description {
            self.description = description;
        }
        if let Some(category) = draft.category {
            self.category = category;
        }
        if let Some(duration) = draft.duration {
            self.duration = duration;
        }
        if let Some(is_active) = draft.is_active {
            self.is_active = is_active;
        }
        self.updated_at = now;
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
