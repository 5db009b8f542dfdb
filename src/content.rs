//! Content records and the collections they live in.
//!
//! Every content table has a SeaORM `Model` that doubles as the domain
//! record for both storage backends. [`Record`] is the glue the backends are
//! generic over: identity, default materialization on create, shallow merge
//! on update, and the visibility/sort/category hooks used by public views.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Every content collection managed by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Achievements,
    Features,
    Reviews,
    WorkshopTestimonials,
    Performers,
    Services,
    Gallery,
    Testimonials,
    Contact,
    Acts,
    Media,
    News,
}

impl ContentKind {
    pub const ALL: [ContentKind; 12] = [
        ContentKind::Achievements,
        ContentKind::Features,
        ContentKind::Reviews,
        ContentKind::WorkshopTestimonials,
        ContentKind::Performers,
        ContentKind::Services,
        ContentKind::Gallery,
        ContentKind::Testimonials,
        ContentKind::Contact,
        ContentKind::Acts,
        ContentKind::Media,
        ContentKind::News,
    ];

    /// Path segment under `/api/` and key of the `sequences` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Achievements => "achievements",
            ContentKind::Features => "features",
            ContentKind::Reviews => "reviews",
            ContentKind::WorkshopTestimonials => "workshop-testimonials",
            ContentKind::Performers => "performers",
            ContentKind::Services => "services",
            ContentKind::Gallery => "gallery",
            ContentKind::Testimonials => "testimonials",
            ContentKind::Contact => "contact",
            ContentKind::Acts => "acts",
            ContentKind::Media => "media",
            ContentKind::News => "news",
        }
    }

    /// Human-readable singular label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Achievements => "Achievement",
            ContentKind::Features => "Feature",
            ContentKind::Reviews => "Review",
            ContentKind::WorkshopTestimonials => "Workshop testimonial",
            ContentKind::Performers => "Performer",
            ContentKind::Services => "Service",
            ContentKind::Gallery => "Gallery item",
            ContentKind::Testimonials => "Testimonial",
            ContentKind::Contact => "Contact submission",
            ContentKind::Acts => "Act",
            ContentKind::Media => "Media item",
            ContentKind::News => "News post",
        }
    }
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown content kind: {}", s))
    }
}

/// A stored content record.
///
/// Implementations must keep `materialize` and `apply` free of I/O: both
/// backends call them with the same inputs and must end up with the same
/// record.
pub trait Record: Clone + Debug + PartialEq + Serialize + Send + Sync + 'static {
    /// Identity type; immutable once assigned.
    type Key: Clone + Debug + Display + FromStr + Eq + Hash + Into<sea_orm::Value> + Send + Sync + 'static;

    /// Partial record accepted by `create` and `update`.
    type Draft: Clone + Debug + Default + DeserializeOwned + Send + Sync + 'static;

    const KIND: ContentKind;

    fn key(&self) -> Self::Key;

    /// Candidate identity for a new record.
    ///
    /// `sequence` is the freshly allocated per-kind counter value and
    /// `attempt` counts how many earlier candidates were already taken.
    fn propose_key(draft: &Self::Draft, sequence: i32, attempt: u32) -> Self::Key;

    /// Build a complete record from a partial one, filling gaps with defaults.
    fn materialize(key: Self::Key, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Shallow merge: supplied fields replace stored ones, the rest stay.
    fn apply(&mut self, draft: Self::Draft, now: DateTime<Utc>);

    /// Whether the record may be shown on public pages.
    fn is_visible(&self) -> bool {
        true
    }

    /// Explicit ordering among siblings, for kinds that have one.
    fn sort_order(&self) -> Option<i32> {
        None
    }

    fn category(&self) -> Option<&str> {
        None
    }

    /// Partial record that only sets `sortOrder`, when the kind has one.
    fn sort_order_patch(_value: i32) -> Option<Self::Draft> {
        None
    }

    /// Partial record that only sets the active flag, when the kind has one.
    fn active_patch(_active: bool) -> Option<Self::Draft> {
        None
    }
}
