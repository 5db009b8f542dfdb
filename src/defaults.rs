//! Default injection for newly created records.
//!
//! The management console is used by non-technical editors, so a create never
//! fails because something is missing: every gap is filled with a visible
//! placeholder that can be edited later. Each function here maps a partial
//! record plus its assigned identity and creation instant to a complete
//! record, with no I/O, so both backends produce identical results.
//!
//! Two fallback flavours are used, mirroring how the console submits forms:
//! text fields and ratings treat an empty string or zero like a missing
//! value, flags and counters only fall back when the field is absent.

use chrono::{DateTime, Utc};

use crate::constants::*;
use crate::entities::{
    achievement, act, contact_submission, feature, gallery_item, media_item, news_post, performer, review, service,
    testimonial, workshop_testimonial,
};
use crate::utils::{datetime, text};

/// Supplied text unless it is missing or empty
pub fn text_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}

/// Supplied number unless it is missing or zero
pub fn nonzero_or(value: Option<i32>, fallback: i32) -> i32 {
    match value {
        Some(value) if value != 0 => value,
        _ => fallback,
    }
}

pub fn achievement(id: i32, draft: achievement::Draft, now: DateTime<Utc>) -> achievement::Model {
    achievement::Model {
        id,
        year: text_or(draft.year, &datetime::year_of(now)),
        title: text_or(draft.title, FALLBACK_ACHIEVEMENT_TITLE),
        description: text_or(draft.description, FALLBACK_DESCRIPTION),
        is_active: draft.is_active.unwrap_or(true),
        created_at: now,
    }
}

pub fn feature(id: i32, draft: feature::Draft, now: DateTime<Utc>) -> feature::Model {
    feature::Model {
        id,
        title: text_or(draft.title, FALLBACK_FEATURE_TITLE),
        description: text_or(draft.description, FALLBACK_DESCRIPTION),
        icon_svg: text_or(draft.icon_svg, PLACEHOLDER_ICON_SVG),
        sort_order: nonzero_or(draft.sort_order, FALLBACK_FEATURE_SORT_ORDER),
        is_active: draft.is_active.unwrap_or(true),
        created_at: now,
    }
}

/// Reviews are user submitted: they stay unapproved until a moderator acts.
pub fn review(id: i32, draft: review::Draft, now: DateTime<Utc>) -> review::Model {
    review::Model {
        id,
        name: text_or(draft.name, FALLBACK_CUSTOMER_NAME),
        email: draft.email.flatten(),
        rating: nonzero_or(draft.rating, FALLBACK_RATING),
        title: text_or(draft.title, FALLBACK_REVIEW_TITLE),
        content: text_or(draft.content, FALLBACK_FEEDBACK),
        service_type: draft.service_type.flatten(),
        event_date: draft.event_date.flatten(),
        location: draft.location.flatten(),
        category: text_or(draft.category, CATEGORY_GENERAL),
        image_url: draft.image_url.flatten(),
        is_approved: draft.is_approved.unwrap_or(false),
        is_active: draft.is_active.unwrap_or(true),
        is_public: draft.is_public.unwrap_or(true),
        sort_order: draft.sort_order.unwrap_or(0),
        created_at: now,
    }
}

pub fn workshop_testimonial(
    id: i32,
    draft: workshop_testimonial::Draft,
    now: DateTime<Utc>,
) -> workshop_testimonial::Model {
    workshop_testimonial::Model {
        id,
        name: text_or(draft.name, FALLBACK_PARTICIPANT_NAME),
        position: draft.position.flatten(),
        company: draft.company.flatten(),
        text: text_or(draft.text, FALLBACK_WORKSHOP_FEEDBACK),
        rating: nonzero_or(draft.rating, FALLBACK_RATING),
        is_active: draft.is_active.unwrap_or(true),
        sort_order: draft.sort_order.unwrap_or(0),
        created_at: now,
    }
}

pub fn performer(id: i32, draft: performer::Draft, now: DateTime<Utc>) -> performer::Model {
    performer::Model {
        id,
        name: text_or(draft.name, FALLBACK_PERFORMER_NAME),
        profession: text_or(draft.profession, FALLBACK_PROFESSION),
        description: draft.description.flatten(),
        rating: draft.rating.flatten(),
        reviews: draft.reviews.flatten(),
        image_url: draft.image_url.flatten(),
        social_links: draft.social_links.flatten(),
        contact_info: draft.contact_info.flatten(),
        is_active: draft.is_active.unwrap_or(true),
        created_at: now,
    }
}

pub fn service(id: i32, draft: service::Draft, now: DateTime<Utc>) -> service::Model {
    service::Model {
        id,
        title: text_or(draft.title, FALLBACK_SERVICE_TITLE),
        description: text_or(draft.description, FALLBACK_DESCRIPTION),
        category: text_or(draft.category, CATEGORY_SHOW),
        base_price: draft.base_price.unwrap_or(0),
        image_url: draft.image_url.flatten(),
        is_active: draft.is_active.unwrap_or(true),
        created_at: now,
    }
}

pub fn gallery_item(id: i32, draft: gallery_item::Draft, now: DateTime<Utc>) -> gallery_item::Model {
    gallery_item::Model {
        id,
        title: text_or(draft.title, FALLBACK_GALLERY_TITLE),
        description: draft.description.flatten(),
        category: text_or(draft.category, CATEGORY_MISC),
        image_url: text_or(draft.image_url, PLACEHOLDER_IMAGE_URL),
        event_type: draft.event_type.flatten(),
        event_date: draft.event_date.flatten(),
        created_at: now,
    }
}

/// Approval cannot be granted at creation time; it is a moderation step.
pub fn testimonial(id: i32, draft: testimonial::Draft, now: DateTime<Utc>) -> testimonial::Model {
    testimonial::Model {
        id,
        name: text_or(draft.name, FALLBACK_CUSTOMER_NAME),
        position: draft.position.flatten(),
        text: text_or(draft.text, FALLBACK_FEEDBACK),
        rating: nonzero_or(draft.rating, FALLBACK_RATING),
        image_url: draft.image_url.flatten(),
        category: text_or(draft.category, CATEGORY_GENERAL),
        is_approved: false,
        is_active: draft.is_active.unwrap_or(true),
        is_public: draft.is_public.unwrap_or(true),
        created_at: now,
    }
}

/// Contact submissions are validated before they get here; required fields
/// that are still missing are stored empty rather than invented.
pub fn contact_submission(
    id: i32,
    draft: contact_submission::Draft,
    now: DateTime<Utc>,
) -> contact_submission::Model {
    contact_submission::Model {
        id,
        name: draft.name.unwrap_or_default(),
        email: draft.email.unwrap_or_default(),
        phone: draft.phone.flatten(),
        event_date: draft.event_date.unwrap_or_default(),
        event_type: draft.event_type.unwrap_or_default(),
        performance_type: draft.performance_type.unwrap_or_default(),
        message: draft.message.flatten(),
        status: CONTACT_STATUS_NEW.to_string(),
        created_at: now,
    }
}

/// Title an act will carry once defaults are applied; its slug is the identity.
pub fn act_title(draft: &act::Draft) -> String {
    text_or(draft.title.clone(), FALLBACK_ACT_TITLE)
}

/// Slug identity for an act, with `-2`, `-3`, ... appended on later attempts.
/// Reserved slugs start at `-2`.
pub fn act_slug(draft: &act::Draft, attempt: u32) -> String {
    let mut base = text::slugify(&act_title(draft));
    if base.is_empty() {
        base = FALLBACK_ACT_SLUG.to_string();
    }
    let attempt = if RESERVED_ACT_SLUGS.contains(&base.as_str()) {
        attempt.saturating_add(1)
    } else {
        attempt
    };
    if attempt == 0 {
        base
    } else {
        format!("{}-{}", base, attempt + 1)
    }
}

/// Video link in the form the site embeds, plus the thumbnail it implies.
pub fn normalize_video_url(url: &str) -> (String, Option<String>) {
    match text::youtube_video_id(url) {
        Some(video_id) => (text::youtube_embed_url(video_id), Some(text::youtube_thumbnail_url(video_id))),
        None => (url.to_string(), None),
    }
}

pub fn act(id: String, draft: act::Draft, now: DateTime<Utc>) -> act::Model {
    let title = act_title(&draft);
    let (video_url, thumbnail) = match draft.video_url.as_deref() {
        Some(url) if !url.is_empty() => normalize_video_url(url),
        _ => (String::new(), None),
    };
    let image_url = match draft.image_url {
        Some(url) if !url.is_empty() => url,
        _ => thumbnail.unwrap_or_else(|| PLACEHOLDER_SHOW_IMAGE_URL.to_string()),
    };

    act::Model {
        id,
        title,
        description: text_or(draft.description, FALLBACK_ACT_DESCRIPTION),
        video_url,
        image_url,
        category: text_or(draft.category, CATEGORY_SHOW),
        duration: text_or(draft.duration, FALLBACK_ACT_DURATION),
        is_active: draft.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
    }
}

pub fn media_item(id: i32, draft: media_item::Draft, now: DateTime<Utc>) -> media_item::Model {
    media_item::Model {
        id,
        title: text_or(draft.title, FALLBACK_MEDIA_TITLE),
        description: text_or(draft.description, FALLBACK_MEDIA_DESCRIPTION),
        image_url: text_or(draft.image_url, PLACEHOLDER_IMAGE_URL),
        category: text_or(draft.category, CATEGORY_MISC),
        event_type: draft.event_type.unwrap_or_default(),
        event_date: draft.event_date.unwrap_or_default(),
        is_active: draft.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
    }
}

pub fn news_post(id: i32, draft: news_post::Draft, now: DateTime<Utc>) -> news_post::Model {
    news_post::Model {
        id,
        title: text_or(draft.title, FALLBACK_NEWS_TITLE),
        content: text_or(draft.content, FALLBACK_NEWS_CONTENT),
        excerpt: text_or(draft.excerpt, FALLBACK_NEWS_EXCERPT),
        image_url: text_or(draft.image_url, PLACEHOLDER_NEWS_IMAGE_URL),
        published_at: text_or(draft.published_at, &datetime::date_of(now)),
        is_active: draft.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
    }
}
