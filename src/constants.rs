//! Constants used throughout the application
//!
//! Fallback values written by the create path when a field is missing, plus
//! configuration defaults. The German literals are what the site displays.

// Shared fallbacks
pub const FALLBACK_DESCRIPTION: &str = "Beschreibung wird noch hinzugefügt...";
pub const FALLBACK_CUSTOMER_NAME: &str = "Anonymer Kunde";
pub const FALLBACK_FEEDBACK: &str = "Positive Erfahrung";
pub const FALLBACK_RATING: i32 = 5;
pub const CATEGORY_GENERAL: &str = "general";
pub const CATEGORY_MISC: &str = "allgemein";
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder-image.jpg";

// Achievements
pub const FALLBACK_ACHIEVEMENT_TITLE: &str = "Neuer Erfolg";

// Features
pub const FALLBACK_FEATURE_TITLE: &str = "Neues Feature";
pub const FALLBACK_FEATURE_SORT_ORDER: i32 = 1;
pub const PLACEHOLDER_ICON_SVG: &str =
    r#"<svg fill="currentColor" width="20" height="20" viewBox="0 0 20 20"><circle cx="10" cy="10" r="8"/></svg>"#;

// Reviews
pub const FALLBACK_REVIEW_TITLE: &str = "Zufriedener Kunde";

// Workshop testimonials
pub const FALLBACK_PARTICIPANT_NAME: &str = "Anonymer Teilnehmer";
pub const FALLBACK_WORKSHOP_FEEDBACK: &str = "Bewertung wird noch hinzugefügt...";

// Performers
pub const FALLBACK_PERFORMER_NAME: &str = "Neuer Künstler";
pub const FALLBACK_PROFESSION: &str = "Künstler";

// Services
pub const FALLBACK_SERVICE_TITLE: &str = "Neue Leistung";
pub const CATEGORY_SHOW: &str = "show";

// Gallery
pub const FALLBACK_GALLERY_TITLE: &str = "Neues Bild";

// Contact submissions
pub const CONTACT_STATUS_NEW: &str = "new";

// Acts
pub const FALLBACK_ACT_TITLE: &str = "Neue Show";
pub const FALLBACK_ACT_DESCRIPTION: &str = "Beschreibung folgt in Kürze...";
pub const FALLBACK_ACT_DURATION: &str = "0:00";
pub const FALLBACK_ACT_SLUG: &str = "act";
/// Path segments the act routes claim; an act with such a slug gets a suffix
pub const RESERVED_ACT_SLUGS: &[&str] = &["manage"];
pub const PLACEHOLDER_SHOW_IMAGE_URL: &str = "/placeholder-show.jpg";

// Media items
pub const FALLBACK_MEDIA_TITLE: &str = "Neues Medienelement";
pub const FALLBACK_MEDIA_DESCRIPTION: &str = "Beschreibung wird noch hinzugefügt";

// News posts
pub const FALLBACK_NEWS_TITLE: &str = "Neue Nachricht";
pub const FALLBACK_NEWS_CONTENT: &str = "Inhalt wird noch hinzugefügt...";
pub const FALLBACK_NEWS_EXCERPT: &str = "Kurzbeschreibung folgt...";
pub const PLACEHOLDER_NEWS_IMAGE_URL: &str = "/placeholder-news.jpg";

// Storage
/// How many slug suffixes are tried before a create gives up
pub const MAX_KEY_ATTEMPTS: u32 = 1000;
/// Database used when the database backend is selected without a URL
pub const DEFAULT_DATABASE_URL: &str = "sqlite://showcase.db?mode=rwc";

// Configuration
pub const CONFIG_FILE_NAME: &str = "showcase.toml";
pub const CONFIG_DIR_NAME: &str = "showcase-store";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
