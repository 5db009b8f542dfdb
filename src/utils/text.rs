//! Text helpers for identities and media links.

/// Lowercase slug: every run of characters outside `[a-z0-9]` becomes a
/// single `-`, and leading/trailing dashes are dropped.
///
/// Non-ASCII letters are not transliterated, so "Über" becomes "ber".
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Extract the video id from a YouTube watch (`youtube.com/watch?v=`) or
/// short (`youtu.be/`) link.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    let id = if let Some((_, rest)) = url.split_once("youtube.com/watch?v=") {
        rest.split('&').next()
    } else if let Some((_, rest)) = url.split_once("youtu.be/") {
        rest.split('?').next()
    } else {
        None
    }?;

    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Embed URL for a YouTube video id
pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

/// Full-size thumbnail URL for a YouTube video id
pub fn youtube_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Kings Gambit"), "kings-gambit");
        assert_eq!(slugify("  Radiance - Abendfüllende Theatershow (60min) "), "radiance-abendf-llende-theatershow-60min");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_youtube_video_id() {
        assert_eq!(youtube_video_id("https://www.youtube.com/watch?v=abc123&t=10"), Some("abc123"));
        assert_eq!(youtube_video_id("https://youtu.be/niDQsEosK0s?si=x"), Some("niDQsEosK0s"));
        assert_eq!(youtube_video_id("https://www.youtube.com/embed/abc123"), None);
        assert_eq!(youtube_video_id("https://vimeo.com/1"), None);
    }
}
