//! Sample catalogue used to make a fresh store demonstrable.
//!
//! Everything goes through the public repository contract, so seeded
//! records get identities, defaults and timestamps exactly like records
//! created through the management console.

use super::{ContentStore, Repository, StoreResult};
use crate::entities::{
    achievement, act, feature, gallery_item, media_item, news_post, performer, review, service, testimonial,
    workshop_testimonial,
};

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn nullable(value: &str) -> Option<Option<String>> {
    Some(Some(value.to_string()))
}

/// Create the sample records for every kind except contact submissions.
pub async fn populate<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    seed_performers(store).await?;
    seed_services(store).await?;
    seed_gallery(store).await?;
    seed_testimonials(store).await?;
    seed_achievements(store).await?;
    seed_features(store).await?;
    seed_workshop_testimonials(store).await?;
    seed_reviews(store).await?;
    seed_acts(store).await?;
    seed_media(store).await?;
    seed_news(store).await?;
    Ok(())
}

async fn seed_performers<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    let performers = [
        (
            "Alex Rivera",
            "Juggler & Comedian",
            "Award-winning juggler specializing in comedy and audience interaction. Perfect for family events and corporate gatherings.",
            45,
            36,
            "alexrivera",
            "415-555-0101",
        ),
        (
            "Maya Chen",
            "Magician & Illusionist",
            "Specializing in close-up magic and mind-reading illusions. Maya creates unforgettable magical moments for any event.",
            50,
            42,
            "mayachen",
            "415-555-0102",
        ),
        (
            "Carlos Santiago",
            "Fire Performer",
            "Carlos delivers spectacular fire performances combining danger, skill, and artistry. Perfect for outdoor events and special celebrations.",
            45,
            28,
            "carlossantiago",
            "415-555-0103",
        ),
        (
            "Sophia Kim",
            "Aerial Artist",
            "Sophia creates breathtaking aerial performances on silk, hoop, and trapeze. She brings elegance and wonder to upscale events.",
            50,
            47,
            "sophiakim",
            "415-555-0104",
        ),
    ];

    for (name, profession, description, rating, reviews, handle, phone) in performers {
        let first_name = name.split_whitespace().next().unwrap_or(name).to_lowercase();
        let social_links = serde_json::json!({
            "instagram": format!("https://instagram.com/{}", handle),
            "website": format!("https://{}.com", handle),
        });
        let contact_info = serde_json::json!({
            "email": format!("{}@performancecompass.com", first_name),
            "phone": phone,
        });

        Repository::<performer::Model>::create(
            store,
            performer::Draft {
                name: text(name),
                profession: text(profession),
                description: nullable(description),
                rating: Some(Some(rating)),
                reviews: Some(Some(reviews)),
                image_url: nullable(&format!("/performers/{}.jpg", handle)),
                social_links: Some(Some(social_links.to_string())),
                contact_info: Some(Some(contact_info.to_string())),
                is_active: Some(true),
            },
        )
        .await?;
    }
    Ok(())
}

async fn seed_services<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    let services = [
        (
            "Juggling Shows",
            "From balls and clubs to fire and knives, our jugglers will amaze your guests with skillful manipulation and comedy.",
            "juggling",
            35000,
        ),
        (
            "Magic & Illusion",
            "Close-up magic, stage illusions, and mind-reading performances that will leave your audience speechless.",
            "magic",
            40000,
        ),
        (
            "Aerial Acts",
            "Breathtaking aerial silk, hoop, and trapeze performances that add elegance and drama to your event.",
            "aerial",
            65000,
        ),
        (
            "Fire Performances",
            "Spectacular fire dancing, breathing, and manipulation that will create an unforgettable atmosphere at your event.",
            "fire",
            55000,
        ),
    ];

    for (title, description, category, base_price) in services {
        Repository::<service::Model>::create(
            store,
            service::Draft {
                title: text(title),
                description: text(description),
                category: text(category),
                base_price: Some(base_price),
                image_url: nullable(&format!("/services/{}.jpg", category)),
                is_active: Some(true),
            },
        )
        .await?;
    }
    Ok(())
}

async fn seed_gallery<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    let items = [
        ("Light Juggling Show", "LED juggling performance at a corporate event", "juggling", "Private Event", "March 2023"),
        ("Card Magic Performance", "Close-up card magic at a corporate function", "magic", "Corporate Event", "May 2023"),
        ("Fire Dance Show", "Fire performance at a summer festival", "fire", "Summer Festival", "July 2023"),
        ("Aerial Silk Performance", "Aerial silk act at a charity gala", "aerial", "Gala Event", "February 2023"),
        ("Fire Juggling Act", "Combining juggling with fire performance", "fire", "Street Festival", "June 2023"),
        ("Stage Illusion Show", "Large-scale illusion performed on stage", "magic", "Theater Event", "April 2023"),
        ("Club Juggling Show", "Technical club juggling performance", "juggling", "Community Event", "May 2023"),
        ("Aerial Hoop Performance", "Artistic aerial hoop routine", "aerial", "Charity Gala", "March 2023"),
    ];

    for (index, (title, description, category, event_type, event_date)) in items.into_iter().enumerate() {
        Repository::<gallery_item::Model>::create(
            store,
            gallery_item::Draft {
                title: text(title),
                description: nullable(description),
                category: text(category),
                image_url: Some(format!("/gallery/{}-{}.jpg", category, index + 1)),
                event_type: nullable(event_type),
                event_date: nullable(event_date),
            },
        )
        .await?;
    }
    Ok(())
}

/// Testimonials are created unapproved like any other and then approved,
/// the same way a moderator would.
async fn seed_testimonials<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    let testimonials = [
        (
            "Sarah Thompson",
            "Community Event Organizer",
            "The juggling performance was absolutely fantastic! Alex had everyone captivated from start to finish. His comedy and skill combined perfectly, and he was great with the kids at our community event.",
        ),
        (
            "Michael Reynolds",
            "Corporate Event Manager",
            "We hired Maya for our corporate event, and her close-up magic left everyone speechless. She was professional, engaging, and created an atmosphere of wonder. Worth every penny!",
        ),
        (
            "Jessica & David Chen",
            "Wedding Clients",
            "Sophia's aerial performance was the highlight of our wedding reception. Her grace and artistry created such a magical atmosphere. Our guests are still talking about it months later!",
        ),
        (
            "Daniel Martinez",
            "Festival Director",
            "Carlos and his fire show created the perfect atmosphere for our festival. His performance was both thrilling and safe, and working with Performance Compass made booking incredibly easy.",
        ),
    ];

    for (name, position, quote) in testimonials {
        let created = Repository::<testimonial::Model>::create(
            store,
            testimonial::Draft {
                name: text(name),
                position: nullable(position),
                text: text(quote),
                rating: Some(5),
                ..Default::default()
            },
        )
        .await?;

        Repository::<testimonial::Model>::update(
            store,
            &created.id,
            testimonial::Draft {
                is_approved: Some(true),
                ..Default::default()
            },
        )
        .await?;
    }
    Ok(())
}

async fn seed_achievements<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    Repository::<achievement::Model>::create(
        store,
        achievement::Draft {
            year: text("2024"),
            title: text("Jonglierweltmeister"),
            description: text("Gold in der Kategorie Teams beim IJA Championship mit dem Act \"Kings Gambit\""),
            is_active: Some(true),
        },
    )
    .await?;
    Ok(())
}

const ICON_TROPHY: &str = r#"<svg fill="currentColor" viewBox="0 0 24 24"><path d="M7 4h10v3a5 5 0 0 1-10 0V4zm-3 0h2v3a3 3 0 0 1-2-3zm14 0h2a3 3 0 0 1-2 3V4zM11 13h2v4h3v2H8v-2h3v-4z"/></svg>"#;
const ICON_TUNE: &str = r#"<svg fill="currentColor" viewBox="0 0 24 24"><path d="M4 6h10v2H4zm12 0h4v2h-4zM4 11h4v2H4zm6 0h10v2H10zM4 16h12v2H4zm14 0h2v2h-2z"/></svg>"#;
const ICON_BULB: &str = r#"<svg fill="currentColor" viewBox="0 0 24 24"><path d="M12 2a7 7 0 0 0-4 12.7V17h8v-2.3A7 7 0 0 0 12 2zM9 19h6v2H9z"/></svg>"#;
const ICON_CLOCK: &str = r#"<svg fill="currentColor" viewBox="0 0 24 24"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 5h-2v6l5 3 1-1.7-4-2.3z"/></svg>"#;
const ICON_GROUP: &str = r#"<svg fill="currentColor" viewBox="0 0 24 24"><circle cx="8" cy="8" r="3"/><circle cx="16" cy="8" r="3"/><path d="M2 19c0-3 3-5 6-5s6 2 6 5zm12 0c0-1.5-.5-2.8-1.4-3.8.8-.4 1.6-.6 2.4-.6 3 0 6 2 6 4.4z"/></svg>"#;
const ICON_SHIELD: &str = r#"<svg fill="currentColor" viewBox="0 0 24 24"><path d="M12 2 4 5v6c0 5 3.4 9.7 8 11 4.6-1.3 8-6 8-11V5z"/></svg>"#;

async fn seed_features<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    let features = [
        (
            "Weltmeister-Qualität",
            "Performances auf höchstem Niveau von einem mehrfachen Weltmeister im Jonglieren.",
            ICON_TROPHY,
        ),
        (
            "Individuelle Anpassung",
            "Jede Show wird speziell auf Ihre Veranstaltung, Ihr Publikum und Ihre Wünsche zugeschnitten.",
            ICON_TUNE,
        ),
        (
            "Innovation & Technik",
            "Modernste LED-Technik und innovative Choreographien für unvergessliche Erlebnisse.",
            ICON_BULB,
        ),
        (
            "Flexible Dauer",
            "Show-Längen von 8-20 Minuten, je nach Veranstaltungsformat und Ihren Anforderungen.",
            ICON_CLOCK,
        ),
        (
            "Alle Eventgrößen",
            "Von intimen Veranstaltungen mit 30 Gästen bis zu großen Events mit über 1000 Zuschauern.",
            ICON_GROUP,
        ),
        (
            "Professionell & Zuverlässig",
            "Pünktlich, professionell und mit kompletter technischer Ausstattung für Ihre Veranstaltung.",
            ICON_SHIELD,
        ),
    ];

    for (position, (title, description, icon)) in (1..).zip(features) {
        Repository::<feature::Model>::create(
            store,
            feature::Draft {
                title: text(title),
                description: text(description),
                icon_svg: text(icon),
                sort_order: Some(position),
                is_active: Some(true),
            },
        )
        .await?;
    }
    Ok(())
}

async fn seed_workshop_testimonials<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    let testimonials = [
        (
            "Frau Schmidt",
            "Schulleiterin",
            "Grundschule Am Markt",
            "Herr Preu hat unseren Projekttag zu einem unvergesslichen Erlebnis gemacht. Die Kinder waren vom ersten Moment an begeistert und haben mit Freude gelernt.",
        ),
        (
            "Herr Weber",
            "Sportlehrer",
            "Realschule Mitte",
            "Ein professionell durchgeführter Workshop! Julius vermittelt die Grundlagen des Jonglierens so verständlich, dass selbst ungeschickte Schüler schnell Erfolge erzielen.",
        ),
        (
            "Frau Müller",
            "Pädagogische Leitung",
            "Gymnasium Nord",
            "Besonders beeindruckend war, wie Julius auf jedes Kind eingegangen ist. Der Workshop hat nicht nur Spaß gemacht, sondern auch das Selbstvertrauen der Schüler gestärkt.",
        ),
    ];

    for (position, (name, role, company, quote)) in (1..).zip(testimonials) {
        Repository::<workshop_testimonial::Model>::create(
            store,
            workshop_testimonial::Draft {
                name: text(name),
                position: nullable(role),
                company: nullable(company),
                text: text(quote),
                rating: Some(5),
                is_active: Some(true),
                sort_order: Some(position),
            },
        )
        .await?;
    }
    Ok(())
}

async fn seed_reviews<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    let reviews = [
        (
            "Katrin Hofmann",
            "Ein Highlight unserer Firmenfeier",
            "Die LED-Show hat unsere Gäste restlos begeistert. Absolut professionell von der Planung bis zum Abbau.",
            "Firmenfeier",
            "München",
            "general",
        ),
        (
            "Thomas Berger",
            "Workshop mit Wow-Effekt",
            "Unser Team hat in zwei Stunden mehr gelacht als im ganzen Jahr. Ein perfektes Teambuilding.",
            "Workshop",
            "Augsburg",
            "workshop",
        ),
        (
            "Lena Fischer",
            "Sympathisch und unglaublich präzise",
            "Man merkt in jeder Sekunde, wie viel Training hinter dieser Leistung steckt.",
            "Gala",
            "Nürnberg",
            "about",
        ),
    ];

    for (name, title, content, service_type, location, category) in reviews {
        Repository::<review::Model>::create(
            store,
            review::Draft {
                name: text(name),
                rating: Some(5),
                title: text(title),
                content: text(content),
                service_type: nullable(service_type),
                location: nullable(location),
                category: text(category),
                is_approved: Some(true),
                ..Default::default()
            },
        )
        .await?;
    }
    Ok(())
}

async fn seed_acts<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    let acts = [
        (
            "Kings Gambit",
            "Eine spannende und innovative Leuchtkeulenjonglage, welche nicht nur die Jury der Jonglierweltmeisterschaft 2024 überzeugte, sondern auch die Sinne verzaubert!",
            "https://www.youtube.com/watch?v=qlctkxLUaPA",
            "/20240627-DSC03516.jpg",
            "gravitos",
            "3:12",
        ),
        (
            "Lucidor LED Juggling Act",
            "Ein faszinierender Solo-Act mit leuchtenden LED-Bällen und Keulen sowie einem interaktiven, programmierten Tor aus LED-Keulen.",
            "https://youtu.be/niDQsEosK0s",
            "/lucidor.jpg",
            "solo",
            "2:45",
        ),
        (
            "Amadeus Ring Jonglage",
            "Elegante Ringjonglage zu Modern-Klassischer Musik. Eine beeindruckende Fusion von Präzision und Eleganz.",
            "https://www.youtube.com/watch?v=pOl0FctuU_I",
            "",
            "gravitos",
            "4:21",
        ),
        (
            "Gravitos Showblock",
            "Das Beste von Gravitos in einem spektakulären 30-minütigen Showblock mit Comedy, Technik und purer guter Laune.",
            "https://www.youtube.com/watch?v=Mk-7iKexjlU",
            "/20240627-DSC03185.jpg",
            "gravitos",
            "6:18",
        ),
        (
            "Lightpainting",
            "Die Evolution der Leuchtperformance: Durch bewegte Glowobjekte und Echtzeit-Videoeffekte entstehen dynamische Lichtspuren auf der Projektionsfläche.",
            "https://www.youtube.com/watch?v=Zm_oy1m-g3k",
            "/lightpainting.jpeg",
            "jonglissimo",
            "1:52",
        ),
        (
            "Galactica",
            "Ein spektakulärer LED-Showact mit atemberaubenden Visuals, der Sterne und Energiespuren am Nachthimmel entstehen lässt.",
            "https://www.youtube.com/watch?v=0s_BG3b1yDE",
            "/galactica.jpg",
            "jonglissimo",
            "4:15",
        ),
        (
            "Nightlight",
            "Eine innovative LED-Jonglage-Performance mit modernstem Equipment und einem spektakulären 19-Keulen-Finale.",
            "https://www.youtube.com/watch?v=IEpe7jgJSO4",
            "/nightlight.jpg",
            "jonglissimo",
            "5:23",
        ),
        (
            "Radiance",
            "Abendfüllende Theatershow: Faszinierende Lichtphänomene der Natur erscheinen mit LED-Jonglage und kunstvollen Lichteffekten in neuem Glanz.",
            "https://www.youtube.com/watch?v=FYGmvIhtRiQ",
            "/radiance.jpg",
            "jonglissimo",
            "60:00",
        ),
    ];

    for (title, description, video_url, image_url, category, duration) in acts {
        Repository::<act::Model>::create(
            store,
            act::Draft {
                title: text(title),
                description: text(description),
                video_url: text(video_url),
                image_url: text(image_url),
                category: text(category),
                duration: text(duration),
                is_active: Some(true),
            },
        )
        .await?;
    }
    Ok(())
}

async fn seed_media<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    let items = [
        (
            "Performance bei Gala-Event",
            "Spektakuläre LED-Jonglage Show",
            "/JPI_3297.jpg",
            "performance",
            "Gala",
            "2024-06-15",
        ),
        (
            "Workshop Teambuilding",
            "Kreatives Teambuilding mit Jonglage",
            "/JPI_2779.jpg",
            "workshop",
            "Workshop",
            "2024-05-20",
        ),
    ];

    for (title, description, image_url, category, event_type, event_date) in items {
        Repository::<media_item::Model>::create(
            store,
            media_item::Draft {
                title: text(title),
                description: text(description),
                image_url: text(image_url),
                category: text(category),
                event_type: text(event_type),
                event_date: text(event_date),
                is_active: Some(true),
            },
        )
        .await?;
    }
    Ok(())
}

async fn seed_news<S: ContentStore + ?Sized>(store: &S) -> StoreResult<()> {
    let posts = [
        (
            "Erfolgreiche Performance beim Stadtfest München",
            "Ein unvergesslicher Abend mit begeistertem Publikum! Die LED-Jonglage war der absolute Höhepunkt des Events.",
            "/20240627-DSC03407.jpg",
            "2024-07-01",
        ),
        (
            "Lucidor LED Juggling Act",
            "Ein faszinierender Solo-Act mit leuchtenden LED-Bällen und Keulen sowie einem interaktiven, programmierten Tor aus LED-Keulen.",
            "/20240627-DSC03436.jpg",
            "2024-06-28",
        ),
        (
            "Buchungen für 2025 jetzt möglich",
            "Die Terminplanung für 2025 ist eröffnet! Sichern Sie sich frühzeitig Ihren Wunschtermin für unvergessliche Shows.",
            "/20240627-DSC03516.jpg",
            "2024-06-20",
        ),
        (
            "Corporate Event bei BMW erfolgreich abgeschlossen",
            "Eine spektakuläre Show für 500 Gäste - perfekte Unterhaltung für Firmenveranstaltungen jeder Größe.",
            "/JPI_3313.jpg",
            "2024-06-12",
        ),
        (
            "Pressebericht: 'Jonglage neu definiert'",
            "Die Süddeutsche Zeitung berichtet über innovative Jonglage-Techniken und die Zukunft der Zirkuskunst.",
            "/Juli.jpg",
            "2024-06-05",
        ),
        (
            "Duo-Performance: Synchronisation auf höchstem Niveau",
            "Zwei Künstler, eine Vision - erleben Sie perfekte Harmonie in der Jonglage-Performance.",
            "/JPI_2779.jpg",
            "2024-05-30",
        ),
    ];

    for (title, content, image_url, published_at) in posts {
        let excerpt = content.split_terminator(['!', '.']).next().unwrap_or(content);
        Repository::<news_post::Model>::create(
            store,
            news_post::Draft {
                title: text(title),
                content: text(content),
                excerpt: text(excerpt),
                image_url: text(image_url),
                published_at: text(published_at),
                is_active: Some(true),
            },
        )
        .await?;
    }
    Ok(())
}
