mod common;

use showcase_store::backend::{factory, ContentStore, Repository};
use showcase_store::config::{BackendKind, StorageConfig};
use showcase_store::entities::{
    achievement, act, contact_submission, feature, gallery_item, media_item, news_post, performer, review, service,
    testimonial, workshop_testimonial,
};
use showcase_store::MemoryStore;

async fn counts<S: ContentStore + ?Sized>(store: &S) -> Vec<usize> {
    vec![
        Repository::<performer::Model>::get_all(store).await.unwrap().len(),
        Repository::<service::Model>::get_all(store).await.unwrap().len(),
        Repository::<gallery_item::Model>::get_all(store).await.unwrap().len(),
        Repository::<testimonial::Model>::get_all(store).await.unwrap().len(),
        Repository::<achievement::Model>::get_all(store).await.unwrap().len(),
        Repository::<feature::Model>::get_all(store).await.unwrap().len(),
        Repository::<workshop_testimonial::Model>::get_all(store).await.unwrap().len(),
        Repository::<review::Model>::get_all(store).await.unwrap().len(),
        Repository::<act::Model>::get_all(store).await.unwrap().len(),
        Repository::<media_item::Model>::get_all(store).await.unwrap().len(),
        Repository::<news_post::Model>::get_all(store).await.unwrap().len(),
        Repository::<contact_submission::Model>::get_all(store).await.unwrap().len(),
    ]
}

const SAMPLE_COUNTS: [usize; 12] = [4, 4, 8, 4, 1, 6, 3, 3, 8, 2, 6, 0];

#[tokio::test]
async fn test_memory_store_seeds_sample_catalogue() {
    let store = MemoryStore::seeded().await.unwrap();
    assert_eq!(counts(&store).await, SAMPLE_COUNTS);

    // Seeded testimonials and reviews are approved and therefore public
    assert_eq!(Repository::<testimonial::Model>::get_all_visible(&store).await.unwrap().len(), 4);
    assert_eq!(Repository::<review::Model>::get_all_visible(&store).await.unwrap().len(), 3);

    let orders: Vec<String> = Repository::<feature::Model>::get_all_visible(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|feature| feature.sort_order.to_string())
        .collect();
    assert_eq!(orders, vec!["1", "2", "3", "4", "5", "6"]);
}

#[tokio::test]
async fn test_seeded_act_without_image_uses_video_thumbnail() {
    let store = MemoryStore::seeded().await.unwrap();
    let act = Repository::<act::Model>::get(&store, &"amadeus-ring-jonglage".to_string())
        .await
        .unwrap()
        .expect("seeded act should exist");

    assert_eq!(act.video_url, "https://www.youtube.com/embed/pOl0FctuU_I");
    assert_eq!(act.image_url, "https://img.youtube.com/vi/pOl0FctuU_I/maxresdefault.jpg");
}

#[tokio::test]
async fn test_database_seeds_only_once() {
    let store = common::database_store().await;

    assert!(store.seed_if_empty().await.unwrap(), "fresh database should be seeded");
    assert_eq!(counts(&store).await, SAMPLE_COUNTS);

    assert!(!store.seed_if_empty().await.unwrap(), "second start must not seed again");
    assert_eq!(counts(&store).await, SAMPLE_COUNTS);
}

#[tokio::test]
async fn test_emptied_database_is_not_reseeded() {
    let store = common::database_store().await;
    store.seed_if_empty().await.unwrap();

    for achievement in Repository::<achievement::Model>::get_all(&store).await.unwrap() {
        Repository::<achievement::Model>::delete(&store, &achievement.id).await.unwrap();
    }
    assert!(!store.seed_if_empty().await.unwrap());
    assert!(Repository::<achievement::Model>::get_all(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_database_survives_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("showcase.db").display());
    let config = StorageConfig {
        backend: BackendKind::Database,
        database_url: url,
        seed_sample_data: true,
    };

    let store = factory::open(&config).await.unwrap();
    let created = Repository::<achievement::Model>::create(&*store, achievement::Draft::default())
        .await
        .unwrap();
    assert_eq!(created.id, 2);
    drop(store);

    let reopened = factory::open(&config).await.unwrap();
    let achievements = Repository::<achievement::Model>::get_all(&*reopened).await.unwrap();
    assert_eq!(achievements.len(), 2, "reopening must neither lose nor reseed records");
    assert_eq!(achievements[1], created);
}

#[tokio::test]
async fn test_factory_builds_unseeded_memory_store() {
    let config = StorageConfig {
        backend: BackendKind::Memory,
        seed_sample_data: false,
        ..Default::default()
    };

    let store = factory::open(&config).await.unwrap();
    assert_eq!(counts(&*store).await, [0; 12]);
}
