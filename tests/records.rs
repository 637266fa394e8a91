mod common;

use chrono::Utc;

use showcase_backend::errors::AppError;
use showcase_backend::models::profile::Profile;
use showcase_backend::storage::{self, MediaArea};
use showcase_backend::store::{documents, gallery, profiles};
use showcase_backend::store::documents::NewDocument;
use showcase_backend::store::gallery::{GalleryQuery, NewGalleryImage};
use showcase_backend::store::profiles::{NewProfile, ProfileChanges, ProfileQuery};

#[test]
fn profile_displays_as_its_name() {
    let now = Utc::now();
    let profile = Profile {
        id: 1,
        name: "Test User".to_string(),
        bio: None,
        profile_picture: None,
        created_at: now,
        updated_at: now,
    };
    assert_eq!(profile.to_string(), "Test User");
}

#[actix_web::test]
async fn create_profile_and_look_it_up() {
    let pool = common::test_pool().await;

    let created = profiles::insert(
        &pool,
        NewProfile {
            name: "Test User".to_string(),
            bio: Some("Test bio".to_string()),
            profile_picture: None,
        },
    )
    .await
    .unwrap();

    let fetched = profiles::get(&pool, created.id).await.unwrap();
    assert_eq!(fetched.name, "Test User");
    assert_eq!(fetched.bio.as_deref(), Some("Test bio"));
    assert!(fetched.updated_at >= fetched.created_at);
}

#[actix_web::test]
async fn create_document_with_uploaded_file() {
    let pool = common::test_pool().await;
    let media = tempfile::tempdir().unwrap();

    let path = storage::save_in(media.path(), MediaArea::Documents, b"file content")
        .await
        .unwrap();
    assert!(path.starts_with("documents/"));
    assert!(media.path().join(&path).exists());

    let document = documents::insert(
        &pool,
        NewDocument {
            title: "Test Document".to_string(),
            description: None,
            file: path,
        },
    )
    .await
    .unwrap();

    assert_eq!(document.title, "Test Document");
    assert!(!document.file.is_empty());
}

#[actix_web::test]
async fn gallery_image_is_not_featured_by_default() {
    let pool = common::test_pool().await;
    let media = tempfile::tempdir().unwrap();

    let path = storage::save_in(media.path(), MediaArea::Gallery, b"image content")
        .await
        .unwrap();
    assert!(path.starts_with("gallery/"));

    let image = gallery::insert(
        &pool,
        NewGalleryImage {
            title: "Test Image".to_string(),
            image: path,
            caption: None,
            is_featured: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(image.title, "Test Image");
    assert!(!image.is_featured);
}

#[actix_web::test]
async fn featured_images_list_before_newer_unfeatured_ones() {
    let pool = common::test_pool().await;

    let featured = gallery::insert(
        &pool,
        NewGalleryImage {
            title: "Older featured".to_string(),
            image: "gallery/2024/01/a.jpg".to_string(),
            caption: None,
            is_featured: Some(true),
        },
    )
    .await
    .unwrap();

    // Inserted later, so its uploaded_at is newer.
    let plain = gallery::insert(
        &pool,
        NewGalleryImage {
            title: "Newer plain".to_string(),
            image: "gallery/2024/02/b.jpg".to_string(),
            caption: None,
            is_featured: None,
        },
    )
    .await
    .unwrap();
    assert!(plain.uploaded_at >= featured.uploaded_at);

    let listed = gallery::list(&pool, 12, 0).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, featured.id);
    assert_eq!(listed[1].id, plain.id);
}

#[actix_web::test]
async fn rejects_missing_and_oversized_required_text() {
    let pool = common::test_pool().await;

    let empty = profiles::insert(
        &pool,
        NewProfile { name: "   ".to_string(), bio: None, profile_picture: None },
    )
    .await;
    assert!(matches!(empty, Err(AppError::Validation(_))));

    let oversized = profiles::insert(
        &pool,
        NewProfile { name: "x".repeat(201), bio: None, profile_picture: None },
    )
    .await;
    assert!(matches!(oversized, Err(AppError::Validation(_))));

    let missing_file = documents::insert(
        &pool,
        NewDocument { title: "No file".to_string(), description: None, file: String::new() },
    )
    .await;
    assert!(matches!(missing_file, Err(AppError::Validation(_))));
}

#[actix_web::test]
async fn update_touches_updated_at_and_absent_ids_are_not_found() {
    let pool = common::test_pool().await;

    let created = profiles::insert(
        &pool,
        NewProfile { name: "Before".to_string(), bio: None, profile_picture: None },
    )
    .await
    .unwrap();

    let updated = profiles::update(
        &pool,
        created.id,
        ProfileChanges { name: Some("After".to_string()), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(updated.name, "After");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let missing_update = profiles::update(&pool, 9999, ProfileChanges::default()).await;
    assert!(matches!(missing_update, Err(AppError::NotFound(_))));

    let missing_delete = profiles::delete(&pool, 9999).await;
    assert!(matches!(missing_delete, Err(AppError::NotFound(_))));

    profiles::delete(&pool, created.id).await.unwrap();
    let gone = profiles::get(&pool, created.id).await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));
}

#[actix_web::test]
async fn search_matches_substrings_case_insensitively() {
    let pool = common::test_pool().await;

    profiles::insert(
        &pool,
        NewProfile {
            name: "Alice".to_string(),
            bio: Some("Keeps bees".to_string()),
            profile_picture: None,
        },
    )
    .await
    .unwrap();
    profiles::insert(
        &pool,
        NewProfile { name: "Bob".to_string(), bio: None, profile_picture: None },
    )
    .await
    .unwrap();

    let by_name = profiles::search(
        &pool,
        &ProfileQuery { q: Some("ALI".to_string()), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Alice");

    // bio is searched too
    let by_bio = profiles::search(
        &pool,
        &ProfileQuery { q: Some("bees".to_string()), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(by_bio.len(), 1);

    let none = profiles::search(
        &pool,
        &ProfileQuery { q: Some("zzz".to_string()), ..Default::default() },
    )
    .await
    .unwrap();
    assert!(none.is_empty());
}

#[actix_web::test]
async fn search_treats_like_wildcards_as_literal_text() {
    let pool = common::test_pool().await;

    profiles::insert(
        &pool,
        NewProfile { name: "Charlie".to_string(), bio: None, profile_picture: None },
    )
    .await
    .unwrap();

    // "_" and "%" in the term must not act as wildcards
    let wildcards = profiles::search(
        &pool,
        &ProfileQuery { q: Some("C_a%e".to_string()), ..Default::default() },
    )
    .await
    .unwrap();
    assert!(wildcards.is_empty());

    profiles::insert(
        &pool,
        NewProfile {
            name: "Progress report".to_string(),
            bio: Some("100% complete".to_string()),
            profile_picture: None,
        },
    )
    .await
    .unwrap();

    let literal = profiles::search(
        &pool,
        &ProfileQuery { q: Some("100%".to_string()), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].name, "Progress report");
}

#[actix_web::test]
async fn gallery_featured_filter_and_inline_toggle() {
    let pool = common::test_pool().await;

    let first = gallery::insert(
        &pool,
        NewGalleryImage {
            title: "First".to_string(),
            image: "gallery/2024/01/a.jpg".to_string(),
            caption: Some("sunset over water".to_string()),
            is_featured: None,
        },
    )
    .await
    .unwrap();
    gallery::insert(
        &pool,
        NewGalleryImage {
            title: "Second".to_string(),
            image: "gallery/2024/01/b.jpg".to_string(),
            caption: None,
            is_featured: None,
        },
    )
    .await
    .unwrap();

    let toggled = gallery::set_featured(&pool, first.id, true).await.unwrap();
    assert!(toggled.is_featured);
    // nothing else changed
    assert_eq!(toggled.title, first.title);
    assert_eq!(toggled.uploaded_at, first.uploaded_at);

    let featured_only = gallery::search(
        &pool,
        &GalleryQuery { featured: Some(true), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(featured_only.len(), 1);
    assert_eq!(featured_only[0].id, first.id);

    // caption is searched too
    let by_caption = gallery::search(
        &pool,
        &GalleryQuery { q: Some("SUNSET".to_string()), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(by_caption.len(), 1);

    let missing = gallery::set_featured(&pool, 9999, true).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}
