//! Integration tests for the playlists vertical slice
//!
//! Covers:
//! - CRUD with user ownership
//! - The one-entry-per-song uniqueness invariant
//! - Conflated not-found / access-denied reporting on write paths
//! - Entry ordering (newest added first)
//! - Public/private read access for entries

mod test_helpers;

use redtunes_core::{types::*, CoreError};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;

    let playlist = redtunes_storage::playlists::create(
        pool,
        CreatePlaylist {
            name: "Road Trip".to_string(),
            description: Some("Songs for the highway".to_string()),
            is_public: false,
            owner_id: user_id.clone(),
        },
    )
    .await
    .expect("Failed to create playlist");

    assert_eq!(playlist.name, "Road Trip");
    assert_eq!(
        playlist.description,
        Some("Songs for the highway".to_string())
    );
    assert_eq!(playlist.owner_id, user_id);
    assert!(!playlist.is_public);

    let retrieved = redtunes_storage::playlists::get_by_id(pool, &playlist.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(retrieved.id, playlist.id);
    assert_eq!(retrieved.name, "Road Trip");
}

#[tokio::test]
async fn test_duplicate_names_allowed() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;

    // No name collision check; both creates succeed
    let p1 = create_test_playlist(pool, "Mix", user_id.clone()).await;
    let p2 = create_test_playlist(pool, "Mix", user_id.clone()).await;
    assert_ne!(p1, p2);
}

#[tokio::test]
async fn test_list_owned_playlists_scoped_and_ordered() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user1 = create_test_user(pool, "user1").await;
    let user2 = create_test_user(pool, "user2").await;

    create_test_playlist(pool, "First", user1.clone()).await;
    create_test_playlist(pool, "Second", user1.clone()).await;
    create_test_playlist(pool, "Other", user2).await;

    let playlists = redtunes_storage::playlists::list_owned(pool, &user1)
        .await
        .unwrap();

    assert_eq!(playlists.len(), 2);
    assert_eq!(playlists[0].name, "First");
    assert_eq!(playlists[1].name, "Second");
    for playlist in &playlists {
        assert_eq!(playlist.owner_id, user1);
    }
}

#[tokio::test]
async fn test_add_entry_then_list_contains_exactly_one() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let playlist_id = create_test_playlist(pool, "Road Trip", user_id.clone()).await;

    let entry =
        redtunes_storage::playlists::add_entry(pool, &playlist_id, entry_for("yt123"), &user_id)
            .await
            .expect("Failed to add entry");

    let entries = redtunes_storage::playlists::list_entries(pool, &playlist_id, Some(&user_id))
        .await
        .unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, entry.id);
    assert_eq!(entries[0].video_id, VideoId::new("yt123"));
    assert_eq!(entries[0].duration, "PT3M30S");
}

#[tokio::test]
async fn test_entries_listed_newest_first() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let playlist_id = create_test_playlist(pool, "Ordered", user_id.clone()).await;

    for video in ["a1", "a2", "a3"] {
        redtunes_storage::playlists::add_entry(pool, &playlist_id, entry_for(video), &user_id)
            .await
            .unwrap();
    }

    let entries = redtunes_storage::playlists::list_entries(pool, &playlist_id, Some(&user_id))
        .await
        .unwrap();

    let order: Vec<&str> = entries.iter().map(|e| e.video_id.as_str()).collect();
    assert_eq!(order, vec!["a3", "a2", "a1"]);
}

#[tokio::test]
async fn test_duplicate_entry_rejected_and_count_unchanged() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let playlist_id = create_test_playlist(pool, "Road Trip", user_id.clone()).await;

    redtunes_storage::playlists::add_entry(pool, &playlist_id, entry_for("yt123"), &user_id)
        .await
        .unwrap();

    let result =
        redtunes_storage::playlists::add_entry(pool, &playlist_id, entry_for("yt123"), &user_id)
            .await;

    assert!(matches!(result, Err(CoreError::DuplicateEntry { .. })));

    let entries = redtunes_storage::playlists::list_entries(pool, &playlist_id, Some(&user_id))
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_same_song_allowed_in_different_playlists() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let p1 = create_test_playlist(pool, "One", user_id.clone()).await;
    let p2 = create_test_playlist(pool, "Two", user_id.clone()).await;

    redtunes_storage::playlists::add_entry(pool, &p1, entry_for("yt123"), &user_id)
        .await
        .unwrap();
    redtunes_storage::playlists::add_entry(pool, &p2, entry_for("yt123"), &user_id)
        .await
        .expect("Uniqueness is per playlist, not global");
}

#[tokio::test]
async fn test_add_entry_to_foreign_playlist_conflated() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = create_test_user(pool, "owner").await;
    let intruder = create_test_user(pool, "intruder").await;
    let playlist_id = create_test_playlist(pool, "Private", owner).await;

    // Foreign playlist and missing playlist report identically
    let foreign =
        redtunes_storage::playlists::add_entry(pool, &playlist_id, entry_for("yt123"), &intruder)
            .await;
    assert!(matches!(foreign, Err(CoreError::NotFoundOrForbidden)));

    let missing = redtunes_storage::playlists::add_entry(
        pool,
        &PlaylistId::new("no-such-playlist"),
        entry_for("yt123"),
        &intruder,
    )
    .await;
    assert!(matches!(missing, Err(CoreError::NotFoundOrForbidden)));
}

#[tokio::test]
async fn test_remove_entry_by_non_owner_forbidden() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = create_test_user(pool, "owner").await;
    let intruder = create_test_user(pool, "intruder").await;
    let playlist_id = create_test_playlist(pool, "Private", owner.clone()).await;

    let entry =
        redtunes_storage::playlists::add_entry(pool, &playlist_id, entry_for("yt123"), &owner)
            .await
            .unwrap();

    let result = redtunes_storage::playlists::remove_entry(pool, &entry.id, &intruder).await;
    assert!(matches!(result, Err(CoreError::Forbidden)));

    // Entry left intact
    let entries = redtunes_storage::playlists::list_entries(pool, &playlist_id, Some(&owner))
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_remove_missing_entry_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;

    let result =
        redtunes_storage::playlists::remove_entry(pool, &EntryId::new("no-such-entry"), &user_id)
            .await;

    assert!(matches!(result, Err(CoreError::EntryNotFound(_))));
}

#[tokio::test]
async fn test_remove_entry_by_owner() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let playlist_id = create_test_playlist(pool, "Mix", user_id.clone()).await;

    let entry =
        redtunes_storage::playlists::add_entry(pool, &playlist_id, entry_for("yt123"), &user_id)
            .await
            .unwrap();

    redtunes_storage::playlists::remove_entry(pool, &entry.id, &user_id)
        .await
        .expect("Owner should be able to remove");

    let entries = redtunes_storage::playlists::list_entries(pool, &playlist_id, Some(&user_id))
        .await
        .unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_private_entries_hidden_from_non_owners() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = create_test_user(pool, "owner").await;
    let other = create_test_user(pool, "other").await;
    let playlist_id = create_test_playlist(pool, "Private", owner.clone()).await;

    redtunes_storage::playlists::add_entry(pool, &playlist_id, entry_for("yt123"), &owner)
        .await
        .unwrap();

    // Other users and anonymous viewers are both rejected
    let as_other =
        redtunes_storage::playlists::list_entries(pool, &playlist_id, Some(&other)).await;
    assert!(matches!(as_other, Err(CoreError::NotFoundOrForbidden)));

    let anonymous = redtunes_storage::playlists::list_entries(pool, &playlist_id, None).await;
    assert!(matches!(anonymous, Err(CoreError::NotFoundOrForbidden)));
}

#[tokio::test]
async fn test_public_entries_readable_by_anyone() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = create_test_user(pool, "owner").await;

    let playlist = redtunes_storage::playlists::create(
        pool,
        CreatePlaylist {
            name: "Shared Vibes".to_string(),
            description: None,
            is_public: true,
            owner_id: owner.clone(),
        },
    )
    .await
    .unwrap();

    redtunes_storage::playlists::add_entry(pool, &playlist.id, entry_for("yt123"), &owner)
        .await
        .unwrap();

    let anonymous = redtunes_storage::playlists::list_entries(pool, &playlist.id, None)
        .await
        .expect("Public playlists are readable without identity");
    assert_eq!(anonymous.len(), 1);
}

#[tokio::test]
async fn test_delete_playlist_cascades_entries() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user_id = create_test_user(pool, "testuser").await;
    let playlist_id = create_test_playlist(pool, "To Delete", user_id.clone()).await;

    redtunes_storage::playlists::add_entry(pool, &playlist_id, entry_for("yt123"), &user_id)
        .await
        .unwrap();

    redtunes_storage::playlists::delete(pool, &playlist_id, &user_id)
        .await
        .expect("Failed to delete playlist");

    let result = redtunes_storage::playlists::get_by_id(pool, &playlist_id)
        .await
        .unwrap();
    assert!(result.is_none());

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM playlist_entries WHERE playlist_id = ?")
            .bind(&playlist_id)
            .fetch_one(pool)
            .await
            .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_only_owner_can_delete_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let owner = create_test_user(pool, "owner").await;
    let intruder = create_test_user(pool, "intruder").await;
    let playlist_id = create_test_playlist(pool, "Mine", owner.clone()).await;

    let result = redtunes_storage::playlists::delete(pool, &playlist_id, &intruder).await;
    assert!(matches!(result, Err(CoreError::Forbidden)));

    redtunes_storage::playlists::delete(pool, &playlist_id, &owner)
        .await
        .expect("Owner should be able to delete");
}
