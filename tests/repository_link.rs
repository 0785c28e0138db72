mod common;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use url_alias::domain::entities::NewLink;
use url_alias::domain::repositories::LinkRepository;
use url_alias::error::AppError;
use url_alias::infrastructure::persistence::PgLinkRepository;

fn repo(pool: PgPool) -> PgLinkRepository {
    PgLinkRepository::new(Arc::new(pool))
}

fn new_link(code: &str, url: &str, owner_id: i64) -> NewLink {
    let created_at = Utc::now();
    NewLink {
        short_code: code.to_string(),
        target_url: url.to_string(),
        owner_id,
        created_at,
        expires_at: created_at + Duration::hours(24),
    }
}

#[sqlx::test]
async fn test_insert_and_find_round_trip(pool: PgPool) {
    let owner = common::insert_test_user(&pool, "alice").await;
    let repo = repo(pool);

    let inserted = repo
        .insert(new_link("abc123XY", "https://example.com/", owner))
        .await
        .unwrap();

    assert!(inserted.is_active);
    assert_eq!(inserted.click_count, 0);
    assert_eq!(inserted.owner_id, owner);

    let found = repo.find_by_code("abc123XY").await.unwrap().unwrap();
    assert_eq!(found.id, inserted.id);
    assert_eq!(found.target_url, "https://example.com/");
}

#[sqlx::test]
async fn test_duplicate_code_is_a_conflict(pool: PgPool) {
    let owner = common::insert_test_user(&pool, "alice").await;
    let repo = repo(pool);

    repo.insert(new_link("abc123XY", "https://example.com/1", owner))
        .await
        .unwrap();

    let err = repo
        .insert(new_link("abc123XY", "https://example.com/2", owner))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_deactivate_updates_and_returns_row(pool: PgPool) {
    let owner = common::insert_test_user(&pool, "alice").await;
    let repo = repo(pool);

    repo.insert(new_link("abc123XY", "https://example.com/", owner))
        .await
        .unwrap();

    let deactivated = repo.deactivate("abc123XY").await.unwrap().unwrap();
    assert!(!deactivated.is_active);

    assert!(repo.deactivate("missing1").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_register_click_increments(pool: PgPool) {
    let owner = common::insert_test_user(&pool, "alice").await;
    let repo = repo(pool);

    repo.insert(new_link("abc123XY", "https://example.com/", owner))
        .await
        .unwrap();

    let after_first = repo.register_click("abc123XY").await.unwrap().unwrap();
    assert_eq!(after_first.click_count, 1);

    let after_second = repo.register_click("abc123XY").await.unwrap().unwrap();
    assert_eq!(after_second.click_count, 2);

    assert!(repo.register_click("missing1").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_register_click_is_atomic_under_concurrency(pool: PgPool) {
    let owner = common::insert_test_user(&pool, "alice").await;
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));

    repo.insert(new_link("abc123XY", "https://example.com/", owner))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.register_click("abc123XY").await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Single-statement increments: no lost updates.
    assert_eq!(common::get_click_count(&pool, "abc123XY").await, 20);
}

#[sqlx::test]
async fn test_list_by_owner_filters_and_orders(pool: PgPool) {
    let alice = common::insert_test_user(&pool, "alice").await;
    let bob = common::insert_test_user(&pool, "bob").await;
    let repo = repo(pool.clone());

    common::insert_test_link(&pool, "aaaaaaa1", "https://example.com/1", alice).await;
    common::insert_inactive_link(&pool, "aaaaaaa2", "https://example.com/2", alice).await;
    common::insert_test_link(&pool, "aaaaaaa3", "https://example.com/3", alice).await;
    common::insert_test_link(&pool, "bbbbbbb1", "https://example.com/b", bob).await;

    let all = repo.list_by_owner(alice, None, 0, 10).await.unwrap();
    let codes: Vec<&str> = all.iter().map(|l| l.short_code.as_str()).collect();
    assert_eq!(codes, vec!["aaaaaaa1", "aaaaaaa2", "aaaaaaa3"]);

    let active = repo.list_by_owner(alice, Some(true), 0, 10).await.unwrap();
    assert_eq!(active.len(), 2);

    let inactive = repo.list_by_owner(alice, Some(false), 0, 10).await.unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].short_code, "aaaaaaa2");

    let paged = repo.list_by_owner(alice, None, 1, 1).await.unwrap();
    assert_eq!(paged.len(), 1);
    assert_eq!(paged[0].short_code, "aaaaaaa2");
}

#[sqlx::test]
async fn test_stats_by_owner_projection(pool: PgPool) {
    let alice = common::insert_test_user(&pool, "alice").await;
    let repo = repo(pool.clone());

    common::insert_test_link(&pool, "aaaaaaa1", "https://example.com/1", alice).await;
    common::insert_expired_link(&pool, "aaaaaaa2", "https://example.com/2", alice).await;
    repo.register_click("aaaaaaa1").await.unwrap();

    let stats = repo.stats_by_owner(alice).await.unwrap();
    assert_eq!(stats.len(), 2);

    assert_eq!(stats[0].short_code, "aaaaaaa1");
    assert_eq!(stats[0].target_url, "https://example.com/1");
    assert_eq!(stats[0].click_count, 1);

    // Expired links stay in the projection.
    assert_eq!(stats[1].short_code, "aaaaaaa2");
    assert_eq!(stats[1].click_count, 0);
    assert!(stats[1].expires_at < Utc::now());
}
