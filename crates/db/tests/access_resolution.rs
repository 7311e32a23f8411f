//! Integration tests for access resolution.
//!
//! Exercises `ProjectRepo::visible_ids` / `has_access` against a real
//! database: ownership, membership, the owner-and-member dedup case, and
//! ingest-secret resolution.

use sqlx::PgPool;

use pulse_core::secrets::generate_ingest_secret;
use pulse_db::models::project::{CreateProject, Project};
use pulse_db::repositories::{ProjectRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(pool, email).await.unwrap().id
}

/// Create a project and return it together with its plaintext secret.
async fn new_project(pool: &PgPool, owner_user_id: i64, name: &str) -> (Project, String) {
    let secret = generate_ingest_secret();
    let project = ProjectRepo::create(
        pool,
        &CreateProject {
            name: name.to_string(),
            owner_user_id,
            ingest_secret_hash: secret.hash,
            ingest_secret_prefix: secret.prefix,
        },
    )
    .await
    .unwrap();
    (project, secret.plaintext)
}

// ---------------------------------------------------------------------------
// Test: visible_ids returns owned projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn owner_sees_owned_projects(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    let (a, _) = new_project(&pool, owner, "Alpha").await;
    let (b, _) = new_project(&pool, owner, "Beta").await;

    let visible = ProjectRepo::visible_ids(&pool, owner).await.unwrap();
    assert_eq!(visible, vec![a.id, b.id]);
}

// ---------------------------------------------------------------------------
// Test: visible_ids includes memberships
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn member_sees_member_projects(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    let member = new_user(&pool, "member@example.com").await;
    let (project, _) = new_project(&pool, owner, "Shared").await;

    ProjectRepo::add_member(&pool, project.id, member).await.unwrap();

    let visible = ProjectRepo::visible_ids(&pool, member).await.unwrap();
    assert_eq!(visible, vec![project.id]);
}

// ---------------------------------------------------------------------------
// Test: owner who is also a member counts once
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn owner_and_member_deduplicates(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    let (project, _) = new_project(&pool, owner, "Mine").await;

    // Redundant membership row for the owner.
    ProjectRepo::add_member(&pool, project.id, owner).await.unwrap();

    let visible = ProjectRepo::visible_ids(&pool, owner).await.unwrap();
    assert_eq!(visible, vec![project.id], "project must appear exactly once");
}

// ---------------------------------------------------------------------------
// Test: foreign projects are invisible
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn foreign_projects_are_invisible(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    let stranger = new_user(&pool, "stranger@example.com").await;
    let (project, _) = new_project(&pool, owner, "Private").await;

    let visible = ProjectRepo::visible_ids(&pool, stranger).await.unwrap();
    assert!(visible.is_empty());

    let access = ProjectRepo::has_access(&pool, stranger, project.id)
        .await
        .unwrap();
    assert!(!access);
}

// ---------------------------------------------------------------------------
// Test: has_access for owner and member
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn has_access_covers_owner_and_member(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    let member = new_user(&pool, "member@example.com").await;
    let (project, _) = new_project(&pool, owner, "Shared").await;
    ProjectRepo::add_member(&pool, project.id, member).await.unwrap();

    assert!(ProjectRepo::has_access(&pool, owner, project.id).await.unwrap());
    assert!(ProjectRepo::has_access(&pool, member, project.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: add_member is idempotent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn add_member_twice_is_idempotent(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    let member = new_user(&pool, "member@example.com").await;
    let (project, _) = new_project(&pool, owner, "Shared").await;

    ProjectRepo::add_member(&pool, project.id, member).await.unwrap();
    ProjectRepo::add_member(&pool, project.id, member).await.unwrap();

    let visible = ProjectRepo::visible_ids(&pool, member).await.unwrap();
    assert_eq!(visible, vec![project.id]);
}

// ---------------------------------------------------------------------------
// Test: ingest secret resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn secret_hash_resolves_to_project(pool: PgPool) {
    let owner = new_user(&pool, "owner@example.com").await;
    let (project, plaintext) = new_project(&pool, owner, "Keyed").await;

    let hash = pulse_core::secrets::hash_ingest_secret(&plaintext);
    let found = ProjectRepo::find_by_secret_hash(&pool, &hash)
        .await
        .unwrap()
        .expect("secret should resolve");
    assert_eq!(found.id, project.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_secret_hash_resolves_to_none(pool: PgPool) {
    let hash = pulse_core::secrets::hash_ingest_secret("not-a-real-secret");
    let found = ProjectRepo::find_by_secret_hash(&pool, &hash).await.unwrap();
    assert!(found.is_none());
}
