//! Integration tests for casting call persistence and the public listing.
//!
//! Exercises the repository layer against a real database:
//! - Pending submissions never appear in the approved listing
//! - Approval makes a call visible, ordered by creation time
//! - Category, gender, age, and free-text filters
//! - Full-page pagination edge case
//! - Admin queue join, counts, verification, and delete cascade

use castboard_core::casting::{
    category_filter, gender_filter, has_more, PAGE_SIZE, STATUS_APPROVED, STATUS_PENDING,
    STATUS_REJECTED,
};
use castboard_core::search::contains_pattern;
use castboard_db::models::casting_call::{CastingCallFilter, CreateCastingCall};
use castboard_db::models::profile::CreateProfile;
use castboard_db::repositories::{CastingCallRepo, FavoriteRepo, ProfileRepo};
use chrono::NaiveDate;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_profile(pool: &PgPool, email: &str) -> i64 {
    let input = CreateProfile {
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        full_name: Some("Casting Director".to_string()),
    };
    ProfileRepo::create(pool, &input)
        .await
        .expect("profile creation should succeed")
        .id
}

fn new_casting_call(created_by: i64, title: &str) -> CreateCastingCall {
    CreateCastingCall {
        title: title.to_string(),
        role: "Lead".to_string(),
        casting_type: "Film".to_string(),
        description: "A feature film shooting downtown".to_string(),
        image: "https://example.com/poster.jpg".to_string(),
        deadline: NaiveDate::from_ymd_opt(2027, 1, 31).unwrap(),
        location: "Los Angeles, CA".to_string(),
        roles: 1,
        min_age: None,
        max_age: None,
        gender: None,
        created_by,
    }
}

async fn create_approved(pool: &PgPool, input: &CreateCastingCall) -> i64 {
    let call = CastingCallRepo::create(pool, input).await.unwrap();
    CastingCallRepo::update_status(pool, call.id, STATUS_APPROVED)
        .await
        .unwrap()
        .expect("row should exist");
    call.id
}

async fn listed_ids(pool: &PgPool, filter: &CastingCallFilter, page: i64) -> Vec<i64> {
    CastingCallRepo::list_approved(pool, filter, page)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect()
}

// ---------------------------------------------------------------------------
// Moderation visibility
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn new_casting_call_defaults_to_pending_and_is_not_listed(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;
    let call = CastingCallRepo::create(&pool, &new_casting_call(owner, "Hidden"))
        .await
        .unwrap();

    assert_eq!(call.status, STATUS_PENDING);
    assert!(!call.is_verified);
    assert!(listed_ids(&pool, &CastingCallFilter::default(), 0).await.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn approval_makes_call_visible_after_newer_approved_calls(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;

    // Older submission, approved last.
    let older = CastingCallRepo::create(&pool, &new_casting_call(owner, "Older"))
        .await
        .unwrap();
    let newer = create_approved(&pool, &new_casting_call(owner, "Newer")).await;

    assert_eq!(listed_ids(&pool, &CastingCallFilter::default(), 0).await, vec![newer]);

    CastingCallRepo::update_status(&pool, older.id, STATUS_APPROVED)
        .await
        .unwrap();

    assert_eq!(
        listed_ids(&pool, &CastingCallFilter::default(), 0).await,
        vec![newer, older.id],
        "listing is ordered by creation time, not approval time"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn rejected_calls_are_not_listed(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;
    let id = create_approved(&pool, &new_casting_call(owner, "Short lived")).await;
    CastingCallRepo::update_status(&pool, id, STATUS_REJECTED)
        .await
        .unwrap();

    assert!(listed_ids(&pool, &CastingCallFilter::default(), 0).await.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn update_status_of_missing_row_returns_none(pool: PgPool) {
    let result = CastingCallRepo::update_status(&pool, 999_999, STATUS_APPROVED)
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn category_and_gender_filters(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;

    let mut theater = new_casting_call(owner, "Stage play");
    theater.casting_type = "Theater".to_string();
    theater.gender = Some("female".to_string());
    let theater_id = create_approved(&pool, &theater).await;

    let mut film = new_casting_call(owner, "Indie film");
    film.gender = Some("male".to_string());
    let film_id = create_approved(&pool, &film).await;

    let by_category = CastingCallFilter {
        category: category_filter(Some("Theater")).map(str::to_string),
        ..Default::default()
    };
    assert_eq!(listed_ids(&pool, &by_category, 0).await, vec![theater_id]);

    let by_gender = CastingCallFilter {
        gender: gender_filter(Some("male")),
        ..Default::default()
    };
    assert_eq!(listed_ids(&pool, &by_gender, 0).await, vec![film_id]);

    // `any` disables the gender filter entirely.
    let any_gender = CastingCallFilter {
        gender: gender_filter(Some("any")),
        ..Default::default()
    };
    assert_eq!(listed_ids(&pool, &any_gender, 0).await, vec![film_id, theater_id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn age_filters_compare_against_call_bounds(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;

    let mut teens = new_casting_call(owner, "Teen drama");
    teens.min_age = Some(13);
    teens.max_age = Some(19);
    let teens_id = create_approved(&pool, &teens).await;

    let mut adults = new_casting_call(owner, "Office comedy");
    adults.min_age = Some(25);
    adults.max_age = Some(45);
    let adults_id = create_approved(&pool, &adults).await;

    let open_ages = create_approved(&pool, &new_casting_call(owner, "Open call")).await;

    let min_only = CastingCallFilter {
        min_age: Some(18),
        ..Default::default()
    };
    assert_eq!(listed_ids(&pool, &min_only, 0).await, vec![adults_id]);

    let max_only = CastingCallFilter {
        max_age: Some(20),
        ..Default::default()
    };
    assert_eq!(listed_ids(&pool, &max_only, 0).await, vec![teens_id]);

    let unfiltered = listed_ids(&pool, &CastingCallFilter::default(), 0).await;
    assert!(unfiltered.contains(&open_ages));
    assert_eq!(unfiltered.len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn free_text_matches_title_description_or_role(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;

    let by_title = create_approved(&pool, &new_casting_call(owner, "Shakespeare in the Park")).await;

    let mut by_role = new_casting_call(owner, "Untitled");
    by_role.role = "Shakespearean villain".to_string();
    let by_role = create_approved(&pool, &by_role).await;

    let mut by_description = new_casting_call(owner, "Season two");
    by_description.description = "Modern SHAKESPEARE adaptation".to_string();
    let by_description = create_approved(&pool, &by_description).await;

    create_approved(&pool, &new_casting_call(owner, "Car commercial")).await;

    let filter = CastingCallFilter {
        search_pattern: contains_pattern(Some("shakespeare")),
        ..Default::default()
    };
    assert_eq!(
        listed_ids(&pool, &filter, 0).await,
        vec![by_description, by_role, by_title]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn free_text_wildcards_match_literally(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;
    let discount = create_approved(&pool, &new_casting_call(owner, "100% paid gig")).await;
    create_approved(&pool, &new_casting_call(owner, "1000 extras")).await;

    let filter = CastingCallFilter {
        search_pattern: contains_pattern(Some("100%")),
        ..Default::default()
    };
    assert_eq!(listed_ids(&pool, &filter, 0).await, vec![discount]);
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn exactly_full_last_page_reports_more_then_empty(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;
    for i in 0..PAGE_SIZE {
        create_approved(&pool, &new_casting_call(owner, &format!("Call {i}"))).await;
    }

    let first = listed_ids(&pool, &CastingCallFilter::default(), 0).await;
    assert_eq!(first.len() as i64, PAGE_SIZE);
    assert!(has_more(first.len()), "a full page must not be treated as final");

    let second = listed_ids(&pool, &CastingCallFilter::default(), 1).await;
    assert!(second.is_empty());
    assert!(!has_more(second.len()));
}

#[sqlx::test(migrations = "./migrations")]
async fn pages_do_not_overlap(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;
    for i in 0..(PAGE_SIZE + 3) {
        create_approved(&pool, &new_casting_call(owner, &format!("Call {i}"))).await;
    }

    let first = listed_ids(&pool, &CastingCallFilter::default(), 0).await;
    let second = listed_ids(&pool, &CastingCallFilter::default(), 1).await;

    assert_eq!(first.len() as i64, PAGE_SIZE);
    assert_eq!(second.len(), 3);
    assert!(second.iter().all(|id| !first.contains(id)));
    assert!(first.windows(2).all(|w| w[0] > w[1]), "newest first");
}

// ---------------------------------------------------------------------------
// Admin queue
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn pending_queue_includes_submitter(pool: PgPool) {
    let owner = create_profile(&pool, "director@test.com").await;
    let pending = CastingCallRepo::create(&pool, &new_casting_call(owner, "Awaiting"))
        .await
        .unwrap();
    create_approved(&pool, &new_casting_call(owner, "Done")).await;

    let queue = CastingCallRepo::list_pending_with_submitter(&pool).await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].casting_call.id, pending.id);
    assert_eq!(queue[0].submitter_email, "director@test.com");
    assert_eq!(queue[0].submitter_name.as_deref(), Some("Casting Director"));

    assert_eq!(
        CastingCallRepo::count_by_status(&pool, STATUS_PENDING).await.unwrap(),
        1
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn set_verified_and_list_by_creator(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;
    let other = create_profile(&pool, "other@test.com").await;
    let call = CastingCallRepo::create(&pool, &new_casting_call(owner, "Mine"))
        .await
        .unwrap();
    CastingCallRepo::create(&pool, &new_casting_call(other, "Theirs"))
        .await
        .unwrap();

    let verified = CastingCallRepo::set_verified(&pool, call.id, true)
        .await
        .unwrap()
        .unwrap();
    assert!(verified.is_verified);

    let mine = CastingCallRepo::list_by_creator(&pool, owner).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, call.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_cascades_to_favorites(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;
    let id = create_approved(&pool, &new_casting_call(owner, "Doomed")).await;
    FavoriteRepo::add(&pool, owner, id).await.unwrap();

    assert!(CastingCallRepo::delete(&pool, id).await.unwrap());
    assert!(!CastingCallRepo::delete(&pool, id).await.unwrap());
    assert!(!CastingCallRepo::exists(&pool, id).await.unwrap());
    assert!(FavoriteRepo::find(&pool, owner, id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn inverted_age_range_violates_check_constraint(pool: PgPool) {
    let owner = create_profile(&pool, "owner@test.com").await;
    let mut input = new_casting_call(owner, "Impossible");
    input.min_age = Some(50);
    input.max_age = Some(20);

    let err = CastingCallRepo::create(&pool, &input).await.unwrap_err();
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("chk_casting_calls_age_range"));
}
