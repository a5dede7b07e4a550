//! Tests for the in-memory session and catalog stores.
//!
//! Run with: `cargo test --test store_test`

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use devmarket::models::content::{CatalogSort, Category, Content, ContentStatus};
use devmarket::models::custom_projects::{CustomProject, ProjectStatus};
use devmarket::models::users::{Role, User};
use devmarket::store::{CatalogStore, SessionStore};

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, day, 12, 0, 0).unwrap()
}

fn user(roles: Vec<Role>) -> User {
    User {
        id: Uuid::new_v4(),
        email: "alice@example.com".to_string(),
        name: "Alice".to_string(),
        roles,
        avatar_url: None,
        rating: None,
        projects_count: None,
    }
}

fn listing(category: Category, price: f64, rating: Option<f32>, day: u32) -> Content {
    Content {
        id: Uuid::new_v4(),
        title: format!("{} listing", category.label()),
        description: "A listing".to_string(),
        seller_id: Uuid::new_v4(),
        seller_name: "Seller".to_string(),
        category,
        price,
        preview_images: vec![],
        tags: ["one", "two", "three", "four"].map(String::from).to_vec(),
        rating,
        review_count: None,
        status: ContentStatus::Approved,
        created_at: at(day),
        updated_at: at(day),
    }
}

fn custom_project(buyer_id: Uuid) -> CustomProject {
    CustomProject {
        id: Uuid::new_v4(),
        title: "Dashboard".to_string(),
        description: "A dashboard".to_string(),
        buyer_id,
        buyer_name: "Alice".to_string(),
        developer_id: None,
        developer_name: None,
        price: None,
        status: ProjectStatus::Pending,
        requirements: "Reqs".to_string(),
        progress: 0.0,
        created_at: at(1),
        updated_at: at(1),
    }
}

// ── Session ──

#[test]
fn test_login_defaults_to_first_role() {
    let mut session = SessionStore::new();
    assert!(!session.is_authenticated());

    session.login(user(vec![Role::Seller, Role::Buyer]));
    assert!(session.is_authenticated());
    assert_eq!(session.active_role(), Some(Role::Seller));
}

#[test]
fn test_switch_to_held_role() {
    let mut session = SessionStore::new();
    session.login(user(vec![Role::Buyer, Role::Developer]));

    session.switch_role(Role::Developer);
    assert_eq!(session.active_role(), Some(Role::Developer));
}

#[test]
fn test_switch_to_unheld_role_is_ignored() {
    let mut session = SessionStore::new();
    session.login(user(vec![Role::Buyer]));

    session.switch_role(Role::Admin);
    assert_eq!(session.active_role(), Some(Role::Buyer));
}

#[test]
fn test_switch_role_without_session_is_ignored() {
    let mut session = SessionStore::new();
    session.switch_role(Role::Buyer);
    assert_eq!(session.active_role(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn test_logout_clears_user_and_role() {
    let mut session = SessionStore::new();
    session.login(user(vec![Role::Buyer]));
    session.logout();

    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert_eq!(session.active_role(), None);
    assert_eq!(session.current_user_id(), None);
}

// ── Catalog: marketplace ──

#[test]
fn test_approved_filter_hides_unmoderated_listings() {
    let mut store = CatalogStore::new();
    let mut pending = listing(Category::Website, 50.0, None, 2);
    pending.status = ContentStatus::Pending;
    let mut rejected = listing(Category::Website, 60.0, None, 3);
    rejected.status = ContentStatus::Rejected;
    let approved = listing(Category::Website, 70.0, None, 4);
    let approved_id = approved.id;
    store.set_marketplace_content(vec![pending, rejected, approved]);

    let visible = store.approved_marketplace();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, approved_id);
}

#[test]
fn test_category_filter_and_all_bucket() {
    let mut store = CatalogStore::new();
    store.set_marketplace_content(vec![
        listing(Category::Project, 10.0, None, 1),
        listing(Category::Phd, 20.0, None, 2),
        listing(Category::Project, 30.0, None, 3),
    ]);

    assert_eq!(store.marketplace_by_category(None).len(), 3);
    assert_eq!(store.marketplace_by_category(Some(Category::Project)).len(), 2);
    assert_eq!(store.marketplace_by_category(Some(Category::Custom)).len(), 0);
}

#[test]
fn test_sort_orders() {
    let mut store = CatalogStore::new();
    store.set_marketplace_content(vec![
        listing(Category::Project, 30.0, Some(4.0), 1),
        listing(Category::Project, 10.0, None, 3),
        listing(Category::Project, 20.0, Some(5.0), 2),
    ]);

    let newest = store.sorted_marketplace(CatalogSort::Newest);
    assert_eq!(newest[0].price, 10.0); // day 3 first

    let cheap_first = store.sorted_marketplace(CatalogSort::PriceLow);
    assert_eq!(
        cheap_first.iter().map(|c| c.price).collect::<Vec<_>>(),
        vec![10.0, 20.0, 30.0]
    );

    let pricey_first = store.sorted_marketplace(CatalogSort::PriceHigh);
    assert_eq!(pricey_first[0].price, 30.0);

    // Missing ratings sort as zero.
    let top_rated = store.sorted_marketplace(CatalogSort::Rating);
    assert_eq!(top_rated[0].rating, Some(5.0));
    assert_eq!(top_rated[2].rating, None);
}

#[test]
fn test_display_tags_truncation() {
    let item = listing(Category::Portfolio, 10.0, None, 1);
    assert_eq!(item.display_tags(3), &["one", "two", "three"]);
    assert_eq!(item.display_tags(10).len(), 4);
}

// ── Catalog: uploads ──

#[test]
fn test_new_upload_starts_pending_and_attributes_the_seller() {
    use devmarket::models::content::CreateContent;

    let seller = user(vec![Role::Seller]);
    let upload = Content::new_upload(
        &seller,
        CreateContent {
            title: "CLI toolkit".to_string(),
            description: "A set of command-line utilities".to_string(),
            category: Category::Project,
            price: 79.0,
            preview_images: vec![],
            tags: vec!["cli".to_string()],
        },
    );

    assert_eq!(upload.status, ContentStatus::Pending);
    assert_eq!(upload.seller_id, seller.id);
    assert_eq!(upload.seller_name, seller.name);
    assert!(upload.rating.is_none());
    assert_eq!(upload.created_at, upload.updated_at);
}

#[test]
fn test_upload_status_update_and_not_found() {
    let mut store = CatalogStore::new();
    let mut upload = listing(Category::Portfolio, 99.0, None, 1);
    upload.status = ContentStatus::Pending;
    let id = upload.id;
    store.add_upload(upload);

    let updated = store.update_upload_status(id, ContentStatus::Approved);
    assert_eq!(updated.unwrap().status, ContentStatus::Approved);

    assert!(store.update_upload_status(Uuid::new_v4(), ContentStatus::Rejected).is_none());
    assert_eq!(store.my_uploads()[0].status, ContentStatus::Approved);
}

// ── Catalog: custom projects ──

#[test]
fn test_project_status_update_sets_both_fields() {
    let mut store = CatalogStore::new();
    let buyer = Uuid::new_v4();
    let project = custom_project(buyer);
    let id = project.id;
    let created = project.created_at;
    store.set_custom_projects(vec![project]);

    let updated = store
        .update_project_status(id, ProjectStatus::InProgress, 42.5)
        .unwrap();
    assert_eq!(updated.status, ProjectStatus::InProgress);
    assert_eq!(updated.progress, 42.5);
    assert!(updated.updated_at > created);
}

#[test]
fn test_project_status_update_unknown_id_is_noop() {
    let mut store = CatalogStore::new();
    let project = custom_project(Uuid::new_v4());
    store.set_custom_projects(vec![project.clone()]);

    assert!(
        store
            .update_project_status(Uuid::new_v4(), ProjectStatus::Delivered, 100.0)
            .is_none()
    );
    assert_eq!(store.custom_projects()[0], project);
}

#[test]
fn test_projects_for_buyer_filters_ownership() {
    let mut store = CatalogStore::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    store.set_custom_projects(vec![
        custom_project(alice),
        custom_project(bob),
        custom_project(alice),
    ]);

    assert_eq!(store.projects_for_buyer(alice).len(), 2);
    assert_eq!(store.projects_for_buyer(bob).len(), 1);
    assert_eq!(store.projects_for_buyer(Uuid::new_v4()).len(), 0);
}
