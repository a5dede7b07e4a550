//! Hard-coded MVP demo data: the seeded marketplace listing, a demo
//! account, and the placeholder project the tracker falls back to. None of
//! this is real data; the placeholder in particular only ever flows through
//! the display path (`lifecycle::ProjectView`), never into the stores as a
//! real record.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::content::{Category, Content, ContentStatus};
use crate::models::custom_projects::{CustomProject, ProjectStatus};
use crate::models::users::{Role, User};

/// Fixed id marking the placeholder record.
pub const PLACEHOLDER_PROJECT_ID: Uuid = Uuid::nil();

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// The three seeded marketplace listings.
pub fn sample_marketplace_content() -> Vec<Content> {
    vec![
        Content {
            id: Uuid::from_u128(1),
            title: "E-commerce Platform with React".to_string(),
            description: "A complete e-commerce solution built with React, Node.js, and MongoDB."
                .to_string(),
            seller_id: Uuid::from_u128(0x51),
            seller_name: "Tech Solutions".to_string(),
            category: Category::Project,
            price: 299.99,
            preview_images: vec![
                "https://images.pexels.com/photos/39284/macbook-apple-imac-computer-39284.jpeg"
                    .to_string(),
                "https://images.pexels.com/photos/777001/pexels-photo-777001.jpeg".to_string(),
            ],
            tags: ["react", "ecommerce", "nodejs", "mongodb"]
                .map(String::from)
                .to_vec(),
            rating: Some(4.8),
            review_count: Some(24),
            status: ContentStatus::Approved,
            created_at: date(2024, 8, 1),
            updated_at: date(2024, 8, 15),
        },
        Content {
            id: Uuid::from_u128(2),
            title: "Portfolio Website Template".to_string(),
            description: "Modern portfolio website template for creative professionals."
                .to_string(),
            seller_id: Uuid::from_u128(0x52),
            seller_name: "Design Masters".to_string(),
            category: Category::Portfolio,
            price: 149.99,
            preview_images: vec![
                "https://images.pexels.com/photos/1779487/pexels-photo-1779487.jpeg".to_string(),
                "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg".to_string(),
            ],
            tags: ["portfolio", "responsive", "creative"]
                .map(String::from)
                .to_vec(),
            rating: Some(4.5),
            review_count: Some(18),
            status: ContentStatus::Approved,
            created_at: date(2024, 8, 5),
            updated_at: date(2024, 8, 10),
        },
        Content {
            id: Uuid::from_u128(3),
            title: "AI Implementation in Healthcare".to_string(),
            description: "PhD research on AI applications in modern healthcare systems."
                .to_string(),
            seller_id: Uuid::from_u128(0x53),
            seller_name: "Dr. Smith".to_string(),
            category: Category::Phd,
            price: 499.99,
            preview_images: vec![
                "https://images.pexels.com/photos/40568/medical-appointment-doctor-healthcare-40568.jpeg"
                    .to_string(),
                "https://images.pexels.com/photos/3786215/pexels-photo-3786215.jpeg".to_string(),
            ],
            tags: ["ai", "healthcare", "research", "phd"]
                .map(String::from)
                .to_vec(),
            rating: Some(5.0),
            review_count: Some(7),
            status: ContentStatus::Approved,
            created_at: date(2024, 7, 20),
            updated_at: date(2024, 8, 5),
        },
    ]
}

/// The demo buyer account.
pub fn demo_user() -> User {
    User {
        id: Uuid::from_u128(0x10),
        email: "john@example.com".to_string(),
        name: "John Doe".to_string(),
        roles: vec![Role::Buyer, Role::Seller],
        avatar_url: None,
        rating: None,
        projects_count: None,
    }
}

/// The demo admin account used to drive status updates.
pub fn demo_admin() -> User {
    User {
        id: Uuid::from_u128(0x11),
        email: "admin@example.com".to_string(),
        name: "Site Admin".to_string(),
        roles: vec![Role::Admin],
        avatar_url: None,
        rating: None,
        projects_count: None,
    }
}

/// The project the tracker shows when a buyer has none of their own.
pub fn placeholder_project() -> CustomProject {
    let now = Utc::now();
    CustomProject {
        id: PLACEHOLDER_PROJECT_ID,
        title: "Sample Project".to_string(),
        description: "This is a sample project to demonstrate progress tracking".to_string(),
        buyer_id: demo_user().id,
        buyer_name: "John Doe".to_string(),
        developer_id: None,
        developer_name: None,
        price: None,
        status: ProjectStatus::InProgress,
        requirements: "Sample requirements".to_string(),
        progress: 50.0,
        created_at: now,
        updated_at: now,
    }
}
