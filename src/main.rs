use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use devmarket::backend::{Backend, BackendError, MockBackend, MockBackendConfig};
use devmarket::lifecycle::{self, TRACKER_STEPS};
use devmarket::models::content::{CatalogSort, Category, Content, ContentStatus, CreateContent};
use devmarket::models::custom_projects::{CustomProjectRequest, ProjectStatus, UpdateProjectStatus};
use devmarket::models::users::Role;
use devmarket::sample;
use devmarket::store::{CatalogStore, SessionStore};

/// Demo walkthrough of the mock marketplace: sign in, browse the catalog,
/// submit a custom-project request, then advance it through the lifecycle
/// while rendering the tracker state.
#[tokio::main]
async fn main() -> Result<(), BackendError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mut session = SessionStore::new();
    let mut catalog = CatalogStore::new();
    let mut backend =
        MockBackend::with_content(MockBackendConfig::from_env(), sample::sample_marketplace_content());

    // Browse the marketplace (signed out).
    catalog.set_marketplace_content(backend.fetch_marketplace().await?);
    for item in catalog.sorted_marketplace(CatalogSort::Newest) {
        tracing::info!(
            title = %item.title,
            category = item.category.label(),
            price = item.price,
            tags = ?item.display_tags(3),
            "listing"
        );
    }

    // Sign in and submit a custom-project request.
    let buyer = sample::demo_user();
    session.login(buyer.clone());
    session.switch_role(Role::Buyer);

    let request = CustomProjectRequest {
        title: "Inventory dashboard".to_string(),
        description: "Web dashboard for warehouse inventory".to_string(),
        category: Category::Website,
        requirements: "Stock levels, reorder alerts, CSV export".to_string(),
        budget: "$500-1000".to_string(),
        timeline: "1 month".to_string(),
    };
    let project = backend.submit_request(&buyer, request).await?;
    catalog.set_custom_projects(backend.fetch_projects(buyer.id).await?);

    // Switch to the seller side and post an upload for moderation.
    session.switch_role(Role::Seller);
    let upload = Content::new_upload(
        &buyer,
        CreateContent {
            title: "Landing page kit".to_string(),
            description: "Responsive landing page sections".to_string(),
            category: Category::Website,
            price: 49.0,
            preview_images: vec![],
            tags: ["landing", "responsive"].map(String::from).to_vec(),
        },
    );
    let upload_id = upload.id;
    catalog.add_upload(upload);
    catalog.update_upload_status(upload_id, ContentStatus::Approved);
    session.switch_role(Role::Buyer);

    // Advance the project through the lifecycle as the admin would.
    let admin = sample::demo_admin();
    for (status, progress) in [
        (ProjectStatus::DeveloperSelection, 10.0),
        (ProjectStatus::InProgress, 55.0),
        (ProjectStatus::Completed, 90.0),
        (ProjectStatus::SecurityCheck, 95.0),
        (ProjectStatus::Delivered, 100.0),
    ] {
        backend
            .update_project(&admin, project.id, UpdateProjectStatus { status, progress })
            .await?;
        catalog.set_custom_projects(backend.fetch_projects(buyer.id).await?);
        render_tracker(&catalog, &session);
    }

    Ok(())
}

/// Log the tracker panel the way the sidebar renders it.
fn render_tracker(catalog: &CatalogStore, session: &SessionStore) {
    let placeholder = sample::placeholder_project();
    let view = lifecycle::project_view(
        catalog.custom_projects(),
        session.current_user_id(),
        &placeholder,
    );
    let project = view.project();

    tracing::info!(
        title = %project.title,
        percent = project.rounded_progress(),
        placeholder = view.is_placeholder(),
        "project progress"
    );
    for step in TRACKER_STEPS {
        let marker = if lifecycle::is_current_step(project, step.id) {
            "→"
        } else if lifecycle::is_step_completed(project, step.id) {
            "✓"
        } else {
            " "
        };
        tracing::info!("  [{marker}] {}", step.label);
        if lifecycle::is_current_step(project, step.id) {
            tracing::info!("       {}", step.blurb);
        }
    }
}
