pub mod catalog;
pub mod session;

pub use catalog::CatalogStore;
pub use session::SessionStore;
