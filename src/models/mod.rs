pub mod content;
pub mod custom_projects;
pub mod users;
