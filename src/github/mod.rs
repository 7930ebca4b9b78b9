pub mod client;
pub mod list;
pub mod types;

pub use client::create_client;
pub use list::list_user_repos;
pub use types::Repository;
