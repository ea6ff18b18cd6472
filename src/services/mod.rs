pub mod error;
pub mod api_client;

pub use error::{ApiError, Resource};
pub use api_client::{ApiClient, CatalogApi};
