pub mod catalog_viewmodel;
pub mod info_request_viewmodel;
pub mod render_state;

#[cfg(test)]
pub(crate) mod fake_api;

pub use catalog_viewmodel::CatalogViewModel;
pub use info_request_viewmodel::{InfoRequestOutcome, InfoRequestViewModel};
pub use render_state::*;
