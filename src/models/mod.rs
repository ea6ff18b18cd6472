pub mod user;
pub mod course;
pub mod info_request;
pub(crate) mod lenient;

pub use user::UserProfile;
pub use course::Course;
pub use info_request::{InfoRequest, InfoRequestResponse};
