// Views: funciones que construyen DOM a partir del estado (sin lógica)

pub mod app;
pub mod user_profile;
pub mod course_list;
pub mod course_card;
pub mod email_form;

pub use app::render_app;
pub use user_profile::render_user_section;
pub use course_list::render_courses_section;
pub use course_card::render_course_card;
pub use email_form::render_email_form;
