// ============================================================================
// COURSE LIST VIEW - Sección "Cursos disponibles"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::CoursesSection;
use crate::views::user_profile::render_error;
use crate::views::{render_course_card, render_email_form};

pub fn render_courses_section(
    state: &AppState,
    section: &CoursesSection,
    lang: &str,
) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("section")?
        .class("courses-section")
        .build();

    let heading = ElementBuilder::new("h2")?
        .text(&t("available_courses", lang))
        .build();
    append_child(&container, &heading)?;

    match section {
        CoursesSection::Loading => {
            let loading = ElementBuilder::new("p")?
                .class("status-loading")
                .text(&t("loading_courses", lang))
                .build();
            append_child(&container, &loading)?;
        }
        CoursesSection::Error(message) => {
            append_child(&container, &render_error(message, lang)?)?;
        }
        CoursesSection::Empty => {
            let empty = ElementBuilder::new("p")?
                .class("status-empty")
                .text(&t("no_courses", lang))
                .build();
            append_child(&container, &empty)?;
        }
        CoursesSection::Grid(cards) => {
            append_child(&container, &render_email_form(state, lang)?)?;

            let grid = ElementBuilder::new("div")?.class("course-grid").build();
            for card in cards {
                append_child(&grid, &render_course_card(state, card, lang)?)?;
            }
            append_child(&container, &grid)?;
        }
    }

    Ok(container)
}
