// ============================================================================
// APP VIEW - Página completa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::PageModel;
use crate::views::{render_courses_section, render_user_section};

/// Renderizar la app: título, usuario, separador, cursos, pie
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.get_language();
    let page = PageModel::from_state(state);

    let app = ElementBuilder::new("div")?.class("App").build();
    let header = ElementBuilder::new("header")?.class("App-header").build();

    let title = ElementBuilder::new("h1")?
        .text(&t("app_title", &lang))
        .build();
    append_child(&header, &title)?;

    append_child(&header, &render_user_section(&page, &lang)?)?;
    append_child(&header, &ElementBuilder::new("hr")?.class("section-separator").build())?;
    append_child(&header, &render_courses_section(state, &page.courses, &lang)?)?;

    let footer = ElementBuilder::new("p")?
        .class("app-footer")
        .text(&t("footer", &lang))
        .build();
    append_child(&header, &footer)?;

    append_child(&app, &header)?;
    Ok(app)
}
