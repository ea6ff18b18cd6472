// ============================================================================
// COURSE CARD VIEW - Tarjeta de curso con botón "Solicitar Información"
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{alert, append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::info_request_viewmodel::prepare;
use crate::viewmodels::{CourseCardModel, InfoRequestViewModel};

pub fn render_course_card(
    state: &AppState,
    card: &CourseCardModel,
    lang: &str,
) -> Result<Element, JsValue> {
    let card_el = ElementBuilder::new("div")?
        .class("course-card")
        .attr("data-course-id", &card.id)?
        .build();

    let title = ElementBuilder::new("h3")?.text(&card.title).build();
    append_child(&card_el, &title)?;

    for (label, value) in [
        (t("course_id", lang), &card.id),
        (t("course_duration", lang), &card.duration),
        (t("course_price", lang), &card.price),
    ] {
        let row = ElementBuilder::new("p")?
            .class("course-field")
            .child(ElementBuilder::new("strong")?.text(&label).build())?
            .build();
        row.append_with_str_1(&format!(" {}", value))?;
        append_child(&card_el, &row)?;
    }

    let description = ElementBuilder::new("p")?
        .class("course-description")
        .text(&card.description)
        .build();
    append_child(&card_el, &description)?;

    let button = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-request-info")
        .text(&t("request_info", lang))
        .build();

    {
        let state = state.clone();
        let course_id = card.id.clone();
        on_click(&button, move |_| submit_info_request(&state, &course_id))?;
    }
    append_child(&card_el, &button)?;

    Ok(card_el)
}

/// Guard síncrono; el POST corre en segundo plano y termina en alert
fn submit_info_request(state: &AppState, course_id: &str) {
    let lang = state.get_language();
    let request = match prepare(course_id, &state.get_email()) {
        Ok(request) => request,
        Err(outcome) => {
            alert(&outcome.alert_text(&lang));
            return;
        }
    };

    spawn_local(async move {
        let outcome = InfoRequestViewModel::new().send(request).await;
        alert(&outcome.alert_text(&lang));
    });
}
