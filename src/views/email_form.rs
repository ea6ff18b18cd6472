// ============================================================================
// EMAIL FORM VIEW - Input compartido por todas las tarjetas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_input_value, ElementBuilder};
use crate::state::AppState;
use crate::utils::i18n::t;

pub fn render_email_form(state: &AppState, lang: &str) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("email-form").build();

    let label = ElementBuilder::new("label")?
        .attr("for", "info-email")?
        .text(&t("email_label", lang))
        .build();

    // El valor sobrevive a los re-renders porque vive en el estado
    let input = ElementBuilder::new("input")?
        .id("info-email")?
        .attr("type", "email")?
        .attr("placeholder", &t("email_placeholder", lang))?
        .attr("value", &state.get_email())?
        .build();

    {
        let state = state.clone();
        on_input_value(&input, move |value| state.set_email(&value))?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}
