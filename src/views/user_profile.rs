// ============================================================================
// USER PROFILE VIEW - Sección "Detalles del usuario"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::utils::i18n::{t, t_with};
use crate::viewmodels::{PageModel, UserCardModel, UserSection};

pub fn render_user_section(page: &PageModel, lang: &str) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?
        .class("user-section")
        .build();

    let heading = ElementBuilder::new("h2")?
        .text(&t_with("user_details", lang, &[&page.header_user_id]))
        .build();
    append_child(&section, &heading)?;

    match &page.user {
        UserSection::Loading => {
            let loading = ElementBuilder::new("p")?
                .class("status-loading")
                .text(&t("loading_user", lang))
                .build();
            append_child(&section, &loading)?;
        }
        UserSection::Error(message) => {
            append_child(&section, &render_error(message, lang)?)?;
        }
        UserSection::Missing => {}
        UserSection::Ready(card) => {
            append_child(&section, &render_user_card(card, lang)?)?;
        }
    }

    Ok(section)
}

/// Párrafo de error compartido por ambas secciones
pub fn render_error(message: &str, lang: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?
        .class("status-error")
        .text(&format!("{} {}", t("error_prefix", lang), message))
        .build())
}

fn render_user_card(card: &UserCardModel, lang: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("user-card")
        .attr("data-user-id", &card.id)?
        .build();

    let title = ElementBuilder::new("h3")?
        .text(&t("user_data_received", lang))
        .build();
    append_child(&container, &title)?;

    let fields = ElementBuilder::new("dl")?.class("user-fields").build();
    let rows = [
        ("ID".to_string(), &card.id),
        (t("user_name", lang), &card.name),
        (t("user_email", lang), &card.email),
        (t("user_registered", lang), &card.registered),
    ];
    for (label, value) in &rows {
        append_child(&fields, &ElementBuilder::new("dt")?.text(label).build())?;
        append_child(&fields, &ElementBuilder::new("dd")?.text(value).build())?;
    }
    append_child(&container, &fields)?;

    let raw = ElementBuilder::new("pre")?
        .class("user-raw")
        .text(&card.raw_json)
        .build();
    append_child(&container, &raw)?;

    Ok(container)
}
