// ============================================================================
// FORMAT - Presentación de valores del catálogo
// ============================================================================

use chrono::{DateTime, NaiveDate};
use crate::utils::i18n::t;

/// `$49.90`, o `N/A` si no hay precio (un precio 0 también se muestra como N/A)
pub fn format_price(price: Option<f64>, lang: &str) -> String {
    match price {
        Some(p) if p != 0.0 && p.is_finite() => format!("${:.2}", p),
        _ => t("not_available", lang),
    }
}

/// `40 horas`, `1.5 horas`, o `N/A`
pub fn format_duration(hours: Option<f64>, lang: &str) -> String {
    match hours {
        Some(h) if h.is_finite() => {
            let amount = if h.fract() == 0.0 {
                format!("{}", h as i64)
            } else {
                format!("{}", h)
            };
            format!("{} {}", amount, t("hours", lang))
        }
        _ => t("not_available", lang),
    }
}

/// Fecha de registro en `dd/mm/YYYY` si es RFC 3339 o `YYYY-MM-DD`; si no, tal cual
pub fn format_registration_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return datetime.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}
