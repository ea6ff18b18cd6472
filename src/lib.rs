// ============================================================================
// COURSE ENROLLMENT APP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: carga del catálogo y solicitud de información
// - Services: SOLO comunicación API
// - State: Rc<RefCell> + subscribers
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod utils;
mod dom;
mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Instancia montada de la app
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Course Enrollment App - API: {}", CONFIG.api_base_url);

    let mut app = App::new()?;
    app.render()?;
    app.mount();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app montada
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow_mut().as_mut() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [APP] App no está inicializada"),
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
