// ============================================================================
// EVENTS - Broadcast global vía eventos del window
// ============================================================================
// La capa HTTP avisa al resto de la app (cualquier pantalla, cualquier hook)
// de que la sesión murió, sin acoplarse a los componentes.
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Nombre del evento que se emite cuando el backend devuelve 401
pub const AUTH_UNAUTHORIZED_EVENT: &str = "auth-unauthorized";

thread_local! {
    static LISTENER_REGISTERED: Cell<bool> = Cell::new(false);
}

/// Emite el evento de sesión expirada en el window
pub fn broadcast_unauthorized() {
    let Some(win) = window() else {
        log::warn!("⚠️ No hay window, no se puede emitir {}", AUTH_UNAUTHORIZED_EVENT);
        return;
    };

    match web_sys::Event::new(AUTH_UNAUTHORIZED_EVENT) {
        Ok(event) => {
            let _ = win.dispatch_event(&event);
            log::info!("📢 Evento {} emitido", AUTH_UNAUTHORIZED_EVENT);
        }
        Err(_) => log::error!("❌ No se pudo crear el evento {}", AUTH_UNAUTHORIZED_EVENT),
    }
}

/// Registra el listener global de sesión expirada.
/// Solo se registra UNA vez por proceso, aunque se llame varias veces.
pub fn on_unauthorized<F: Fn() + 'static>(callback: F) {
    let already = LISTENER_REGISTERED.with(|flag| flag.replace(true));
    if already {
        log::info!("ℹ️ Listener de {} ya registrado, se omite", AUTH_UNAUTHORIZED_EVENT);
        return;
    }

    let Some(win) = window() else {
        log::warn!("⚠️ No hay window, no se puede escuchar {}", AUTH_UNAUTHORIZED_EVENT);
        return;
    };

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        log::info!("🔒 Sesión expirada detectada, cerrando sesión");
        callback();
    }) as Box<dyn FnMut(web_sys::Event)>);

    if win
        .add_event_listener_with_callback(AUTH_UNAUTHORIZED_EVENT, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("❌ No se pudo registrar el listener de {}", AUTH_UNAUTHORIZED_EVENT);
    }

    // El listener vive tanto como la app, el leak es intencional
    closure.forget();
}
