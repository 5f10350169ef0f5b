// ============================================================================
// USE SESSION HOOK - Puente entre la sesión global y el estado de Yew
// ============================================================================
// La verdad vive en services::session_service; este hook la refleja en un
// UseStateHandle para que el árbol de componentes reaccione a los cambios.
// ============================================================================

use yew::prelude::*;

use crate::services::session_service;
use crate::state::{Role, SessionPhase};
use crate::utils::events;

#[derive(Clone)]
pub struct UseSessionHandle {
    pub phase: UseStateHandle<SessionPhase>,
    pub login_done: Callback<Role>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let phase = use_state(|| SessionPhase::Uninitialized);

    // Restaurar la sesión guardada al montar y escuchar los 401 del transporte
    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let restored = session_service::initialize_session();
            match restored.role() {
                Some(role) => log::info!("✅ Sesión restaurada: portal {}", role.portal_label()),
                None => log::info!("ℹ️ Sin sesión previa, va al login"),
            }
            phase.set(restored);

            let phase = phase.clone();
            events::on_unauthorized(move || {
                log::warn!("🔒 Sesión invalidada por el backend, vuelta al login");
                phase.set(SessionPhase::Unauthenticated);
            });
            || ()
        });
    }

    // El login ya pasó por session_service; aquí solo se refleja el resultado
    let login_done = {
        let phase = phase.clone();
        Callback::from(move |role: Role| {
            phase.set(SessionPhase::Authenticated(role));
        })
    };

    let logout = {
        let phase = phase.clone();
        Callback::from(move |_| {
            log::info!("👋 Cierre de sesión");
            session_service::logout();
            phase.set(SessionPhase::Unauthenticated);
        })
    };

    UseSessionHandle {
        phase,
        login_done,
        logout,
    }
}
