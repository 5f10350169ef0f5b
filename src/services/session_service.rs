// ============================================================================
// SESSION SERVICE - Máquina de estados de la sesión (instancia única)
// ============================================================================
// Decide quién está dentro y en qué portal. El token vive en localStorage
// bajo una sola clave; nadie más toca esa clave directamente.
// ============================================================================

use std::cell::RefCell;

use chrono::Utc;

use crate::state::session_state::{AuthError, Role, SessionPhase};
use crate::utils::jwt::decode_claims;
use crate::utils::storage;

/// Clave única persistida por el panel
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Dónde vive el token entre recargas
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn persist(&self, token: &str);
    fn clear(&self);
}

/// Token en localStorage del navegador
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        storage::get_string(ACCESS_TOKEN_KEY)
    }

    fn persist(&self, token: &str) {
        if let Err(e) = storage::set_string(ACCESS_TOKEN_KEY, token) {
            log::error!("❌ Error guardando token: {}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = storage::remove_key(ACCESS_TOKEN_KEY) {
            log::error!("❌ Error eliminando token: {}", e);
        }
    }
}

/// Máquina de estados de sesión sobre un TokenStore
pub struct SessionGate<S: TokenStore> {
    store: S,
    phase: SessionPhase,
}

impl<S: TokenStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            phase: SessionPhase::Uninitialized,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Restaura la sesión desde el token persistido (arranque de la app).
    /// Un token expirado o ilegible se elimina y deja la sesión cerrada.
    pub fn initialize(&mut self, now_ms: i64) -> SessionPhase {
        self.phase = SessionPhase::Initializing;

        self.phase = match self.store.load() {
            Some(token) => match decode_claims(&token) {
                Some(claims) if claims.is_fresh(now_ms) => {
                    let role = Role::from_claim(claims.role.as_deref());
                    log::info!("✅ Sesión restaurada: portal {}", role.portal_label());
                    SessionPhase::Authenticated(role)
                }
                _ => {
                    log::info!("⚠️ Token expirado o ilegible, limpiando sesión");
                    self.store.clear();
                    SessionPhase::Unauthenticated
                }
            },
            None => SessionPhase::Unauthenticated,
        };

        self.phase
    }

    /// Establece sesión con un token recién emitido, validando caducidad y
    /// portal. Un token ilegible, expirado o del rol equivocado NO queda
    /// persistido.
    pub fn login(&mut self, token: &str, portal: Role, now_ms: i64) -> Result<Role, AuthError> {
        self.store.persist(token);

        let claims = match decode_claims(token) {
            Some(claims) => claims,
            None => {
                self.store.clear();
                return Err(AuthError::InvalidToken);
            }
        };

        if !claims.is_fresh(now_ms) {
            log::warn!("⚠️ El backend emitió un token ya expirado");
            self.store.clear();
            return Err(AuthError::TokenExpired);
        }

        if claims.role.as_deref() == Some(portal.claim_value()) {
            self.phase = SessionPhase::Authenticated(portal);
            log::info!("✅ Login correcto en portal {}", portal.portal_label());
            Ok(portal)
        } else {
            self.store.clear();
            Err(AuthError::AccessDenied {
                actual_role: claims.role.unwrap_or_else(|| "unknown".to_string()),
                portal,
            })
        }
    }

    /// Cierre de sesión explícito
    pub fn logout(&mut self) {
        self.store.clear();
        self.phase = SessionPhase::Unauthenticated;
    }

    /// Invalidación pasiva (401 del backend). Devuelve true solo en la
    /// primera transición, aunque lleguen varios 401 seguidos.
    pub fn invalidate(&mut self) -> bool {
        let was_authenticated = self.phase.is_authenticated();
        self.store.clear();
        self.phase = SessionPhase::Unauthenticated;
        was_authenticated
    }
}

thread_local! {
    static SESSION: RefCell<SessionGate<BrowserTokenStore>> =
        RefCell::new(SessionGate::new(BrowserTokenStore));
}

// ============================================================================
// Fachada sobre la instancia global (lado navegador)
// ============================================================================

pub fn initialize_session() -> SessionPhase {
    SESSION.with(|gate| gate.borrow_mut().initialize(Utc::now().timestamp_millis()))
}

pub fn login_with_token(token: &str, portal: Role) -> Result<Role, AuthError> {
    SESSION.with(|gate| {
        gate.borrow_mut()
            .login(token, portal, Utc::now().timestamp_millis())
    })
}

pub fn logout() {
    SESSION.with(|gate| gate.borrow_mut().logout())
}

/// true solo para el primer 401 que tumba la sesión
pub fn invalidate_session() -> bool {
    SESSION.with(|gate| gate.borrow_mut().invalidate())
}

pub fn session_phase() -> SessionPhase {
    SESSION.with(|gate| gate.borrow().phase())
}

pub fn access_token() -> Option<String> {
    SESSION.with(|gate| gate.borrow().store.load())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store en memoria para probar la máquina sin navegador
    #[derive(Clone, Default)]
    struct MemoryTokenStore {
        token: Rc<RefCell<Option<String>>>,
    }

    impl MemoryTokenStore {
        fn stored(&self) -> Option<String> {
            self.token.borrow().clone()
        }
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn persist(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
        }
    }

    fn token_for(role: &str, exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload =
            URL_SAFE_NO_PAD.encode(format!(r#"{{"role":"{}","exp":{}}}"#, role, exp).as_bytes());
        format!("{}.{}.firma", header, payload)
    }

    const NOW_MS: i64 = 1_700_000_000_000; // exp en segundos: 1_700_000_000

    #[test]
    fn test_initialize_without_token_is_unauthenticated() {
        let mut gate = SessionGate::new(MemoryTokenStore::default());
        assert_eq!(gate.initialize(NOW_MS), SessionPhase::Unauthenticated);
    }

    #[test]
    fn test_initialize_with_fresh_admin_token() {
        let store = MemoryTokenStore::default();
        store.persist(&token_for("ROLE_ADMIN", 1_700_000_100));
        let mut gate = SessionGate::new(store);
        assert_eq!(
            gate.initialize(NOW_MS),
            SessionPhase::Authenticated(Role::Admin)
        );
    }

    #[test]
    fn test_unknown_role_maps_to_manager() {
        let store = MemoryTokenStore::default();
        store.persist(&token_for("ROLE_COORDINATOR", 1_700_000_100));
        let mut gate = SessionGate::new(store);
        assert_eq!(
            gate.initialize(NOW_MS),
            SessionPhase::Authenticated(Role::Manager)
        );
    }

    #[test]
    fn test_expired_token_is_cleared_on_initialize() {
        let store = MemoryTokenStore::default();
        store.persist(&token_for("ROLE_ADMIN", 1_699_999_999));
        let mut gate = SessionGate::new(store.clone());
        assert_eq!(gate.initialize(NOW_MS), SessionPhase::Unauthenticated);
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn test_exp_equal_to_now_counts_as_expired() {
        let store = MemoryTokenStore::default();
        store.persist(&token_for("ROLE_ADMIN", 1_700_000_000));
        let mut gate = SessionGate::new(store);
        // exp * 1000 == now no es estrictamente mayor
        assert_eq!(gate.initialize(NOW_MS), SessionPhase::Unauthenticated);
    }

    #[test]
    fn test_unreadable_token_is_cleared_on_initialize() {
        let store = MemoryTokenStore::default();
        store.persist("no-es-un-jwt");
        let mut gate = SessionGate::new(store.clone());
        assert_eq!(gate.initialize(NOW_MS), SessionPhase::Unauthenticated);
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn test_login_authenticates_and_persists() {
        let store = MemoryTokenStore::default();
        let mut gate = SessionGate::new(store.clone());
        let token = token_for("ROLE_MANAGER", 1_800_000_000);
        assert_eq!(gate.login(&token, Role::Manager, NOW_MS), Ok(Role::Manager));
        assert_eq!(gate.phase(), SessionPhase::Authenticated(Role::Manager));
        assert_eq!(store.stored(), Some(token));
    }

    #[test]
    fn test_login_expired_token_is_rejected() {
        let store = MemoryTokenStore::default();
        let mut gate = SessionGate::new(store.clone());
        // El rol coincide con el portal, pero el token ya caducó
        let token = token_for("ROLE_ADMIN", 1_699_999_999);

        assert_eq!(
            gate.login(&token, Role::Admin, NOW_MS),
            Err(AuthError::TokenExpired)
        );
        assert!(!gate.phase().is_authenticated());
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn test_login_role_mismatch_leaves_store_empty() {
        let store = MemoryTokenStore::default();
        let mut gate = SessionGate::new(store.clone());
        let token = token_for("ROLE_MANAGER", 1_800_000_000);

        let err = gate.login(&token, Role::Admin, NOW_MS).unwrap_err();
        assert_eq!(
            err,
            AuthError::AccessDenied {
                actual_role: "ROLE_MANAGER".to_string(),
                portal: Role::Admin,
            }
        );
        assert_eq!(store.stored(), None);
        assert!(!gate.phase().is_authenticated());
    }

    #[test]
    fn test_login_unreadable_token_fails_and_clears_store() {
        let store = MemoryTokenStore::default();
        let mut gate = SessionGate::new(store.clone());
        assert_eq!(
            gate.login("basura", Role::Admin, NOW_MS),
            Err(AuthError::InvalidToken)
        );
        assert!(!gate.phase().is_authenticated());
        // El token basura no puede quedar persistido
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn test_logout_clears_token_and_phase() {
        let store = MemoryTokenStore::default();
        let mut gate = SessionGate::new(store.clone());
        let token = token_for("ROLE_ADMIN", 1_800_000_000);
        gate.login(&token, Role::Admin, NOW_MS).unwrap();

        gate.logout();
        assert_eq!(gate.phase(), SessionPhase::Unauthenticated);
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn test_only_first_401_invalidates() {
        let store = MemoryTokenStore::default();
        let mut gate = SessionGate::new(store.clone());
        let token = token_for("ROLE_MANAGER", 1_800_000_000);
        gate.login(&token, Role::Manager, NOW_MS).unwrap();

        // Tres requests en vuelo devuelven 401 casi a la vez
        let signals = [gate.invalidate(), gate.invalidate(), gate.invalidate()];
        assert_eq!(signals.iter().filter(|s| **s).count(), 1);
        assert_eq!(store.stored(), None);
        assert_eq!(gate.phase(), SessionPhase::Unauthenticated);
    }

    #[test]
    fn test_invalidate_without_session_is_silent() {
        let mut gate = SessionGate::new(MemoryTokenStore::default());
        gate.initialize(NOW_MS);
        assert!(!gate.invalidate());
    }
}
