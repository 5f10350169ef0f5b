// ============================================================================
// SESSION STATE - Fases y roles de la sesión del panel
// ============================================================================

use std::fmt;

/// Portal al que pertenece el usuario autenticado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
}

impl Role {
    /// Claim que el backend emite para cada portal
    pub fn claim_value(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Manager => "ROLE_MANAGER",
        }
    }

    /// Nombre del portal en minúsculas (para mensajes de UI)
    pub fn portal_label(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
        }
    }

    /// Mapeo binario del claim: ROLE_ADMIN es admin, todo lo demás manager
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim {
            Some("ROLE_ADMIN") => Role::Admin,
            _ => Role::Manager,
        }
    }
}

/// Fase del ciclo de vida de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Initializing,
    Authenticated(Role),
    Unauthenticated,
}

impl SessionPhase {
    pub fn role(&self) -> Option<Role> {
        match self {
            SessionPhase::Authenticated(role) => Some(*role),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionPhase::Authenticated(_))
    }
}

/// Fallos al establecer sesión desde un token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// El token recibido no se pudo decodificar
    InvalidToken,
    /// El token recibido ya estaba caducado
    TokenExpired,
    /// El rol del token no corresponde al portal elegido
    AccessDenied { actual_role: String, portal: Role },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidToken => write!(f, "Invalid token received."),
            AuthError::TokenExpired => write!(f, "Session expired. Please log in again."),
            AuthError::AccessDenied { actual_role, portal } => write!(
                f,
                "Access denied. You are logged in as {} but trying to access {} portal.",
                actual_role,
                portal.portal_label()
            ),
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_only_from_role_admin_claim() {
        assert_eq!(Role::from_claim(Some("ROLE_ADMIN")), Role::Admin);
        assert_eq!(Role::from_claim(Some("ROLE_MANAGER")), Role::Manager);
        assert_eq!(Role::from_claim(Some("ROLE_SUPERUSER")), Role::Manager);
        assert_eq!(Role::from_claim(Some("")), Role::Manager);
        assert_eq!(Role::from_claim(None), Role::Manager);
    }

    #[test]
    fn test_access_denied_message() {
        let err = AuthError::AccessDenied {
            actual_role: "ROLE_MANAGER".to_string(),
            portal: Role::Admin,
        };
        assert_eq!(
            err.to_string(),
            "Access denied. You are logged in as ROLE_MANAGER but trying to access admin portal."
        );
    }
}
