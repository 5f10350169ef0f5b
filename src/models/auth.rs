use serde::{Deserialize, Serialize};

// Payload decodificado del JWT (solo los claims que usa el panel)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenClaims {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Un token sin exp se trata como expirado
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        match self.exp {
            Some(exp) => exp * 1000 > now_ms,
            None => false,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OtpRequest {
    pub email: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}
