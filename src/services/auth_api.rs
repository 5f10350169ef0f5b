// ============================================================================
// AUTH API - Login por código OTP al correo
// ============================================================================

use crate::models::{OtpRequest, TokenResponse, VerifyOtpRequest};
use crate::services::api_client;

/// Pide un código de un solo uso al correo indicado
pub async fn request_otp(email: &str) -> Result<(), String> {
    log::info!("📧 Solicitando OTP para: {}", email);
    api_client::post_unit(
        "/auth/request-email-otp",
        &OtpRequest {
            email: email.to_string(),
        },
    )
    .await
}

/// Canjea el código por un token de sesión
pub async fn verify_otp(email: &str, otp: &str) -> Result<TokenResponse, String> {
    log::info!("🔐 Verificando OTP de: {}", email);
    api_client::post_json(
        "/auth/verify-email-otp",
        &VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        },
    )
    .await
}
