use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::{alphabet, Engine};

use crate::models::TokenClaims;

// Los tokens llegan en base64url, con o sin padding
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodifica el payload de un JWT sin verificar la firma.
/// Cualquier fallo (formato, base64, UTF-8, JSON) se trata como token ausente.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let normalized: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let bytes = PAYLOAD_ENGINE.decode(normalized.as_bytes()).ok()?;
    let json = String::from_utf8(bytes).ok()?;
    serde_json::from_str(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

    fn token_with_payload(payload_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
        format!("{}.{}.firma", header, payload)
    }

    #[test]
    fn test_decodes_claims_from_valid_token() {
        let token = token_with_payload(r#"{"role":"ROLE_ADMIN","exp":4102444800}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role.as_deref(), Some("ROLE_ADMIN"));
        assert_eq!(claims.exp, Some(4102444800));
    }

    #[test]
    fn test_accepts_url_safe_alphabet_without_padding() {
        // "ÿÿÿ" fuerza '_' en la codificación base64url del payload
        let token = token_with_payload(r#"{"role":"ÿÿÿ","exp":1}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role.as_deref(), Some("ÿÿÿ"));
    }

    #[test]
    fn test_accepts_padded_payload() {
        let header = URL_SAFE.encode(br#"{"alg":"HS256"}"#);
        let payload = URL_SAFE.encode(br#"{"role":"ROLE_MANAGER","exp":99}"#);
        let token = format!("{}.{}.firma", header, payload);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role.as_deref(), Some("ROLE_MANAGER"));
    }

    #[test]
    fn test_token_without_payload_segment_is_none() {
        assert!(decode_claims("solo-un-segmento").is_none());
        assert!(decode_claims("").is_none());
    }

    #[test]
    fn test_invalid_base64_is_none() {
        assert!(decode_claims("cabecera.¡¡no-es-base64!!.firma").is_none());
    }

    #[test]
    fn test_non_json_payload_is_none() {
        let payload = URL_SAFE_NO_PAD.encode(b"esto no es json");
        let token = format!("h.{}.s", payload);
        assert!(decode_claims(&token).is_none());
    }

    #[test]
    fn test_invalid_utf8_payload_is_none() {
        let payload = URL_SAFE_NO_PAD.encode([0xFFu8, 0xFE, 0x80]);
        let token = format!("h.{}.s", payload);
        assert!(decode_claims(&token).is_none());
    }

    #[test]
    fn test_unknown_claims_are_ignored() {
        let token =
            token_with_payload(r#"{"role":"ROLE_MANAGER","exp":10,"sub":"ana@x.com","iat":1}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role.as_deref(), Some("ROLE_MANAGER"));
    }

    #[test]
    fn test_claims_without_exp_count_as_expired() {
        let token = token_with_payload(r#"{"role":"ROLE_ADMIN"}"#);
        let claims = decode_claims(&token).unwrap();
        assert!(!claims.is_fresh(0));
    }
}
