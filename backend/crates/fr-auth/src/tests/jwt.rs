use crate::{AuthError, Claims, JwtIssuer, JwtValidator};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
const RSA_PRIVATE_KEY: &[u8] = include_bytes!("fixtures/google_test_key.pem");

fn create_test_token(claims: &serde_json::Value, algorithm: Algorithm, secret: &[u8]) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims(user_id: i64) -> serde_json::Value {
    json!({
        "user_id": user_id,
        "exp": chrono::Utc::now().timestamp() + 3600,
    })
}

#[test]
fn given_issued_token_when_validated_then_returns_same_user_id() {
    let issuer = JwtIssuer::with_hs256(SECRET, 72);
    let validator = JwtValidator::with_hmac(SECRET);

    let token = issuer.issue(42).unwrap();
    let claims = validator.validate(&token).unwrap();

    assert_eq!(claims.user_id, 42);
}

#[test]
fn given_default_ttl_when_issued_then_expires_in_72_hours() {
    let issuer = JwtIssuer::with_hs256(SECRET, 72);
    let validator = JwtValidator::with_hmac(SECRET);
    let before = chrono::Utc::now().timestamp();

    let claims = validator.validate(&issuer.issue(7).unwrap()).unwrap();

    let expected = before + 72 * 3600;
    assert!(claims.exp >= expected && claims.exp <= expected + 5);
}

#[test]
fn given_expired_token_when_validated_then_returns_token_expired_error() {
    let validator = JwtValidator::with_hmac(SECRET);
    let claims = json!({
        "user_id": 1,
        "exp": chrono::Utc::now().timestamp() - 3600, // Expired 1 hour ago
    });
    let token = create_test_token(&claims, Algorithm::HS256, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_token_within_leeway_when_validated_then_accepted() {
    let validator = JwtValidator::with_hmac(SECRET);
    let claims = json!({
        "user_id": 1,
        "exp": chrono::Utc::now().timestamp() - 5,
    });
    let token = create_test_token(&claims, Algorithm::HS256, SECRET);

    assert!(validator.validate(&token).is_ok());
}

#[test]
fn given_wrong_secret_when_validated_then_returns_decode_error() {
    let wrong_secret = b"wrong-secret-key-at-least-32-bytes";
    let validator = JwtValidator::with_hmac(wrong_secret);
    let token = create_test_token(&valid_claims(1), Algorithm::HS256, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_hs512_token_when_validated_then_accepted() {
    let validator = JwtValidator::with_hmac(SECRET);
    let token = create_test_token(&valid_claims(9), Algorithm::HS512, SECRET);

    let claims = validator.validate(&token).unwrap();

    assert_eq!(claims.user_id, 9);
}

#[test]
fn given_rs256_token_when_validated_then_rejected() {
    let validator = JwtValidator::with_hmac(SECRET);
    let token = encode(
        &Header::new(Algorithm::RS256),
        &valid_claims(1),
        &EncodingKey::from_rsa_pem(RSA_PRIVATE_KEY).unwrap(),
    )
    .unwrap();

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_unsigned_none_token_when_validated_then_rejected() {
    let validator = JwtValidator::with_hmac(SECRET);
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(valid_claims(1).to_string());
    let token = format!("{}.{}.", header, payload);

    let result = validator.validate(&token);

    assert!(result.is_err());
}

#[test]
fn given_missing_user_id_when_validated_then_rejected() {
    let validator = JwtValidator::with_hmac(SECRET);
    let claims = json!({ "exp": chrono::Utc::now().timestamp() + 3600 });
    let token = create_test_token(&claims, Algorithm::HS256, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_string_user_id_when_validated_then_rejected() {
    let validator = JwtValidator::with_hmac(SECRET);
    let claims = json!({
        "user_id": "1",
        "exp": chrono::Utc::now().timestamp() + 3600,
    });
    let token = create_test_token(&claims, Algorithm::HS256, SECRET);

    assert!(validator.validate(&token).is_err());
}

#[test]
fn given_non_positive_user_id_when_validated_then_returns_invalid_claim() {
    let validator = JwtValidator::with_hmac(SECRET);

    for user_id in [0, -3] {
        let token = create_test_token(&valid_claims(user_id), Algorithm::HS256, SECRET);

        let result = validator.validate(&token);

        assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
    }
}

#[test]
fn given_claims_when_validated_directly_then_positive_ids_pass() {
    let claims = Claims { user_id: 1, exp: 0 };

    assert!(claims.validate().is_ok());
}
