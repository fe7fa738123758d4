use base64::prelude::*;

use crate::auth::decode_token;
use crate::error::ClubError;

fn make_token(payload_json: &str) -> String {
    let header = BASE64_URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let payload = BASE64_URL_SAFE_NO_PAD.encode(payload_json);
    format!("{}.{}.", header, payload)
}

#[test]
fn test_decode_well_formed_token() {
    let token = make_token(r#"{"id":"user-7","name":"Ada","email":"ada@example.com"}"#);
    let payload = decode_token(&token).unwrap();
    assert_eq!(payload.id, "user-7");
    assert_eq!(payload.name.as_deref(), Some("Ada"));
    assert_eq!(payload.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn test_decode_token_with_only_id_claim() {
    let token = make_token(r#"{"id":"user-1"}"#);
    let payload = decode_token(&token).unwrap();
    assert_eq!(payload.id, "user-1");
    assert!(payload.name.is_none());
    assert!(payload.exp.is_none());
}

#[test]
fn test_decode_rejects_missing_segments() {
    let result = decode_token("not-a-jwt");
    assert!(matches!(result, Err(ClubError::TokenError(_))));
}

#[test]
fn test_decode_rejects_bad_base64() {
    let result = decode_token("header.!!!not-base64!!!.sig");
    assert!(matches!(result, Err(ClubError::TokenError(_))));
}

#[test]
fn test_decode_rejects_non_claims_payload() {
    let payload = BASE64_URL_SAFE_NO_PAD.encode("just some text");
    let token = format!("header.{}.sig", payload);
    assert!(matches!(decode_token(&token), Err(ClubError::TokenError(_))));
}

#[test]
fn test_decode_rejects_empty_string() {
    assert!(matches!(decode_token(""), Err(ClubError::TokenError(_))));
}
