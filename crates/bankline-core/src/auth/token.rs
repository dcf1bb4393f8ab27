//! Structural decoding of session tokens.
//!
//! Session tokens are compact JWTs (`header.payload.signature`). The client
//! only ever reads the payload segment to find out who is signed in; the
//! signature is never checked here, so nothing decoded by this module may be
//! used to make an authorization decision.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Padding is optional in compact tokens, and some issuers emit it anyway.
const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Display claims carried by an access token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: Option<String>,
    pub sub: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    pub iat: Option<i64>,
    pub exp: Option<i64>,
}

impl Claims {
    fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        let number = |key: &str| value.get(key).and_then(Value::as_i64);

        Self {
            email: text("email"),
            sub: text("sub"),
            role: text("role"),
            token_type: text("type"),
            iat: number("iat"),
            exp: number("exp"),
        }
    }
}

/// Decode the payload segment into a JSON object.
fn payload(token: &str) -> Option<Value> {
    let segment = token.split('.').nth(1)?;

    let bytes = URL_SAFE_LENIENT
        .decode(segment)
        .or_else(|_| STANDARD_LENIENT.decode(segment))
        .ok()?;

    match serde_json::from_slice::<Value>(&bytes).ok()? {
        value @ Value::Object(_) => Some(value),
        _ => None,
    }
}

/// Extract the `email` claim from a token.
///
/// Returns `None` for anything that is not a dotted token with a base64 JSON
/// object payload holding a string `email`.
pub fn decode_email(token: &str) -> Option<String> {
    payload(token)?
        .get("email")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Extract all display claims from a token. Individual claims of the wrong
/// JSON type are treated as absent.
pub fn decode_claims(token: &str) -> Option<Claims> {
    payload(token).map(|value| Claims::from_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an unsigned token around a JSON payload.
    fn token_with(payload: &str) -> String {
        let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload);
        format!("eyJhbGciOiJSUzI1NiJ9.{}.signature", encoded)
    }

    #[test]
    fn test_decode_email_known_token() {
        let token = "abc.eyJlbWFpbCI6ImFAeC5jb20ifQ.sig";
        assert_eq!(decode_email(token).as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_decode_email_two_segments_is_enough() {
        assert_eq!(
            decode_email("abc.eyJlbWFpbCI6ImFAeC5jb20ifQ").as_deref(),
            Some("a@x.com")
        );
    }

    #[test]
    fn test_decode_email_with_padding_and_standard_alphabet() {
        let padded = base64::engine::general_purpose::STANDARD.encode(r#"{"email":"ab@x.io"}"#);
        assert!(padded.ends_with('='));
        let token = format!("h.{}.s", padded);
        assert_eq!(decode_email(&token).as_deref(), Some("ab@x.io"));
    }

    #[test]
    fn test_decode_email_url_safe_characters() {
        let token = token_with(r#"{"email":"q@x.com","note":"??>??>"}"#);
        assert!(token.contains('-'));
        assert_eq!(decode_email(&token).as_deref(), Some("q@x.com"));
    }

    #[test]
    fn test_decode_email_malformed_inputs() {
        assert_eq!(decode_email(""), None);
        assert_eq!(decode_email("no-dots-here"), None);
        assert_eq!(decode_email("a..c"), None);
        assert_eq!(decode_email("a.!!!not base64!!!.c"), None);
        assert_eq!(decode_email(&token_with("not json")), None);
        assert_eq!(decode_email(&token_with(r#"["email"]"#)), None);
        assert_eq!(decode_email(&token_with(r#""a@x.com""#)), None);
    }

    #[test]
    fn test_decode_email_missing_or_wrong_type() {
        assert_eq!(decode_email(&token_with(r#"{"sub":"42"}"#)), None);
        assert_eq!(decode_email(&token_with(r#"{"email":null}"#)), None);
        assert_eq!(decode_email(&token_with(r#"{"email":7}"#)), None);
    }

    #[test]
    fn test_decode_email_ignores_signature() {
        let a = token_with(r#"{"email":"a@x.com"}"#);
        let b = a.replace(".signature", ".totally-different");
        assert_eq!(decode_email(&a), decode_email(&b));
    }

    #[test]
    fn test_decode_claims() {
        let token = token_with(
            r#"{"sub":"4d1c","email":"a@x.com","role":"USER","type":"access","iat":1700000000,"exp":1700000900}"#,
        );
        let claims = decode_claims(&token).expect("claims");
        assert_eq!(claims.email.as_deref(), Some("a@x.com"));
        assert_eq!(claims.sub.as_deref(), Some("4d1c"));
        assert_eq!(claims.role.as_deref(), Some("USER"));
        assert_eq!(claims.token_type.as_deref(), Some("access"));
        assert_eq!(claims.iat, Some(1_700_000_000));
        assert_eq!(claims.exp, Some(1_700_000_900));
    }

    #[test]
    fn test_decode_claims_tolerates_odd_types() {
        let claims = decode_claims(&token_with(r#"{"email":"a@x.com","exp":"soon"}"#))
            .expect("claims");
        assert_eq!(claims.email.as_deref(), Some("a@x.com"));
        assert_eq!(claims.exp, None);

        assert_eq!(decode_claims("garbage"), None);
    }
}
