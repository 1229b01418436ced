use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::Value;

fn decode_claims(token: &str) -> Option<Value> {
    let mut parts = token.split('.');
    parts.next()?;
    let payload = parts.next()?.trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&decoded).ok()
}

/// `exp` claim of a JWT, in seconds since the epoch.
pub fn expires_at(token: &str) -> Option<i64> {
    decode_claims(token)?.get("exp").and_then(Value::as_i64)
}

/// Tokens without a readable `exp` are left to the backend to judge.
pub fn is_expired(token: &str, now_secs: i64) -> bool {
    expires_at(token).map(|exp| exp <= now_secs).unwrap_or(false)
}

pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(claims: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.signature",
            URL_SAFE_NO_PAD.encode(claims)
        )
    }

    #[test]
    fn reads_exp_claim() {
        let token = token_with(r#"{"sub":"STU001","exp":1700000000}"#);
        assert_eq!(expires_at(&token), Some(1_700_000_000));
        assert!(is_expired(&token, 1_700_000_000));
        assert!(!is_expired(&token, 1_699_999_999));
    }

    #[test]
    fn opaque_tokens_are_not_expired() {
        assert_eq!(expires_at("abc"), None);
        assert!(!is_expired("abc", i64::MAX));
        assert!(!is_expired(&token_with("not json"), 0));
    }
}
