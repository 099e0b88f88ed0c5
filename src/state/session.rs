//! Session Persistence
//!
//! The access token and the signed-in user live in browser local storage.
//! On startup the stored pair is inspected: a missing token means no
//! session, and an expired or undecodable one is wiped so the app never
//! starts half-authenticated.

use crate::api::types::SessionUser;

/// Local storage key for the raw JWT
pub const TOKEN_KEY: &str = "token";
/// Local storage key for the serialized session user
pub const USER_KEY: &str = "user";

/// Authentication state of the running app
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Stored credentials not inspected yet; route guards must hold
    Loading,
    Anonymous,
    Authenticated(SessionUser),
}

/// Result of inspecting the persisted credentials
#[derive(Clone, Debug, PartialEq)]
pub enum StoredSession {
    /// Nothing stored
    Missing,
    /// Stored but expired or corrupt; must be wiped
    Invalid,
    Valid(SessionUser),
}

/// Decide what the persisted credentials are worth. `now` is seconds since
/// the epoch; a token is only good while its expiry lies in the future.
pub fn evaluate_stored_session(
    token: Option<&str>,
    user_json: Option<&str>,
    now: i64,
) -> StoredSession {
    let token = match token {
        Some(token) => token,
        None => return StoredSession::Missing,
    };

    match token_expiry(token) {
        Some(exp) if exp > now => {}
        _ => return StoredSession::Invalid,
    }

    let user_json = match user_json {
        Some(json) => json,
        None => return StoredSession::Invalid,
    };

    match serde_json::from_str::<SessionUser>(user_json) {
        Ok(user) => StoredSession::Valid(user),
        Err(_) => StoredSession::Invalid,
    }
}

/// Expiry claim of a JWT in seconds since the epoch, without verifying the
/// signature (the backend re-checks every request anyway)
pub fn token_expiry(token: &str) -> Option<i64> {
    #[derive(serde::Deserialize)]
    struct Claims {
        exp: i64,
    }

    let payload = token.split('.').nth(1)?;
    let bytes = base64url_decode(payload)?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    Some(claims.exp)
}

/// Decode base64, accepting both the standard and the URL-safe alphabet,
/// with or without padding
fn base64url_decode(input: &str) -> Option<Vec<u8>> {
    let mut buffer = 0u32;
    let mut bits = 0u32;
    let mut out = Vec::new();

    for byte in input.bytes() {
        let value = match byte {
            b'A'..=b'Z' => byte - b'A',
            b'a'..=b'z' => byte - b'a' + 26,
            b'0'..=b'9' => byte - b'0' + 52,
            b'+' | b'-' => 62,
            b'/' | b'_' => 63,
            b'=' => continue,
            _ => return None,
        };

        buffer = (buffer << 6) | value as u32;
        bits += 6;

        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }

    Some(out)
}

// ============ Local Storage ============

fn read_item(key: &str) -> Option<String> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(key) {
                return Some(value);
            }
        }
    }
    None
}

/// Raw stored token, used for the Authorization header
pub fn stored_token() -> Option<String> {
    read_item(TOKEN_KEY)
}

/// Serialized stored user
pub fn stored_user_json() -> Option<String> {
    read_item(USER_KEY)
}

/// Persist the credential pair
pub fn write_session(token: &str, user: &SessionUser) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(json) = serde_json::to_string(user) {
                let _ = storage.set_item(TOKEN_KEY, token);
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
    }
}

/// Remove both keys
pub fn clear_session() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Base64url encode without padding, the shape real JWTs use
    fn encode(data: &[u8]) -> String {
        const ALPHABET: &[u8] =
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

        let mut out = String::new();
        let mut i = 0;

        while i < data.len() {
            let b0 = data[i] as usize;
            let b1 = if i + 1 < data.len() { data[i + 1] as usize } else { 0 };
            let b2 = if i + 2 < data.len() { data[i + 2] as usize } else { 0 };

            out.push(ALPHABET[b0 >> 2] as char);
            out.push(ALPHABET[((b0 & 0x03) << 4) | (b1 >> 4)] as char);
            if i + 1 < data.len() {
                out.push(ALPHABET[((b1 & 0x0f) << 2) | (b2 >> 6)] as char);
            }
            if i + 2 < data.len() {
                out.push(ALPHABET[b2 & 0x3f] as char);
            }

            i += 3;
        }

        out
    }

    fn make_token(exp: i64) -> String {
        let header = encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = encode(
            format!(r#"{{"sub":"jperez","user_id":7,"role":"client","exp":{}}}"#, exp).as_bytes(),
        );
        format!("{}.{}.signature", header, payload)
    }

    fn user_json(role: &str) -> String {
        format!(r#"{{"username":"jperez","first_name":"Juan","role":"{}"}}"#, role)
    }

    #[test]
    fn test_base64url_round_trip() {
        let data = b"facturas del mes";
        assert_eq!(base64url_decode(&encode(data)), Some(data.to_vec()));
    }

    #[test]
    fn test_base64url_accepts_both_alphabets() {
        // 0xfb 0xef encodes to "++8=" standard, "--8" url-safe
        assert_eq!(base64url_decode("++8="), Some(vec![0xfb, 0xef]));
        assert_eq!(base64url_decode("--8"), Some(vec![0xfb, 0xef]));
    }

    #[test]
    fn test_base64url_rejects_invalid_chars() {
        assert_eq!(base64url_decode("ab cd"), None);
        assert_eq!(base64url_decode("a!b"), None);
    }

    #[test]
    fn test_token_expiry_reads_claim() {
        let token = make_token(4_102_444_800);
        assert_eq!(token_expiry(&token), Some(4_102_444_800));
    }

    #[test]
    fn test_token_expiry_malformed() {
        assert_eq!(token_expiry("not-a-jwt"), None);
        assert_eq!(token_expiry("a.b.c"), None);
        assert_eq!(token_expiry(""), None);
    }

    #[test]
    fn test_missing_token_means_no_session() {
        let result = evaluate_stored_session(None, Some(&user_json("client")), 1_000);
        assert_eq!(result, StoredSession::Missing);
    }

    #[test]
    fn test_expired_token_invalidates_session() {
        let token = make_token(1_000);
        let result = evaluate_stored_session(Some(&token), Some(&user_json("client")), 2_000);
        assert_eq!(result, StoredSession::Invalid);
    }

    #[test]
    fn test_token_expiring_now_is_invalid() {
        let token = make_token(2_000);
        let result = evaluate_stored_session(Some(&token), Some(&user_json("client")), 2_000);
        assert_eq!(result, StoredSession::Invalid);
    }

    #[test]
    fn test_garbage_token_invalidates_session() {
        let result =
            evaluate_stored_session(Some("garbage"), Some(&user_json("client")), 1_000);
        assert_eq!(result, StoredSession::Invalid);
    }

    #[test]
    fn test_corrupt_user_invalidates_session() {
        let token = make_token(9_000);
        assert_eq!(
            evaluate_stored_session(Some(&token), Some("{not json"), 1_000),
            StoredSession::Invalid
        );
        assert_eq!(
            evaluate_stored_session(Some(&token), None, 1_000),
            StoredSession::Invalid
        );
    }

    #[test]
    fn test_valid_pair_restores_user() {
        let token = make_token(9_000);
        let result =
            evaluate_stored_session(Some(&token), Some(&user_json("administrator")), 1_000);
        match result {
            StoredSession::Valid(user) => {
                assert_eq!(user.username, "jperez");
                assert!(user.is_admin());
            }
            other => panic!("expected valid session, got {:?}", other),
        }
    }
}
