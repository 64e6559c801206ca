//! Transport shapes for the token flow.
//!
//! No endpoint issues or verifies tokens yet; these exist so clients and
//! future handlers agree on the wire format.

use serde::{Deserialize, Serialize};

/// Bearer token handed to a client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Claims extracted from a verified token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    #[serde(default)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_serializes_with_both_fields() {
        let token = Token {
            access_token: "abc".to_string(),
            token_type: "bearer".to_string(),
        };
        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(value, json!({"access_token": "abc", "token_type": "bearer"}));
    }

    #[test]
    fn token_data_username_is_optional() {
        let data: TokenData = serde_json::from_value(json!({})).unwrap();
        assert_eq!(data.username, None);

        let data: TokenData = serde_json::from_value(json!({"username": "ada"})).unwrap();
        assert_eq!(data.username.as_deref(), Some("ada"));
    }
}
