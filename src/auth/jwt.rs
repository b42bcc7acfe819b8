use jsonwebtoken::{EncodingKey, Header, encode, errors::Error};

use crate::models::Claims;

/// Signs login tokens with one shared HS256 secret.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, user_id: i64) -> Result<String, Error> {
        encode(&Header::default(), &Claims { user_id }, &self.key)
    }
}
