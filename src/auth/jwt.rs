//! JWT token maker

use chrono::Duration;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::{Maker, Payload, TokenError};

/// Minimum secret length accepted by [`JwtMaker`]
pub const MIN_SECRET_KEY_SIZE: usize = 32;

const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JSON Web Token maker using a shared HMAC secret
pub struct JwtMaker {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtMaker {
    /// Create a maker, rejecting secrets shorter than [`MIN_SECRET_KEY_SIZE`]
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.len() < MIN_SECRET_KEY_SIZE {
            return Err(TokenError::InvalidKeySize(format!(
                "must be at least {} characters",
                MIN_SECRET_KEY_SIZE
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    fn validation(algorithm: Algorithm) -> Validation {
        let mut validation = Validation::new(algorithm);
        // Expiry lives in our own claims and is checked by Payload::valid
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation
    }
}

impl Maker for JwtMaker {
    fn create_token(
        &self,
        username: &str,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(username, duration)?;
        let token = encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))?;
        Ok((token, payload))
    }

    fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        // An unparsable header also covers `"alg": "none"`, which has no
        // Algorithm variant.
        let header = decode_header(token).map_err(|_| TokenError::Invalid)?;
        if !HMAC_ALGORITHMS.contains(&header.alg) {
            return Err(TokenError::Invalid);
        }

        let payload = decode::<Payload>(token, &self.decoding_key, &Self::validation(header.alg))
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)?;

        payload.valid()?;
        Ok(payload)
    }
}
