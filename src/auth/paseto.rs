//! PASETO (v4.local) token maker

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Duration;
use rusty_paseto::core::{
    Footer, ImplicitAssertion, Key, Local, Paseto, PasetoNonce, PasetoSymmetricKey,
    Payload as PasetoPayload, V4,
};

use crate::auth::{Maker, Payload, TokenError};

/// Key length required by the `v4.local` cipher
pub const SYMMETRIC_KEY_SIZE: usize = 32;

const HEADER: &str = "v4.local.";

/// Nonce plus BLAKE2b tag; anything shorter cannot be a v4.local token
const MIN_BODY_SIZE: usize = 32 + 32;

/// PASETO maker. Tokens are encrypted, so claims are unreadable without the key.
pub struct PasetoMaker {
    symmetric_key: PasetoSymmetricKey<V4, Local>,
}

impl PasetoMaker {
    /// Create a maker from a key of exactly [`SYMMETRIC_KEY_SIZE`] bytes
    pub fn new(key: &str) -> Result<Self, TokenError> {
        let bytes: [u8; SYMMETRIC_KEY_SIZE] = key.as_bytes().try_into().map_err(|_| {
            TokenError::InvalidKeySize(format!(
                "must be exactly {} characters",
                SYMMETRIC_KEY_SIZE
            ))
        })?;

        Ok(Self {
            symmetric_key: PasetoSymmetricKey::<V4, Local>::from(Key::from(bytes)),
        })
    }
}

impl Maker for PasetoMaker {
    fn create_token(
        &self,
        username: &str,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(username, duration)?;
        let message =
            serde_json::to_string(&payload).map_err(|e| TokenError::Signing(e.to_string()))?;

        let nonce = Key::<32>::try_new_random().map_err(|e| TokenError::Signing(e.to_string()))?;
        let nonce = PasetoNonce::<V4, Local>::from(&nonce);

        let token = Paseto::<V4, Local>::builder()
            .set_payload(PasetoPayload::from(message.as_str()))
            .try_encrypt(&self.symmetric_key, &nonce)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok((token, payload))
    }

    fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        // rusty_paseto slices the body without a length check
        check_body_size(token)?;

        let message = Paseto::<V4, Local>::try_decrypt(
            token,
            &self.symmetric_key,
            None::<Footer>,
            None::<ImplicitAssertion>,
        )
        .map_err(|_| TokenError::Invalid)?;

        let payload: Payload = serde_json::from_str(&message).map_err(|_| TokenError::Invalid)?;
        payload.valid()?;
        Ok(payload)
    }
}

fn check_body_size(token: &str) -> Result<(), TokenError> {
    let body = token.strip_prefix(HEADER).ok_or(TokenError::Invalid)?;
    let body = body.split('.').next().unwrap_or_default();
    let decoded = URL_SAFE_NO_PAD.decode(body).map_err(|_| TokenError::Invalid)?;

    if decoded.len() < MIN_BODY_SIZE {
        return Err(TokenError::Invalid);
    }
    Ok(())
}
