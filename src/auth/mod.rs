//! Token authentication: payload, makers and request middleware

pub mod jwt;
pub mod maker;
pub mod middleware;
pub mod paseto;
pub mod payload;

pub use jwt::JwtMaker;
pub use maker::{new_maker, Maker, TokenError, TokenKind};
pub use middleware::{extract_bearer_token, require_auth, AuthError, AuthPayload};
pub use paseto::PasetoMaker;
pub use payload::Payload;
