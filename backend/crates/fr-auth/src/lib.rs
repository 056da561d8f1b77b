pub mod bearer;
pub mod claims;
pub mod error;
pub mod google_verifier;
pub mod identity_verifier;
pub mod jwt_issuer;
pub mod jwt_validator;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use google_verifier::{GOOGLE_CERTS_URL, GoogleIdTokenVerifier};
pub use identity_verifier::IdentityVerifier;
pub use jwt_issuer::{DEFAULT_SESSION_TTL_HOURS, JwtIssuer};
pub use jwt_validator::JwtValidator;

#[cfg(test)]
mod tests;
