pub mod claims;
pub mod errors;
pub mod issuer;

pub use claims::SessionClaims;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
