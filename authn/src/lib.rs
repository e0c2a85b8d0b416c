//! Authentication primitives library
//!
//! Provides reusable credential-handling infrastructure for services:
//! - Password hashing (bcrypt)
//! - Session token issuance and verification (JWT)
//!
//! Each service defines its own domain traits and wires these implementations in.
//! Keeping the primitives free of domain types lets them be reused and tested in
//! isolation.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use authn::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use authn::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", 24);
//! let token = issuer.issue("user123").unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
