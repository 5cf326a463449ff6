//! Authentication utilities library
//!
//! Provides the authentication infrastructure the adboard service builds on:
//! - Password hashing (Argon2id)
//! - Signed, time-limited access tokens carrying user identity and admin flag
//!
//! The service defines its own authorization guards on top; this crate knows
//! nothing about the application domain beyond a numeric user id.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//! use jsonwebtoken::Algorithm;
//!
//! let tokens = TokenService::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Algorithm::HS256,
//!     Duration::minutes(30),
//! );
//! let token = tokens.issue(42, false).unwrap();
//! let claims = tokens.validate(&token).unwrap();
//! assert_eq!(claims.id, 42);
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenService;
