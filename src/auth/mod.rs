//! Authentication Module
//!
//! This module implements the account and session lifecycle: registration,
//! login, password change, logout, and the pieces those are built from.
//!
//! # Module Structure
//!
//! - **`tokens`** - Access/refresh token issuance and verification
//! - **`users`** - Account records and credential-store queries
//! - **`sessions`** - Refresh-token store (the revocation authority)
//! - **`cookies`** - Session cookie construction and parsing
//! - **`validation`** - Request validation producing field-error lists
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Session Model
//!
//! Both tokens are self-contained signed credentials. The refresh token is
//! additionally persisted in the session store at issuance; that store is
//! the sole authority for revocation and is consulted only by logout. The
//! session-check middleware trusts signature and expiry alone.

pub mod cookies;
pub mod handlers;
pub mod sessions;
pub mod tokens;
pub mod users;
pub mod validation;

pub use handlers::{change_password, login, logout, register};
pub use tokens::{TokenError, TokenService};
