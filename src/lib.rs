//! Forkful - Recipe-Box Backend
//!
//! Forkful is a small web backend for a recipe application: user accounts
//! with JWT cookie sessions, a per-user favorites list, and a thin proxy to
//! an external recipe search API.
//!
//! # Module Structure
//!
//! - **`config`** - Explicit application configuration loaded once at startup
//! - **`server`** - Application state, database setup, and router assembly
//! - **`auth`** - Token service, credential and session stores, auth handlers
//! - **`middleware`** - Session-check middleware for protected routes
//! - **`favorites`** - Per-account favorites CRUD
//! - **`recipes`** - Recipe search proxy
//! - **`error`** - API error taxonomy and HTTP mapping
//!
//! # Authentication Flow
//!
//! 1. **Registration**: email + password -> account created -> token pair set as cookies
//! 2. **Login**: credentials verified -> token pair set as cookies, refresh token persisted
//! 3. **Protected routes**: the `refreshToken` cookie is decoded by middleware
//! 4. **Logout**: the refresh token row is deleted from the session store

pub mod auth;
pub mod config;
pub mod error;
pub mod favorites;
pub mod middleware;
pub mod recipes;
pub mod routes;
pub mod server;

pub use config::AppConfig;
pub use error::ApiError;
pub use server::state::AppState;
