//! Server assembly: shared state, database setup, and app construction.

pub mod db;
pub mod init;
pub mod state;

pub use init::create_app;
pub use state::AppState;
