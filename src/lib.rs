//! Album API Library
//!
//! REST CRUD service over the `albums` and `track` tables. Modules are
//! public so integration tests can build the router against a test store.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod test_utils;
