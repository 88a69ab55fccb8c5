//! taskpad - a minimal task-management HTTP backend
//!
//! CRUD over a single `tasks` table, served as JSON over HTTP.

pub mod cli;
pub mod config;
pub mod http;
pub mod store;
pub mod task;
