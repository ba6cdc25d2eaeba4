//! The `taskpad` library crate.
//!
//! Contains the domain models, validation rules, repository adapters,
//! routing configuration, and error handling for the Taskpad API.
//! The main binary (`main.rs`) assembles these pieces and runs the server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repo;
pub mod routes;
