/// Token acquisition, validation and refresh
pub mod auth;
/// Authenticated session and endpoint dispatch
pub mod client;
/// Application configuration module
pub mod config;
/// CSV export of API records
pub mod export;
/// Endpoint interfaces
pub mod interfaces;
