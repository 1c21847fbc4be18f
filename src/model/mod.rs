/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Access token models
pub mod auth;
/// HTTP transport seam and raw response
pub mod http;
/// Request descriptors for the API endpoints
pub mod requests;
/// Typed views over API responses
pub mod responses;
