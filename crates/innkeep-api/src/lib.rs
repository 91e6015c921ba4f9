//! # innkeep-api
//!
//! HTTP API layer for Innkeep: router, handlers, request/response DTOs,
//! and the mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
