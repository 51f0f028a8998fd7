//! Participant-facing survey endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::survey_routes;
