//! Typed row models and request DTOs, one module per entity.
//!
//! Wire format is camelCase to stay compatible with the public site's
//! existing JSON payloads.

pub mod blog_post;
pub mod client;
pub mod job_application;
pub mod job_position;
pub mod news_event;
pub mod prime_location;
pub mod project;
pub mod user;
