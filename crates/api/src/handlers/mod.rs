//! Request handlers, one module per entity.
//!
//! Handlers validate input at the boundary, delegate persistence to the
//! repositories in `stonegate-db`, and shape responses. They hold no
//! business state of their own.

pub mod auth;
pub mod blog_post;
pub mod career;
pub mod client;
pub mod news_event;
pub mod prime_location;
pub mod project;
