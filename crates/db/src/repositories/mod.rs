//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. List methods page with
//! `LIMIT`/`OFFSET` and order by descending creation time.

pub mod blog_post_repo;
pub mod client_repo;
pub mod job_application_repo;
pub mod job_position_repo;
pub mod news_event_repo;
pub mod prime_location_repo;
pub mod project_repo;
pub mod user_repo;

pub use blog_post_repo::BlogPostRepo;
pub use client_repo::ClientRepo;
pub use job_application_repo::JobApplicationRepo;
pub use job_position_repo::JobPositionRepo;
pub use news_event_repo::NewsEventRepo;
pub use prime_location_repo::PrimeLocationRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
