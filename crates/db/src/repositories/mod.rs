//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that run on the connection of the caller's [`Session`](crate::Session).

pub mod color_collection_repo;
pub mod user_repo;

pub use color_collection_repo::ColorCollectionRepo;
pub use user_repo::UserRepo;
