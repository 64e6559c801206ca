pub mod color_collections;
pub mod users;
