pub mod api;
pub mod mock;
