pub mod api;
pub mod mock;
pub mod ui;
