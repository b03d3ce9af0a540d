pub mod batch;
pub mod health;
pub mod page;
pub mod recipe;
pub mod server;
