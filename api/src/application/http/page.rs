pub mod handlers;
pub mod renderer;
pub mod router;
pub mod view;
