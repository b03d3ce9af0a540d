pub mod get_page;
pub mod submit_page;
