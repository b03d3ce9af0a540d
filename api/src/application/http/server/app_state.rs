use std::sync::Arc;

use recipelens_core::application::RecipeLensService;

use crate::{application::http::page::renderer::PageRenderer, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<RecipeLensService>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipeLensService, pages: PageRenderer) -> Self {
        Self {
            args,
            service: Arc::new(service),
            pages: Arc::new(pages),
        }
    }
}
