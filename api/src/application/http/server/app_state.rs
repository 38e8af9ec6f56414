use std::sync::Arc;

use gutcheck_core::application::GutcheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: GutcheckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: GutcheckService) -> Self {
        Self { args, service }
    }
}
