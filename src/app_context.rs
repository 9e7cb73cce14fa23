use crate::{config::Config, error_collector::ErrorCollector};

#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub errors: ErrorCollector,
}

impl AppContext {
    pub fn new(config: Config, errors: ErrorCollector) -> Self {
        Self { config, errors }
    }
}
