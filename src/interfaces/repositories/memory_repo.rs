use std::sync::Arc;

use crate::store::memory::PortfolioStore;

#[derive(Clone)]
pub struct InMemoryPortfolioRepo {
    pub store: Arc<PortfolioStore>,
}
