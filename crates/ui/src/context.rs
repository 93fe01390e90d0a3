use std::sync::Arc;

use quiz_core::QuizPolicy;
use services::CatalogSource;
use url::Url;

pub trait UiApp: Send + Sync {
    fn catalog_source(&self) -> Arc<dyn CatalogSource>;
    fn policy(&self) -> QuizPolicy;

    /// Outbound link shown next to a revealed secret word.
    fn reward_url(&self) -> Option<Url>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog_source: Arc<dyn CatalogSource>,
    policy: QuizPolicy,
    reward_url: Option<Url>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog_source: app.catalog_source(),
            policy: app.policy(),
            reward_url: app.reward_url(),
        }
    }

    #[must_use]
    pub fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        Arc::clone(&self.catalog_source)
    }

    #[must_use]
    pub fn policy(&self) -> QuizPolicy {
        self.policy
    }

    #[must_use]
    pub fn reward_url(&self) -> Option<&Url> {
        self.reward_url.as_ref()
    }
}

// Provided by the composition root (`crates/app`) or the view test harness.

#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
