use std::sync::Arc;

use tubescript_config::Settings;
use tubescript_services::{FallbackChain, ProviderError, TranscriptProvider, YoutubeProvider};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub provider: Arc<dyn TranscriptProvider>,
    /// Chain behind `/transcript/{video_id}`.
    pub full_chain: Arc<FallbackChain>,
    /// Chain behind the single-function request handler.
    pub compact_chain: Arc<FallbackChain>,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, ProviderError> {
        let provider = Arc::new(YoutubeProvider::new(&settings.provider)?);
        Ok(Self::with_provider(settings, provider))
    }

    pub fn with_provider(settings: Settings, provider: Arc<dyn TranscriptProvider>) -> Self {
        Self {
            settings: Arc::new(settings),
            provider,
            full_chain: Arc::new(FallbackChain::full()),
            compact_chain: Arc::new(FallbackChain::compact()),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.settings.app.service_name
    }
}
