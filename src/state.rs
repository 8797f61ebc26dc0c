//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::access_service::random_secret;
use crate::application::services::{AccessService, LinkService};
use crate::config::Config;
use crate::domain::clock::Clock;
use crate::domain::store::KvStore;

/// Shared application state.
///
/// Cheap to clone: every field is reference counted or small.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn KvStore>>,
    pub access_service: Arc<AccessService>,
    pub store: Arc<dyn KvStore>,
    /// Base of returned short URLs; the request origin is used when `None`.
    pub public_base_url: Option<String>,
    /// Path of the create form, the target of `GET /` and logout.
    pub home_path: String,
}

impl AppState {
    /// Wires services on top of `store` according to `config`.
    ///
    /// Without a configured `SESSION_SECRET` a random one is generated, so
    /// sessions do not survive a restart.
    pub fn new(store: Arc<dyn KvStore>, clock: Arc<dyn Clock>, config: &Config) -> Self {
        let home_segment = config.home_path.trim_start_matches('/');
        let link_service = LinkService::new(store.clone(), clock.clone())
            .with_code_length(config.code_length)
            .with_reserved([home_segment]);

        let session_secret = config
            .session_secret
            .as_ref()
            .map(|s| s.as_bytes().to_vec())
            .unwrap_or_else(random_secret);
        let access_service =
            AccessService::new(config.effective_password_hash(), session_secret, clock);

        Self {
            link_service: Arc::new(link_service),
            access_service: Arc::new(access_service),
            store,
            public_base_url: config.public_base_url.clone(),
            home_path: config.home_path.clone(),
        }
    }
}
