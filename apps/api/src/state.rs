use std::sync::Arc;

use crate::catalog::ReferenceData;
use crate::config::Config;
use crate::device::DeviceRequestStore;
use crate::matching::mentor::MentorMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable reference tables, loaded once at startup and never refetched.
    pub reference: Arc<ReferenceData>,
    /// Pluggable mentor matcher. Default: KeywordWeightMatcher.
    pub mentor_matcher: Arc<dyn MentorMatcher>,
    /// In-memory store of simulated device provisioning requests.
    pub device_requests: DeviceRequestStore,
    pub config: Config,
}
