use std::sync::Arc;

use crate::matching::store::MatchStore;
use crate::matching::weights::ScoringWeights;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable store. Default: PgMatchStore.
    pub store: Arc<dyn MatchStore>,
    /// Loaded from config at startup; every scoring call borrows these.
    pub weights: ScoringWeights,
}
