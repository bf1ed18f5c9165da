use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup with the default keyword sets and skill catalog;
    /// read-only afterwards, so requests share it without synchronization.
    pub analyzer: Arc<ResumeAnalyzer>,
}
