//! In-memory directories for session tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use unifinder_lib::modules::directory::{SearchResultSet, UniversityDirectory};
use unifinder_lib::shared::errors::{AppError, AppResult};

/// Answers from a fixed table; unknown countries yield an empty set
#[derive(Default)]
pub struct StaticDirectory {
    responses: HashMap<String, AppResult<SearchResultSet>>,
    calls: AtomicUsize,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, country: &str, outcome: AppResult<SearchResultSet>) -> Self {
        self.responses.insert(country.to_string(), outcome);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UniversityDirectory for StaticDirectory {
    async fn lookup(&self, country: &str) -> AppResult<SearchResultSet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(country)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Holds lookups for `gated` until any other lookup has answered
pub struct GatedDirectory {
    inner: StaticDirectory,
    gated: String,
    gate: Arc<Notify>,
}

impl GatedDirectory {
    pub fn new(inner: StaticDirectory, gated: &str) -> Self {
        Self {
            inner,
            gated: gated.to_string(),
            gate: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl UniversityDirectory for GatedDirectory {
    async fn lookup(&self, country: &str) -> AppResult<SearchResultSet> {
        if country == self.gated {
            self.gate.notified().await;
            self.inner.lookup(country).await
        } else {
            let result = self.inner.lookup(country).await;
            self.gate.notify_one();
            result
        }
    }
}

pub fn network_down() -> AppError {
    AppError::NetworkError("Failed to connect to university directory".to_string())
}
