use super::view::{facet_label, ResultsSummary, UniversityCard};
use crate::modules::directory::domain::{SearchResultSet, UniversityRecord};
use crate::modules::search::domain::{
    FacetDeriver, FacetSet, FilterEngine, FilterSelection, SessionMessage, SessionState,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::validation::Validator;
use serde::Serialize;

pub const INVALID_INPUT_MESSAGE: &str = "Please enter a country name";
pub const NETWORK_ERROR_MESSAGE: &str = "Please check your internet connection and try again.";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Unable to fetch universities. The service might be temporarily unavailable. Please try again later.";

/// Handle for one `begin_search` call.
///
/// Its generation is compared against the session's when the lookup
/// completes; a mismatch means a newer search has started since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

/// Read-only view published to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub generation: u64,
    pub query: Option<String>,
    pub records: Vec<UniversityRecord>,
    pub total: usize,
    pub facets: Option<FacetSet>,
    pub facet_label: Option<String>,
    pub selection: FilterSelection,
    pub message: Option<SessionMessage>,
    pub summary: Option<ResultsSummary>,
}

impl SessionSnapshot {
    pub fn cards(&self) -> Vec<UniversityCard> {
        UniversityCard::from_records(&self.records)
    }
}

/// Search state machine: `Idle -> Loading -> {Success, Empty, Error}`.
///
/// The session does no I/O. A caller opens a search with
/// [`SearchSession::begin_search`], performs the lookup, then hands the
/// outcome back through [`SearchSession::complete_search`].
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SessionState,
    generation: u64,
    query: Option<String>,
    results: SearchResultSet,
    facets: Option<FacetSet>,
    selection: FilterSelection,
    filtered: Vec<UniversityRecord>,
    message: Option<SessionMessage>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `country` and enter `Loading`.
    ///
    /// Blank input fails with `InvalidInput`, sets the prompt message and
    /// leaves the state untouched.
    pub fn begin_search(&mut self, country: &str) -> AppResult<SearchTicket> {
        let query = match Validator::validate_country_query(country) {
            Ok(query) => query,
            Err(e) => {
                log::debug!("Rejected search input: {}", e);
                self.message = Some(SessionMessage::error(INVALID_INPUT_MESSAGE));
                return Err(e);
            }
        };

        self.generation += 1;
        self.state = SessionState::Loading;
        self.query = Some(query.clone());
        self.results = Vec::new();
        self.facets = None;
        self.selection = FilterSelection::default();
        self.filtered = Vec::new();
        self.message = None;

        Ok(SearchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Apply a lookup outcome. Returns `false` when the ticket is stale and
    /// the outcome was discarded.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: AppResult<SearchResultSet>,
    ) -> bool {
        if ticket.generation != self.generation || self.state != SessionState::Loading {
            log::debug!(
                "Discarding stale result for '{}' (#{}, current #{})",
                ticket.query,
                ticket.generation,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(records) if !records.is_empty() => {
                let total = records.len();
                self.facets = Some(FacetDeriver::derive_states(&records));
                self.filtered = records.clone();
                self.results = records;
                self.state = SessionState::Success;
                self.message = Some(SessionMessage::success(format!(
                    "Found {} universities in {}!",
                    total, ticket.query
                )));
            }
            Ok(_) => {
                self.facets = Some(FacetSet::default());
                self.state = SessionState::Empty;
                self.message = Some(SessionMessage::error(not_found_message(&ticket.query)));
            }
            Err(e) => {
                log::error!("Search for '{}' failed: {}", ticket.query, e);
                self.state = SessionState::Error;
                self.message = Some(SessionMessage::error(failure_message(&e, &ticket.query)));
            }
        }

        true
    }

    /// Refine the current results. Only valid in `Success`; no network use.
    pub fn change_filter(&mut self, selection: FilterSelection) -> AppResult<&[UniversityRecord]> {
        if self.state != SessionState::Success {
            return Err(AppError::InvalidState(format!(
                "Filters can only change after a successful search (current state: {})",
                self.state
            )));
        }

        if let Some(state) = selection.state_province.as_deref() {
            let known = self.facets.as_ref().is_some_and(|f| f.contains(state));
            if !known {
                return Err(AppError::ValidationError(format!(
                    "Unknown state/province '{}' for the current results",
                    state
                )));
            }
        }

        self.filtered = FilterEngine::apply(&self.results, &selection);
        self.selection = selection;
        log::debug!(
            "Filter {:?} applied: {} of {} records",
            self.selection,
            self.filtered.len(),
            self.results.len()
        );
        Ok(&self.filtered)
    }

    /// Back to `Idle`; any lookup still in flight becomes stale.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn results(&self) -> &[UniversityRecord] {
        &self.results
    }

    pub fn facets(&self) -> Option<&FacetSet> {
        self.facets.as_ref()
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn filtered(&self) -> &[UniversityRecord] {
        &self.filtered
    }

    pub fn message(&self) -> Option<&SessionMessage> {
        self.message.as_ref()
    }

    /// Count line; `None` while loading or after an empty or failed search.
    pub fn summary(&self) -> Option<ResultsSummary> {
        match self.state {
            SessionState::Idle => Some(ResultsSummary::Ready),
            SessionState::Success => Some(ResultsSummary::new(
                self.filtered.len(),
                self.results.len(),
            )),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            generation: self.generation,
            query: self.query.clone(),
            records: self.filtered.clone(),
            total: self.results.len(),
            facets: self.facets.clone(),
            facet_label: match self.state {
                SessionState::Success => self.facets.as_ref().map(facet_label),
                _ => None,
            },
            selection: self.selection.clone(),
            message: self.message.clone(),
            summary: self.summary(),
        }
    }
}

pub fn not_found_message(query: &str) -> String {
    format!(
        "No universities found for \"{}\". Please check the country name and try again.",
        query
    )
}

/// User-facing text for a failed lookup
pub fn failure_message(error: &AppError, query: &str) -> String {
    match error {
        AppError::InvalidInput(_) => INVALID_INPUT_MESSAGE.to_string(),
        AppError::NetworkError(_) => NETWORK_ERROR_MESSAGE.to_string(),
        AppError::UpstreamError {
            status: Some(404), ..
        } => format!(
            "No universities found for \"{}\". Please check the country name.",
            query
        ),
        _ => SERVICE_UNAVAILABLE_MESSAGE.to_string(),
    }
}
