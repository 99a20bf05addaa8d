use super::search_session::{SearchSession, SessionSnapshot};
use crate::modules::directory::traits::UniversityDirectory;
use crate::modules::search::domain::FilterSelection;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

/// Owns the search session and drives it against a directory.
///
/// Every transition is published as a [`SessionSnapshot`]; presenters
/// subscribe and render, they never mutate the session directly.
pub struct SearchController {
    directory: Arc<dyn UniversityDirectory>,
    session: RwLock<SearchSession>,
    updates: watch::Sender<SessionSnapshot>,
}

impl SearchController {
    pub fn new(directory: Arc<dyn UniversityDirectory>) -> Self {
        let session = SearchSession::new();
        let (updates, _) = watch::channel(session.snapshot());
        Self {
            directory,
            session: RwLock::new(session),
            updates,
        }
    }

    /// Receiver that sees every published snapshot from now on
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }

    /// Run one search to completion.
    ///
    /// Only blank input is returned as an error; lookup failures end in the
    /// `Error` state. If a newer search started while this one was waiting,
    /// its outcome is dropped and the returned snapshot reflects the newer
    /// search.
    pub async fn start_search(&self, country: &str) -> AppResult<SessionSnapshot> {
        let ticket = {
            let mut session = self.session.write().await;
            let begun = session.begin_search(country);
            self.publish(&session);
            begun?
        };

        LogContext::search(&ticket.query, ticket.generation, None);

        // Lock is released here: a newer search may begin while we wait.
        let outcome = self.directory.lookup(&ticket.query).await;
        let found = outcome.as_ref().map(Vec::len).ok();

        let mut session = self.session.write().await;
        if session.complete_search(&ticket, outcome) {
            if let Some(count) = found {
                LogContext::search(&ticket.query, ticket.generation, Some(count));
            }
            self.publish(&session);
        }
        Ok(session.snapshot())
    }

    pub async fn change_filter(&self, selection: FilterSelection) -> AppResult<SessionSnapshot> {
        let mut session = self.session.write().await;
        session.change_filter(selection)?;
        self.publish(&session);
        Ok(session.snapshot())
    }

    pub async fn reset(&self) -> SessionSnapshot {
        let mut session = self.session.write().await;
        session.reset();
        self.publish(&session);
        session.snapshot()
    }

    fn publish(&self, session: &SearchSession) {
        self.updates.send_replace(session.snapshot());
    }
}
