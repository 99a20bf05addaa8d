pub mod search_controller;
pub mod search_session;
pub mod suggestions;
pub mod view;

pub use search_controller::SearchController;
pub use search_session::{SearchSession, SearchTicket, SessionSnapshot};
pub use suggestions::suggest_countries;
pub use view::{facet_label, ResultsSummary, UniversityCard};
