pub mod facet_set;
pub mod filter_selection;
pub mod institution_type;
pub mod session_state;

pub use facet_set::FacetSet;
pub use filter_selection::{FilterCategory, FilterSelection};
pub use institution_type::InstitutionType;
pub use session_state::{MessageKind, SessionMessage, SessionState};
