pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::{SearchController, SearchSession, SessionSnapshot, UniversityCard};
pub use domain::{
    Classifier, FacetDeriver, FacetSet, FilterCategory, FilterEngine, FilterSelection,
    InstitutionType, SessionState,
};
