pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use services::{Classifier, FacetDeriver, FilterEngine};
pub use value_objects::*;
