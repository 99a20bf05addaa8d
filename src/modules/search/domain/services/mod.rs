pub mod classifier;
pub mod facet_deriver;
pub mod filter_engine;

pub use classifier::Classifier;
pub use facet_deriver::FacetDeriver;
pub use filter_engine::FilterEngine;
