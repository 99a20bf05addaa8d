pub mod entities;
pub mod value_objects;

// Re-exports for easy access
pub use entities::*;
pub use value_objects::LookupField;
