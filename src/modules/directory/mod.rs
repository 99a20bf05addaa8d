pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::DirectoryClient;
pub use domain::{LookupField, SearchResultSet, UniversityRecord};
pub use infrastructure::HipolabsAdapter;
pub use traits::{DirectoryApi, UniversityDirectory};
