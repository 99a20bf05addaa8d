pub mod university;

pub use university::{SearchResultSet, UniversityRecord};
