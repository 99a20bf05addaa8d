pub mod lookup_field;

pub use lookup_field::LookupField;
