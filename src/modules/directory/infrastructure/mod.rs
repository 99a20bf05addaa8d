pub mod hipolabs;
pub mod http_client;

// Re-export commonly used types
pub use hipolabs::HipolabsAdapter;
pub use http_client::CommonHttpHandler;
