pub mod directory_client;

pub use directory_client::DirectoryClient;
