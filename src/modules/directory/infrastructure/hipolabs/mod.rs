pub mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::HipolabsAdapter;
pub use mapper::HipolabsMapper;
pub use models::HipolabsUniversity;
