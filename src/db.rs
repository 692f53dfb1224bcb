pub mod user_repo;
pub use user_repo::UserRepository;
pub mod vehicle_repo;
pub use vehicle_repo::VehicleRepository;
pub mod item_repo;
pub use item_repo::ItemRepository;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod submission_repo;
pub use submission_repo::SubmissionRepository;
pub mod request_repo;
pub use request_repo::RequestRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
