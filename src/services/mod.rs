pub mod catalog_service;
pub mod group_service;
pub mod payment_service;

pub use catalog_service::{CatalogService, CourseListing};
pub use group_service::GroupService;
pub use payment_service::{PaymentService, SettleOutcome};
