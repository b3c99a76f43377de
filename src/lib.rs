//! CoursePay Backend Library
//!
//! Core of the CoursePay course marketplace: payment settlement against
//! user balances and capacity-bounded study group assignment, both safe
//! under concurrent requests. The HTTP-facing layer consumes this crate.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, EnrollmentConfig};
pub use error::{AppError, AppResult};

use database::Database;
use repositories::*;
use services::{CatalogService, GroupService, PaymentService};
use std::sync::Arc;

/// Application state containing all repositories and services
pub struct AppState {
    pub database: Database,
    pub course_repo: Arc<CourseRepository>,
    pub lesson_repo: Arc<LessonRepository>,
    pub user_repo: Arc<UserRepository>,
    pub balance_repo: Arc<BalanceRepository>,
    pub access_repo: Arc<AccessRepository>,
    pub group_repo: Arc<GroupRepository>,
    pub catalog_service: Arc<CatalogService>,
    pub group_service: Arc<GroupService>,
    pub payment_service: Arc<PaymentService>,
}

impl AppState {
    /// Create a new AppState with initialized repositories and services
    pub fn new(pool: sqlx::PgPool, enrollment: EnrollmentConfig) -> Self {
        let database = Database::new(pool.clone());

        let course_repo = Arc::new(CourseRepository::new(pool.clone()));
        let lesson_repo = Arc::new(LessonRepository::new(pool.clone()));
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let balance_repo = Arc::new(BalanceRepository::new(pool.clone()));
        let access_repo = Arc::new(AccessRepository::new(pool.clone()));
        let group_repo = Arc::new(GroupRepository::new(pool.clone()));

        let catalog_service = Arc::new(CatalogService::new(
            course_repo.clone(),
            lesson_repo.clone(),
        ));
        let group_service = Arc::new(GroupService::new(
            pool.clone(),
            group_repo.clone(),
            enrollment,
        ));
        let payment_service = Arc::new(PaymentService::new(
            pool,
            course_repo.clone(),
            user_repo.clone(),
            access_repo.clone(),
            group_service.clone(),
        ));

        Self {
            database,
            course_repo,
            lesson_repo,
            user_repo,
            balance_repo,
            access_repo,
            group_repo,
            catalog_service,
            group_service,
            payment_service,
        }
    }
}
