pub mod access_repository;
pub mod balance_repository;
pub mod course_repository;
pub mod group_repository;
pub mod lesson_repository;
pub mod user_repository;

// Re-export all repositories for convenient access
pub use access_repository::AccessRepository;
pub use balance_repository::BalanceRepository;
pub use course_repository::CourseRepository;
pub use group_repository::GroupRepository;
pub use lesson_repository::LessonRepository;
pub use user_repository::UserRepository;
