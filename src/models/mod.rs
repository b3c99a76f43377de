//! Domain models for the CoursePay backend.
//!
//! This module contains all database-backed models representing
//! the core entities of the course marketplace.

pub mod access;
pub mod balance;
pub mod course;
pub mod group;
pub mod group_member;
pub mod lesson;
pub mod user;

// Re-export all models for convenient access
pub use access::Access;
pub use balance::Balance;
pub use course::Course;
pub use group::{GroupOccupancy, StudyGroup};
pub use group_member::GroupMember;
pub use lesson::Lesson;
pub use user::User;
