use crate::error::AppResult;
use crate::models::{Course, Lesson};
use crate::repositories::{CourseRepository, LessonRepository};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// A course offered for purchase, with its lessons
#[derive(Debug, Clone, Serialize)]
pub struct CourseListing {
    pub course: Course,
    pub lessons: Vec<Lesson>,
}

/// Read-only catalog queries backing the course listing
pub struct CatalogService {
    course_repo: Arc<CourseRepository>,
    lesson_repo: Arc<LessonRepository>,
}

impl CatalogService {
    pub fn new(course_repo: Arc<CourseRepository>, lesson_repo: Arc<LessonRepository>) -> Self {
        Self {
            course_repo,
            lesson_repo,
        }
    }

    /// Courses the user can buy right now: already started, not yet
    /// purchased by them, newest first.
    pub async fn available_courses(&self, user_id: Uuid) -> AppResult<Vec<CourseListing>> {
        let now = Utc::now().naive_utc();
        let courses = self.course_repo.list_available(user_id, now).await?;

        let course_ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();
        let mut lessons_by_course: HashMap<Uuid, Vec<Lesson>> = HashMap::new();
        for lesson in self.lesson_repo.find_by_courses(&course_ids).await? {
            lessons_by_course
                .entry(lesson.course_id)
                .or_default()
                .push(lesson);
        }

        Ok(courses
            .into_iter()
            .map(|course| CourseListing {
                lessons: lessons_by_course.remove(&course.id).unwrap_or_default(),
                course,
            })
            .collect())
    }
}
