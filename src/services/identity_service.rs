use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::request::StudentProfileInput,
    repositories::StudentRepository,
};

/// Find-or-create for student identities keyed by school_id.
///
/// Safe under concurrent first-time submissions from the same identity:
/// a lost insert race is recovered by re-reading, never surfaced. Idempotent,
/// so a caller that fails later in the submission flow can simply retry.
#[derive(Clone)]
pub struct IdentityService {
    students: Arc<dyn StudentRepository>,
}

impl IdentityService {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    pub async fn resolve_or_create(&self, profile: &StudentProfileInput) -> AppResult<i64> {
        let student_id = match self.students.find_by_school_id(&profile.school_id).await? {
            Some(student) => student.id,
            None => match self.students.insert(profile).await {
                Ok(id) => id,
                Err(AppError::AlreadyExists(_)) => {
                    // Another submission created the row between our read
                    // and insert; theirs wins, we reuse it.
                    log::debug!(
                        "recovered insert race for school_id {}",
                        profile.school_id
                    );
                    self.students
                        .find_by_school_id(&profile.school_id)
                        .await?
                        .ok_or_else(|| {
                            AppError::DatabaseError(
                                "student row vanished after unique-violation recovery".to_string(),
                            )
                        })?
                        .id
                }
                Err(e) => return Err(e),
            },
        };

        // Last write wins: the profile always tracks the latest submission.
        self.students.update_profile(student_id, profile).await?;

        Ok(student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Student;
    use crate::repositories::student_repository::MockStudentRepository;
    use crate::test_utils::fixtures::student_profile;

    fn stored_student(id: i64, school_id: &str) -> Student {
        Student {
            id,
            school_id: school_id.to_string(),
            name: "Rafi Islam".to_string(),
            roll: "17".to_string(),
            class_name: "10".to_string(),
            section: "B".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_existing_student_is_reused_and_refreshed() {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_school_id()
            .returning(|sid| Ok(Some(stored_student(7, sid))));
        repo.expect_insert().never();
        repo.expect_update_profile()
            .withf(|id, profile| *id == 7 && profile.name == "Rafi Islam")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = IdentityService::new(Arc::new(repo));
        let id = service
            .resolve_or_create(&student_profile("STD-2041"))
            .await
            .unwrap();
        assert_eq!(id, 7);
    }

    #[actix_web::test]
    async fn test_new_student_is_inserted() {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_school_id().returning(|_| Ok(None));
        repo.expect_insert().times(1).returning(|_| Ok(11));
        repo.expect_update_profile()
            .withf(|id, _| *id == 11)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = IdentityService::new(Arc::new(repo));
        let id = service
            .resolve_or_create(&student_profile("STD-2041"))
            .await
            .unwrap();
        assert_eq!(id, 11);
    }

    #[actix_web::test]
    async fn test_lost_insert_race_recovers_by_reread() {
        let mut repo = MockStudentRepository::new();
        let mut first_read = true;
        repo.expect_find_by_school_id().returning(move |sid| {
            // First read misses; the re-read after the failed insert hits
            if first_read {
                first_read = false;
                Ok(None)
            } else {
                Ok(Some(stored_student(23, sid)))
            }
        });
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::AlreadyExists("students.school_id".to_string())));
        repo.expect_update_profile()
            .withf(|id, _| *id == 23)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = IdentityService::new(Arc::new(repo));
        let id = service
            .resolve_or_create(&student_profile("STD-2041"))
            .await
            .unwrap();
        assert_eq!(id, 23);
    }

    #[actix_web::test]
    async fn test_storage_failure_propagates() {
        let mut repo = MockStudentRepository::new();
        repo.expect_find_by_school_id()
            .returning(|_| Err(AppError::DatabaseError("disk on fire".to_string())));

        let service = IdentityService::new(Arc::new(repo));
        let result = service.resolve_or_create(&student_profile("STD-2041")).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
