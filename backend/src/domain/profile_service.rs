//! Profile read service implementing [`ProfileQuery`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{ProfileQuery, ProfileRepository, ProfileRepositoryError};
use crate::domain::{Error, Profile, UserId};

/// Loads profiles from a [`ProfileRepository`].
#[derive(Clone)]
pub struct ProfileQueryService<R> {
    repo: Arc<R>,
}

impl<R> ProfileQueryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_repository_error(error: ProfileRepositoryError) -> Error {
    match error {
        ProfileRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("profile repository unavailable: {message}"))
        }
        ProfileRepositoryError::Query { message } => {
            Error::internal(format!("profile repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> ProfileQuery for ProfileQueryService<R>
where
    R: ProfileRepository,
{
    async fn fetch_profile(&self, user_id: &UserId) -> Result<Profile, Error> {
        self.repo
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("profile not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockProfileRepository;
    use rstest::rstest;

    fn service(repo: MockProfileRepository) -> ProfileQueryService<MockProfileRepository> {
        ProfileQueryService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn returns_stored_profile() {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_id().times(1).return_once(|id| {
            Ok(Some(Profile::new(
                id.clone(),
                Some("Grace".to_owned()),
                Some("https://host/avatars/g.png".to_owned()),
            )))
        });
        let user_id = UserId::random();

        let profile = service(repo)
            .fetch_profile(&user_id)
            .await
            .expect("profile");
        assert_eq!(profile.id(), &user_id);
        assert_eq!(profile.display_name(), Some("Grace"));
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let error = service(repo)
            .fetch_profile(&UserId::random())
            .await
            .expect_err("missing");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[case(ProfileRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(ProfileRepositoryError::query("syntax"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn repository_errors_are_mapped(
        #[case] failure: ProfileRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Err(failure));

        let error = service(repo)
            .fetch_profile(&UserId::random())
            .await
            .expect_err("mapped error");
        assert_eq!(error.code(), expected);
    }
}
