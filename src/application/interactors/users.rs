use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::result::ActionResultDTO;
use crate::application::dto::user::{
    GetMeDTO, GetRandomUsersDTO, IsFollowingDTO, SuggestedUserDTO, SyncUserDTO, ToggleFollowDTO, UserDTO,
    UserWithCountsDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::follow::{FollowReader, FollowWriter};
use crate::application::interface::gateway::notification::NotificationWriter;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::application::interface::identity::IdentityProvider;
use crate::domain::entities::follow::Follow;
use crate::domain::entities::id::Id;
use crate::domain::entities::notification::Notification;
use crate::domain::entities::user::{User, email_local_part};

/// Resolves the signed-in identity to the id of its database row.
pub async fn get_db_user_id(user_reader: &dyn UserReader, clerk_id: Option<&str>) -> AppResult<Id<User>> {
    let clerk_id = clerk_id.ok_or(AppError::Unauthorized)?;
    let user = user_reader
        .find_by_clerk_id(clerk_id)
        .await?
        .ok_or(AppError::UserNotFound)?;
    Ok(user.id)
}

#[derive(Clone)]
pub struct SyncUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    identity_provider: Arc<dyn IdentityProvider>,
}

impl SyncUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            identity_provider,
        }
    }

    /// Returns the stored user, creating it from the provider profile on first sign-in.
    /// `None` when there is no signed-in identity or the provider does not know it.
    pub async fn execute(&self, dto: SyncUserDTO) -> AppResult<Option<UserDTO>> {
        self.sync(dto).await.map_err(|err| {
            error!("Failed to sync user: {}", err);
            AppError::UserSyncFailed
        })
    }

    async fn sync(&self, dto: SyncUserDTO) -> AppResult<Option<UserDTO>> {
        let Some(identity) = dto.identity else {
            return Ok(None);
        };
        let Some(external) = self.identity_provider.current_user(&identity).await? else {
            return Ok(None);
        };

        if let Some(existing) = self.user_reader.find_by_clerk_id(&identity.user_id).await? {
            return Ok(Some(existing.into()));
        }

        let email = external
            .primary_email()
            .ok_or_else(|| AppError::IdentityProviderError(format!("user {} has no email address", external.id)))?
            .to_string();
        let username = external
            .preferred_username()
            .unwrap_or_else(|| email_local_part(&email).to_string());

        let user = User::new(
            identity.user_id.clone(),
            Some(external.full_name()),
            username,
            email,
            external.image_url.clone(),
        );
        self.user_writer.insert(user.clone()).await?;
        self.db_session.commit().await?;
        info!("User {} synced from identity provider", user.username);
        Ok(Some(user.into()))
    }
}

#[derive(Clone)]
pub struct GetMeInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetMeInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: GetMeDTO) -> AppResult<UserWithCountsDTO> {
        let user = self
            .user_reader
            .find_with_counts_by_clerk_id(&dto.clerk_id)
            .await?
            .ok_or(AppError::UserNotFound)?;
        Ok(user.into())
    }
}

#[derive(Clone)]
pub struct GetRandomUsersInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetRandomUsersInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    /// Never fails: lookup errors are logged and yield an empty list.
    pub async fn execute(&self, dto: GetRandomUsersDTO) -> Vec<SuggestedUserDTO> {
        match self.fetch(dto).await {
            Ok(users) => users,
            Err(err) => {
                error!("Failed to fetch random users: {}", err);
                Vec::new()
            }
        }
    }

    async fn fetch(&self, dto: GetRandomUsersDTO) -> AppResult<Vec<SuggestedUserDTO>> {
        let user_id = get_db_user_id(self.user_reader.as_ref(), dto.clerk_id.as_deref()).await?;
        let users = self.user_reader.find_suggestions(&user_id, dto.limit.max(0)).await?;
        Ok(users.into_iter().map(SuggestedUserDTO::from).collect())
    }
}

#[derive(Clone)]
pub struct ToggleFollowInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    follow_reader: Arc<dyn FollowReader>,
    follow_writer: Arc<dyn FollowWriter>,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl ToggleFollowInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        follow_reader: Arc<dyn FollowReader>,
        follow_writer: Arc<dyn FollowWriter>,
        notification_writer: Arc<dyn NotificationWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            follow_reader,
            follow_writer,
            notification_writer,
        }
    }

    pub async fn execute(&self, dto: ToggleFollowDTO) -> ActionResultDTO {
        match self.toggle(dto).await {
            Ok(()) => ActionResultDTO::ok(),
            Err(err) => {
                error!("Failed to toggle follow: {}", err);
                if let Err(err) = self.db_session.rollback().await {
                    warn!("Rollback after failed follow toggle failed: {}", err);
                }
                ActionResultDTO::failed("Failed to toggle follow")
            }
        }
    }

    async fn toggle(&self, dto: ToggleFollowDTO) -> AppResult<()> {
        let user_id = get_db_user_id(self.user_reader.as_ref(), dto.clerk_id.as_deref()).await?;
        let target_id: Id<User> = dto.target_user_id.try_into()?;

        if target_id == user_id {
            return Err(AppError::SelfFollow);
        }

        if self.follow_reader.exists(&user_id, &target_id).await? {
            self.follow_writer.delete(&user_id, &target_id).await?;
            info!("User {} unfollowed {}", user_id, target_id);
        } else {
            self.follow_writer
                .insert(Follow::new(user_id.clone(), target_id.clone()))
                .await?;
            self.notification_writer
                .insert(Notification::follow(target_id.clone(), user_id.clone()))
                .await?;
            info!("User {} followed {}", user_id, target_id);
        }

        self.db_session.commit().await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct IsFollowingInteractor {
    user_reader: Arc<dyn UserReader>,
    follow_reader: Arc<dyn FollowReader>,
}

impl IsFollowingInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>, follow_reader: Arc<dyn FollowReader>) -> Self {
        Self {
            user_reader,
            follow_reader,
        }
    }

    /// Anonymous viewers and failed lookups count as not following.
    pub async fn execute(&self, dto: IsFollowingDTO) -> bool {
        if dto.clerk_id.is_none() {
            return false;
        }
        match self.check(dto).await {
            Ok(is_following) => is_following,
            Err(err) => {
                error!("Failed to check follow status: {}", err);
                false
            }
        }
    }

    async fn check(&self, dto: IsFollowingDTO) -> AppResult<bool> {
        let user_id = get_db_user_id(self.user_reader.as_ref(), dto.clerk_id.as_deref()).await?;
        let target_id: Id<User> = dto.target_user_id.try_into()?;
        self.follow_reader.exists(&user_id, &target_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::{fixture, rstest};

    use crate::application::app_error::AppError;
    use crate::application::dto::result::ActionResultDTO;
    use crate::application::dto::user::{GetMeDTO, GetRandomUsersDTO, IsFollowingDTO, SyncUserDTO, ToggleFollowDTO};
    use crate::application::interactors::users::{
        GetMeInteractor, GetRandomUsersInteractor, IsFollowingInteractor, SyncUserInteractor,
        ToggleFollowInteractor, get_db_user_id,
    };
    use crate::application::interface::identity::{ExternalUser, VerifiedIdentity};
    use crate::domain::entities::id::Id;
    use crate::domain::entities::notification::NotificationType;
    use crate::domain::entities::user::{User, UserCounts, UserWithCounts};
    use crate::tests::mocks::{
        InMemoryFollows, MockDBSessionMock, MockFollowReaderMock, MockFollowWriterMock, MockIdentityProviderMock,
        MockNotificationWriterMock, MockUserReaderMock, MockUserWriterMock,
    };

    // Constants
    const CLERK_ID: &str = "user_2abcDEF";
    const USER_ID: &str = "019c47ec-183d-744e-b11d-cd409015bf13";
    const TARGET_ID: &str = "019c47ec-2160-7e53-bf7e-06db2a1bad85";

    // Fixtures
    #[fixture]
    fn identity() -> VerifiedIdentity {
        VerifiedIdentity {
            user_id: CLERK_ID.to_string(),
            session_id: Some("sess_1".to_string()),
            profile: None,
        }
    }

    #[fixture]
    fn external_user() -> ExternalUser {
        ExternalUser {
            id: CLERK_ID.to_string(),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            username: None,
            email_addresses: vec!["jane.doe@example.com".to_string()],
            image_url: Some("https://img.example.com/jane.png".to_string()),
        }
    }

    fn build_user(id: &str, username: &str) -> User {
        let mut user = User::new(
            CLERK_ID.to_string(),
            None,
            username.to_string(),
            format!("{}@example.com", username),
            None,
        );
        user.id = id.to_string().try_into().unwrap();
        user
    }

    fn reader_resolving_caller() -> MockUserReaderMock {
        let mut user_reader = MockUserReaderMock::new();
        user_reader
            .expect_find_by_clerk_id()
            .returning(|_| Ok(Some(build_user(USER_ID, "jane"))));
        user_reader
    }

    // get_db_user_id tests
    #[rstest]
    #[tokio::test]
    async fn test_get_db_user_id_without_identity() {
        let user_reader = MockUserReaderMock::new();
        let result = get_db_user_id(&user_reader, None).await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_db_user_id_unknown_user() {
        let mut user_reader = MockUserReaderMock::new();
        user_reader.expect_find_by_clerk_id().returning(|_| Ok(None));
        let result = get_db_user_id(&user_reader, Some(CLERK_ID)).await;
        assert!(matches!(result.unwrap_err(), AppError::UserNotFound));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_db_user_id_success() {
        let user_reader = reader_resolving_caller();
        let id = get_db_user_id(&user_reader, Some(CLERK_ID)).await.unwrap();
        assert_eq!(id.value.to_string(), USER_ID);
    }

    // SyncUserInteractor tests
    fn make_sync_interactor(
        db_session: MockDBSessionMock,
        user_reader: MockUserReaderMock,
        user_writer: MockUserWriterMock,
        identity_provider: MockIdentityProviderMock,
    ) -> SyncUserInteractor {
        SyncUserInteractor::new(
            Arc::new(db_session),
            Arc::new(user_reader),
            Arc::new(user_writer),
            Arc::new(identity_provider),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn test_sync_without_identity_returns_none() {
        let interactor = make_sync_interactor(
            MockDBSessionMock::new(),
            MockUserReaderMock::new(),
            MockUserWriterMock::new(),
            MockIdentityProviderMock::new(),
        );
        let result = interactor.execute(SyncUserDTO { identity: None }).await.unwrap();
        assert!(result.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_sync_unknown_provider_user_returns_none(identity: VerifiedIdentity) {
        let mut identity_provider = MockIdentityProviderMock::new();
        identity_provider.expect_current_user().returning(|_| Ok(None));

        let interactor = make_sync_interactor(
            MockDBSessionMock::new(),
            MockUserReaderMock::new(),
            MockUserWriterMock::new(),
            identity_provider,
        );
        let result = interactor
            .execute(SyncUserDTO { identity: Some(identity) })
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_sync_returns_existing_user_without_insert(identity: VerifiedIdentity, external_user: ExternalUser) {
        let mut identity_provider = MockIdentityProviderMock::new();
        let mut user_writer = MockUserWriterMock::new();
        identity_provider
            .expect_current_user()
            .returning(move |_| Ok(Some(external_user.clone())));
        user_writer.expect_insert().never();

        let interactor = make_sync_interactor(
            MockDBSessionMock::new(),
            reader_resolving_caller(),
            user_writer,
            identity_provider,
        );
        let user = interactor
            .execute(SyncUserDTO { identity: Some(identity) })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.id, USER_ID);
        assert_eq!(user.username, "jane");
    }

    #[rstest]
    #[tokio::test]
    async fn test_sync_creates_user_from_provider_profile(identity: VerifiedIdentity, external_user: ExternalUser) {
        let mut db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let mut user_writer = MockUserWriterMock::new();
        let mut identity_provider = MockIdentityProviderMock::new();

        identity_provider
            .expect_current_user()
            .returning(move |_| Ok(Some(external_user.clone())));
        user_reader.expect_find_by_clerk_id().returning(|_| Ok(None));
        user_writer
            .expect_insert()
            .withf(|user| {
                user.clerk_id == CLERK_ID
                    && user.name.as_deref() == Some("JaneDoe")
                    && user.username == "jane.doe"
                    && user.email == "jane.doe@example.com"
                    && user.image.as_deref() == Some("https://img.example.com/jane.png")
            })
            .times(1)
            .returning(|user| Ok(user.id));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let interactor = make_sync_interactor(db_session, user_reader, user_writer, identity_provider);
        let user = interactor
            .execute(SyncUserDTO { identity: Some(identity) })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.username, "jane.doe");
        assert!(user.bio.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_sync_stores_empty_name_without_provider_names(
        identity: VerifiedIdentity,
        mut external_user: ExternalUser,
    ) {
        let mut db_session = MockDBSessionMock::new();
        let mut user_reader = MockUserReaderMock::new();
        let mut user_writer = MockUserWriterMock::new();
        let mut identity_provider = MockIdentityProviderMock::new();

        external_user.first_name = None;
        external_user.last_name = None;
        identity_provider
            .expect_current_user()
            .returning(move |_| Ok(Some(external_user.clone())));
        user_reader.expect_find_by_clerk_id().returning(|_| Ok(None));
        user_writer
            .expect_insert()
            .withf(|user| user.name.as_deref() == Some(""))
            .times(1)
            .returning(|user| Ok(user.id));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let interactor = make_sync_interactor(db_session, user_reader, user_writer, identity_provider);
        let user = interactor
            .execute(SyncUserDTO { identity: Some(identity) })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.name.as_deref(), Some(""));
    }

    #[rstest]
    #[tokio::test]
    async fn test_sync_failure_is_generic(identity: VerifiedIdentity) {
        let mut identity_provider = MockIdentityProviderMock::new();
        identity_provider
            .expect_current_user()
            .returning(|_| Err(AppError::IdentityProviderError("timeout".to_string())));

        let interactor = make_sync_interactor(
            MockDBSessionMock::new(),
            MockUserReaderMock::new(),
            MockUserWriterMock::new(),
            identity_provider,
        );
        let result = interactor.execute(SyncUserDTO { identity: Some(identity) }).await;
        assert!(matches!(result.unwrap_err(), AppError::UserSyncFailed));
    }

    #[rstest]
    #[tokio::test]
    async fn test_sync_provider_user_without_email_fails(identity: VerifiedIdentity, mut external_user: ExternalUser) {
        let mut identity_provider = MockIdentityProviderMock::new();
        let mut user_reader = MockUserReaderMock::new();
        external_user.email_addresses.clear();
        identity_provider
            .expect_current_user()
            .returning(move |_| Ok(Some(external_user.clone())));
        user_reader.expect_find_by_clerk_id().returning(|_| Ok(None));

        let interactor = make_sync_interactor(
            MockDBSessionMock::new(),
            user_reader,
            MockUserWriterMock::new(),
            identity_provider,
        );
        let result = interactor.execute(SyncUserDTO { identity: Some(identity) }).await;
        assert!(matches!(result.unwrap_err(), AppError::UserSyncFailed));
    }

    // GetMeInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_get_me_with_counts() {
        let mut user_reader = MockUserReaderMock::new();
        user_reader.expect_find_with_counts_by_clerk_id().returning(|_| {
            Ok(Some(UserWithCounts {
                user: build_user(USER_ID, "jane"),
                counts: UserCounts {
                    followers: 2,
                    following: 5,
                    posts: 1,
                },
            }))
        });

        let result = GetMeInteractor::new(Arc::new(user_reader))
            .execute(GetMeDTO {
                clerk_id: CLERK_ID.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result.counts.followers, 2);
        assert_eq!(result.counts.following, 5);
        assert_eq!(result.counts.posts, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_me_not_found() {
        let mut user_reader = MockUserReaderMock::new();
        user_reader.expect_find_with_counts_by_clerk_id().returning(|_| Ok(None));

        let result = GetMeInteractor::new(Arc::new(user_reader))
            .execute(GetMeDTO {
                clerk_id: CLERK_ID.to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), AppError::UserNotFound));
    }

    // GetRandomUsersInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_random_users_passes_caller_and_limit() {
        let mut user_reader = reader_resolving_caller();
        user_reader
            .expect_find_suggestions()
            .withf(|user_id, limit| user_id.value.to_string() == USER_ID && *limit == 3)
            .returning(|_, _| {
                Ok(vec![UserWithCounts {
                    user: build_user(TARGET_ID, "bob"),
                    counts: UserCounts {
                        followers: 4,
                        following: 1,
                        posts: 0,
                    },
                }])
            });

        let users = GetRandomUsersInteractor::new(Arc::new(user_reader))
            .execute(GetRandomUsersDTO {
                clerk_id: Some(CLERK_ID.to_string()),
                limit: 3,
            })
            .await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, TARGET_ID);
        assert_eq!(users[0].followers, 4);
    }

    #[rstest]
    #[tokio::test]
    async fn test_random_users_degrades_to_empty_list() {
        let mut user_reader = reader_resolving_caller();
        user_reader
            .expect_find_suggestions()
            .returning(|_, _| Err(AppError::DatabaseError(sqlx::Error::PoolClosed)));

        let users = GetRandomUsersInteractor::new(Arc::new(user_reader))
            .execute(GetRandomUsersDTO {
                clerk_id: Some(CLERK_ID.to_string()),
                limit: 3,
            })
            .await;
        assert!(users.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_random_users_anonymous_is_empty() {
        let users = GetRandomUsersInteractor::new(Arc::new(MockUserReaderMock::new()))
            .execute(GetRandomUsersDTO {
                clerk_id: None,
                limit: 3,
            })
            .await;
        assert!(users.is_empty());
    }

    // ToggleFollowInteractor tests
    fn toggle_dto(target: &str) -> ToggleFollowDTO {
        ToggleFollowDTO {
            clerk_id: Some(CLERK_ID.to_string()),
            target_user_id: target.to_string(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_toggle_follow_rejects_self_follow() {
        let mut db_session = MockDBSessionMock::new();
        let mut follow_writer = MockFollowWriterMock::new();
        db_session.expect_rollback().returning(|| Ok(()));
        db_session.expect_commit().never();
        follow_writer.expect_insert().never();

        let interactor = ToggleFollowInteractor::new(
            Arc::new(db_session),
            Arc::new(reader_resolving_caller()),
            Arc::new(MockFollowReaderMock::new()),
            Arc::new(follow_writer),
            Arc::new(MockNotificationWriterMock::new()),
        );
        let result = interactor.execute(toggle_dto(USER_ID)).await;
        assert_eq!(result, ActionResultDTO::failed("Failed to toggle follow"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_toggle_follow_creates_follow_and_notification() {
        let mut db_session = MockDBSessionMock::new();
        let mut follow_reader = MockFollowReaderMock::new();
        let mut follow_writer = MockFollowWriterMock::new();
        let mut notification_writer = MockNotificationWriterMock::new();

        follow_reader.expect_exists().returning(|_, _| Ok(false));
        follow_writer
            .expect_insert()
            .withf(|follow| {
                follow.follower_id.value.to_string() == USER_ID && follow.following_id.value.to_string() == TARGET_ID
            })
            .times(1)
            .returning(|_| Ok(()));
        notification_writer
            .expect_insert()
            .withf(|n| {
                n.kind == NotificationType::Follow
                    && n.user_id.value.to_string() == TARGET_ID
                    && n.creator_id.value.to_string() == USER_ID
            })
            .times(1)
            .returning(|n| Ok(n.id));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let interactor = ToggleFollowInteractor::new(
            Arc::new(db_session),
            Arc::new(reader_resolving_caller()),
            Arc::new(follow_reader),
            Arc::new(follow_writer),
            Arc::new(notification_writer),
        );
        assert_eq!(interactor.execute(toggle_dto(TARGET_ID)).await, ActionResultDTO::ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_toggle_follow_deletes_existing_follow() {
        let mut db_session = MockDBSessionMock::new();
        let mut follow_reader = MockFollowReaderMock::new();
        let mut follow_writer = MockFollowWriterMock::new();
        let mut notification_writer = MockNotificationWriterMock::new();

        follow_reader.expect_exists().returning(|_, _| Ok(true));
        follow_writer.expect_delete().times(1).returning(|_, _| Ok(()));
        follow_writer.expect_insert().never();
        notification_writer.expect_insert().never();
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let interactor = ToggleFollowInteractor::new(
            Arc::new(db_session),
            Arc::new(reader_resolving_caller()),
            Arc::new(follow_reader),
            Arc::new(follow_writer),
            Arc::new(notification_writer),
        );
        assert_eq!(interactor.execute(toggle_dto(TARGET_ID)).await, ActionResultDTO::ok());
    }

    #[rstest]
    #[tokio::test]
    async fn test_toggle_follow_notification_failure_is_reported() {
        let mut db_session = MockDBSessionMock::new();
        let mut follow_reader = MockFollowReaderMock::new();
        let mut follow_writer = MockFollowWriterMock::new();
        let mut notification_writer = MockNotificationWriterMock::new();

        follow_reader.expect_exists().returning(|_, _| Ok(false));
        follow_writer.expect_insert().returning(|_| Ok(()));
        notification_writer
            .expect_insert()
            .returning(|_| Err(AppError::DatabaseError(sqlx::Error::PoolClosed)));
        db_session.expect_commit().never();
        db_session.expect_rollback().times(1).returning(|| Ok(()));

        let interactor = ToggleFollowInteractor::new(
            Arc::new(db_session),
            Arc::new(reader_resolving_caller()),
            Arc::new(follow_reader),
            Arc::new(follow_writer),
            Arc::new(notification_writer),
        );
        let result = interactor.execute(toggle_dto(TARGET_ID)).await;
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("Failed to toggle follow"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_toggle_follow_twice_restores_state() {
        let follows = Arc::new(InMemoryFollows::default());
        let mut db_session = MockDBSessionMock::new();
        db_session.expect_commit().times(2).returning(|| Ok(()));

        let interactor = ToggleFollowInteractor::new(
            Arc::new(db_session),
            Arc::new(reader_resolving_caller()),
            follows.clone(),
            follows.clone(),
            follows.clone(),
        );
        let caller: Id<User> = USER_ID.to_string().try_into().unwrap();
        let target: Id<User> = TARGET_ID.to_string().try_into().unwrap();

        assert!(!follows.contains(&caller, &target));
        assert!(interactor.execute(toggle_dto(TARGET_ID)).await.success);
        assert!(follows.contains(&caller, &target));
        assert!(interactor.execute(toggle_dto(TARGET_ID)).await.success);
        assert!(!follows.contains(&caller, &target));
        assert_eq!(follows.notification_count(), 1);
    }

    // IsFollowingInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_is_following_anonymous() {
        let interactor = IsFollowingInteractor::new(
            Arc::new(MockUserReaderMock::new()),
            Arc::new(MockFollowReaderMock::new()),
        );
        let result = interactor
            .execute(IsFollowingDTO {
                clerk_id: None,
                target_user_id: TARGET_ID.to_string(),
            })
            .await;
        assert!(!result);
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    #[tokio::test]
    async fn test_is_following(#[case] exists: bool) {
        let mut follow_reader = MockFollowReaderMock::new();
        follow_reader.expect_exists().returning(move |_, _| Ok(exists));

        let interactor = IsFollowingInteractor::new(Arc::new(reader_resolving_caller()), Arc::new(follow_reader));
        let result = interactor
            .execute(IsFollowingDTO {
                clerk_id: Some(CLERK_ID.to_string()),
                target_user_id: TARGET_ID.to_string(),
            })
            .await;
        assert_eq!(result, exists);
    }

    #[rstest]
    #[tokio::test]
    async fn test_is_following_invalid_target_is_false() {
        let interactor = IsFollowingInteractor::new(
            Arc::new(reader_resolving_caller()),
            Arc::new(MockFollowReaderMock::new()),
        );
        let result = interactor
            .execute(IsFollowingDTO {
                clerk_id: Some(CLERK_ID.to_string()),
                target_user_id: "not-a-uuid".to_string(),
            })
            .await;
        assert!(!result);
    }
}
