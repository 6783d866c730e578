use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::post::{CreateCommentDTO, CreatePostDTO, DeletePostDTO, ToggleLikeDTO};
use crate::application::interactors::users::get_db_user_id;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::comment::CommentWriter;
use crate::application::interface::gateway::like::{LikeReader, LikeWriter};
use crate::application::interface::gateway::notification::NotificationWriter;
use crate::application::interface::gateway::post::{PostReader, PostWriter};
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::comment::Comment;
use crate::domain::entities::id::Id;
use crate::domain::entities::like::Like;
use crate::domain::entities::notification::Notification;
use crate::domain::entities::post::Post;

async fn find_post(post_reader: &dyn PostReader, post_id: String) -> AppResult<Post> {
    let post_id: Id<Post> = post_id.try_into()?;
    post_reader.find_by_id(&post_id).await?.ok_or(AppError::PostNotFound)
}

#[derive(Clone)]
pub struct CreatePostInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl CreatePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: CreatePostDTO) -> AppResult<String> {
        let author_id = get_db_user_id(self.user_reader.as_ref(), Some(&dto.clerk_id)).await?;
        let post = Post::new(author_id, dto.content, dto.image)?;
        let post_id = self.post_writer.insert(post).await?;
        self.db_session.commit().await?;
        info!("Post {} created", post_id);
        Ok(post_id.value.to_string())
    }
}

#[derive(Clone)]
pub struct DeletePostInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl DeletePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: DeletePostDTO) -> AppResult<()> {
        let user_id = get_db_user_id(self.user_reader.as_ref(), Some(&dto.clerk_id)).await?;
        let post = find_post(self.post_reader.as_ref(), dto.post_id).await?;
        if post.author_id != user_id {
            return Err(AppError::AccessDenied);
        }
        self.post_writer.delete(&post.id).await?;
        self.db_session.commit().await?;
        info!("Post {} deleted by its author", post.id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct ToggleLikeInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    post_reader: Arc<dyn PostReader>,
    like_reader: Arc<dyn LikeReader>,
    like_writer: Arc<dyn LikeWriter>,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl ToggleLikeInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        post_reader: Arc<dyn PostReader>,
        like_reader: Arc<dyn LikeReader>,
        like_writer: Arc<dyn LikeWriter>,
        notification_writer: Arc<dyn NotificationWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            post_reader,
            like_reader,
            like_writer,
            notification_writer,
        }
    }

    /// Returns whether the post is liked by the caller afterwards.
    pub async fn execute(&self, dto: ToggleLikeDTO) -> AppResult<bool> {
        let user_id = get_db_user_id(self.user_reader.as_ref(), Some(&dto.clerk_id)).await?;
        let post = find_post(self.post_reader.as_ref(), dto.post_id).await?;

        let liked = if self.like_reader.exists(&user_id, &post.id).await? {
            self.like_writer.delete(&user_id, &post.id).await?;
            false
        } else {
            self.like_writer
                .insert(Like::new(post.id.clone(), user_id.clone()))
                .await?;
            if post.author_id != user_id {
                self.notification_writer
                    .insert(Notification::like(post.author_id.clone(), user_id.clone(), post.id.clone()))
                    .await?;
            }
            true
        };

        self.db_session.commit().await?;
        Ok(liked)
    }
}

#[derive(Clone)]
pub struct CreateCommentInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    post_reader: Arc<dyn PostReader>,
    comment_writer: Arc<dyn CommentWriter>,
    notification_writer: Arc<dyn NotificationWriter>,
}

impl CreateCommentInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        post_reader: Arc<dyn PostReader>,
        comment_writer: Arc<dyn CommentWriter>,
        notification_writer: Arc<dyn NotificationWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            post_reader,
            comment_writer,
            notification_writer,
        }
    }

    pub async fn execute(&self, dto: CreateCommentDTO) -> AppResult<String> {
        let author_id = get_db_user_id(self.user_reader.as_ref(), Some(&dto.clerk_id)).await?;
        let post = find_post(self.post_reader.as_ref(), dto.post_id).await?;
        let comment = Comment::new(post.id.clone(), author_id.clone(), dto.content)?;

        let comment_id = self.comment_writer.insert(comment).await?;
        if post.author_id != author_id {
            self.notification_writer
                .insert(Notification::comment(
                    post.author_id.clone(),
                    author_id,
                    post.id.clone(),
                    comment_id.clone(),
                ))
                .await?;
        }

        self.db_session.commit().await?;
        info!("Comment {} added to post {}", comment_id, post.id);
        Ok(comment_id.value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::{fixture, rstest};

    use crate::application::app_error::AppError;
    use crate::application::dto::post::{CreateCommentDTO, CreatePostDTO, DeletePostDTO, ToggleLikeDTO};
    use crate::application::interactors::posts::{
        CreateCommentInteractor, CreatePostInteractor, DeletePostInteractor, ToggleLikeInteractor,
    };
    use crate::domain::entities::id::Id;
    use crate::domain::entities::notification::NotificationType;
    use crate::domain::entities::post::Post;
    use crate::domain::entities::user::User;
    use crate::tests::mocks::{
        MockCommentWriterMock, MockDBSessionMock, MockLikeReaderMock, MockLikeWriterMock,
        MockNotificationWriterMock, MockPostReaderMock, MockPostWriterMock, MockUserReaderMock,
    };

    const CLERK_ID: &str = "user_caller";

    #[fixture]
    fn caller() -> User {
        User::new(
            CLERK_ID.to_string(),
            None,
            "caller".to_string(),
            "caller@example.com".to_string(),
            None,
        )
    }

    fn reader_for(caller: &User) -> MockUserReaderMock {
        let mut user_reader = MockUserReaderMock::new();
        let caller = caller.clone();
        user_reader
            .expect_find_by_clerk_id()
            .returning(move |_| Ok(Some(caller.clone())));
        user_reader
    }

    fn post_reader_returning(post: &Post) -> MockPostReaderMock {
        let mut post_reader = MockPostReaderMock::new();
        let post = post.clone();
        post_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(post.clone())));
        post_reader
    }

    fn post_by(author_id: Id<User>) -> Post {
        Post::new(author_id, Some("hello".to_string()), None).unwrap()
    }

    // CreatePostInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_create_post(caller: User) {
        let mut db_session = MockDBSessionMock::new();
        let mut post_writer = MockPostWriterMock::new();
        let author_id = caller.id.clone();
        post_writer
            .expect_insert()
            .withf(move |post| post.author_id == author_id && post.content.as_deref() == Some("hi"))
            .times(1)
            .returning(|post| Ok(post.id));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let interactor = CreatePostInteractor::new(Arc::new(db_session), Arc::new(reader_for(&caller)), Arc::new(post_writer));
        let post_id = interactor
            .execute(CreatePostDTO {
                clerk_id: CLERK_ID.to_string(),
                content: Some("hi".to_string()),
                image: None,
            })
            .await
            .unwrap();
        assert!(!post_id.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_empty_post(caller: User) {
        let mut post_writer = MockPostWriterMock::new();
        post_writer.expect_insert().never();

        let interactor = CreatePostInteractor::new(
            Arc::new(MockDBSessionMock::new()),
            Arc::new(reader_for(&caller)),
            Arc::new(post_writer),
        );
        let result = interactor
            .execute(CreatePostDTO {
                clerk_id: CLERK_ID.to_string(),
                content: Some("   ".to_string()),
                image: None,
            })
            .await;
        assert!(matches!(result.unwrap_err(), AppError::EmptyPost));
    }

    // DeletePostInteractor tests
    #[rstest]
    #[tokio::test]
    async fn test_delete_own_post(caller: User) {
        let post = post_by(caller.id.clone());
        let mut db_session = MockDBSessionMock::new();
        let mut post_writer = MockPostWriterMock::new();
        post_writer.expect_delete().times(1).returning(|_| Ok(()));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let interactor = DeletePostInteractor::new(
            Arc::new(db_session),
            Arc::new(reader_for(&caller)),
            Arc::new(post_reader_returning(&post)),
            Arc::new(post_writer),
        );
        interactor
            .execute(DeletePostDTO {
                clerk_id: CLERK_ID.to_string(),
                post_id: post.id.value.to_string(),
            })
            .await
            .unwrap();
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_foreign_post_denied(caller: User) {
        let post = post_by(Id::generate());
        let mut post_writer = MockPostWriterMock::new();
        post_writer.expect_delete().never();

        let interactor = DeletePostInteractor::new(
            Arc::new(MockDBSessionMock::new()),
            Arc::new(reader_for(&caller)),
            Arc::new(post_reader_returning(&post)),
            Arc::new(post_writer),
        );
        let result = interactor
            .execute(DeletePostDTO {
                clerk_id: CLERK_ID.to_string(),
                post_id: post.id.value.to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), AppError::AccessDenied));
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_missing_post(caller: User) {
        let mut post_reader = MockPostReaderMock::new();
        post_reader.expect_find_by_id().returning(|_| Ok(None));

        let interactor = DeletePostInteractor::new(
            Arc::new(MockDBSessionMock::new()),
            Arc::new(reader_for(&caller)),
            Arc::new(post_reader),
            Arc::new(MockPostWriterMock::new()),
        );
        let result = interactor
            .execute(DeletePostDTO {
                clerk_id: CLERK_ID.to_string(),
                post_id: Id::<Post>::generate().value.to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), AppError::PostNotFound));
    }

    // ToggleLikeInteractor tests
    fn like_interactor(
        caller: &User,
        post: &Post,
        already_liked: bool,
        like_writer: MockLikeWriterMock,
        notification_writer: MockNotificationWriterMock,
    ) -> ToggleLikeInteractor {
        let mut db_session = MockDBSessionMock::new();
        db_session.expect_commit().times(1).returning(|| Ok(()));
        let mut like_reader = MockLikeReaderMock::new();
        like_reader.expect_exists().returning(move |_, _| Ok(already_liked));

        ToggleLikeInteractor::new(
            Arc::new(db_session),
            Arc::new(reader_for(caller)),
            Arc::new(post_reader_returning(post)),
            Arc::new(like_reader),
            Arc::new(like_writer),
            Arc::new(notification_writer),
        )
    }

    fn like_dto(post: &Post) -> ToggleLikeDTO {
        ToggleLikeDTO {
            clerk_id: CLERK_ID.to_string(),
            post_id: post.id.value.to_string(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_like_foreign_post_notifies_author(caller: User) {
        let author_id: Id<User> = Id::generate();
        let post = post_by(author_id.clone());
        let mut like_writer = MockLikeWriterMock::new();
        let mut notification_writer = MockNotificationWriterMock::new();
        like_writer.expect_insert().times(1).returning(|_| Ok(()));
        let creator_id = caller.id.clone();
        notification_writer
            .expect_insert()
            .withf(move |n| {
                n.kind == NotificationType::Like
                    && n.user_id == author_id
                    && n.creator_id == creator_id
                    && n.post_id.is_some()
            })
            .times(1)
            .returning(|n| Ok(n.id));

        let interactor = like_interactor(&caller, &post, false, like_writer, notification_writer);
        assert!(interactor.execute(like_dto(&post)).await.unwrap());
    }

    #[rstest]
    #[tokio::test]
    async fn test_like_own_post_without_notification(caller: User) {
        let post = post_by(caller.id.clone());
        let mut like_writer = MockLikeWriterMock::new();
        let mut notification_writer = MockNotificationWriterMock::new();
        like_writer.expect_insert().times(1).returning(|_| Ok(()));
        notification_writer.expect_insert().never();

        let interactor = like_interactor(&caller, &post, false, like_writer, notification_writer);
        assert!(interactor.execute(like_dto(&post)).await.unwrap());
    }

    #[rstest]
    #[tokio::test]
    async fn test_unlike(caller: User) {
        let post = post_by(Id::generate());
        let mut like_writer = MockLikeWriterMock::new();
        let mut notification_writer = MockNotificationWriterMock::new();
        like_writer.expect_delete().times(1).returning(|_, _| Ok(()));
        like_writer.expect_insert().never();
        notification_writer.expect_insert().never();

        let interactor = like_interactor(&caller, &post, true, like_writer, notification_writer);
        assert!(!interactor.execute(like_dto(&post)).await.unwrap());
    }

    // CreateCommentInteractor tests
    #[rstest]
    #[case(false, 1)]
    #[case(true, 0)]
    #[tokio::test]
    async fn test_create_comment(caller: User, #[case] own_post: bool, #[case] notifications: usize) {
        let post = if own_post {
            post_by(caller.id.clone())
        } else {
            post_by(Id::generate())
        };
        let mut db_session = MockDBSessionMock::new();
        let mut comment_writer = MockCommentWriterMock::new();
        let mut notification_writer = MockNotificationWriterMock::new();
        comment_writer
            .expect_insert()
            .withf(|comment| comment.content == "nice")
            .times(1)
            .returning(|comment| Ok(comment.id));
        notification_writer
            .expect_insert()
            .withf(|n| n.kind == NotificationType::Comment && n.comment_id.is_some())
            .times(notifications)
            .returning(|n| Ok(n.id));
        db_session.expect_commit().times(1).returning(|| Ok(()));

        let interactor = CreateCommentInteractor::new(
            Arc::new(db_session),
            Arc::new(reader_for(&caller)),
            Arc::new(post_reader_returning(&post)),
            Arc::new(comment_writer),
            Arc::new(notification_writer),
        );
        let comment_id = interactor
            .execute(CreateCommentDTO {
                clerk_id: CLERK_ID.to_string(),
                post_id: post.id.value.to_string(),
                content: "nice".to_string(),
            })
            .await
            .unwrap();
        assert!(!comment_id.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_blank_comment(caller: User) {
        let post = post_by(Id::generate());
        let mut comment_writer = MockCommentWriterMock::new();
        comment_writer.expect_insert().never();

        let interactor = CreateCommentInteractor::new(
            Arc::new(MockDBSessionMock::new()),
            Arc::new(reader_for(&caller)),
            Arc::new(post_reader_returning(&post)),
            Arc::new(comment_writer),
            Arc::new(MockNotificationWriterMock::new()),
        );
        let result = interactor
            .execute(CreateCommentDTO {
                clerk_id: CLERK_ID.to_string(),
                post_id: post.id.value.to_string(),
                content: " ".to_string(),
            })
            .await;
        assert!(matches!(result.unwrap_err(), AppError::EmptyComment));
    }
}
