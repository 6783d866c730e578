use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Id<User>,
    pub clerk_id: String,
    pub name: Option<String>,
    pub username: String,
    pub email: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        clerk_id: String,
        name: Option<String>,
        username: String,
        email: String,
        image: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Id::generate(),
            clerk_id,
            name,
            username,
            email,
            image,
            bio: None,
            location: None,
            website: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Local part of the email, the fallback username for accounts without one.
    pub fn email_local_part(&self) -> &str {
        email_local_part(&self.email)
    }
}

pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserCounts {
    pub followers: i64,
    pub following: i64,
    pub posts: i64,
}

#[derive(Debug, Clone)]
pub struct UserWithCounts {
    pub user: User,
    pub counts: UserCounts,
}

/// Public subset of a user shown next to posts, comments and notifications.
#[derive(Debug, Clone)]
pub struct UserSummary {
    pub id: Id<User>,
    pub name: Option<String>,
    pub username: String,
    pub image: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            image: user.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::domain::entities::user::{User, UserSummary, email_local_part};

    #[rstest]
    #[case("jane@example.com", "jane")]
    #[case("no-at-sign", "no-at-sign")]
    #[case("@example.com", "")]
    fn test_email_local_part(#[case] email: &str, #[case] expected: &str) {
        assert_eq!(email_local_part(email), expected);
    }

    #[rstest]
    fn test_new_user_has_empty_profile() {
        let user = User::new(
            "user_2abc".to_string(),
            Some("Jane".to_string()),
            "jane".to_string(),
            "jane@example.com".to_string(),
            None,
        );
        assert!(user.bio.is_none());
        assert!(user.location.is_none());
        assert!(user.website.is_none());
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.email_local_part(), "jane");
    }

    #[rstest]
    fn test_summary_from_user() {
        let user = User::new("user_1".to_string(), None, "bob".to_string(), "bob@x.io".to_string(), None);
        let summary = UserSummary::from(&user);
        assert_eq!(summary.id, user.id);
        assert_eq!(summary.username, "bob");
    }
}
