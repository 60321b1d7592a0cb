//! Row types for the hosted backend tables.
//!
//! Nothing here talks to the backend. These records mirror the table shapes
//! so session state (comments, likes, subscriptions) has a typed target once
//! it is persisted. Role checks run server side; [`ProfileRow::has_role`]
//! only mirrors the predicate's shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{comments::avatar_url, comments::COMMENT_DATE_FORMAT, Comment};

pub const TABLE_PROFILES: &str = "profiles";
pub const TABLE_BLOGS: &str = "blogs";
pub const TABLE_COMMENTS: &str = "comments";
pub const TABLE_BLOG_LIKES: &str = "blog_likes";
pub const TABLE_NEWSLETTER_SUBSCRIBERS: &str = "newsletter_subscribers";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Admin,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub role: AppRole,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileRow {
    pub fn has_role(&self, role: AppRole) -> bool {
        self.role == role
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRow {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub author_id: Option<String>,
    pub published: Option<bool>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub views: Option<i64>,
    pub analytics_data: Option<serde_json::Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogRow {
    pub fn is_published(&self) -> bool {
        self.published.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRow {
    pub id: String,
    pub blog_id: Option<String>,
    pub user_id: Option<String>,
    pub user_name: String,
    pub user_email: Option<String>,
    pub content: String,
    pub approved: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            avatar: avatar_url(&row.user_name),
            date: row
                .created_at
                .map(|at| at.format(COMMENT_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            author: row.user_name,
            content: row.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogLikeRow {
    pub id: String,
    pub blog_id: Option<String>,
    pub user_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Number of like rows pointing at `blog_id`, a seed for the like counter.
pub fn like_count(likes: &[BlogLikeRow], blog_id: &str) -> u32 {
    let count = likes
        .iter()
        .filter(|like| like.blog_id.as_deref() == Some(blog_id))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscriberRow {
    pub id: String,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}

impl NewsletterSubscriberRow {
    pub fn is_active(&self) -> bool {
        self.unsubscribed_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn comment_row_becomes_display_comment() {
        let row: CommentRow = serde_json::from_str(
            r#"{
                "id": "c-1",
                "blog_id": "b-1",
                "user_id": null,
                "user_name": "Jane",
                "user_email": "jane@example.com",
                "content": "Nice",
                "approved": true,
                "created_at": "2024-01-14T08:00:00Z"
            }"#,
        )
        .expect("valid comment row");

        let comment = Comment::from(row);
        assert_eq!(comment.author, "Jane");
        assert_eq!(comment.date, "Jan 14, 2024");
        assert_eq!(comment.avatar, avatar_url("Jane"));
    }

    #[test]
    fn roles_round_trip_as_lowercase() {
        let profile = ProfileRow {
            id: "u-1".to_string(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            avatar_url: None,
            bio: None,
            role: AppRole::Admin,
            created_at: None,
            updated_at: None,
        };
        assert!(profile.has_role(AppRole::Admin));
        assert!(!profile.has_role(AppRole::User));
        let json = serde_json::to_value(&profile).expect("serialize profile");
        assert_eq!(json["role"], "admin");
    }

    #[test]
    fn blog_row_tolerates_nullable_columns() {
        let row: BlogRow = serde_json::from_str(
            r#"{
                "id": "b-1",
                "slug": "hello",
                "title": "Hello",
                "content": "Body",
                "excerpt": null,
                "cover_image": null,
                "author_id": null,
                "published": null,
                "views": 3,
                "analytics_data": {"referrers": []},
                "created_at": null,
                "updated_at": null
            }"#,
        )
        .expect("valid blog row");
        assert!(!row.is_published());
        assert_eq!(row.tags, None);
        assert_eq!(row.views, Some(3));
    }

    #[test]
    fn like_count_filters_by_blog() {
        let like = |id: &str, blog: Option<&str>| BlogLikeRow {
            id: id.to_string(),
            blog_id: blog.map(str::to_string),
            user_id: None,
            created_at: None,
        };
        let likes = vec![like("1", Some("a")), like("2", Some("b")), like("3", Some("a")), like("4", None)];
        assert_eq!(like_count(&likes, "a"), 2);
        assert_eq!(like_count(&likes, "c"), 0);
    }

    #[test]
    fn subscriber_activity_follows_unsubscribe_time() {
        let subscribed_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid time");
        let mut row = NewsletterSubscriberRow {
            id: "s-1".to_string(),
            email: "reader@example.com".to_string(),
            subscribed_at,
            unsubscribed_at: None,
        };
        assert!(row.is_active());
        row.unsubscribed_at = Some(subscribed_at);
        assert!(!row.is_active());
    }
}
