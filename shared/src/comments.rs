//! Session-only comment thread.
//!
//! Comments are never sent anywhere; they live until the page goes away.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::{
    config::DEFAULT_AVATAR_BASE_URL,
    forms::{require, FormError, FormField},
    sample_data, Comment,
};

/// Display format for comment dates, e.g. `Jan 15, 2024`.
pub const COMMENT_DATE_FORMAT: &str = "%b %-d, %Y";

pub fn avatar_url(seed: &str) -> String {
    avatar_url_with(DEFAULT_AVATAR_BASE_URL, seed)
}

pub fn avatar_url_with(base_url: &str, seed: &str) -> String {
    format!("{base_url}?seed={}", urlencoding::encode(seed))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentForm {
    pub name: String,
    pub email: String,
    pub content: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&[
            (FormField::Name, self.name.as_str()),
            (FormField::Email, self.email.as_str()),
            (FormField::Content, self.content.as_str()),
        ])
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Newest-first list of comments under one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThread {
    comments: Vec<Comment>,
    avatar_base_url: String,
}

impl CommentThread {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
        }
    }

    /// Thread seeded with the sample comments.
    pub fn with_samples() -> Self {
        Self::new(sample_data::sample_comments())
    }

    pub fn with_avatar_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.avatar_base_url = base_url.into();
        self
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Section heading, e.g. `Comments (3)`.
    pub fn heading(&self) -> String {
        format!("Comments ({})", self.comments.len())
    }

    /// Submit using the local clock.
    pub fn submit(&mut self, form: &mut CommentForm) -> Result<&Comment, FormError> {
        self.submit_at(form, Local::now())
    }

    /// Validate `form`, prepend the new comment and clear the form.
    ///
    /// The id is `now` in epoch milliseconds, suffixed with `-N` when that
    /// id is already in the thread. A failed validation touches neither the
    /// thread nor the form.
    pub fn submit_at<Tz>(
        &mut self,
        form: &mut CommentForm,
        now: DateTime<Tz>,
    ) -> Result<&Comment, FormError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if let Err(err) = form.validate() {
            tracing::debug!(%err, "comment rejected");
            return Err(err);
        }

        let author = form.name.trim().to_string();
        let comment = Comment {
            id: self.unused_id(now.timestamp_millis().to_string()),
            avatar: avatar_url_with(&self.avatar_base_url, &author),
            content: form.content.trim().to_string(),
            date: now.format(COMMENT_DATE_FORMAT).to_string(),
            author,
        };

        self.comments.insert(0, comment);
        form.clear();
        tracing::debug!(total = self.comments.len(), "comment added");
        Ok(&self.comments[0])
    }

    fn unused_id(&self, base: String) -> String {
        let taken = |id: &str| self.comments.iter().any(|c| c.id == id);
        if !taken(&base) {
            return base;
        }
        let mut suffix = 1;
        loop {
            let id = format!("{base}-{suffix}");
            if !taken(&id) {
                return id;
            }
            suffix += 1;
        }
    }
}

impl Default for CommentThread {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Comment>> for CommentThread {
    fn from(comments: Vec<Comment>) -> Self {
        Self::new(comments)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn filled() -> CommentForm {
        CommentForm {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            content: "Loved it".to_string(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn any_missing_field_is_rejected_without_mutation() {
        let blanks: [fn(&mut CommentForm); 3] = [
            |form| form.name.clear(),
            |form| form.email = "  ".to_string(),
            |form| form.content.clear(),
        ];

        for blank in blanks {
            let mut thread = CommentThread::with_samples();
            let mut form = filled();
            blank(&mut form);
            let before_form = form.clone();
            let before_thread = thread.clone();

            let err = thread.submit_at(&mut form, fixed_now()).expect_err("must fail");
            assert!(matches!(err, FormError::MissingFields(ref fields) if fields.len() == 1));
            assert_eq!(thread, before_thread);
            assert_eq!(form, before_form);
        }
    }

    #[test]
    fn same_millisecond_submissions_get_distinct_ids() {
        let mut thread = CommentThread::default();
        let base = fixed_now().timestamp_millis().to_string();

        for _ in 0..3 {
            let mut form = filled();
            thread.submit_at(&mut form, fixed_now()).expect("valid form");
        }

        let ids = thread.comments().iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec![format!("{base}-2"), format!("{base}-1"), base]);
    }

    #[test]
    fn valid_submission_prepends_and_clears() {
        let mut thread = CommentThread::with_samples();
        let mut form = filled();

        let added = thread.submit_at(&mut form, fixed_now()).expect("valid form").clone();

        assert_eq!(added.id, fixed_now().timestamp_millis().to_string());
        assert_eq!(added.author, "Grace");
        assert_eq!(added.date, "Jan 5, 2024");
        assert_eq!(added.avatar, "https://api.dicebear.com/7.x/avataaars/svg?seed=Grace");
        assert_eq!(thread.len(), 4);
        assert_eq!(thread.comments()[0], added);
        assert_eq!(thread.comments()[1].id, "1");
        assert_eq!(form, CommentForm::default());
        assert_eq!(thread.heading(), "Comments (4)");
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut thread = CommentThread::default();
        for _ in 0..2 {
            let mut form = filled();
            thread.submit(&mut form).expect("valid form");
        }
        assert_eq!(thread.len(), 2);
        assert_eq!(thread.comments()[0].content, thread.comments()[1].content);
    }

    #[test]
    fn avatar_seed_is_url_encoded() {
        let mut thread = CommentThread::default().with_avatar_base_url("https://avatars.test/svg");
        let mut form = CommentForm {
            name: " Ana María ".to_string(),
            ..filled()
        };
        let added = thread.submit_at(&mut form, fixed_now()).expect("valid form");
        assert_eq!(added.author, "Ana María");
        assert_eq!(added.avatar, "https://avatars.test/svg?seed=Ana%20Mar%C3%ADa");
    }
}
