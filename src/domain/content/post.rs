//! Post entity and publication status.
//!
//! Posts are owned by their author on the platform backend. The client only
//! reads them, aggregates them and reports engagement back.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, PostId, StateMachine, Timestamp, UserId};

/// Words read per minute when estimating reading time.
pub const WORDS_PER_MINUTE: usize = 200;

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Still being written. Only visible to its author.
    #[default]
    Draft,

    /// Visible to readers. Immutable from the editor's perspective.
    Published,
}

impl StateMachine for PostStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (PostStatus::Draft, PostStatus::Published))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            PostStatus::Draft => vec![PostStatus::Published],
            PostStatus::Published => vec![],
        }
    }
}

/// A file attached to a post, as stored by the media collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub url: String,
    pub public_id: String,
}

/// A piece of content authored by a creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: UserId,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(default)]
    pub status: PostStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: u64,
}

impl Post {
    /// Number of whitespace separated words in the body.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Estimated reading time in whole minutes, rounded up.
    pub fn reading_minutes(&self) -> u64 {
        self.word_count().div_ceil(WORDS_PER_MINUTE) as u64
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Price of a premium post. Free posts never earn, whatever their price field says.
    pub fn premium_price(&self) -> Option<Money> {
        if self.is_premium {
            self.price
        } else {
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn draft_can_be_published() {
        assert_eq!(
            PostStatus::Draft.transition_to(PostStatus::Published),
            Ok(PostStatus::Published)
        );
    }

    #[test]
    fn published_is_terminal() {
        assert!(PostStatus::Published.is_terminal());
        assert!(PostStatus::Published
            .transition_to(PostStatus::Draft)
            .is_err());
    }

    #[test]
    fn reading_minutes_rounds_up() {
        let words = vec!["word"; 201].join(" ");
        assert_eq!(post("p1", &words).reading_minutes(), 2);
        let words = vec!["word"; 200].join(" ");
        assert_eq!(post("p1", &words).reading_minutes(), 1);
    }

    #[test]
    fn empty_post_reads_in_zero_minutes() {
        assert_eq!(post("p1", "   ").reading_minutes(), 0);
    }

    #[test]
    fn premium_price_ignored_for_free_posts() {
        let mut p = premium_post("p1", "body", 500);
        assert_eq!(p.premium_price(), Some(Money::from_cents(500)));
        p.is_premium = false;
        assert_eq!(p.premium_price(), None);
    }

    #[test]
    fn deserializes_backend_json() {
        let json = r#"{
            "_id": "65f0c1",
            "title": "Hello",
            "content": "First story",
            "author": "u-9",
            "attachments": [{"url": "https://cdn/x.png", "publicId": "x"}],
            "isPremium": true,
            "price": 4.99,
            "status": "published",
            "createdAt": "2024-01-15T10:30:00.000Z",
            "updatedAt": "2024-01-15T10:30:00.000Z",
            "likes": 3
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id.as_str(), "65f0c1");
        assert_eq!(post.price, Some(Money::from_cents(499)));
        assert_eq!(post.attachments[0].public_id, "x");
        assert_eq!(post.likes, 3);
        assert_eq!(post.views, 0);
        assert!(post.is_published());
    }
}
