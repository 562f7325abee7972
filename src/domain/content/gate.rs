//! Premium content gate.
//!
//! Decides how much of a story a reader sees. Paid members get everything;
//! everyone else gets a preview of at least [`MIN_PREVIEW_CHARS`] characters
//! or half the story, whichever is longer, followed by an upgrade prompt.
//!
//! Lengths are counted in Unicode scalar values so a preview never splits a
//! character.

use serde::Serialize;

use super::Post;
use crate::domain::foundation::UserId;

/// Shortest preview shown to free readers.
pub const MIN_PREVIEW_CHARS: usize = 80;

/// Upgrade affordance rendered under a truncated story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpgradePrompt {
    pub headline: &'static str,
    pub call_to_action: &'static str,
}

impl UpgradePrompt {
    pub const PREMIUM_STORY: UpgradePrompt = UpgradePrompt {
        headline: "You're reading a premium story.",
        call_to_action: "Upgrade to premium for full access",
    };
}

/// Content after the gate has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GatedContent {
    /// The whole body, verbatim.
    Full { content: String },

    /// A prefix of the body and the prompt to show after it.
    Preview {
        preview: String,
        upgrade_prompt: UpgradePrompt,
    },
}

impl GatedContent {
    /// Text the reader actually sees.
    pub fn visible_text(&self) -> &str {
        match self {
            GatedContent::Full { content } => content,
            GatedContent::Preview { preview, .. } => preview,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, GatedContent::Preview { .. })
    }
}

/// Stateless gate over a content string.
pub struct ContentGate;

impl ContentGate {
    /// Number of characters a free reader sees of a body `len` characters long.
    pub fn preview_length(len: usize) -> usize {
        MIN_PREVIEW_CHARS.max(len / 2).min(len)
    }

    /// Applies the gate to `content` for a reader with the given entitlement.
    pub fn reveal(content: &str, is_paid_member: bool) -> GatedContent {
        if is_paid_member {
            return GatedContent::Full {
                content: content.to_string(),
            };
        }

        let len = content.chars().count();
        let preview: String = content.chars().take(Self::preview_length(len)).collect();
        GatedContent::Preview {
            preview,
            upgrade_prompt: UpgradePrompt::PREMIUM_STORY,
        }
    }
}

/// A post prepared for the reader view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadablePost {
    pub title: String,
    pub author: UserId,
    pub is_premium: bool,
    pub body: GatedContent,
}

impl ReadablePost {
    /// Prepares `post` for a reader. Non-premium posts bypass the gate.
    pub fn open(post: &Post, is_paid_member: bool) -> Self {
        let body = if post.is_premium {
            ContentGate::reveal(&post.content, is_paid_member)
        } else {
            GatedContent::Full {
                content: post.content.clone(),
            }
        };

        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            is_premium: post.is_premium,
            body,
        }
    }
}
