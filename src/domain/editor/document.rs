//! The editor's document model.
//!
//! A `Document` is an ordered sequence of blocks plus post metadata. Block
//! order is document order; block ids are stable across edits. A document
//! always holds at least one block.
//!
//! While a draft, every edit is an in-memory structural change that cannot
//! fail. Once published the document is frozen and every mutator returns
//! [`EditorError::AlreadyPublished`].

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::{Block, BlockKind, BlockStyles, BlockUpdate, InlineStyle, StyleChange};
use crate::domain::content::{Attachment, PostStatus};
use crate::domain::foundation::{BlockId, ErrorCode, Money, StateMachine, Timestamp};

/// Errors raised by document mutators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("document is already published and can no longer be edited")]
    AlreadyPublished,
}

impl EditorError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EditorError::AlreadyPublished => ErrorCode::InvalidStateTransition,
        }
    }
}

/// A persisted document without any blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("document must hold at least one block")]
pub struct EmptyDocument;

/// A post being written in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredDocument")]
pub struct Document {
    title: String,
    subtitle: String,
    cover_image: Option<String>,
    blocks: Vec<Block>,
    tags: Vec<String>,
    attachments: Vec<Attachment>,
    is_premium: bool,
    price: Option<Money>,
    status: PostStatus,
    published_at: Option<Timestamp>,
    #[serde(skip)]
    focused: Option<BlockId>,
}

/// Wire shape of a document, checked before it becomes a [`Document`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDocument {
    title: String,
    subtitle: String,
    cover_image: Option<String>,
    blocks: Vec<Block>,
    tags: Vec<String>,
    attachments: Vec<Attachment>,
    is_premium: bool,
    price: Option<Money>,
    status: PostStatus,
    published_at: Option<Timestamp>,
}

impl TryFrom<StoredDocument> for Document {
    type Error = EmptyDocument;

    fn try_from(stored: StoredDocument) -> Result<Self, Self::Error> {
        if stored.blocks.is_empty() {
            return Err(EmptyDocument);
        }
        Ok(Self {
            title: stored.title,
            subtitle: stored.subtitle,
            cover_image: stored.cover_image,
            blocks: stored.blocks,
            tags: stored.tags,
            attachments: stored.attachments,
            is_premium: stored.is_premium,
            price: stored.price,
            status: stored.status,
            published_at: stored.published_at,
            focused: None,
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields whose change makes a resubmission different.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PublishableContent<'a> {
    title: &'a str,
    subtitle: &'a str,
    cover_image: Option<&'a str>,
    blocks: &'a [Block],
    tags: &'a [String],
    attachments: &'a [Attachment],
    is_premium: bool,
    price: Option<Money>,
}

impl Document {
    /// Creates an empty draft holding a single empty paragraph.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            cover_image: None,
            blocks: vec![Block::new(BlockKind::Paragraph)],
            tags: Vec::new(),
            attachments: Vec::new(),
            is_premium: false,
            price: None,
            status: PostStatus::Draft,
            published_at: None,
            focused: None,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════════

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    pub fn price(&self) -> Option<Money> {
        self.price
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn published_at(&self) -> Option<Timestamp> {
        self.published_at
    }

    pub fn focused(&self) -> Option<BlockId> {
        self.focused
    }

    fn ensure_draft(&self) -> Result<(), EditorError> {
        if self.is_published() {
            Err(EditorError::AlreadyPublished)
        } else {
            Ok(())
        }
    }

    fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Block operations
    // ════════════════════════════════════════════════════════════════════════════

    /// Inserts an empty block right after `after`, or at the end when `after`
    /// is absent or unknown. The new block takes focus.
    pub fn add_block(
        &mut self,
        kind: BlockKind,
        after: Option<&BlockId>,
    ) -> Result<BlockId, EditorError> {
        self.insert_block(Block::new(kind), after)
    }

    /// Inserts a prepared block with the same placement rules as [`add_block`](Self::add_block).
    pub fn insert_block(
        &mut self,
        block: Block,
        after: Option<&BlockId>,
    ) -> Result<BlockId, EditorError> {
        self.ensure_draft()?;

        let id = block.id;
        match after.and_then(|after| self.position(after)) {
            Some(index) => self.blocks.insert(index + 1, block),
            None => self.blocks.push(block),
        }
        self.focused = Some(id);
        Ok(id)
    }

    /// Merges `update` into the block with `id`. Returns whether a block matched.
    pub fn update_block(&mut self, id: &BlockId, update: BlockUpdate) -> Result<bool, EditorError> {
        self.ensure_draft()?;

        match self.blocks.iter_mut().find(|b| &b.id == id) {
            Some(block) => {
                update.apply_to(block);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the block with `id`.
    ///
    /// Returns `false` without changing anything when the id is unknown or the
    /// block is the last one left.
    pub fn delete_block(&mut self, id: &BlockId) -> Result<bool, EditorError> {
        self.ensure_draft()?;

        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        if self.blocks.len() == 1 {
            return Ok(false);
        }

        self.blocks.remove(index);
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
        Ok(true)
    }

    /// Gives editing focus to the block with `id`, if it exists.
    pub fn focus_block(&mut self, id: &BlockId) -> Result<bool, EditorError> {
        self.ensure_draft()?;

        if self.position(id).is_some() {
            self.focused = Some(*id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    fn focused_styles_mut(&mut self) -> Option<&mut BlockStyles> {
        let focused = self.focused?;
        self.blocks
            .iter_mut()
            .find(|b| b.id == focused)
            .map(|b| &mut b.styles)
    }

    /// Applies one style attribute to the focused block. No-op without focus.
    pub fn apply_style(&mut self, change: StyleChange) -> Result<bool, EditorError> {
        self.ensure_draft()?;

        match self.focused_styles_mut() {
            Some(styles) => {
                styles.apply(change);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Flips a boolean style on the focused block. No-op without focus.
    pub fn toggle_style(&mut self, style: InlineStyle) -> Result<bool, EditorError> {
        self.ensure_draft()?;

        match self.focused_styles_mut() {
            Some(styles) => {
                styles.toggle(style);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Post metadata
    // ════════════════════════════════════════════════════════════════════════════

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), EditorError> {
        self.ensure_draft()?;
        self.title = title.into();
        Ok(())
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) -> Result<(), EditorError> {
        self.ensure_draft()?;
        self.subtitle = subtitle.into();
        Ok(())
    }

    /// Sets the cover image URL. Blank clears it.
    pub fn set_cover_image(&mut self, url: Option<String>) -> Result<(), EditorError> {
        self.ensure_draft()?;
        self.cover_image = url.filter(|u| !u.trim().is_empty());
        Ok(())
    }

    pub fn set_premium(&mut self, is_premium: bool) -> Result<(), EditorError> {
        self.ensure_draft()?;
        self.is_premium = is_premium;
        Ok(())
    }

    pub fn set_price(&mut self, price: Option<Money>) -> Result<(), EditorError> {
        self.ensure_draft()?;
        self.price = price;
        Ok(())
    }

    /// Adds a trimmed tag. Empty and duplicate tags are ignored.
    pub fn add_tag(&mut self, tag: &str) -> Result<bool, EditorError> {
        self.ensure_draft()?;

        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return Ok(false);
        }
        self.tags.push(tag.to_string());
        Ok(true)
    }

    pub fn remove_tag(&mut self, tag: &str) -> Result<bool, EditorError> {
        self.ensure_draft()?;

        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        Ok(self.tags.len() != before)
    }

    pub fn attach(&mut self, attachment: Attachment) -> Result<(), EditorError> {
        self.ensure_draft()?;
        self.attachments.push(attachment);
        Ok(())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Derived content
    // ════════════════════════════════════════════════════════════════════════════

    /// Text of the text-bearing blocks, separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter(|b| b.kind.carries_text() && !b.is_empty())
            .map(|b| b.content.trim())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// SHA-256 over the canonical JSON of the publishable content.
    ///
    /// Focus and publication state are not part of the checksum.
    pub fn checksum(&self) -> String {
        let content = PublishableContent {
            title: &self.title,
            subtitle: &self.subtitle,
            cover_image: self.cover_image.as_deref(),
            blocks: &self.blocks,
            tags: &self.tags,
            attachments: &self.attachments,
            is_premium: self.is_premium,
            price: self.price,
        };
        // Serializing plain structs, strings and numbers cannot fail.
        let bytes = serde_json::to_vec(&content).unwrap_or_default();

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        format!("{:x}", hasher.finalize())
    }

    /// Moves the draft to published, stamping `now` and dropping focus.
    pub fn publish(&mut self, now: Timestamp) -> Result<(), EditorError> {
        self.status = self
            .status
            .transition_to(PostStatus::Published)
            .map_err(|_| EditorError::AlreadyPublished)?;
        self.published_at = Some(now);
        self.focused = None;
        Ok(())
    }
}
