//! Editor blocks.

use serde::{Deserialize, Serialize};

use super::BlockStyles;
use crate::domain::foundation::BlockId;

/// The kind of a block. Every renderer matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    #[serde(rename = "paragraph")]
    Paragraph,
    #[serde(rename = "heading1")]
    Heading1,
    #[serde(rename = "heading2")]
    Heading2,
    #[serde(rename = "heading3")]
    Heading3,
    #[serde(rename = "quote")]
    Quote,
    #[serde(rename = "list")]
    List,
    #[serde(rename = "ordered-list")]
    OrderedList,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "divider")]
    Divider,
}

impl BlockKind {
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Paragraph,
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::Quote,
        BlockKind::List,
        BlockKind::OrderedList,
        BlockKind::Image,
        BlockKind::Divider,
    ];

    /// Whether `content` is prose rather than an asset reference or nothing.
    pub fn carries_text(&self) -> bool {
        match self {
            BlockKind::Paragraph
            | BlockKind::Heading1
            | BlockKind::Heading2
            | BlockKind::Heading3
            | BlockKind::Quote
            | BlockKind::List
            | BlockKind::OrderedList => true,
            BlockKind::Image | BlockKind::Divider => false,
        }
    }

    /// Text shown in place of empty content.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            BlockKind::Paragraph => Some("Start writing..."),
            BlockKind::Heading1 => Some("Heading 1"),
            BlockKind::Heading2 => Some("Heading 2"),
            BlockKind::Heading3 => Some("Heading 3"),
            BlockKind::Quote => Some("Quote"),
            BlockKind::List => Some("List item"),
            BlockKind::OrderedList => Some("Ordered list item"),
            BlockKind::Image | BlockKind::Divider => None,
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading1 => "heading1",
            BlockKind::Heading2 => "heading2",
            BlockKind::Heading3 => "heading3",
            BlockKind::Quote => "quote",
            BlockKind::List => "list",
            BlockKind::OrderedList => "ordered-list",
            BlockKind::Image => "image",
            BlockKind::Divider => "divider",
        };
        f.write_str(s)
    }
}

/// Extra attributes used by image blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl BlockMetadata {
    pub fn is_empty(&self) -> bool {
        self.alt.is_none() && self.caption.is_none()
    }
}

/// A single typed unit of document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Text, or an asset URL for images.
    pub content: String,
    #[serde(default)]
    pub styles: BlockStyles,
    #[serde(default, skip_serializing_if = "BlockMetadata::is_empty")]
    pub metadata: BlockMetadata,
}

impl Block {
    /// Creates an empty block with a fresh id.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            content: String::new(),
            styles: BlockStyles::default(),
            metadata: BlockMetadata::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// Partial update merged into an existing block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockUpdate {
    pub content: Option<String>,
    pub styles: Option<BlockStyles>,
    pub metadata: Option<BlockMetadata>,
}

impl BlockUpdate {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn styles(styles: BlockStyles) -> Self {
        Self {
            styles: Some(styles),
            ..Default::default()
        }
    }

    pub(crate) fn apply_to(self, block: &mut Block) {
        if let Some(content) = self.content {
            block.content = content;
        }
        if let Some(styles) = self.styles {
            block.styles.merge(styles);
        }
        if let Some(metadata) = self.metadata {
            if metadata.alt.is_some() {
                block.metadata.alt = metadata.alt;
            }
            if metadata.caption.is_some() {
                block.metadata.caption = metadata.caption;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_wire_names_match_block_types() {
        let names: Vec<String> = BlockKind::ALL
            .iter()
            .map(|k| serde_json::to_string(k).unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "\"paragraph\"",
                "\"heading1\"",
                "\"heading2\"",
                "\"heading3\"",
                "\"quote\"",
                "\"list\"",
                "\"ordered-list\"",
                "\"image\"",
                "\"divider\"",
            ]
        );
    }

    #[test]
    fn display_matches_wire_name() {
        for kind in BlockKind::ALL {
            assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", kind));
        }
    }

    #[test]
    fn new_blocks_are_empty_with_unique_ids() {
        let a = Block::new(BlockKind::Quote);
        let b = Block::new(BlockKind::Quote);
        assert!(a.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.styles, BlockStyles::default());
    }

    #[test]
    fn only_text_blocks_have_placeholders() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.carries_text(), kind.placeholder().is_some());
        }
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut block = Block::new(BlockKind::Image);
        block.content = "https://cdn/a.png".into();
        block.metadata.alt = Some("a.png".into());

        BlockUpdate {
            metadata: Some(BlockMetadata {
                alt: None,
                caption: Some("Sunset".into()),
            }),
            ..Default::default()
        }
        .apply_to(&mut block);

        assert_eq!(block.content, "https://cdn/a.png");
        assert_eq!(block.metadata.alt.as_deref(), Some("a.png"));
        assert_eq!(block.metadata.caption.as_deref(), Some("Sunset"));
    }
}
