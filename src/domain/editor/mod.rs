//! Editor domain module.
//!
//! Block-based document model used to write posts.
//!
//! # Module Structure
//!
//! - `block` - Block kinds, blocks and partial updates
//! - `styles` - Sparse block styles and their resolved form
//! - `document` - The document and its editing operations
//! - `render` - Pure block and document rendering

mod block;
mod document;
mod render;
mod styles;

pub use block::{Block, BlockKind, BlockMetadata, BlockUpdate};
pub use document::{Document, EditorError, EmptyDocument};
pub use render::{
    render_block, render_document, render_html, BlockView, Element, ImageView, RenderMode,
    DEFAULT_IMAGE_ALT, PLACEHOLDER_IMAGE,
};
pub use styles::{
    BlockStyles, InlineStyle, ResolvedStyle, StyleChange, StyleOption, TextAlign, COLORS,
    FONT_FAMILIES, FONT_SIZES,
};
