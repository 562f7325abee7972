//! Block rendering.
//!
//! Every view is a pure function of the block and whether it holds focus,
//! so edit and preview modes render deterministically.

use serde::Serialize;

use super::{Block, BlockKind, Document, ResolvedStyle};

/// Image shown when an image block has no source yet.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Alt text used when an image block has none.
pub const DEFAULT_IMAGE_ALT: &str = "Image";

/// HTML element a block renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    P,
    H1,
    H2,
    H3,
    Blockquote,
    Ul,
    Ol,
    Figure,
    Hr,
}

impl Element {
    pub fn tag(&self) -> &'static str {
        match self {
            Element::P => "p",
            Element::H1 => "h1",
            Element::H2 => "h2",
            Element::H3 => "h3",
            Element::Blockquote => "blockquote",
            Element::Ul => "ul",
            Element::Ol => "ol",
            Element::Figure => "figure",
            Element::Hr => "hr",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Render output for one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub element: Element,
    /// Content, or the kind's placeholder when empty.
    pub text: String,
    pub is_placeholder: bool,
    /// Absent for images and dividers, which ignore inline styles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ResolvedStyle>,
    pub editable: bool,
    pub highlighted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Edit,
    Preview,
}

fn text_view(element: Element, block: &Block, focused: bool) -> BlockView {
    let placeholder = block.kind.placeholder().unwrap_or_default();
    let is_placeholder = block.is_empty();
    BlockView {
        element,
        text: if is_placeholder {
            placeholder.to_string()
        } else {
            block.content.clone()
        },
        is_placeholder,
        style: Some(ResolvedStyle::resolve(&block.styles)),
        editable: focused,
        highlighted: focused,
        image: None,
    }
}

/// Renders one block.
pub fn render_block(block: &Block, focused: bool) -> BlockView {
    match block.kind {
        BlockKind::Paragraph => text_view(Element::P, block, focused),
        BlockKind::Heading1 => text_view(Element::H1, block, focused),
        BlockKind::Heading2 => text_view(Element::H2, block, focused),
        BlockKind::Heading3 => text_view(Element::H3, block, focused),
        BlockKind::Quote => text_view(Element::Blockquote, block, focused),
        BlockKind::List => text_view(Element::Ul, block, focused),
        BlockKind::OrderedList => text_view(Element::Ol, block, focused),
        BlockKind::Image => {
            let src = if block.content.is_empty() {
                PLACEHOLDER_IMAGE.to_string()
            } else {
                block.content.clone()
            };
            let alt = block
                .metadata
                .alt
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_ALT.to_string());
            let caption = block.metadata.caption.clone().filter(|c| !c.is_empty());
            BlockView {
                element: Element::Figure,
                text: caption.clone().unwrap_or_default(),
                is_placeholder: block.content.is_empty(),
                style: None,
                editable: false,
                highlighted: focused,
                image: Some(ImageView { src, alt, caption }),
            }
        }
        BlockKind::Divider => BlockView {
            element: Element::Hr,
            text: String::new(),
            is_placeholder: false,
            style: None,
            editable: false,
            highlighted: false,
            image: None,
        },
    }
}

/// Renders every block in document order.
pub fn render_document(doc: &Document, mode: RenderMode) -> Vec<BlockView> {
    let focused = match mode {
        RenderMode::Edit => doc.focused(),
        RenderMode::Preview => None,
    };
    doc.blocks()
        .iter()
        .map(|block| render_block(block, focused == Some(block.id)))
        .collect()
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn block_html(view: &BlockView) -> Option<String> {
    match view.element {
        Element::Hr => Some("<hr>".to_string()),
        Element::Figure => {
            let image = view.image.as_ref()?;
            let caption = image
                .caption
                .as_ref()
                .map(|c| format!("<figcaption>{}</figcaption>", html_escape(c)))
                .unwrap_or_default();
            Some(format!(
                "<figure><img src=\"{}\" alt=\"{}\">{}</figure>",
                html_escape(&image.src),
                html_escape(&image.alt),
                caption
            ))
        }
        _ if view.is_placeholder => None,
        element => {
            let style = view
                .style
                .as_ref()
                .map(|s| format!(" style=\"{}\"", html_escape(&s.to_css())))
                .unwrap_or_default();
            let text = html_escape(&view.text);
            let inner = match element {
                Element::Ul | Element::Ol => format!("<li>{}</li>", text),
                _ => text,
            };
            Some(format!("<{tag}{style}>{inner}</{tag}>", tag = element.tag()))
        }
    }
}

/// Renders the preview of a document as an HTML fragment.
///
/// Empty text blocks are left out rather than showing their placeholders.
pub fn render_html(doc: &Document) -> String {
    let mut parts = Vec::new();

    if let Some(cover) = doc.cover_image() {
        parts.push(format!(
            "<img class=\"cover\" src=\"{}\" alt=\"{}\">",
            html_escape(cover),
            html_escape(doc.title())
        ));
    }
    if !doc.title().is_empty() {
        parts.push(format!("<h1 class=\"title\">{}</h1>", html_escape(doc.title())));
    }
    if !doc.subtitle().is_empty() {
        parts.push(format!(
            "<p class=\"subtitle\">{}</p>",
            html_escape(doc.subtitle())
        ));
    }
    if !doc.tags().is_empty() {
        let tags: Vec<String> = doc
            .tags()
            .iter()
            .map(|t| format!("<span class=\"tag\">{}</span>", html_escape(t)))
            .collect();
        parts.push(format!("<div class=\"tags\">{}</div>", tags.concat()));
    }

    parts.extend(
        render_document(doc, RenderMode::Preview)
            .iter()
            .filter_map(block_html),
    );

    format!("<article>{}</article>", parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::editor::{BlockMetadata, BlockStyles, BlockUpdate, InlineStyle};

    #[test]
    fn empty_blocks_render_placeholders() {
        let expected = [
            (BlockKind::Paragraph, Element::P, "Start writing..."),
            (BlockKind::Heading1, Element::H1, "Heading 1"),
            (BlockKind::Heading2, Element::H2, "Heading 2"),
            (BlockKind::Heading3, Element::H3, "Heading 3"),
            (BlockKind::Quote, Element::Blockquote, "Quote"),
            (BlockKind::List, Element::Ul, "List item"),
            (BlockKind::OrderedList, Element::Ol, "Ordered list item"),
        ];
        for (kind, element, placeholder) in expected {
            let view = render_block(&Block::new(kind), false);
            assert_eq!(view.element, element);
            assert_eq!(view.text, placeholder);
            assert!(view.is_placeholder);
            assert_eq!(kind.placeholder(), Some(placeholder));
        }
    }

    #[test]
    fn whitespace_only_block_renders_placeholder() {
        let mut block = Block::new(BlockKind::Heading2);
        block.content = "  \n\t ".into();
        let view = render_block(&block, false);
        assert!(view.is_placeholder);
        assert_eq!(view.text, "Heading 2");
    }

    #[test]
    fn focus_controls_editable_and_highlight() {
        let block = Block::new(BlockKind::Paragraph);
        let focused = render_block(&block, true);
        let unfocused = render_block(&block, false);
        assert!(focused.editable && focused.highlighted);
        assert!(!unfocused.editable && !unfocused.highlighted);
    }

    #[test]
    fn image_falls_back_to_placeholder_and_default_alt() {
        let view = render_block(&Block::new(BlockKind::Image), false);
        let image = view.image.unwrap();
        assert_eq!(image.src, "/placeholder.svg");
        assert_eq!(image.alt, "Image");
        assert!(image.caption.is_none());
        assert!(view.style.is_none());
    }

    #[test]
    fn image_uses_metadata() {
        let mut block = Block::new(BlockKind::Image);
        block.content = "https://cdn/sunset.png".into();
        block.metadata = BlockMetadata {
            alt: Some("sunset.png".into()),
            caption: Some("Evening".into()),
        };
        let image = render_block(&block, false).image.unwrap();
        assert_eq!(image.src, "https://cdn/sunset.png");
        assert_eq!(image.alt, "sunset.png");
        assert_eq!(image.caption.as_deref(), Some("Evening"));
    }

    #[test]
    fn rendering_is_pure() {
        let mut block = Block::new(BlockKind::Quote);
        block.content = "Stay curious".into();
        block.styles = BlockStyles {
            italic: Some(true),
            ..Default::default()
        };
        assert_eq!(render_block(&block, true), render_block(&block, true));
    }

    #[test]
    fn preview_mode_has_no_focus() {
        let mut doc = Document::new();
        doc.add_block(BlockKind::Heading1, None).unwrap();
        assert!(render_document(&doc, RenderMode::Edit)[1].highlighted);
        assert!(render_document(&doc, RenderMode::Preview)
            .iter()
            .all(|v| !v.editable && !v.highlighted));
    }

    #[test]
    fn html_escapes_and_styles_content() {
        let mut doc = Document::new();
        doc.set_title("Tips & <Tricks>").unwrap();
        doc.add_tag("rust").unwrap();
        let first = doc.blocks()[0].id;
        doc.update_block(&first, BlockUpdate::content("a < b")).unwrap();
        doc.focus_block(&first).unwrap();
        doc.toggle_style(InlineStyle::Bold).unwrap();
        doc.add_block(BlockKind::Divider, None).unwrap();
        doc.add_block(BlockKind::Quote, None).unwrap();

        let html = render_html(&doc);
        assert!(html.contains("<h1 class=\"title\">Tips &amp; &lt;Tricks&gt;</h1>"));
        assert!(html.contains("<span class=\"tag\">rust</span>"));
        assert!(html.contains("font-weight: bold"));
        assert!(html.contains(">a &lt; b</p>"));
        assert!(html.contains("<hr>"));
        assert!(!html.contains("Quote"));
    }

    #[test]
    fn html_lists_wrap_items() {
        let mut doc = Document::new();
        let id = doc.add_block(BlockKind::OrderedList, None).unwrap();
        doc.update_block(&id, BlockUpdate::content("first")).unwrap();
        assert!(render_html(&doc).contains("<li>first</li></ol>"));
    }
}
