//! Markdown to page document.
//!
//! Pages are authored as markdown and only ever read: this module turns the
//! text into the handful of block kinds the guide renders.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::highlight::{HighlightedLine, SyntaxHighlighter};

/// Inline run of prose.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inline {
    pub text: String,
    pub code: bool,
    pub strong: bool,
    pub emphasis: bool,
    pub href: Option<String>,
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Fence info string, e.g. `javascript`.
    pub language: Option<String>,
    /// Block contents exactly as written.
    pub source: String,
    pub lines: Vec<HighlightedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(Vec<Inline>),
    List(Vec<ListItem>),
    Code(CodeBlock),
    Rule,
}

/// A list item: its leading text, then any nested lists, code or
/// further paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    pub spans: Vec<Inline>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Text of the first level-1 heading.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading { level: 1, text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every code block in reading order, including those inside lists.
    pub fn code_blocks(&self) -> impl Iterator<Item = &CodeBlock> {
        let mut found = Vec::new();
        collect_code(&self.blocks, &mut found);
        found.into_iter()
    }
}

fn collect_code<'a>(blocks: &'a [Block], found: &mut Vec<&'a CodeBlock>) {
    for block in blocks {
        match block {
            Block::Code(code) => found.push(code),
            Block::List(items) => {
                for item in items {
                    collect_code(&item.blocks, found);
                }
            }
            _ => {}
        }
    }
}

/// Parse `markdown`, coloring code blocks with the shared highlighter.
pub fn parse_document(markdown: &str) -> Document {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut builder = DocumentBuilder::new(SyntaxHighlighter::shared());
    for event in Parser::new_ext(markdown, options) {
        builder.process_event(event);
    }
    builder.finish()
}

struct DocumentBuilder<'a> {
    highlighter: &'a SyntaxHighlighter,
    blocks: Vec<Block>,
    spans: Vec<Inline>,
    heading: Option<u8>,
    /// Open lists, innermost last.
    lists: Vec<Vec<ListItem>>,
    /// Open items, innermost last.
    items: Vec<ListItem>,
    code: Option<(Option<String>, String)>,
    strong: usize,
    emphasis: usize,
    href: Option<String>,
}

impl<'a> DocumentBuilder<'a> {
    fn new(highlighter: &'a SyntaxHighlighter) -> Self {
        Self {
            highlighter,
            blocks: Vec::new(),
            spans: Vec::new(),
            heading: None,
            lists: Vec::new(),
            items: Vec::new(),
            code: None,
            strong: 0,
            emphasis: 0,
            href: None,
        }
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.push_text(&text, false),
            Event::Code(code) => self.push_text(&code, true),
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(&html, false),
            Event::SoftBreak | Event::HardBreak => self.push_text(" ", false),
            Event::Rule => {
                self.flush_paragraph();
                self.add_block(Block::Rule);
            }
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_paragraph();
                self.heading = Some(heading_level(level));
            }
            Tag::CodeBlock(kind) => {
                self.flush_paragraph();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some((language, String::new()));
            }
            Tag::List(_) => {
                self.flush_paragraph();
                self.lists.push(Vec::new());
            }
            Tag::Item => {
                self.flush_paragraph();
                self.items.push(ListItem::default());
            }
            Tag::Strong => self.strong += 1,
            Tag::Emphasis => self.emphasis += 1,
            Tag::Link { dest_url, .. } => self.href = Some(dest_url.to_string()),
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                let text: String = self.spans.drain(..).map(|span| span.text).collect();
                let level = self.heading.take().unwrap_or(1);
                self.add_block(Block::Heading {
                    level,
                    text: text.trim().to_string(),
                });
            }
            TagEnd::CodeBlock => {
                if let Some((language, source)) = self.code.take() {
                    let lines = self.highlighter.highlight(&source, language.as_deref());
                    self.add_block(Block::Code(CodeBlock {
                        language,
                        source,
                        lines,
                    }));
                }
            }
            TagEnd::Paragraph => self.flush_paragraph(),
            TagEnd::Item => {
                self.flush_paragraph();
                if let Some(item) = self.items.pop() {
                    match self.lists.last_mut() {
                        Some(list) => list.push(item),
                        None => log::debug!("list item outside a list"),
                    }
                }
            }
            TagEnd::List(_) => {
                if let Some(items) = self.lists.pop() {
                    self.add_block(Block::List(items));
                }
            }
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::Link => self.href = None,
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str, code: bool) {
        if let Some((_, source)) = self.code.as_mut() {
            source.push_str(text);
            return;
        }
        self.spans.push(Inline {
            text: text.to_string(),
            code,
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            href: self.href.clone(),
        });
    }

    /// Close pending prose. Inside a list item the first run becomes the
    /// item's text, later runs become paragraphs under it.
    fn flush_paragraph(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        match self.items.last_mut() {
            Some(item) if item.spans.is_empty() && item.blocks.is_empty() => item.spans = spans,
            _ => self.add_block(Block::Paragraph(spans)),
        }
    }

    fn add_block(&mut self, block: Block) {
        match self.items.last_mut() {
            Some(item) => item.blocks.push(block),
            None => self.blocks.push(block),
        }
    }

    fn finish(mut self) -> Document {
        self.flush_paragraph();
        Document {
            blocks: self.blocks,
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
