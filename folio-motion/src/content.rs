//! Marquee content: ordered blocks of text with inline links, and their repetition.

use serde::{Deserialize, Serialize};

/// An inline run inside a marquee block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    Link { label: String, href: String },
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Segment::Text { text: text.into() }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Segment::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    /// The visible characters of this segment.
    pub fn visible_text(&self) -> &str {
        match self {
            Segment::Text { text } => text,
            Segment::Link { label, .. } => label,
        }
    }
}

/// One renderable block of the marquee.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarqueeBlock {
    pub segments: Vec<Segment>,
}

impl MarqueeBlock {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Concatenated visible text, used for accessible labels.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::visible_text).collect()
    }
}

/// Ordered block sequence. Order decides which block leads and how copies alternate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarqueeContent {
    blocks: Vec<MarqueeBlock>,
}

/// A block as placed in the repeated strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatedBlock<'a> {
    pub copy: usize,
    pub index: usize,
    pub block: &'a MarqueeBlock,
}

impl RepeatedBlock<'_> {
    /// Stable key, unique within one strip.
    pub fn key(&self) -> String {
        format!("{}-{}", self.copy, self.index)
    }
}

impl MarqueeContent {
    pub fn new(blocks: Vec<MarqueeBlock>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[MarqueeBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// `num_copies` back-to-back copies of the sequence, copy-major.
    pub fn repeated(&self, num_copies: usize) -> impl Iterator<Item = RepeatedBlock<'_>> + '_ {
        (0..num_copies).flat_map(move |copy| {
            self.blocks
                .iter()
                .enumerate()
                .map(move |(index, block)| RepeatedBlock { copy, index, block })
        })
    }
}

impl From<Vec<MarqueeBlock>> for MarqueeContent {
    fn from(blocks: Vec<MarqueeBlock>) -> Self {
        Self::new(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(labels: &[&str]) -> MarqueeContent {
        labels
            .iter()
            .map(|label| MarqueeBlock::new(vec![Segment::text(*label)]))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_twelve_copies_of_two_blocks() {
        let content = content(&["A", "B"]);
        let rendered: Vec<String> = content
            .repeated(12)
            .map(|placed| placed.block.plain_text())
            .collect();
        assert_eq!(rendered.len(), 24);
        for (i, text) in rendered.iter().enumerate() {
            let expected = if i % 2 == 0 { "A" } else { "B" };
            assert_eq!(text, expected, "position {i}");
        }
    }

    #[test]
    fn test_length_is_copies_times_blocks() {
        let content = content(&["one", "two", "three"]);
        for copies in 1..=8 {
            assert_eq!(content.repeated(copies).count(), copies * content.len());
        }
    }

    #[test]
    fn test_zero_copies_renders_nothing() {
        assert_eq!(content(&["A"]).repeated(0).count(), 0);
        assert_eq!(MarqueeContent::default().repeated(5).count(), 0);
    }

    #[test]
    fn test_keys_are_unique() {
        let content = content(&["A", "B"]);
        let mut keys: Vec<String> = content.repeated(4).map(|placed| placed.key()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_plain_text_joins_links() {
        let block = MarqueeBlock::new(vec![
            Segment::text("Say hi on "),
            Segment::link("GitHub", "https://github.com"),
            Segment::text(" ✦ "),
        ]);
        assert_eq!(block.plain_text(), "Say hi on GitHub ✦ ");
    }

    #[test]
    fn test_deserialize_segments() {
        let json = r#"[
            {"segments": [
                {"kind": "text", "text": "Building "},
                {"kind": "link", "label": "things", "href": "/projects"}
            ]}
        ]"#;
        let content: MarqueeContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(
            content.blocks()[0].segments[1],
            Segment::link("things", "/projects")
        );
    }
}
