//! Inline highlight segmentation for official article text.
//!
//! # Responsibility
//! - Split an article's official text into plain and highlighted segments
//!   based on the stored link excerpts.
//!
//! # Invariants
//! - Only the first occurrence of each excerpt is highlighted.
//! - Overlapping highlights are skipped; earlier (leftmost) ranges win.
//! - Links whose excerpt no longer appears verbatim are ignored.

use crate::model::records::Link;

/// One run of text, highlighted when it belongs to a link excerpt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment<'a> {
    pub text: &'a str,
    /// The link owning this highlight, `None` for plain text.
    pub link_id: Option<&'a str>,
    /// The highlighted link's target regulation, for badge rendering.
    pub regulation_id: Option<&'a str>,
}

impl<'a> TextSegment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            link_id: None,
            regulation_id: None,
        }
    }

    pub fn is_highlight(&self) -> bool {
        self.link_id.is_some()
    }
}

/// Splits `text` into segments, highlighting each link's excerpt where it
/// occurs verbatim.
pub fn highlight_segments<'a>(text: &'a str, links: &[&'a Link]) -> Vec<TextSegment<'a>> {
    let mut ranges: Vec<(usize, usize, &Link)> = links
        .iter()
        .filter_map(|link| {
            let excerpt = link.highlighted_text.as_deref()?;
            if excerpt.is_empty() {
                return None;
            }
            let start = text.find(excerpt)?;
            Some((start, start + excerpt.len(), *link))
        })
        .collect();
    ranges.sort_by_key(|(start, _, _)| *start);

    if ranges.is_empty() {
        return vec![TextSegment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut pos = 0;
    for (start, end, link) in ranges {
        if start < pos {
            // Overlap with an earlier highlight.
            continue;
        }
        if start > pos {
            segments.push(TextSegment::plain(&text[pos..start]));
        }
        segments.push(TextSegment {
            text: &text[start..end],
            link_id: Some(link.id.as_str()),
            regulation_id: Some(link.target_regulation_id.as_str()),
        });
        pos = end;
    }
    if pos < text.len() {
        segments.push(TextSegment::plain(&text[pos..]));
    }
    segments
}
