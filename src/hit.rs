// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping a point in frame coordinates back to the segment under it.

use parley::Cursor;

use crate::geometry::{Point, Rect};
use crate::layout::LayoutResult;
use crate::ranges::{record_at, LinkRecord, TextRecord};

/// The classified result of a point query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitTarget<'a> {
    /// The point lies on a link segment's text.
    Link(&'a LinkRecord),
    /// The point lies on a plain text segment.
    Text(&'a TextRecord),
    /// The point maps to a buffer position no record claims; carries the
    /// single character at that position (an image placeholder hit lands
    /// here as U+FFFC).
    Character(char),
}

/// Resolves `point` against the retained layout result.
///
/// Walks the lines top to bottom and selects the first whose box contains
/// the point (line boxes do not overlap under normal wrapping, so first
/// match is unambiguous), then asks the engine for the buffer offset nearest
/// the point within that line and classifies the offset. Returns `None` for
/// a point outside every line box, and for the zero-line frame.
pub(crate) fn hit_test(result: &LayoutResult, point: Point) -> Option<HitTarget<'_>> {
    let frame = result.frame();
    for line in frame.lines() {
        let metrics = line.metrics();
        let bounds = Rect::new(
            metrics.offset,
            metrics.baseline - metrics.ascent,
            metrics.advance,
            metrics.ascent + metrics.descent,
        );
        if !bounds.contains(point) {
            continue;
        }
        let offset = Cursor::from_point(frame, point.x, point.y).index();
        return resolve_offset(result.links(), result.texts(), result.buffer(), offset);
    }
    None
}

/// Classifies a buffer offset against the range indexes.
///
/// Links are checked before text: a link is the most specific, actionable
/// target and must win where the indexes touch. Offsets no index claims fall
/// back to the raw buffer character; an offset at or past the end of the
/// buffer (possible when the engine reports the trailing edge of a line)
/// resolves to no target rather than a failure.
pub(crate) fn resolve_offset<'a>(
    links: &'a [LinkRecord],
    texts: &'a [TextRecord],
    buffer: &str,
    offset: usize,
) -> Option<HitTarget<'a>> {
    if let Some(link) = record_at(links, offset) {
        return Some(HitTarget::Link(link));
    }
    if let Some(text) = record_at(texts, offset) {
        return Some(HitTarget::Text(text));
    }
    buffer
        .get(offset..)?
        .chars()
        .next()
        .map(HitTarget::Character)
}
