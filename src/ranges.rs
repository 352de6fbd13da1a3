// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range records: the provenance map from styled-buffer byte ranges back to
//! the segments that produced them.
//!
//! The composer emits one record per link and image segment and one coarse
//! record per text segment, in segment order. Records of the same kind are
//! pairwise disjoint, which is what makes the sorted lookup in [`record_at`]
//! and the strictly-ordered consumption in image placement valid.

use core::ops::Range;

use crate::geometry::Rect;

/// A coarse record for one text segment: the "background" index consulted
/// when no link matches a hit offset.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRecord {
    /// Index of the originating segment in the ingested list.
    pub segment: usize,
    /// Byte range of the segment's content within the styled buffer.
    pub range: Range<usize>,
    /// The segment's text content.
    pub content: String,
}

/// A record for one link segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkRecord {
    /// Index of the originating segment in the ingested list.
    pub segment: usize,
    /// Byte range of the link text within the styled buffer.
    pub range: Range<usize>,
    /// The visible link text.
    pub content: String,
    /// The link target.
    pub uri: String,
}

/// A record for one image segment, annotated after layout with the concrete
/// rectangle its placeholder occupies.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRecord {
    /// Index of the originating segment in the ingested list.
    pub segment: usize,
    /// Byte range of the placeholder character within the styled buffer.
    pub range: Range<usize>,
    /// Source identifier carried over from the segment.
    pub source: String,
    /// Intrinsic width in layout units.
    pub width: f32,
    /// Intrinsic height in layout units.
    pub height: f32,
    /// Pre-decoded image bytes carried over from the segment, if any.
    pub data: Option<Vec<u8>>,
    /// The rectangle the placeholder occupies in frame coordinates.
    ///
    /// `None` before placement, and for images the wrapped text had no line
    /// capacity left for (the silent degenerate case).
    pub rect: Option<Rect>,
}

/// Anything anchored to a byte range of the styled buffer.
pub trait Spanned {
    /// The buffer byte range this record covers.
    fn span(&self) -> Range<usize>;
}

impl Spanned for TextRecord {
    fn span(&self) -> Range<usize> {
        self.range.clone()
    }
}

impl Spanned for LinkRecord {
    fn span(&self) -> Range<usize> {
        self.range.clone()
    }
}

impl Spanned for ImageRecord {
    fn span(&self) -> Range<usize> {
        self.range.clone()
    }
}

/// Finds the record whose range contains `offset`.
///
/// `records` must be sorted by range start and pairwise disjoint, as the
/// composer guarantees. Zero-length records never match.
pub fn record_at<R: Spanned>(records: &[R], offset: usize) -> Option<&R> {
    let index = records.partition_point(|record| record.span().end <= offset);
    let record = records.get(index)?;
    let span = record.span();
    (span.start <= offset && offset < span.end).then_some(record)
}
