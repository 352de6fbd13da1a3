// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merging of ordered segments into one styled buffer plus range indexes.

use parley::InlineBox;

use crate::ranges::{ImageRecord, LinkRecord, TextRecord};
use crate::resolve::{ResolvedStyle, StyleResolver};
use crate::segment::{Segment, OBJECT_REPLACEMENT_CHARACTER};
use crate::style::TextStyle;

/// A resolved style applied to one byte range of the styled buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSpan {
    /// Byte range the style covers.
    pub range: core::ops::Range<usize>,
    /// The resolved style for that range.
    pub style: ResolvedStyle,
}

/// The output of composition: the styled buffer and everything the layout
/// driver and hit tester need alongside it.
#[derive(Clone, Debug, Default)]
pub struct Composition {
    /// The concatenated buffer text.
    pub text: String,
    /// Resolved styles in buffer order, one per non-empty segment.
    pub spans: Vec<StyleSpan>,
    /// Inline boxes for image placeholders, in buffer order. `id` is the
    /// image ordinal, `index` the placeholder's byte position.
    pub boxes: Vec<InlineBox>,
    /// Coarse records for text segments, in segment order.
    pub texts: Vec<TextRecord>,
    /// Records for link segments, in segment order.
    pub links: Vec<LinkRecord>,
    /// Records for image segments, in segment order. Rectangles are filled
    /// in by placement after layout.
    pub images: Vec<ImageRecord>,
}

/// Merges `segments` in order into a styled buffer with range indexes.
///
/// The composer maintains a running byte cursor; every segment's record
/// starts where the previous segment's content ended, so records of one kind
/// are disjoint and sorted — the structural invariant placement and hit
/// testing depend on.
///
/// An image segment contributes one [`OBJECT_REPLACEMENT_CHARACTER`] styled
/// with the ambient text style: the style of the nearest preceding text
/// segment (links do not update it), or the default style when no text
/// segment precedes the image. This keeps the placeholder's metrics aligned
/// with the surrounding text's baseline.
pub fn compose(resolver: &mut StyleResolver<'_>, segments: &[Segment]) -> Composition {
    let mut out = Composition::default();
    let mut ambient = TextStyle::default();

    for (index, segment) in segments.iter().enumerate() {
        let start = out.text.len();
        match segment {
            Segment::Text(text) => {
                out.text.push_str(&text.content);
                push_span(&mut out, resolver, &text.style, start);
                out.texts.push(TextRecord {
                    segment: index,
                    range: start..out.text.len(),
                    content: text.content.clone(),
                });
                ambient = text.style.clone();
            }
            Segment::Link(link) => {
                out.text.push_str(&link.content);
                push_span(&mut out, resolver, &link.style, start);
                out.links.push(LinkRecord {
                    segment: index,
                    range: start..out.text.len(),
                    content: link.content.clone(),
                    uri: link.uri.clone(),
                });
            }
            Segment::Image(image) => {
                out.text.push(OBJECT_REPLACEMENT_CHARACTER);
                push_span(&mut out, resolver, &ambient, start);
                out.boxes.push(InlineBox {
                    id: out.images.len() as u64,
                    index: start,
                    width: image.width,
                    height: image.height,
                });
                out.images.push(ImageRecord {
                    segment: index,
                    range: start..out.text.len(),
                    source: image.source.clone(),
                    width: image.width,
                    height: image.height,
                    data: image.data.clone(),
                    rect: None,
                });
            }
        }
    }

    out
}

fn push_span(
    out: &mut Composition,
    resolver: &mut StyleResolver<'_>,
    style: &TextStyle,
    start: usize,
) {
    if out.text.len() > start {
        out.spans.push(StyleSpan {
            range: start..out.text.len(),
            style: resolver.resolve(style),
        });
    }
}
