// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assignment of post-layout rectangles to image placeholders.

use parley::PositionedLayoutItem;
use tracing::debug;

use crate::geometry::Rect;
use crate::layout::Frame;
use crate::ranges::ImageRecord;

/// Walks the frame's lines and runs once, assigning each inline box's
/// rectangle to the next unplaced image record.
///
/// Consuming records strictly in visitation order is valid because the
/// composer emits image ranges in buffer order and the engine preserves
/// buffer order of inline boxes within and across lines. The box rectangle
/// is already in frame coordinates: the engine computes it from the
/// placeholder's typographic bounds (box width, ascent = image height,
/// descent = 0) and the line origin.
///
/// If the lines are exhausted while records remain, the remaining records
/// keep no rectangle. That is a silent degenerate state, not an error: the
/// caller may legitimately have supplied more image segments than the
/// wrapped text retained line capacity for.
pub(crate) fn place_images(frame: &Frame, images: &mut [ImageRecord]) {
    if images.is_empty() {
        return;
    }

    let mut next = 0;
    'lines: for line in frame.lines() {
        for item in line.items() {
            if let PositionedLayoutItem::InlineBox(inline_box) = item {
                let Some(record) = images.get_mut(next) else {
                    break 'lines;
                };
                record.rect = Some(Rect::new(
                    inline_box.x,
                    inline_box.y,
                    inline_box.width,
                    inline_box.height,
                ));
                next += 1;
            }
        }
    }

    if next < images.len() {
        debug!(
            unplaced = images.len() - next,
            "line capacity exhausted before all images were placed"
        );
    }
}
