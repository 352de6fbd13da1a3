// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The session type tying the pipeline together.

use parley::{FontContext, LayoutContext};

use crate::compose::{compose, Composition};
use crate::error::Error;
use crate::geometry::Point;
use crate::hit::{self, HitTarget};
use crate::layout::{break_lines, LayoutResult};
use crate::place::place_images;
use crate::resolve::StyleResolver;
use crate::segment::{Segment, TextSegment};
use crate::style::{Color, TextStyle};

/// A rich text block: composes segments, lays them out at a fixed width,
/// and answers point queries against the most recent layout.
///
/// The font and layout contexts are constructed once per flow and reused
/// across ingestions. A flow is single-threaded by construction: ingestion
/// takes `&mut self` and hit testing `&self`, so the borrow checker enforces
/// the serialization the pipeline requires. There is no background layout;
/// every ingestion completes before it returns.
pub struct TextFlow {
    fonts: FontContext,
    layout_cx: LayoutContext<Color>,
    segments: Vec<Segment>,
    width: f32,
    result: Option<LayoutResult>,
}

impl TextFlow {
    /// Creates an empty flow.
    pub fn new() -> Self {
        Self {
            fonts: FontContext::new(),
            layout_cx: LayoutContext::new(),
            segments: Vec::new(),
            width: 0.0,
            result: None,
        }
    }

    /// Replaces the flow's content and lays it out wrapped at `width`.
    ///
    /// On success the previous layout result (if any) is discarded in full
    /// and the new one installed; on error the previous result stays
    /// installed and queryable. Replacement is atomic from the caller's
    /// point of view: no mixed old/new state is ever observable.
    pub fn ingest(&mut self, segments: Vec<Segment>, width: f32) -> Result<&LayoutResult, Error> {
        let result = self.build(&segments, width)?;
        self.segments = segments;
        self.width = width;
        Ok(self.result.insert(result))
    }

    /// Re-lays out the retained segments at a new width.
    pub fn set_width(&mut self, width: f32) -> Result<&LayoutResult, Error> {
        let segments = core::mem::take(&mut self.segments);
        let outcome = self.build(&segments, width);
        self.segments = segments;
        let result = outcome?;
        self.width = width;
        Ok(self.result.insert(result))
    }

    /// Lays out a plain pre-styled string as a single text segment.
    pub fn ingest_plain(
        &mut self,
        content: &str,
        style: &TextStyle,
        width: f32,
    ) -> Result<&LayoutResult, Error> {
        let segment = Segment::Text(TextSegment {
            content: content.to_owned(),
            style: style.clone(),
            width_hint: None,
        });
        self.ingest(vec![segment], width)
    }

    /// Lays out one text segment on its own, wrapped at the segment's
    /// [`width_hint`](TextSegment::width_hint).
    ///
    /// A missing or invalid hint is rejected as an invalid width.
    pub fn ingest_single(&mut self, segment: TextSegment) -> Result<&LayoutResult, Error> {
        let width = segment.width_hint.unwrap_or(f32::NAN);
        self.ingest(vec![Segment::Text(segment)], width)
    }

    /// Resolves a point in frame coordinates against the current layout.
    ///
    /// Returns `None` when nothing has been ingested, when the point lies
    /// outside every line, or when the resolved buffer position carries no
    /// content. Performs no re-layout.
    pub fn hit_test(&self, point: Point) -> Option<HitTarget<'_>> {
        hit::hit_test(self.result.as_ref()?, point)
    }

    /// The height of the current layout, for the caller to size its
    /// container. Zero when nothing has been ingested.
    pub fn height(&self) -> f32 {
        self.result.as_ref().map_or(0.0, LayoutResult::height)
    }

    /// The width the current content was wrapped at.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The current layout result, for the rendering surface.
    pub fn layout(&self) -> Option<&LayoutResult> {
        self.result.as_ref()
    }

    fn build(&mut self, segments: &[Segment], width: f32) -> Result<LayoutResult, Error> {
        // Reject the width before composing so a failed call has no side
        // effects on the installed result.
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::invalid_width(width));
        }
        let mut resolver = StyleResolver::new(&mut self.fonts);
        let composition = compose(&mut resolver, segments);
        let (frame, height) = break_lines(&mut self.fonts, &mut self.layout_cx, &composition, width)?;
        let Composition {
            text,
            texts,
            links,
            mut images,
            ..
        } = composition;
        place_images(&frame, &mut images);
        Ok(LayoutResult::new(height, frame, text, texts, links, images))
    }
}

impl Default for TextFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for TextFlow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextFlow")
            .field("segments", &self.segments.len())
            .field("width", &self.width)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}
