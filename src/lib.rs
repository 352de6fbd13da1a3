// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Textflow renders one logical block of rich text — plain styled runs,
//! hyperlink runs, and inline images — as a single continuously wrapped
//! paragraph, and maps points back to the segment under them.
//!
//! The pipeline is: [`compose`] merges an ordered segment list into one
//! styled buffer with per-segment range records; the layout driver wraps the
//! buffer at a fixed width through [Parley](parley); image placeholders are
//! resolved to concrete rectangles from the broken lines; and
//! [`TextFlow::hit_test`] classifies a point as a link, a text run, or a
//! single character against the retained result.
//!
//! Textflow draws nothing itself: the rendering surface consumes the
//! [`LayoutResult`] (frame, height, image rectangles) and paints it with
//! whatever glyph rasterizer it prefers. Parley is re-exported for that
//! purpose.
//!
//! ```
//! use textflow::{Point, Segment, TextFlow, TextStyle};
//!
//! let style = TextStyle::default();
//! let mut flow = TextFlow::new();
//! flow.ingest(
//!     vec![
//!         Segment::text("Read the ", style.clone()),
//!         Segment::link("docs", "https://example.org/docs", style),
//!         Segment::image(24.0, 24.0, "icon.png"),
//!     ],
//!     240.0,
//! )?;
//! let _height = flow.height();
//! let _target = flow.hit_test(Point::new(12.0, 8.0));
//! # Ok::<(), textflow::Error>(())
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use parley;

mod compose;
mod error;
mod flow;
mod geometry;
mod hit;
mod layout;
mod place;
mod ranges;
mod resolve;
mod segment;
mod style;

pub use crate::compose::{compose, Composition, StyleSpan};
pub use crate::error::{Error, ErrorKind};
pub use crate::flow::TextFlow;
pub use crate::geometry::{Point, Rect};
pub use crate::hit::HitTarget;
pub use crate::layout::{Frame, LayoutResult};
pub use crate::ranges::{record_at, ImageRecord, LinkRecord, Spanned, TextRecord};
pub use crate::resolve::{ResolvedFamily, ResolvedStyle, StyleResolver};
pub use crate::segment::{
    ImageSegment, LinkSegment, Segment, TextSegment, OBJECT_REPLACEMENT_CHARACTER,
};
pub use crate::style::{Color, TextStyle};
