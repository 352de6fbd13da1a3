// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end pipeline tests: ingest → layout → placement → hit testing.
//!
//! Shaping-dependent cases need at least one system font and skip
//! themselves on hosts without any (this repository bundles no font
//! binaries). Structural properties (buffer contents, range indexes, error
//! paths, replacement semantics) run everywhere.

use textflow::{
    ErrorKind, HitTarget, Point, Segment, TextFlow, TextSegment, TextStyle,
    OBJECT_REPLACEMENT_CHARACTER,
};

fn style() -> TextStyle {
    TextStyle::default()
}

/// Returns false when the host has no usable fonts, in which case shaped
/// text lays out to nothing and geometry assertions are meaningless.
fn shaping_available() -> bool {
    let mut flow = TextFlow::new();
    let available = flow
        .ingest(vec![Segment::text("probe", style())], 100.0)
        .map(|result| result.height() > 0.0)
        .unwrap_or(false);
    if !available {
        eprintln!("skipping: no system fonts available");
    }
    available
}

/// Hit targets sampled left to right across the vertical middle of the
/// block's first text line.
fn scan_line(flow: &TextFlow, width: f32) -> Vec<Option<&'static str>> {
    let y = flow.height() / 2.0;
    let mut out = Vec::new();
    let mut x = 0.0;
    while x < width {
        out.push(match flow.hit_test(Point::new(x, y)) {
            Some(HitTarget::Link(_)) => Some("link"),
            Some(HitTarget::Text(_)) => Some("text"),
            Some(HitTarget::Character(_)) => Some("char"),
            None => None,
        });
        x += 0.5;
    }
    out
}

#[test]
fn empty_segment_list_is_a_valid_empty_layout() {
    let mut flow = TextFlow::new();
    let result = flow.ingest(Vec::new(), 100.0).unwrap();
    assert_eq!(result.height(), 0.0);
    assert!(result.frame().lines().next().is_none());
    assert!(result.buffer().is_empty());
    assert_eq!(flow.height(), 0.0);
    assert!(flow.hit_test(Point::new(0.0, 0.0)).is_none());
    assert!(flow.hit_test(Point::new(50.0, 50.0)).is_none());
}

#[test]
fn buffer_and_range_indexes_survive_ingestion() {
    let mut flow = TextFlow::new();
    let result = flow
        .ingest(
            vec![
                Segment::text("AB", style()),
                Segment::link("CD", "https://x", style()),
            ],
            200.0,
        )
        .unwrap();
    assert_eq!(result.buffer(), "ABCD");
    assert_eq!(result.texts().len(), 1);
    assert_eq!(result.texts()[0].range, 0..2);
    assert_eq!(result.links().len(), 1);
    assert_eq!(result.links()[0].range, 2..4);
    assert_eq!(result.links()[0].uri, "https://x");
}

#[test]
fn invalid_width_is_rejected_and_keeps_the_prior_layout() {
    let mut flow = TextFlow::new();
    flow.ingest(vec![Segment::text("AB", style())], 200.0)
        .unwrap();

    for bad in [0.0, -5.0, f32::NAN, f32::INFINITY] {
        let err = flow
            .ingest(vec![Segment::text("replacement", style())], bad)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidWidth);
    }

    // The prior result is still installed, untouched.
    let result = flow.layout().expect("prior layout must survive");
    assert_eq!(result.buffer(), "AB");
}

#[test]
fn replacement_is_total() {
    let mut flow = TextFlow::new();
    flow.ingest(vec![Segment::text("some text", style())], 200.0)
        .unwrap();
    flow.ingest(Vec::new(), 200.0).unwrap();
    assert_eq!(flow.height(), 0.0);
    assert!(flow.hit_test(Point::new(1.0, 1.0)).is_none());
    assert_eq!(flow.layout().unwrap().buffer(), "");
}

#[test]
fn ingest_is_idempotent() {
    let segments = vec![
        Segment::text("The quick brown fox ", style()),
        Segment::link("jumps", "https://example.org", style()),
        Segment::image(30.0, 30.0, "dog.png"),
    ];
    let mut flow = TextFlow::new();
    let (first_height, first_images) = {
        let result = flow.ingest(segments.clone(), 160.0).unwrap();
        (result.height(), result.images().to_vec())
    };
    let result = flow.ingest(segments, 160.0).unwrap();
    assert_eq!(result.height(), first_height);
    assert_eq!(result.images(), first_images.as_slice());
}

#[test]
fn wider_blocks_never_get_taller() {
    let mut flow = TextFlow::new();
    let content = "a reasonably long sentence that wraps a few times at narrow widths";
    let mut last = f32::INFINITY;
    for width in [80.0, 160.0, 320.0, 640.0] {
        flow.ingest(vec![Segment::text(content, style())], width)
            .unwrap();
        assert!(
            flow.height() <= last,
            "height grew from {last} at width {width}"
        );
        last = flow.height();
    }
}

#[test]
fn set_width_matches_a_fresh_ingest() {
    let segments = vec![
        Segment::text("wrap me across several lines please", style()),
        Segment::link("and me", "https://example.org", style()),
    ];
    let mut flow = TextFlow::new();
    flow.ingest(segments.clone(), 320.0).unwrap();
    let rewrapped = flow.set_width(120.0).unwrap().height();

    let mut fresh = TextFlow::new();
    let direct = fresh.ingest(segments, 120.0).unwrap().height();
    assert_eq!(rewrapped, direct);
    assert_eq!(flow.width(), 120.0);
}

#[test]
fn ingest_single_wraps_at_the_segment_width_hint() {
    let mut flow = TextFlow::new();
    let err = flow
        .ingest_single(TextSegment {
            content: "no hint".to_owned(),
            style: style(),
            width_hint: None,
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidWidth);
    assert!(flow.layout().is_none());

    let result = flow
        .ingest_single(TextSegment {
            content: "hinted".to_owned(),
            style: style(),
            width_hint: Some(150.0),
        })
        .unwrap();
    assert_eq!(result.buffer(), "hinted");
    assert_eq!(flow.width(), 150.0);
}

#[test]
fn ingest_plain_produces_one_text_record() {
    let mut flow = TextFlow::new();
    let result = flow.ingest_plain("plain content", &style(), 200.0).unwrap();
    assert_eq!(result.buffer(), "plain content");
    assert_eq!(result.texts().len(), 1);
    assert_eq!(result.texts()[0].range, 0..13);
    assert!(result.links().is_empty() && result.images().is_empty());
}

#[test]
fn link_hits_are_found_through_the_engine_mapping() {
    if !shaping_available() {
        return;
    }
    let mut flow = TextFlow::new();
    flow.ingest(
        vec![
            Segment::text("AB", style()),
            Segment::link("CD", "https://x", style()),
        ],
        200.0,
    )
    .unwrap();
    assert!(flow.height() > 0.0);

    let hits = scan_line(&flow, 200.0);
    let first_link = hits.iter().position(|h| *h == Some("link"));
    let first_text = hits.iter().position(|h| *h == Some("text"));
    assert!(first_text.is_some(), "no text hit along the line: {hits:?}");
    assert!(first_link.is_some(), "no link hit along the line: {hits:?}");
    assert!(
        first_text < first_link,
        "text should precede the link left to right"
    );

    // Every link hit carries the configured target.
    let y = flow.height() / 2.0;
    let mut x = 0.0;
    while x < 200.0 {
        if let Some(HitTarget::Link(record)) = flow.hit_test(Point::new(x, y)) {
            assert_eq!(record.uri, "https://x");
            assert_eq!(record.content, "CD");
        }
        x += 0.5;
    }

    // Beyond the line's advance there is nothing to hit.
    assert!(flow.hit_test(Point::new(199.0, y)).is_none());
    assert!(flow.hit_test(Point::new(5.0, flow.height() + 50.0)).is_none());
}

#[test]
fn lone_image_gets_a_placement_at_the_line_start() {
    if !shaping_available() {
        return;
    }
    let mut flow = TextFlow::new();
    let result = flow
        .ingest(vec![Segment::image(50.0, 50.0, "img.png")], 200.0)
        .unwrap();
    assert_eq!(result.buffer().len(), 3);
    let rect = result.images()[0]
        .rect
        .expect("the lone image must be placed");
    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.width, 50.0);
    assert_eq!(rect.height, 50.0);
    assert!(flow.height() >= 50.0);
}

#[test]
fn images_are_placed_in_segment_order() {
    if !shaping_available() {
        return;
    }
    let mut flow = TextFlow::new();
    let result = flow
        .ingest(
            vec![
                Segment::image(20.0, 20.0, "first.png"),
                Segment::text(" separator ", style()),
                Segment::image(30.0, 30.0, "second.png"),
            ],
            400.0,
        )
        .unwrap();
    let first = result.images()[0].rect.expect("first image placed");
    let second = result.images()[1].rect.expect("second image placed");
    assert_eq!(first.width, 20.0);
    assert_eq!(second.width, 30.0);
    // Same line, so order shows up as increasing x.
    assert!(first.x < second.x);
}

#[test]
fn image_area_resolves_to_the_placeholder_character() {
    if !shaping_available() {
        return;
    }
    let mut flow = TextFlow::new();
    flow.ingest(
        vec![
            Segment::text("Hello ", style()),
            Segment::image(40.0, 40.0, "img.png"),
        ],
        400.0,
    )
    .unwrap();

    let y = flow.height() / 2.0;
    let mut saw_placeholder = false;
    let mut x = 0.0;
    while x < 400.0 {
        if let Some(HitTarget::Character(ch)) = flow.hit_test(Point::new(x, y)) {
            assert_eq!(ch, OBJECT_REPLACEMENT_CHARACTER);
            saw_placeholder = true;
        }
        x += 0.5;
    }
    assert!(
        saw_placeholder,
        "no placeholder character hit along the image line"
    );
}
