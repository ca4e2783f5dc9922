use ghost_hop::framebuffer::{FrameBuffer, Shade, FB_H, FB_W};

// ── Pixels ────────────────────────────────────────────────────────────────────

#[test]
fn set_get_round_trip() {
    let mut fb = FrameBuffer::new();
    assert!(!fb.get(5, 5));
    fb.set(5, 5, Shade::On);
    assert!(fb.get(5, 5));
    fb.set(5, 5, Shade::Off);
    assert!(!fb.get(5, 5));
}

#[test]
fn out_of_range_pixels_are_dropped() {
    let mut fb = FrameBuffer::new();
    fb.set(-1, 0, Shade::On);
    fb.set(0, -1, Shade::On);
    fb.set(FB_W, 0, Shade::On);
    fb.set(0, FB_H, Shade::On);
    assert_eq!(fb.lit(), 0);
    assert!(!fb.get(-1, -1));
    assert!(!fb.get(FB_W, FB_H));
}

#[test]
fn clear_wipes_everything() {
    let mut fb = FrameBuffer::new();
    fb.fill_rect(0, 0, FB_W, FB_H, Shade::On);
    assert_eq!(fb.lit(), (FB_W * FB_H) as u32);
    fb.clear();
    assert_eq!(fb.lit(), 0);
}

// ── Rectangles ────────────────────────────────────────────────────────────────

#[test]
fn fill_rect_covers_exactly_its_area() {
    let mut fb = FrameBuffer::new();
    fb.fill_rect(10, 20, 8, 9, Shade::On);
    assert_eq!(fb.lit(), 72);
    assert!(fb.get(10, 20));
    assert!(fb.get(17, 28));
    assert!(!fb.get(18, 20));
    assert!(!fb.get(10, 29));
}

#[test]
fn fill_rect_off_carves_holes() {
    let mut fb = FrameBuffer::new();
    fb.fill_rect(0, 0, 8, 8, Shade::On);
    fb.fill_rect(2, 2, 2, 2, Shade::Off);
    assert_eq!(fb.lit(), 60);
    assert!(!fb.get(2, 2));
    assert!(fb.get(4, 4));
}

#[test]
fn fill_rect_clips_at_edges() {
    let mut fb = FrameBuffer::new();
    fb.fill_rect(-5, -5, 10, 10, Shade::On);
    assert_eq!(fb.lit(), 25); // only the on-screen quarter
    assert!(fb.get(0, 0));
    assert!(fb.get(4, 4));
}

#[test]
fn draw_rect_is_outline_only() {
    let mut fb = FrameBuffer::new();
    fb.draw_rect(0, 0, 10, 3, Shade::On);
    assert_eq!(fb.lit(), 2 * 10 + 2 * 3 - 4);
    assert!(fb.get(0, 0));
    assert!(fb.get(9, 2));
    assert!(!fb.get(5, 1)); // interior stays dark
}

// ── Circles & lines ───────────────────────────────────────────────────────────

#[test]
fn fill_circle_includes_boundary_not_corners() {
    let mut fb = FrameBuffer::new();
    fb.fill_circle(10, 10, 2, Shade::On);
    assert!(fb.get(10, 10));
    assert!(fb.get(12, 10)); // on the radius
    assert!(fb.get(10, 8));
    assert!(!fb.get(12, 12)); // corner of the bounding box
    assert_eq!(fb.lit(), 13);
}

#[test]
fn fill_circle_clips_at_edges() {
    let mut fb = FrameBuffer::new();
    fb.fill_circle(0, 0, 3, Shade::On);
    assert!(fb.get(0, 0));
    assert!(fb.get(3, 0));
    assert!(fb.lit() < 29); // most of the disc is off-screen
}

#[test]
fn horizontal_line() {
    let mut fb = FrameBuffer::new();
    fb.line(0, 14, 127, 14, Shade::On);
    assert_eq!(fb.lit(), 128);
    assert!(fb.get(0, 14));
    assert!(fb.get(127, 14));
}

#[test]
fn vertical_line() {
    let mut fb = FrameBuffer::new();
    fb.line(50, 35, 50, 39, Shade::On);
    assert_eq!(fb.lit(), 5);
    assert!(fb.get(50, 35));
    assert!(fb.get(50, 39));
}

#[test]
fn diagonal_line_hits_both_endpoints() {
    let mut fb = FrameBuffer::new();
    fb.line(0, 0, 7, 5, Shade::On);
    assert!(fb.get(0, 0));
    assert!(fb.get(7, 5));
}

// ── Blit ──────────────────────────────────────────────────────────────────────

#[test]
fn blit_paints_set_bits_msb_first() {
    let mut fb = FrameBuffer::new();
    fb.blit(0, 0, 8, 2, &[0xff, 0x81]);
    assert_eq!(fb.lit(), 10);
    assert!(fb.get(0, 1));
    assert!(fb.get(7, 1));
    assert!(!fb.get(1, 1));
}

#[test]
fn blit_clear_bits_are_transparent() {
    let mut fb = FrameBuffer::new();
    fb.set(1, 1, Shade::On);
    fb.blit(0, 0, 8, 2, &[0x00, 0x00]);
    assert!(fb.get(1, 1)); // background survives
}

#[test]
fn blit_clips_at_edges() {
    let mut fb = FrameBuffer::new();
    fb.blit(124, 62, 8, 2, &[0xff, 0xff]);
    assert_eq!(fb.lit(), 8); // 4x2 visible corner
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[test]
fn text_draws_glyph_pixels() {
    let mut fb = FrameBuffer::new();
    fb.text(0, 0, 1, "1");
    assert_eq!(fb.lit(), 8); // pixel count of the '1' glyph
}

#[test]
fn text_scales_quadratically() {
    let mut fb = FrameBuffer::new();
    fb.text(0, 0, 2, "1");
    assert_eq!(fb.lit(), 32);
}

#[test]
fn text_folds_lowercase() {
    let mut a = FrameBuffer::new();
    let mut b = FrameBuffer::new();
    a.text(0, 0, 1, "score");
    b.text(0, 0, 1, "SCORE");
    for y in 0..8 {
        for x in 0..24 {
            assert_eq!(a.get(x, y), b.get(x, y));
        }
    }
}

#[test]
fn text_unknown_chars_are_blank() {
    let mut fb = FrameBuffer::new();
    fb.text(0, 0, 1, "~~~");
    assert_eq!(fb.lit(), 0);
}

#[test]
fn text_advances_four_pixels_per_char() {
    let mut fb = FrameBuffer::new();
    fb.text(0, 0, 1, " 1"); // leading space shifts the glyph one cell
    assert!(fb.get(5, 0)); // '1' top row is .X. at column offset 4
    assert!(!fb.get(1, 0));
}
