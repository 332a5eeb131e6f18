//! Shape generation for 2D primitives
//!
//! All coordinates are playfield pixels (y down). Every shape is emitted as
//! a plain triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y + h, color),
    ]
}

/// Generate vertices for a thick line segment
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let (s1, c1) = theta1.sin_cos();
        let (s2, c2) = theta2.sin_cos();
        let inner1 = center + Vec2::new(c1, s1) * inner_radius;
        let outer1 = center + Vec2::new(c1, s1) * outer_radius;
        let inner2 = center + Vec2::new(c2, s2) * inner_radius;
        let outer2 = center + Vec2::new(c2, s2) * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Rectangle with rounded corners: a cross of two rects plus four corner discs
pub fn rounded_rect(x: f32, y: f32, w: f32, h: f32, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    let mut vertices = rect(x + r, y, w - 2.0 * r, h, color);
    vertices.extend(rect(x, y + r, w, h - 2.0 * r, color));

    if r > 0.0 {
        for corner in [
            Vec2::new(x + r, y + r),
            Vec2::new(x + w - r, y + r),
            Vec2::new(x + r, y + h - r),
            Vec2::new(x + w - r, y + h - r),
        ] {
            vertices.extend(circle(corner, r, color, 8));
        }
    }

    vertices
}

// Seven-segment layout, bits a..g:
//  aaa
// f   b
//  ggg
// e   c
//  ddd
const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

const DIGITS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,
    SEG_A | SEG_B | SEG_G | SEG_C | SEG_D,
    SEG_F | SEG_G | SEG_B | SEG_C,
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,
    SEG_A | SEG_F | SEG_G | SEG_E | SEG_C | SEG_D,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// Glyph width relative to its height
const GLYPH_ASPECT: f32 = 0.55;
/// Gap between glyphs relative to height
const GLYPH_GAP: f32 = 0.2;

/// Width of `text` when drawn at `height`
pub fn text_width(text: &str, height: f32) -> f32 {
    let n = text.chars().count() as f32;
    if n == 0.0 {
        return 0.0;
    }
    n * height * GLYPH_ASPECT + (n - 1.0) * height * GLYPH_GAP
}

/// Draw one glyph with its top-left corner at `origin`. Supports `0-9`, `-` and `x`.
pub fn glyph(c: char, origin: Vec2, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = height * GLYPH_ASPECT;
    let t = (height * 0.14).max(1.0);
    let mut vertices = Vec::new();

    let mask = match c {
        '0'..='9' => DIGITS[c as usize - '0' as usize],
        '-' => SEG_G,
        'x' | 'X' => {
            // Lower-case x sits in the bottom half
            let top = origin.y + height * 0.4;
            let bottom = origin.y + height;
            vertices.extend(line(
                Vec2::new(origin.x, top),
                Vec2::new(origin.x + w, bottom),
                t,
                color,
            ));
            vertices.extend(line(
                Vec2::new(origin.x + w, top),
                Vec2::new(origin.x, bottom),
                t,
                color,
            ));
            return vertices;
        }
        _ => return vertices,
    };

    let (x0, x1) = (origin.x, origin.x + w);
    let (y0, y1, y2) = (origin.y, origin.y + height / 2.0, origin.y + height);
    let segments = [
        (SEG_A, Vec2::new(x0, y0), Vec2::new(x1, y0)),
        (SEG_B, Vec2::new(x1, y0), Vec2::new(x1, y1)),
        (SEG_C, Vec2::new(x1, y1), Vec2::new(x1, y2)),
        (SEG_D, Vec2::new(x0, y2), Vec2::new(x1, y2)),
        (SEG_E, Vec2::new(x0, y1), Vec2::new(x0, y2)),
        (SEG_F, Vec2::new(x0, y0), Vec2::new(x0, y1)),
        (SEG_G, Vec2::new(x0, y1), Vec2::new(x1, y1)),
    ];
    for (bit, from, to) in segments {
        if mask & bit != 0 {
            vertices.extend(line(from, to, t, color));
        }
    }

    vertices
}

/// Draw `text` centered on `center`
pub fn text_centered(text: &str, center: Vec2, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut cursor = Vec2::new(
        center.x - text_width(text, height) / 2.0,
        center.y - height / 2.0,
    );
    let advance = height * (GLYPH_ASPECT + GLYPH_GAP);

    let mut vertices = Vec::new();
    for c in text.chars() {
        vertices.extend(glyph(c, cursor, height, color));
        cursor.x += advance;
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_triangle_counts() {
        assert_eq!(rect(0.0, 0.0, 10.0, 10.0, WHITE).len(), 6);
        assert_eq!(circle(Vec2::ZERO, 5.0, WHITE, 16).len(), 48);
        assert_eq!(ring(Vec2::ZERO, 4.0, 5.0, WHITE, 16).len(), 96);
        assert_eq!(rounded_rect(0.0, 0.0, 120.0, 34.0, 8.0, WHITE).len() % 3, 0);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 50.0);
        for v in circle(center, 20.0, WHITE, 24) {
            let p = Vec2::from(v.position);
            assert!(p.distance(center) <= 20.0 + 1e-3);
        }
    }

    #[test]
    fn test_glyph_segment_counts() {
        // 8 lights all seven segments, 1 only two, '-' only the middle bar
        assert_eq!(glyph('8', Vec2::ZERO, 20.0, WHITE).len(), 7 * 6);
        assert_eq!(glyph('1', Vec2::ZERO, 20.0, WHITE).len(), 2 * 6);
        assert_eq!(glyph('-', Vec2::ZERO, 20.0, WHITE).len(), 6);
        assert_eq!(glyph('x', Vec2::ZERO, 20.0, WHITE).len(), 2 * 6);
        assert!(glyph('?', Vec2::ZERO, 20.0, WHITE).is_empty());
    }

    #[test]
    fn test_text_is_centered() {
        let center = Vec2::new(300.0, 200.0);
        let vertices = text_centered("-12", center, 18.0, WHITE);
        let (min_x, max_x) = vertices.iter().fold((f32::MAX, f32::MIN), |(lo, hi), v| {
            (lo.min(v.position[0]), hi.max(v.position[0]))
        });
        let mid = (min_x + max_x) / 2.0;
        assert!((mid - center.x).abs() < 1.0, "text midpoint {mid}");
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 10.0), 0.0);
        assert!((text_width("12", 10.0) - (2.0 * 5.5 + 2.0)).abs() < 1e-4);
    }
}
