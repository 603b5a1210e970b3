//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in field coordinates
//! (origin top-left, y down).

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::vertex::Vertex;

/// Filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(min, size, color, color)
}

/// Rectangle blending from `top` to `bottom` color
pub fn gradient_rect(min: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, top),
        Vertex::new(max.x, min.y, top),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(max.x, min.y, top),
        Vertex::new(max.x, max.y, bottom),
    ]
}

/// Outline of a rectangle drawn as four thin rects
pub fn rect_outline(min: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness;
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(min, Vec2::new(size.x, t), color));
    vertices.extend(rect(Vec2::new(min.x, min.y + size.y - t), Vec2::new(size.x, t), color));
    vertices.extend(rect(Vec2::new(min.x, min.y + t), Vec2::new(t, size.y - 2.0 * t), color));
    vertices.extend(rect(
        Vec2::new(min.x + size.x - t, min.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    ));
    vertices
}

/// Filled rectangle with rounded corners (triangle fan from the center)
pub fn rounded_rect(
    min: Vec2,
    size: Vec2,
    radius: f32,
    color: [f32; 4],
    corner_segments: u32,
) -> Vec<Vertex> {
    let radius = radius.min(size.x / 2.0).min(size.y / 2.0).max(0.0);
    let segments = corner_segments.max(1);
    let max = min + size;

    // Corner centers with the angle each quarter arc starts at, clockwise on screen
    let corners = [
        (Vec2::new(max.x - radius, min.y + radius), -FRAC_PI_2),
        (Vec2::new(max.x - radius, max.y - radius), 0.0),
        (Vec2::new(min.x + radius, max.y - radius), FRAC_PI_2),
        (Vec2::new(min.x + radius, min.y + radius), 2.0 * FRAC_PI_2),
    ];

    let mut outline = Vec::with_capacity(corners.len() * (segments as usize + 1));
    for (center, start) in corners {
        for i in 0..=segments {
            let theta = start + FRAC_PI_2 * (i as f32 / segments as f32);
            outline.push(center + Vec2::new(theta.cos(), theta.sin()) * radius);
        }
    }

    let center = min + size / 2.0;
    let mut vertices = Vec::with_capacity(outline.len() * 3);
    for (i, &p1) in outline.iter().enumerate() {
        let p2 = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Stroke a quadratic Bezier curve as a chain of thick segments
pub fn quadratic_curve(
    from: Vec2,
    control: Vec2,
    to: Vec2,
    width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let point = |t: f32| {
        let u = 1.0 - t;
        from * (u * u) + control * (2.0 * u * t) + to * (t * t)
    };

    let mut vertices = Vec::with_capacity(segments as usize * 6);
    for i in 0..segments {
        let t1 = i as f32 / segments as f32;
        let t2 = (i + 1) as f32 / segments as f32;
        vertices.extend(line(point(t1), point(t2), width, color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        let mut lo = Vec2::splat(f32::MAX);
        let mut hi = Vec2::splat(f32::MIN);
        for v in vertices {
            let p = Vec2::from(v.position);
            lo = lo.min(p);
            hi = hi.max(p);
        }
        (lo, hi)
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let vertices = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), WHITE);
        assert_eq!(vertices.len(), 6);
        assert_eq!(bounds(&vertices), (Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0)));
    }

    #[test]
    fn test_gradient_colors() {
        let top = [1.0, 0.0, 0.0, 1.0];
        let bottom = [0.0, 0.0, 1.0, 1.0];
        let vertices = gradient_rect(Vec2::ZERO, Vec2::new(10.0, 10.0), top, bottom);
        for v in &vertices {
            let expected = if v.position[1] == 0.0 { top } else { bottom };
            assert_eq!(v.color, expected);
        }
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let min = Vec2::new(35.0, 100.0);
        let size = Vec2::new(26.0, 28.0);
        let vertices = rounded_rect(min, size, 6.0, WHITE, 4);
        assert_eq!(vertices.len(), 4 * 5 * 3);

        let (lo, hi) = bounds(&vertices);
        let eps = 1e-3;
        assert!(lo.x >= min.x - eps && lo.y >= min.y - eps);
        assert!(hi.x <= min.x + size.x + eps && hi.y <= min.y + size.y + eps);
        // The straight edges still reach the full extent
        assert!((lo.x - min.x).abs() < eps && (hi.y - (min.y + size.y)).abs() < eps);
    }

    #[test]
    fn test_rounded_rect_radius_clamped() {
        // Radius larger than half the size degenerates gracefully
        let vertices = rounded_rect(Vec2::ZERO, Vec2::new(4.0, 10.0), 50.0, WHITE, 3);
        let (lo, hi) = bounds(&vertices);
        assert!(lo.x >= -1e-3 && hi.x <= 4.0 + 1e-3);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, WHITE).is_empty());
    }

    #[test]
    fn test_line_width() {
        let vertices = line(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), 2.0, WHITE);
        let (lo, hi) = bounds(&vertices);
        assert_eq!(lo, Vec2::new(0.0, 4.0));
        assert_eq!(hi, Vec2::new(10.0, 6.0));
    }

    #[test]
    fn test_outline_frames_rect() {
        let vertices = rect_outline(Vec2::new(50.0, 40.0), Vec2::new(380.0, 60.0), 1.0, WHITE);
        assert_eq!(vertices.len(), 24);
        assert_eq!(bounds(&vertices), (Vec2::new(50.0, 40.0), Vec2::new(430.0, 100.0)));
    }

    #[test]
    fn test_curve_segments() {
        let vertices = quadratic_curve(
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(6.0, 0.0),
            1.0,
            WHITE,
            5,
        );
        assert_eq!(vertices.len(), 30);
    }
}
