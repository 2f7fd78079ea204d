//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in logical screen pixels
//! (origin top-left, y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vertical_gradient(min, size, color, color)
}

/// Generate vertices for a rectangle shaded from `top` to `bottom`
pub fn vertical_gradient(min: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
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

/// Generate vertices for a single filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
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

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 5.0), WHITE);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::INFINITY, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 25.0);
    }

    #[test]
    fn test_gradient_colors_by_edge() {
        let top = [1.0, 0.0, 0.0, 1.0];
        let bottom = [0.0, 0.0, 1.0, 1.0];
        let v = vertical_gradient(Vec2::ZERO, Vec2::new(10.0, 10.0), top, bottom);
        for vertex in &v {
            let expected = if vertex.position[1] == 0.0 { top } else { bottom };
            assert_eq!(vertex.color, expected);
        }
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(5.0, 5.0);
        let v = circle(center, 7.5, WHITE, 16);
        assert_eq!(v.len(), 48);
        for vertex in &v {
            let p = Vec2::new(vertex.position[0], vertex.position[1]);
            assert!(p.distance(center) <= 7.5 + 1e-4);
        }
    }
}
