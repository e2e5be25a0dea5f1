use glam::Vec3;

use crate::math::{CubicBezier, CurveSample};
use crate::types::Vertex;

pub const VERTICES_PER_SEGMENT: usize = 6;

/// Left and right road edge at one curve sample
fn edges(sample: &CurveSample, half_width: f32) -> (Vec3, Vec3) {
    let offset = sample.normal * half_width;
    (sample.position - offset, sample.position + offset)
}

/// Triangulates a flat ribbon of `2 * half_width` following the curve.
///
/// Each segment is two triangles `(l0, r0, l1)` and `(r0, r1, l1)` between
/// consecutive samples, with every normal pointing straight up. Adjacent
/// segments share their edge samples so the ribbon has no gaps.
pub fn build_road(curve: &CubicBezier, segments: usize, half_width: f32) -> Vec<Vertex> {
    let samples: Vec<CurveSample> = curve.sample(segments).collect();

    samples
        .windows(2)
        .flat_map(|pair| {
            let (l0, r0) = edges(&pair[0], half_width);
            let (l1, r1) = edges(&pair[1], half_width);
            [l0, r0, l1, r0, r1, l1]
        })
        .map(|position| Vertex::from_vec3(position, Vec3::Y))
        .collect()
}

/// Leading (`l0`, `r0`) and trailing (`l1`, `r1`) edge of segment `index`
pub fn segment_edges(vertices: &[Vertex], index: usize) -> Option<([Vec3; 2], [Vec3; 2])> {
    let start = index * VERTICES_PER_SEGMENT;
    let segment = vertices.get(start..start + VERTICES_PER_SEGMENT)?;
    let p = |i: usize| Vec3::from_array(segment[i].position);
    Some(([p(0), p(1)], [p(2), p(4)]))
}
