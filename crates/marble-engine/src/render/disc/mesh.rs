//! CPU-side fan geometry for the disc.

use std::f32::consts::PI;

use super::DiscConfig;

/// Generates the disc's vertices in triangle-fan order.
///
/// Layout: one center vertex at `(0, 0, depth)` followed by
/// `sample_count + 1` perimeter vertices; the final perimeter vertex closes
/// the fan. Each vertex is three floats, all sharing `config.depth`.
///
/// The angular argument is `step * 2 * i` with `step = PI / sample_count`,
/// so the perimeter sweeps a full revolution over `sample_count` samples.
/// The doubling stays in the sampling expression; folding it into the step
/// would change the constant's meaning, not the output.
pub fn fan_vertices(config: &DiscConfig) -> Vec<[f32; 3]> {
    let step = PI / config.sample_count as f32;

    let mut vertices = Vec::with_capacity(config.sample_count as usize + 2);
    vertices.push([0.0, 0.0, config.depth]);

    for i in 1..=config.sample_count + 1 {
        let angle = step * 2.0 * i as f32;
        vertices.push([
            angle.sin() * config.radius,
            angle.cos() * config.radius,
            config.depth,
        ]);
    }

    vertices
}

/// Expands the fan into triangle-list indices.
///
/// wgpu has no triangle-fan topology, so each perimeter edge becomes the
/// triangle `[0, i, i + 1]` against the shared center vertex. Produces
/// `sample_count` triangles covering every vertex `fan_vertices` emits.
pub fn fan_indices(sample_count: u32) -> Vec<u16> {
    debug_assert!(sample_count + 2 <= u16::MAX as u32);

    let mut indices = Vec::with_capacity(sample_count as usize * 3);
    for i in 1..=sample_count as u16 {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ColorRgba;

    fn config(radius: f32, sample_count: u32, depth: f32) -> DiscConfig {
        DiscConfig {
            radius,
            sample_count,
            depth,
            color: ColorRgba::new(0.5, 0.5, 0.5, 1.0),
        }
    }

    // ── fan_vertices ──────────────────────────────────────────────────────

    #[test]
    fn default_config_yields_eighteen_vertices() {
        let vertices = fan_vertices(&DiscConfig::default());
        assert_eq!(vertices.len(), 18); // 1 center + 16 perimeter + closing sample
    }

    #[test]
    fn vertex_count_tracks_sample_count() {
        assert_eq!(fan_vertices(&config(0.1, 8, -1.15)).len(), 10);
        assert_eq!(fan_vertices(&config(0.1, 32, -1.15)).len(), 34);
    }

    #[test]
    fn center_vertex_ignores_radius() {
        for radius in [0.05, 0.1, 2.0] {
            let vertices = fan_vertices(&config(radius, 16, -1.15));
            assert_eq!(vertices[0], [0.0, 0.0, -1.15]);
        }
    }

    #[test]
    fn all_vertices_share_the_configured_depth() {
        let vertices = fan_vertices(&config(0.1, 16, -1.15));
        assert!(vertices.iter().all(|v| v[2] == -1.15));
    }

    #[test]
    fn perimeter_vertices_lie_on_the_radius() {
        let radius = 0.1;
        let vertices = fan_vertices(&config(radius, 16, -1.15));
        for v in &vertices[1..] {
            let dist = (v[0] * v[0] + v[1] * v[1]).sqrt();
            assert!((dist - radius).abs() < 1e-6, "|{:?}| = {dist}", v);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let cfg = DiscConfig::default();
        assert_eq!(fan_vertices(&cfg), fan_vertices(&cfg));
    }

    // ── fan_indices ───────────────────────────────────────────────────────

    #[test]
    fn one_triangle_per_perimeter_edge() {
        let indices = fan_indices(16);
        assert_eq!(indices.len(), 16 * 3);
    }

    #[test]
    fn triangles_share_the_center_vertex() {
        let indices = fan_indices(16);
        for triangle in indices.chunks_exact(3) {
            assert_eq!(triangle[0], 0);
            assert_eq!(triangle[2], triangle[1] + 1);
        }
    }

    #[test]
    fn indices_cover_exactly_the_generated_vertices() {
        let sample_count = 16;
        let vertex_count = fan_vertices(&config(0.1, sample_count, -1.15)).len();
        let indices = fan_indices(sample_count);

        let max = indices.iter().copied().max().unwrap() as usize;
        assert_eq!(max, vertex_count - 1);
    }
}
