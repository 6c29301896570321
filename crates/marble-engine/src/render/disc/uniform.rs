use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Vec2};

/// Uniform block shared by both shader stages (96 bytes):
///
///  offset  0  projection  mat4x4<f32>
///  offset 64  color       vec4<f32>
///  offset 80  offset      vec2<f32>   (+ 8 bytes struct padding)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct DiscUniform {
    pub projection: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub offset: [f32; 2],
    pub _pad: [f32; 2],
}

impl DiscUniform {
    /// Encodes one draw call's uniform contents.
    ///
    /// `projection` is consumed as column-major `[f32; 16]` and re-chunked
    /// into the four `vec4` columns WGSL expects.
    pub(super) fn pack(projection: [f32; 16], color: ColorRgba, offset: Vec2) -> Self {
        let mut columns = [[0.0f32; 4]; 4];
        for (column, chunk) in columns.iter_mut().zip(projection.chunks_exact(4)) {
            column.copy_from_slice(chunk);
        }

        Self {
            projection: columns,
            color: color.to_array(),
            offset: [offset.x, offset.y],
            _pad: [0.0; 2],
        }
    }

    pub(super) fn min_binding_size() -> std::num::NonZeroU64 {
        std::num::NonZeroU64::new(std::mem::size_of::<Self>() as u64)
            .expect("DiscUniform has non-zero size by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;
    use crate::render::disc::Frustum;

    #[test]
    fn block_is_sized_for_a_16_byte_aligned_uniform() {
        assert_eq!(std::mem::size_of::<DiscUniform>(), 96);
    }

    #[test]
    fn each_pack_carries_the_literal_offset() {
        let m = Frustum::new(Viewport::new(600.0, 600.0)).matrix();
        let gray = ColorRgba::new(0.5, 0.5, 0.5, 1.0);

        let first = DiscUniform::pack(m, gray, Vec2::new(0.0, 0.0));
        let second = DiscUniform::pack(m, gray, Vec2::new(0.5, -0.3));

        // No accumulation across calls.
        assert_eq!(first.offset, [0.0, 0.0]);
        assert_eq!(second.offset, [0.5, -0.3]);
    }

    #[test]
    fn projection_columns_match_the_source_matrix() {
        let frustum = Frustum::new(Viewport::new(400.0, 800.0));
        let packed = DiscUniform::pack(frustum.matrix(), ColorRgba::white(), Vec2::zero());

        assert_eq!(packed.projection[0][0], frustum.x_scale());
        assert_eq!(packed.projection[1][1], frustum.y_scale());
        assert_eq!(packed.projection[2][3], -1.0); // element [11]
        assert!((packed.projection[3][2] - (-1.2)).abs() < 1e-6); // element [14]
    }

    #[test]
    fn color_is_forwarded_unmodified() {
        let m = Frustum::new(Viewport::new(600.0, 600.0)).matrix();
        let packed = DiscUniform::pack(m, ColorRgba::new(0.1, 0.2, 0.3, 0.4), Vec2::zero());
        assert_eq!(packed.color, [0.1, 0.2, 0.3, 0.4]);
    }
}
