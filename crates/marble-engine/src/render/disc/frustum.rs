use crate::coords::Viewport;

const Z_NEAR: f32 = 0.5;
const Z_FAR: f32 = 3.0;

/// Aspect-corrected perspective projection with fixed clip planes.
///
/// The matrix is column-major (OpenGL convention): the axis with the larger
/// viewport extent keeps a scale of 1.0 and the other axis is stretched by
/// the ratio, so the disc stays circular regardless of window shape.
///
/// Computed once at construction; the disc does not react to resizes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frustum {
    x_scale: f32,
    y_scale: f32,
    matrix: [f32; 16],
}

impl Frustum {
    pub fn new(viewport: Viewport) -> Self {
        let mut x_scale = 1.0;
        let mut y_scale = 1.0;

        if viewport.height > viewport.width {
            x_scale = viewport.height / viewport.width;
        } else {
            y_scale = viewport.width / viewport.height;
        }

        let mut matrix = [0.0f32; 16];
        matrix[0] = x_scale;
        matrix[5] = y_scale;
        matrix[10] = (Z_FAR + Z_NEAR) / (Z_NEAR - Z_FAR);
        matrix[11] = -1.0;
        matrix[14] = (2.0 * Z_FAR * Z_NEAR) / (Z_NEAR - Z_FAR);

        log::debug!("projection initialized: x_scale={x_scale} y_scale={y_scale}");

        Self {
            x_scale,
            y_scale,
            matrix,
        }
    }

    #[inline]
    pub fn x_scale(&self) -> f32 {
        self.x_scale
    }

    #[inline]
    pub fn y_scale(&self) -> f32 {
        self.y_scale
    }

    #[inline]
    pub fn matrix(&self) -> [f32; 16] {
        self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── frustum scales ────────────────────────────────────────────────────

    #[test]
    fn square_viewport_leaves_both_axes_unscaled() {
        let f = Frustum::new(Viewport::new(600.0, 600.0));
        assert_eq!(f.x_scale(), 1.0);
        assert_eq!(f.y_scale(), 1.0);
    }

    #[test]
    fn tall_viewport_scales_x() {
        let f = Frustum::new(Viewport::new(400.0, 800.0));
        assert_eq!(f.x_scale(), 2.0);
        assert_eq!(f.y_scale(), 1.0);
    }

    #[test]
    fn wide_viewport_scales_y() {
        let f = Frustum::new(Viewport::new(800.0, 400.0));
        assert_eq!(f.x_scale(), 1.0);
        assert_eq!(f.y_scale(), 2.0);
    }

    // ── matrix contents ───────────────────────────────────────────────────

    #[test]
    fn perspective_terms_are_fixed_by_the_clip_planes() {
        let m = Frustum::new(Viewport::new(640.0, 480.0)).matrix();

        assert_eq!(m[11], -1.0);
        assert!((m[10] - (-1.4)).abs() < 1e-6); // (3.0 + 0.5) / (0.5 - 3.0)
        assert!((m[14] - (-1.2)).abs() < 1e-6); // 2 * 3.0 * 0.5 / (0.5 - 3.0)
    }

    #[test]
    fn perspective_terms_do_not_vary_across_constructions() {
        let a = Frustum::new(Viewport::new(100.0, 900.0)).matrix();
        let b = Frustum::new(Viewport::new(1920.0, 1080.0)).matrix();

        for idx in [10, 11, 14] {
            assert_eq!(a[idx], b[idx]);
        }
    }

    #[test]
    fn off_diagonal_entries_stay_zero() {
        let m = Frustum::new(Viewport::new(800.0, 600.0)).matrix();
        for (idx, value) in m.iter().enumerate() {
            if ![0, 5, 10, 11, 14].contains(&idx) {
                assert_eq!(*value, 0.0, "element [{idx}]");
            }
        }
    }

    #[test]
    fn scales_apply_to_the_diagonal() {
        let m = Frustum::new(Viewport::new(400.0, 800.0)).matrix();
        assert_eq!(m[0], 2.0);
        assert_eq!(m[5], 1.0);
    }
}
