/// 4x4 affine / projective matrix
///
/// Stored column-major: `cols[c][r]` is the element in row `r`, column `c`.
/// This matches the layout consumed by column-major uniform uploads and by
/// `glam::Mat4::from_cols_array`, so `to_cols_array` can be handed over as-is.
///
/// Values are immutable; every constructor returns a fresh matrix.
use super::Vec3;
use std::ops::Mul;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat4 {
    cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    const ZERO: Self = Self {
        cols: [[0.0; 4]; 4],
    };

    #[inline]
    pub const fn from_cols_array(m: &[f32; 16]) -> Self {
        Self {
            cols: [
                [m[0], m[1], m[2], m[3]],
                [m[4], m[5], m[6], m[7]],
                [m[8], m[9], m[10], m[11]],
                [m[12], m[13], m[14], m[15]],
            ],
        }
    }

    /// Flattened column-major array (upload order).
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        let c = &self.cols;
        [
            c[0][0], c[0][1], c[0][2], c[0][3], //
            c[1][0], c[1][1], c[1][2], c[1][3], //
            c[2][0], c[2][1], c[2][2], c[2][3], //
            c[3][0], c[3][1], c[3][2], c[3][3],
        ]
    }

    /// Element at `row`, `col`. Panics when either index is >= 4.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }

    pub fn translate(v: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3][0] = v.x;
        m.cols[3][1] = v.y;
        m.cols[3][2] = v.z;
        m
    }

    pub fn scale(v: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[0][0] = v.x;
        m.cols[1][1] = v.y;
        m.cols[2][2] = v.z;
        m
    }

    /// Rotation about +Y by `angle` radians (counter-clockwise looking down -Y).
    pub fn rotate_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[0][0] = c;
        m.cols[0][2] = -s;
        m.cols[2][0] = s;
        m.cols[2][2] = c;
        m
    }

    /// Right-handed perspective projection with a [-1, 1] clip depth range.
    ///
    /// Requires `0 < fov_y < PI` and `far > near > 0`; other inputs give a
    /// degenerate matrix and are the caller's responsibility.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let tan_half_fov = (fov_y * 0.5).tan();
        let depth = far - near;

        let mut m = Self::ZERO;
        m.cols[0][0] = 1.0 / (aspect * tan_half_fov);
        m.cols[1][1] = 1.0 / tan_half_fov;
        m.cols[2][2] = -(far + near) / depth;
        m.cols[2][3] = -1.0;
        m.cols[3][2] = -(2.0 * far * near) / depth;
        m
    }

    /// Right-handed orthographic projection with a [-1, 1] clip depth range.
    /// Opposite bounds must differ.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        let mut m = Self::IDENTITY;
        m.cols[0][0] = 2.0 / width;
        m.cols[1][1] = 2.0 / height;
        m.cols[2][2] = -2.0 / depth;
        m.cols[3][0] = -(right + left) / width;
        m.cols[3][1] = -(top + bottom) / height;
        m.cols[3][2] = -(far + near) / depth;
        m
    }

    /// Right-handed view matrix looking from `eye` towards `center`.
    ///
    /// The up vector is re-derived from the side vector so the basis is
    /// orthonormal even when `up` is not perpendicular to the view direction.
    /// `center - eye` parallel to `up` is degenerate and not guarded.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let f = (center - eye).normalize();
        let s = f.cross(up.normalize()).normalize();
        let u = s.cross(f);

        Self {
            cols: [
                [s.x, u.x, -f.x, 0.0],
                [s.y, u.y, -f.y, 0.0],
                [s.z, u.z, -f.z, 0.0],
                [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
            ],
        }
    }

    /// Homogeneous transform of `(p, 1)`. Returns `[x, y, z, w]` in clip space
    /// for projection matrices; no perspective divide is applied.
    #[inline]
    pub fn transform_point4(&self, p: Vec3) -> [f32; 4] {
        let c = &self.cols;
        let mut out = [0.0; 4];
        for (r, value) in out.iter_mut().enumerate() {
            *value = c[0][r] * p.x + c[1][r] * p.y + c[2][r] * p.z + c[3][r];
        }
        out
    }

    /// Affine transform of a point (w assumed to stay 1).
    #[inline]
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_point4(p);
        Vec3::new(x, y, z)
    }
}

impl Mul for Mat4 {
    type Output = Self;

    /// Conventional product: `(a * b)` applies `b` first, then `a`.
    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for c in 0..4 {
            for r in 0..4 {
                out.cols[c][r] = (0..4).map(|k| self.cols[k][r] * rhs.cols[c][k]).sum();
            }
        }
        out
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols_array(&m.to_cols_array())
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array(&m.to_cols_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
        let p = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!(Mat4::IDENTITY.transform_point3(p), p);
    }

    #[test]
    fn translation_lives_in_last_column() {
        let m = Mat4::translate(Vec3::new(-25.0, -5.0, -25.0));
        let arr = m.to_cols_array();
        assert_eq!(&arr[12..15], &[-25.0, -5.0, -25.0]);
        assert_eq!(m.get(0, 3), -25.0);
        assert_eq!(
            m.transform_point3(Vec3::new(25.0, 5.0, 25.0)),
            Vec3::ZERO
        );
    }

    #[test]
    fn multiplication_order_matters() {
        let t = Mat4::translate(Vec3::new(10.0, 0.0, 0.0));
        let s = Mat4::scale(Vec3::new(2.0, 2.0, 2.0));
        let p = Vec3::new(1.0, 0.0, 0.0);

        // Scale first, then translate.
        assert_eq!((t * s).transform_point3(p), Vec3::new(12.0, 0.0, 0.0));
        // Translate first, then scale.
        assert_eq!((s * t).transform_point3(p), Vec3::new(22.0, 0.0, 0.0));
    }

    #[test]
    fn perspective_maps_near_and_far_to_clip_bounds() {
        let m = Mat4::perspective(45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);

        let near = m.transform_point4(Vec3::new(0.0, 0.0, -0.1));
        let far = m.transform_point4(Vec3::new(0.0, 0.0, -100.0));
        assert!((near[2] / near[3] + 1.0).abs() < 1e-4);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
        assert_eq!(m.get(3, 2), -1.0);
        assert_eq!(m.get(3, 3), 0.0);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vec3::new(10.0, 5.0, 30.0);
        let view = Mat4::look_at(eye, eye + Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
        let p = view.transform_point3(eye);
        assert!(p.length() < 1e-5);

        let ahead = view.transform_point3(eye + Vec3::new(0.0, 0.0, -3.0));
        assert!((ahead.z + 3.0).abs() < 1e-5);
    }
}
