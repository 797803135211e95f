//! 4x4 affine matrices in the layout the skinning shader consumes

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use super::types::{Quat, Vec3, lerp};

/// 4x4 transformation matrix (column-major, like OpenGL/WebGL)
///
/// Translation lives in `data[12..15]`. [`Mat4::mul`] and
/// [`Mat4::from_rotation_translation_scale`] both assume this layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Mat4 {
    /// Matrix data in column-major order
    pub data: [f32; 16],
}

impl Mat4 {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, // Column 0
            0.0, 1.0, 0.0, 0.0, // Column 1
            0.0, 0.0, 1.0, 0.0, // Column 2
            0.0, 0.0, 0.0, 1.0, // Column 3
        ],
    };

    /// Create identity matrix
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Wrap sixteen column-major floats
    pub const fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Create translation matrix
    pub fn from_translation(v: Vec3) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // Column 0
                0.0, 1.0, 0.0, 0.0, // Column 1
                0.0, 0.0, 1.0, 0.0, // Column 2
                v.x, v.y, v.z, 1.0, // Column 3
            ],
        }
    }

    /// Compose an affine transform from rotation, translation and scale.
    ///
    /// Equivalent to `T * R * S`: the non-uniform scale is folded into the
    /// columns of the rotation block.
    pub fn from_rotation_translation_scale(rotation: Quat, translation: Vec3, scale: Vec3) -> Self {
        let Quat { x, y, z, w } = rotation;

        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        let Vec3 {
            x: sx,
            y: sy,
            z: sz,
        } = scale;

        Self {
            data: [
                (1.0 - (yy + zz)) * sx,
                (xy + wz) * sx,
                (xz - wy) * sx,
                0.0,
                (xy - wz) * sy,
                (1.0 - (xx + zz)) * sy,
                (yz + wx) * sy,
                0.0,
                (xz + wy) * sz,
                (yz - wx) * sz,
                (1.0 - (xx + yy)) * sz,
                0.0,
                translation.x,
                translation.y,
                translation.z,
                1.0,
            ],
        }
    }

    /// Multiply two matrices (`self * other`): applies `other` first, then `self`.
    ///
    /// Parent-to-child composition is `parent.mul(&local)`.
    pub fn mul(&self, other: &Self) -> Self {
        let a = &self.data;
        let b = &other.data;
        let mut out = [0.0f32; 16];

        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += b[col * 4 + k] * a[k * 4 + row];
                }
                out[col * 4 + row] = sum;
            }
        }

        Self { data: out }
    }

    /// Blend every entry independently: `self * (1 - t) + other * t`.
    ///
    /// This is not a rigid-transform interpolation; large rotational
    /// differences produce sheared results.
    pub fn lerp_entries(&self, other: &Self, t: f32) -> Self {
        let mut data = [0.0f32; 16];
        for (i, entry) in data.iter_mut().enumerate() {
            *entry = lerp(self.data[i], other.data[i], t);
        }
        Self { data }
    }

    /// Translation component (column 3)
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Transform a point by this matrix
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.data;
        Vec3 {
            x: m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12],
            y: m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13],
            z: m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14],
        }
    }

    /// Get matrix as flat array for GPU upload
    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// Get matrix as 4x3 for GPU upload (strips last row, common for skinning)
    pub fn as_4x3(&self) -> [f32; 12] {
        [
            self.data[0],
            self.data[1],
            self.data[2],
            self.data[4],
            self.data[5],
            self.data[6],
            self.data[8],
            self.data[9],
            self.data[10],
            self.data[12],
            self.data[13],
            self.data[14],
        ]
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::mul(&self, &rhs)
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Self {
            data: m.to_cols_array(),
        }
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        Self::from_cols_array(&m.data)
    }
}

/// Flatten a skinning palette into 16 floats per bone, in bone order
pub fn palette_to_gpu_data(palette: &[Mat4]) -> Vec<f32> {
    let mut data = Vec::with_capacity(palette.len() * 16);
    for matrix in palette {
        data.extend_from_slice(matrix.as_array());
    }
    data
}
