//! Small linear-algebra value types and their text grammars.
//!
//! The types are plain `#[repr(C)]` `f32` aggregates with no conversion logic of their own: conversions are described
//! externally (by the catalog's fragments) and implemented with [`crate::numeric_list`] and [`crate::wire`].

use crate::numeric_list::NumericListGrammar;

/// Text grammar for [`Vec2`]: `(x, y)`.
pub static VEC2_GRAMMAR: NumericListGrammar = NumericListGrammar::tuple(Vec2::TYPE_NAME, 2);

/// Text grammar for [`Vec3`]: `(x, y, z)`.
pub static VEC3_GRAMMAR: NumericListGrammar = NumericListGrammar::tuple(Vec3::TYPE_NAME, 3);

/// Text grammar for [`Mat4`]: 16 numbers, formatted as four bracketed rows.
pub static MAT4_GRAMMAR: NumericListGrammar = NumericListGrammar::rows(Mat4::TYPE_NAME, 16, 4);

/// Two-component `f32` vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const TYPE_NAME: &'static str = "metatype_runtime::linalg::Vec2";

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// Three-component `f32` vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const TYPE_NAME: &'static str = "metatype_runtime::linalg::Vec3";

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// 4x4 `f32` matrix stored row-major: `rows[r][c]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub rows: [[f32; 4]; 4],
}

impl Mat4 {
    pub const TYPE_NAME: &'static str = "metatype_runtime::linalg::Mat4";

    pub const IDENTITY: Mat4 = Mat4 {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const fn new(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Build from 16 values in row-major order.
    pub fn from_row_major(values: [f32; 16]) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, value) in values.into_iter().enumerate() {
            rows[i / 4][i % 4] = value;
        }
        Self { rows }
    }

    /// Flatten to 16 values in row-major order.
    pub fn to_row_major(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (i, value) in self.rows.iter().flatten().enumerate() {
            out[i] = *value;
        }
        out
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
