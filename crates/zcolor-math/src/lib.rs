//! # zcolor-math
//!
//! Math primitives for the zcolor conversion engine:
//!
//! - [`Mat3`] - 3x3 matrices for RGB <-> XYZ transforms
//! - [`Vec3`] - 3D vectors for RGB/XYZ triplets
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Everything is `f64`; conversions are compared against reference
//! vectors computed in double precision.
//!
//! # Usage
//!
//! ```rust
//! use zcolor_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::ONE;
//! assert!((xyz.y - 1.0).abs() < 1e-6);
//! ```
//!
//! # Used By
//!
//! - `zcolor-primaries` - RGB/XYZ matrix generation
//! - `zcolor` - color conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
