//! Memoized RGB <-> XYZ matrices.
//!
//! Matrices depend only on a color space's chromaticities, so they are
//! built once per [`ColorSpace::name`] and reused. The cache is an
//! explicit object owned by a [`GamutRegistry`](crate::GamutRegistry);
//! there is no process-wide state.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::{debug, trace};
use zcolor_math::Mat3;

use crate::{ColorSpace, rgb_to_xyz_matrix};

/// The forward and inverse transforms of one color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbXyzMatrices {
    /// Linear RGB -> XYZ.
    pub to_xyz: Mat3,
    /// XYZ -> linear RGB.
    pub to_rgb: Mat3,
}

impl RgbXyzMatrices {
    /// Builds both matrices for `space`.
    ///
    /// A degenerate space yields zero matrices in both directions.
    pub fn build(space: &ColorSpace) -> Self {
        let to_xyz = rgb_to_xyz_matrix(space);
        let to_rgb = to_xyz.inverse_or_zero();
        Self { to_xyz, to_rgb }
    }
}

/// Lazily filled cache of [`RgbXyzMatrices`] keyed by color space name.
///
/// Entries are never invalidated: color spaces are constants, and a
/// second build of the same space produces the same matrices.
#[derive(Debug, Default)]
pub struct MatrixCache {
    entries: RwLock<HashMap<&'static str, RgbXyzMatrices>>,
}

impl MatrixCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached matrices for `space`, building them on first use.
    pub fn get_or_build(&self, space: &ColorSpace) -> RgbXyzMatrices {
        {
            // Entries are plain values, so a poisoned lock still holds valid data.
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(m) = entries.get(space.name) {
                trace!(space = space.name, "matrix cache hit");
                return *m;
            }
        }

        let built = RgbXyzMatrices::build(space);
        debug!(space = space.name, degenerate = built.to_xyz == Mat3::ZERO, "built RGB/XYZ matrices");

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        *entries.entry(space.name).or_insert(built)
    }

    /// True if matrices for `name` have been built.
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Number of cached color spaces.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
