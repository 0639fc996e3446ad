//! Resolved gamut handle passed to every conversion.

use zcolor_primaries::{ColorSpace, GamutRegistry, RgbXyzMatrices};

use crate::{ColorError, ColorResult};

/// A color space together with its cached RGB/XYZ matrices.
///
/// Resolve once per device (or per editor) and pass by reference into the
/// conversion functions; resolving goes through the registry's
/// [`MatrixCache`](zcolor_primaries::MatrixCache).
///
/// # Example
///
/// ```rust
/// use zcolor::{Gamut, GamutRegistry};
///
/// let registry = GamutRegistry::standard();
/// let gamut = Gamut::resolve(&registry, "hue_gamut_c").unwrap();
/// assert_eq!(gamut.space.name, "Hue Gamut C");
/// assert!(Gamut::resolve(&registry, "nope").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamut<'a> {
    /// The device color space.
    pub space: &'a ColorSpace,
    /// Matrices derived from [`Gamut::space`].
    pub matrices: RgbXyzMatrices,
}

impl<'a> Gamut<'a> {
    /// Binds `space` to its matrices from `registry`'s cache.
    pub fn new(registry: &GamutRegistry, space: &'a ColorSpace) -> Self {
        Self {
            space,
            matrices: registry.matrices(space),
        }
    }

    /// Binds `space` to freshly built matrices, bypassing any cache.
    pub fn uncached(space: &'a ColorSpace) -> Self {
        Self {
            space,
            matrices: RgbXyzMatrices::build(space),
        }
    }

    /// Looks up `key` in `registry`.
    pub fn resolve(registry: &'a GamutRegistry, key: &str) -> ColorResult<Self> {
        registry
            .get(key)
            .map(|space| Self::new(registry, space))
            .ok_or_else(|| ColorError::UnknownGamut(key.to_string()))
    }

    /// Looks up `key` in `registry`, using the registry default when unknown.
    pub fn resolve_or_default(registry: &'a GamutRegistry, key: &str) -> Self {
        Self::new(registry, registry.get_or_default(key))
    }

    /// The registry's default gamut.
    pub fn default_of(registry: &'a GamutRegistry) -> Self {
        Self::new(registry, registry.default_space())
    }

    /// White point chromaticity.
    #[inline]
    pub fn white(&self) -> (f64, f64) {
        self.space.white
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zcolor_primaries::{CIE1931, SRGB};

    #[test]
    fn test_resolve_uses_registry_cache() {
        let registry = GamutRegistry::standard();
        let gamut = Gamut::resolve(&registry, "srgb").unwrap();
        assert!(registry.cache().contains("sRGB"));
        assert_eq!(gamut.matrices, Gamut::uncached(&SRGB).matrices);
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = GamutRegistry::standard();
        let err = Gamut::resolve(&registry, "gamut_z").unwrap_err();
        assert!(matches!(err, ColorError::UnknownGamut(ref k) if k == "gamut_z"));
        assert_eq!(Gamut::resolve_or_default(&registry, "gamut_z").space, &CIE1931);
        assert_eq!(registry.get_or_default("gamut_z"), &CIE1931);
        assert_eq!(Gamut::resolve_or_default(&registry, "SRGB").space, &SRGB);
    }

    #[test]
    fn test_default() {
        let registry = GamutRegistry::standard();
        let gamut = Gamut::default_of(&registry);
        assert_eq!(gamut.white(), CIE1931.white);
    }
}
