//! The fixed set of color spaces devices can select.
//!
//! A device advertises a gamut key (`"hue_gamut_c"`, `"rec2020"`, ...);
//! the registry maps that key to a [`ColorSpace`] and owns the
//! [`MatrixCache`] for every space it hands out.

use tracing::debug;

use crate::{
    CIE1931, ColorSpace, DISPLAY_P3, HUE_GAMUT_A, HUE_GAMUT_B, HUE_GAMUT_C, MatrixCache,
    REC709, REC2020, REC2100_HLG, REC2100_PQ, RgbXyzMatrices, SRGB,
};

/// Key of the gamut used when a device does not name one.
pub const DEFAULT_GAMUT: &str = "cie1931";

static FALLBACK: ColorSpace = CIE1931;

/// Canonical form of a gamut key: trimmed, lower case, `-` and spaces as `_`.
///
/// ```rust
/// use zcolor_primaries::normalize_key;
///
/// assert_eq!(normalize_key(" Hue-Gamut-C "), "hue_gamut_c");
/// ```
pub fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Read-only mapping from gamut key to [`ColorSpace`].
///
/// # Example
///
/// ```rust
/// use zcolor_primaries::GamutRegistry;
///
/// let registry = GamutRegistry::standard();
/// assert_eq!(registry.get("Rec2020").unwrap().name, "Rec.2020");
/// assert!(registry.get("nope").is_none());
/// assert_eq!(registry.get_or_default("nope").name, "CIE 1931");
/// ```
#[derive(Debug)]
pub struct GamutRegistry {
    entries: Vec<(&'static str, ColorSpace)>,
    cache: MatrixCache,
}

impl GamutRegistry {
    /// Registry with every built-in color space. The first entry,
    /// [`DEFAULT_GAMUT`], is the default.
    pub fn standard() -> Self {
        Self::with_spaces([
            (DEFAULT_GAMUT, CIE1931),
            ("srgb", SRGB),
            ("rec709", REC709),
            ("rec2020", REC2020),
            ("rec2100_pq", REC2100_PQ),
            ("rec2100_hlg", REC2100_HLG),
            ("display_p3", DISPLAY_P3),
            ("hue_gamut_a", HUE_GAMUT_A),
            ("hue_gamut_b", HUE_GAMUT_B),
            ("hue_gamut_c", HUE_GAMUT_C),
        ])
    }

    /// Registry over a custom list. The first entry is the default; an
    /// empty list defaults to CIE 1931.
    ///
    /// Keys are stored as given and matched after [`normalize_key`], so
    /// register them in canonical form.
    pub fn with_spaces(entries: impl IntoIterator<Item = (&'static str, ColorSpace)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            cache: MatrixCache::new(),
        }
    }

    /// Looks up a color space by key.
    pub fn get(&self, key: &str) -> Option<&ColorSpace> {
        let key = normalize_key(key);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, space)| space)
    }

    /// The default color space.
    pub fn default_space(&self) -> &ColorSpace {
        self.entries.first().map(|(_, s)| s).unwrap_or(&FALLBACK)
    }

    /// Looks up a color space by key, falling back to the default.
    pub fn get_or_default(&self, key: &str) -> &ColorSpace {
        match self.get(key) {
            Some(space) => space,
            None => {
                debug!(key, "unknown gamut, using default");
                self.default_space()
            }
        }
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Key and color space pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ColorSpace)> {
        self.entries.iter().map(|(k, s)| (*k, s))
    }

    /// Number of registered spaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no spaces are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached matrices for `space`.
    pub fn matrices(&self, space: &ColorSpace) -> RgbXyzMatrices {
        self.cache.get_or_build(space)
    }

    /// The matrix cache owned by this registry.
    pub fn cache(&self) -> &MatrixCache {
        &self.cache
    }
}

impl Default for GamutRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_keys() {
        let registry = GamutRegistry::standard();
        assert_eq!(registry.len(), 10);
        assert_eq!(registry.keys().next(), Some(DEFAULT_GAMUT));
        for key in registry.keys() {
            assert_eq!(normalize_key(key), key);
            assert!(registry.get(key).is_some(), "{}", key);
        }
    }

    #[test]
    fn test_lookup_is_lenient_on_case_and_dashes() {
        let registry = GamutRegistry::standard();
        assert_eq!(registry.get("HUE-GAMUT-B"), Some(&HUE_GAMUT_B));
        assert_eq!(registry.get("rec2100 pq"), Some(&REC2100_PQ));
    }

    #[test]
    fn test_default() {
        let registry = GamutRegistry::standard();
        assert_eq!(registry.default_space(), &CIE1931);
        assert_eq!(registry.get_or_default("unknown"), &CIE1931);
        assert_eq!(registry.get_or_default("srgb"), &SRGB);
    }

    #[test]
    fn test_empty_registry_defaults_to_cie1931() {
        let registry = GamutRegistry::with_spaces(Vec::<(&'static str, ColorSpace)>::new());
        assert!(registry.is_empty());
        assert_eq!(registry.default_space(), &CIE1931);
    }

    #[test]
    fn test_custom_registry() {
        let registry = GamutRegistry::with_spaces([("lamp", HUE_GAMUT_C), ("tv", REC709)]);
        assert_eq!(registry.default_space(), &HUE_GAMUT_C);
        assert!(registry.get("srgb").is_none());
    }

    #[test]
    fn test_matrices_go_through_cache() {
        let registry = GamutRegistry::standard();
        assert!(registry.cache().is_empty());
        let a = registry.matrices(&SRGB);
        let b = registry.matrices(registry.get("srgb").unwrap());
        assert_eq!(a, b);
        assert_eq!(registry.cache().len(), 1);
    }
}
