//! Hybrid Log-Gamma (HLG) transfer function.
//!
//! HLG is the broadcast HDR curve of Rec.2100: a square-root segment for
//! shadows and a logarithmic segment for highlights.
//!
//! # Range
//!
//! - Encoded: [0, 1]
//! - Linear: [0, 1] (scene-referred, relative)
//!
//! # Reference
//!
//! ITU-R BT.2100-2

// HLG constants
const A: f64 = 0.17883277;
const B: f64 = 1.0 - 4.0 * A;
const C: f64 = 0.55991073; // 0.5 - A*ln(4*A)

/// HLG OETF: encodes linear scene light to an HLG signal.
///
/// # Formula
///
/// ```text
/// if E <= 1/12:
///     E' = sqrt(3 * E)
/// else:
///     E' = A * ln(12*E - B) + C
/// ```
#[inline]
pub fn oetf(e: f64) -> f64 {
    if !(e > 0.0) {
        0.0
    } else if e <= 1.0 / 12.0 {
        (3.0 * e).sqrt()
    } else {
        A * (12.0 * e - B).ln() + C
    }
}

/// HLG inverse OETF: decodes an HLG signal to linear scene light.
///
/// # Formula
///
/// ```text
/// if E' <= 0.5:
///     E = E'^2 / 3
/// else:
///     E = (exp((E' - C) / A) + B) / 12
/// ```
#[inline]
pub fn eotf(ep: f64) -> f64 {
    if !(ep > 0.0) {
        0.0
    } else if ep <= 0.5 {
        ep * ep / 3.0
    } else {
        (((ep - C) / A).exp() + B) / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let e = i as f64 / 100.0;
            let decoded = eotf(oetf(e));
            assert!((e - decoded).abs() < 1e-6, "e={}, decoded={}", e, decoded);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-4);
        assert_eq!(eotf(0.0), 0.0);
        assert!((eotf(1.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_transition_point() {
        // Both segments meet at E = 1/12, E' = 0.5
        let encoded = oetf(1.0 / 12.0);
        assert!((encoded - 0.5).abs() < 1e-12);
        assert!((eotf(0.5) - 1.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_inputs() {
        assert_eq!(oetf(-0.25), 0.0);
        assert_eq!(eotf(-0.25), 0.0);
    }
}
