//! Integration tests for zcolor crates.
//!
//! End-to-end checks over every gamut in the standard registry: the
//! conversion properties that must hold regardless of device, plus the
//! JSON payload flow an editor goes through.

#[cfg(test)]
mod payloads;
