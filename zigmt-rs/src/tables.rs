//! Partition tables for the normal Ziggurat
//!
//! Strip 0 is the base strip, which also carries the tail beyond
//! [`ZIGGURAT_NOR_R`]. Strips 1..=127 are the layers stacked above it,
//! strip 127 being the one that borders the tail start. The tables depend
//! only on the distribution constants, never on a seed.

use std::sync::LazyLock;

use crate::constants::{M1, NOR_SECTION_AREA, ZIGGURAT_NOR_R, ZIGGURAT_TABLE_SIZE};

/// Tables shared by every sampler in the process
pub static NORMAL_TABLES: LazyLock<ZigTables> = LazyLock::new(ZigTables::build);

#[derive(Debug, Clone, PartialEq)]
pub struct ZigTables {
    k: [u32; ZIGGURAT_TABLE_SIZE],
    w: [f64; ZIGGURAT_TABLE_SIZE],
    f: [f64; ZIGGURAT_TABLE_SIZE],
}

impl ZigTables {
    /// Compute the tables.
    ///
    /// Each boundary is derived from the one above it, so the loop must run
    /// from strip 126 down to strip 1.
    pub fn build() -> Self {
        let mut k = [0u32; ZIGGURAT_TABLE_SIZE];
        let mut w = [0.0f64; ZIGGURAT_TABLE_SIZE];
        let mut f = [0.0f64; ZIGGURAT_TABLE_SIZE];

        let vn = NOR_SECTION_AREA;
        let mut dn = ZIGGURAT_NOR_R;
        let mut tn = dn;
        let q = vn / density(dn);

        // `as u32` truncates toward zero, which is floor for these operands
        k[0] = ((dn / q) * M1) as u32;
        k[1] = 0;

        w[0] = q / M1;
        w[127] = dn / M1;

        f[0] = 1.0;
        f[127] = density(dn);

        for i in (1..=126).rev() {
            dn = (-2.0 * (vn / dn + density(dn)).ln()).sqrt();
            k[i + 1] = ((dn / tn) * M1) as u32;
            tn = dn;
            f[i] = density(dn);
            w[i] = dn / M1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(k0 = k[0], r = ZIGGURAT_NOR_R, "built normal ziggurat tables");

        Self { k, w, f }
    }

    /// Fast-path acceptance thresholds
    #[inline]
    pub fn k(&self) -> &[u32; ZIGGURAT_TABLE_SIZE] {
        &self.k
    }

    /// Strip widths, scaled by 2^-31
    #[inline]
    pub fn w(&self) -> &[f64; ZIGGURAT_TABLE_SIZE] {
        &self.w
    }

    /// Unnormalised density at each strip boundary
    #[inline]
    pub fn f(&self) -> &[f64; ZIGGURAT_TABLE_SIZE] {
        &self.f
    }
}

/// Unnormalised standard normal density, `exp(-x^2 / 2)`
#[inline]
pub(crate) fn density(x: f64) -> f64 {
    (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        let t = ZigTables::build();
        assert_eq!(t.f()[0], 1.0);
        assert_eq!(t.f()[127], (-0.5 * ZIGGURAT_NOR_R * ZIGGURAT_NOR_R).exp());
        assert_eq!(t.k()[1], 0);
        assert_eq!(t.w()[127], ZIGGURAT_NOR_R / M1);
    }

    #[test]
    fn test_known_entries() {
        let t = ZigTables::build();
        assert_eq!(t.k()[0], 1991057938);
        assert_eq!(t.k()[2], 1611602771);
        assert_eq!(t.k()[3], 1826899878);
        assert_eq!(t.k()[127], 2010539237);
        assert!((t.w()[0] - 1.729040521542798e-9).abs() < 1e-21);
        assert!((t.f()[127] - 0.002669629083880923).abs() < 1e-15);
    }

    #[test]
    fn test_density_decreasing() {
        let t = ZigTables::build();
        for i in 0..ZIGGURAT_TABLE_SIZE - 1 {
            assert!(
                t.f()[i] > t.f()[i + 1],
                "f[{}] = {} not above f[{}] = {}",
                i,
                t.f()[i],
                i + 1,
                t.f()[i + 1]
            );
        }
    }

    #[test]
    fn test_strip_geometry() {
        let t = ZigTables::build();

        // Boundaries w[i] * 2^31 grow from the top layer out to the tail start
        for i in 1..ZIGGURAT_TABLE_SIZE - 1 {
            assert!(t.w()[i] < t.w()[i + 1]);
        }
        // The base strip, stretched to cover the tail's area, is the widest
        assert!(t.w()[0] > t.w()[127]);

        // Each boundary sits where the density equals the tabulated f
        for i in 1..ZIGGURAT_TABLE_SIZE {
            let x = t.w()[i] * M1;
            assert!((density(x) - t.f()[i]).abs() < 1e-15);
        }

        // k[i] / 2^31 is the ratio of the inner boundary to this strip's edge
        for i in 2..ZIGGURAT_TABLE_SIZE {
            let ratio = t.w()[i - 1] / t.w()[i];
            assert!((t.k()[i] as f64 / M1 - ratio).abs() < 1e-9);
        }
        // k[0] * w[0] reaches the tail start
        assert!((t.k()[0] as f64 * t.w()[0] - ZIGGURAT_NOR_R).abs() < 1e-8);
    }

    #[test]
    fn test_shared_tables_match_fresh_build() {
        assert_eq!(*NORMAL_TABLES, ZigTables::build());
    }
}
