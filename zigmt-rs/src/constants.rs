//! Constants for the Marsaglia-Tsang normal Ziggurat

/// Number of strips in the partition tables
pub const ZIGGURAT_TABLE_SIZE: usize = 128;

/// Mask selecting a strip index from the low bits of a raw draw
pub const ZIGGURAT_INDEX_MASK: i32 = ZIGGURAT_TABLE_SIZE as i32 - 1;

// Normal distribution constants
pub const ZIGGURAT_NOR_R: f64 = 3.442619855899;
pub const ZIGGURAT_NOR_INV_R: f64 = 1.0 / ZIGGURAT_NOR_R;
pub const NOR_SECTION_AREA: f64 = 9.91256303526217e-3;

/// 2^31, the magnitude range of a signed 32-bit draw
pub const M1: f64 = 2147483648.0;

// SHR3 constants
pub const SHR3_BASE: u32 = 123456789;
pub const UNIFORM_SCALE: f64 = 2.328306e-10;

pub const DEFAULT_SEED: u32 = 42;
