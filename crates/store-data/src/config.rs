//! Shared configuration types for dataset generation.

use serde::{Deserialize, Serialize};

/// A contiguous block of integer ids.
///
/// Entity ids are handed out sequentially from a per-kind base (products from
/// 1000, workers from 800, and so on), which keeps joins between tables easy
/// to eyeball and makes accidental cross-table id collisions obvious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdBlock {
    /// First id in the block.
    pub base: i64,
    /// Number of ids in the block.
    pub count: usize,
}

impl IdBlock {
    /// Creates a block of `count` ids starting at `base`.
    pub const fn new(base: i64, count: usize) -> Self {
        Self { base, count }
    }

    /// Every id in the block, in ascending order.
    pub fn ids(&self) -> Vec<i64> {
        (0..self.count as i64).map(|offset| self.base + offset).collect()
    }

    /// Returns true if `id` falls inside the block.
    pub fn contains(&self, id: i64) -> bool {
        id >= self.base && id < self.base + self.count as i64
    }
}

/// Department-keyed price ranges with a wide fallback for unknown departments.
///
/// Ranges are inclusive and expressed in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    ranges: Vec<(String, (u32, u32))>,
    default_range: (u32, u32),
}

// Lines up with catalog::DEPARTMENTS order.
const DEFAULT_PRICE_RANGES: [(u32, u32); 9] = [
    (1200, 7000),  // Kayaks
    (3000, 15000), // E-Bikes
    (5, 80),       // Trail Snacks
    (300, 3500),   // Binoculars
    (80, 900),     // Headlamps
    (50, 500),     // Water Bottles
    (200, 1500),   // Sleeping Bags
    (100, 1200),   // Backpacks
    (120, 2000),   // GPS Watches
];

impl PriceTable {
    /// Creates a table from explicit per-department ranges and a fallback.
    pub fn new(ranges: Vec<(String, (u32, u32))>, default_range: (u32, u32)) -> Self {
        Self { ranges, default_range }
    }

    /// Inclusive price range for a department.
    ///
    /// Unrecognized department names get the fallback range rather than an
    /// error, so callers can price templates from departments the table was
    /// never told about.
    pub fn range_for(&self, department: &str) -> (u32, u32) {
        self.ranges
            .iter()
            .find(|(name, _)| name == department)
            .map(|(_, range)| *range)
            .unwrap_or(self.default_range)
    }

    /// The fallback range.
    pub fn default_range(&self) -> (u32, u32) {
        self.default_range
    }

    /// All configured (department, range) entries.
    pub fn entries(&self) -> &[(String, (u32, u32))] {
        &self.ranges
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        let ranges = catalog::DEPARTMENTS
            .iter()
            .zip(DEFAULT_PRICE_RANGES)
            .map(|(department, range)| (department.to_string(), range))
            .collect();
        Self { ranges, default_range: (100, 10000) }
    }
}
