use std::ops::Index;

use crate::band::Band;
use crate::color::Sample;

/// Running totals for every sample that landed in one band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandStats {
    pub band: Band,
    pub count: u64,
    pub hue_sum: u64,
    pub saturation_sum: u64,
    pub value_sum: u64,
}

impl BandStats {
    pub const fn empty(band: Band) -> Self {
        Self {
            band,
            count: 0,
            hue_sum: 0,
            saturation_sum: 0,
            value_sum: 0,
        }
    }

    #[inline]
    fn add(&mut self, sample: Sample) {
        self.count += 1;
        self.hue_sum += u64::from(sample.hue);
        self.saturation_sum += u64::from(sample.saturation);
        self.value_sum += u64::from(sample.value);
    }

    /// Mean sample of the band, using floor division.
    ///
    /// An empty band has mean `(0, 0, 0)`.
    pub fn mean(&self) -> Sample {
        if self.count == 0 {
            return Sample::default();
        }
        // Each sum is at most `count * 255`, so every quotient fits a byte.
        let avg = |sum: u64| (sum / self.count) as u8;
        Sample::new(avg(self.hue_sum), avg(self.saturation_sum), avg(self.value_sum))
    }
}

/// One [`BandStats`] per band, stored in [`Band::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandTable {
    stats: [BandStats; Band::COUNT],
}

impl Default for BandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BandTable {
    pub fn new() -> Self {
        Self {
            stats: Band::ALL.map(BandStats::empty),
        }
    }

    /// Add `sample` to every band whose range contains its hue.
    pub fn accumulate(&mut self, sample: Sample) {
        for band in Band::matching(sample.hue) {
            self.stats[band.index()].add(sample);
        }
    }

    /// Fold another table into this one. Sums are order-independent, so
    /// tables built over disjoint pixel chunks combine to the same result
    /// as one pass over all of them.
    pub fn merge(&mut self, other: &BandTable) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            mine.count += theirs.count;
            mine.hue_sum += theirs.hue_sum;
            mine.saturation_sum += theirs.saturation_sum;
            mine.value_sum += theirs.value_sum;
        }
    }

    /// Raw per-band pixel counts in fixed band order.
    pub fn counts(&self) -> [(Band, u64); Band::COUNT] {
        self.stats.map(|s| (s.band, s.count))
    }

    /// Copy of the table as a plain array, e.g. for reordering.
    pub fn to_array(&self) -> [BandStats; Band::COUNT] {
        self.stats
    }

    pub fn iter(&self) -> impl Iterator<Item = &BandStats> {
        self.stats.iter()
    }
}

impl Index<Band> for BandTable {
    type Output = BandStats;

    fn index(&self, band: Band) -> &BandStats {
        &self.stats[band.index()]
    }
}
