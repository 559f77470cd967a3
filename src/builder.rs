use palette::Srgb;

use crate::band::Band;
use crate::color::{Sample, hex_string, hsv_to_rgb};
use crate::error::{PaletteError, Result};
use crate::select::select_top_k_by_key;
use crate::stats::{BandStats, BandTable};

/// One colour of an extracted palette: the mean of a single hue band.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    pub band: Band,
    /// Number of samples that fell in the band.
    pub count: u64,
    pub hsv: Sample,
    pub rgb: Srgb<u8>,
    /// `RRGGBB`, uppercase.
    pub hex: String,
}

impl PaletteEntry {
    fn from_stats(stats: &BandStats) -> Self {
        let hsv = stats.mean();
        let rgb = hsv_to_rgb(hsv);
        Self {
            band: stats.band,
            count: stats.count,
            hsv,
            rgb,
            hex: hex_string(rgb),
        }
    }
}

/// Accumulates samples into hue bands and renders the dominant bands as a
/// palette.
#[derive(Clone, Debug, Default)]
pub struct PaletteBuilder {
    table: BandTable,
    samples: u64,
}

impl PaletteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.table.accumulate(sample);
        self.samples += 1;
    }

    /// Combine with a builder that saw a different set of pixels.
    pub fn merge(&mut self, other: &PaletteBuilder) {
        self.table.merge(&other.table);
        self.samples += other.samples;
    }

    /// Number of samples pushed so far.
    pub fn sample_count(&self) -> u64 {
        self.samples
    }

    /// Raw per-band counts, red through pink.
    pub fn counts(&self) -> [(Band, u64); Band::COUNT] {
        self.table.counts()
    }

    pub fn stats(&self, band: Band) -> &BandStats {
        &self.table[band]
    }

    /// Render a single band, whether or not it would make the palette.
    pub fn entry(&self, band: Band) -> PaletteEntry {
        PaletteEntry::from_stats(&self.table[band])
    }

    /// The `k` most populated bands, rendered.
    ///
    /// Entries come out in selection order, which is not sorted by count.
    /// Empty bands render as black. `k` must be in `1..=8`.
    pub fn build(&self, k: usize) -> Result<Vec<PaletteEntry>> {
        if !(1..=Band::COUNT).contains(&k) {
            return Err(PaletteError::InvalidPaletteSize {
                requested: k,
                max: Band::COUNT,
            });
        }

        Ok(self.render_top(k))
    }

    fn render_top(&self, k: usize) -> Vec<PaletteEntry> {
        let mut ranked = self.table.to_array();
        select_top_k_by_key(&mut ranked, k, |s| s.count);
        ranked[..k].iter().map(PaletteEntry::from_stats).collect()
    }
}

impl Extend<Sample> for PaletteBuilder {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, samples: I) {
        for sample in samples {
            self.push(sample);
        }
    }
}

impl FromIterator<Sample> for PaletteBuilder {
    fn from_iter<I: IntoIterator<Item = Sample>>(samples: I) -> Self {
        let mut builder = PaletteBuilder::new();
        builder.extend(samples);
        builder
    }
}

/// Accumulate `samples` and return the `k` dominant bands.
///
/// `k` is clamped into `1..=8`.
pub fn compute_palette<I>(samples: I, k: usize) -> Vec<PaletteEntry>
where
    I: IntoIterator<Item = Sample>,
{
    let builder: PaletteBuilder = samples.into_iter().collect();
    tracing::debug!(samples = builder.sample_count(), counts = ?builder.counts(), "accumulated");
    builder.render_top(k.clamp(1, Band::COUNT))
}
