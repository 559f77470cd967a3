use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hue_band_palette::{Band, PaletteEntry, analyze_bytes};
use serde_json::{Value, json};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print the dominant hue bands of an image as HSV, RGB and hex colours.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of colours to include in the palette (1-8)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=Band::COUNT as i64))]
    colors: u8,

    /// Picture to extract the palette from
    image: PathBuf,

    /// Also print the raw pixel count of every band
    #[arg(long)]
    counts: bool,

    /// Also print the mean colour of this band, even if it is not selected
    #[arg(short, long)]
    band: Option<Band>,

    /// Downscale so the longest side is at most this many pixels before sampling
    #[arg(short, long)]
    downscale: Option<u32>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // exit status stays 0 for usage errors
            e.print()?;
            return Ok(());
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hue_band_palette=warn,hue_palette=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let bytes = fs::read(&args.image)
        .with_context(|| format!("failed to read {}", args.image.display()))?;
    let builder = analyze_bytes(&bytes, args.downscale)
        .with_context(|| format!("failed to analyze {}", args.image.display()))?;
    let palette = builder
        .build(usize::from(args.colors))
        .context("palette selection failed")?;
    tracing::info!(
        image = %args.image.display(),
        pixels = builder.sample_count(),
        colors = palette.len(),
        "palette extracted"
    );

    let band_entry = args.band.map(|band| builder.entry(band));

    if args.json {
        let mut out = json!({
            "palette": palette.iter().map(entry_json).collect::<Vec<_>>(),
        });
        if args.counts {
            let counts: serde_json::Map<String, Value> = builder
                .counts()
                .iter()
                .map(|(band, n)| (band.name().to_string(), json!(n)))
                .collect();
            out["counts"] = Value::Object(counts);
        }
        if let Some(entry) = &band_entry {
            out["band"] = entry_json(entry);
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if args.counts {
        let line: Vec<String> = builder
            .counts()
            .iter()
            .map(|(band, n)| format!("{band}={n}"))
            .collect();
        println!("{}", line.join(" "));
    }

    println!(
        "{:<8} {:>10}  {:>3} {:>3} {:>3}  {:>3} {:>3} {:>3}  {}",
        "band", "pixels", "h", "s", "v", "r", "g", "b", "hex"
    );
    for entry in &palette {
        print_row(entry);
    }
    if let Some(entry) = &band_entry {
        println!();
        print_row(entry);
    }

    Ok(())
}

fn print_row(entry: &PaletteEntry) {
    println!(
        "{:<8} {:>10}  {:>3} {:>3} {:>3}  {:>3} {:>3} {:>3}  {}",
        entry.band.name(),
        entry.count,
        entry.hsv.hue,
        entry.hsv.saturation,
        entry.hsv.value,
        entry.rgb.red,
        entry.rgb.green,
        entry.rgb.blue,
        entry.hex
    );
}

fn entry_json(entry: &PaletteEntry) -> Value {
    json!({
        "band": entry.band.name(),
        "count": entry.count,
        "hsv": [entry.hsv.hue, entry.hsv.saturation, entry.hsv.value],
        "rgb": [entry.rgb.red, entry.rgb.green, entry.rgb.blue],
        "hex": entry.hex,
    })
}
