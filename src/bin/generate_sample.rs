//! Writes a synthetic PL batch and an AFM line scan into `sample_data/`.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

const OUTPUT_DIR: &str = "sample_data";

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (splitmix64)
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [-1, 1).
    fn jitter(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }
}

/// One PL export: header, then wavelength (decimal comma) and counts.
fn pl_file(acquired: &str, peak_nm: f64, amplitude: f64, rng: &mut SimpleRng) -> Result<String> {
    let mut out = String::new();
    out.push_str("SpectraSuite Data File\n");
    out.push_str("++++++++++++++++++++++++++++++++++++\n");
    writeln!(out, "Acquired: {acquired}")?;
    out.push_str("Integration Time (usec): 100000\n");
    out.push_str("Spectra Averaged: 1\n");
    out.push_str(">>>>>Begin Spectral Data<<<<<\n");
    for i in 0..600 {
        let wl = 350.0 + i as f64 * 0.5;
        let counts = gaussian(wl, peak_nm, 12.0, amplitude) + 40.0 + 5.0 * rng.jitter();
        writeln!(out, "{}\t{counts:.2}", format!("{wl:.2}").replace('.', ","))?;
    }
    out.push_str(">>>>>End Spectral Data<<<<<\n");
    Ok(out)
}

/// AFM export: Latin-1 header with a micro sign, comma decimals, and a
/// trailing blank line.
fn afm_file(rng: &mut SimpleRng) -> Vec<u8> {
    let mut out = b"Distance (".to_vec();
    out.push(0xB5);
    out.extend_from_slice(b"m)\tSurface voltage (mV)\n");
    for i in 0..400 {
        let d = i as f64 * 0.025;
        let v = 120.0 * (d * 0.8).sin() + 15.0 * rng.jitter();
        let row = format!("{d:.6E}\t{v:.6E}\n").replace('.', ",");
        out.extend_from_slice(row.as_bytes());
    }
    out.extend_from_slice(b"\n");
    out
}

fn write(dir: &Path, name: &str, contents: &[u8]) -> Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let mut rng = SimpleRng(42);
    let dir = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(dir).with_context(|| format!("creating {OUTPUT_DIR}"))?;

    // Peak red-shifts and bleaches over the run.
    let acquisitions = [
        ("12-00-00-000", 520.0, 1000.0),
        ("12-00-04-250", 522.0, 930.0),
        ("12-00-10-500", 525.0, 850.0),
        ("12-00-30-000", 529.0, 720.0),
        ("12-01-05-750", 534.0, 600.0),
    ];
    for (acquired, peak, amplitude) in acquisitions {
        let name = format!("GaN_PL_{acquired}.txt");
        write(dir, &name, pl_file(acquired, peak, amplitude, &mut rng)?.as_bytes())?;
    }

    write(dir, "afm_line_scan.txt", &afm_file(&mut rng))?;

    println!(
        "Wrote {} PL spectra and one AFM scan to {OUTPUT_DIR}/",
        acquisitions.len()
    );
    Ok(())
}
