//! Generates a directory of synthetic detector day-files for exercising
//! `combine_files` by hand.
//!
//! Output lands in `sample_data/` as `{det}_{YYYY.MMDD}_00.thresh` files,
//! each with one `#` header line and rows of `julian_day rate` pairs.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use detkit::julian;
use log::info;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn write_day_file(out_dir: &Path, detector: &str, day: u32, rng: &mut SimpleRng) -> Result<()> {
    let name = format!("{detector}_2021.01{day:02}_00.thresh");
    let path = out_dir.join(&name);
    let mut file = File::create(&path).with_context(|| format!("creating {name}"))?;

    writeln!(file, "#detector {detector} channel 0 threshold times")?;

    // 100 rows spread through the day, 864 s apart.
    for i in 0u32..100 {
        let second = i * 864;
        let jd = julian::to_julian_day(
            2021,
            1,
            day,
            second / 3600,
            (second % 3600) / 60,
            second % 60,
            0,
        )?;
        let rate = 12.0 + rng.gauss(0.0, 1.5);
        writeln!(file, "{jd:.6} {rate:.3}")?;
    }

    info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = Path::new("sample_data");
    fs::create_dir_all(out_dir).context("creating sample_data directory")?;

    let mut rng = SimpleRng::new(42);
    let detectors = ["6148", "6119"];

    for detector in detectors {
        for day in 1..=5 {
            write_day_file(out_dir, detector, day, &mut rng)?;
        }
    }

    println!(
        "Wrote {} day-files to {}",
        detectors.len() * 5,
        out_dir.display()
    );
    Ok(())
}
