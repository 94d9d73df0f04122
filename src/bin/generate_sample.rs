use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
#[command(about = "Write synthetic experimental/control weight files", long_about = None)]
struct Args {
    /// Directory the two data files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Lines per group
    #[arg(short, long, default_value_t = 40)]
    rows: usize,

    /// PRNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

/// SplitMix64: small, seedable, good enough for synthetic data.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Normal sample via Box-Muller.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let radius = (-2.0 * self.uniform().max(f64::MIN_POSITIVE).ln()).sqrt();
        let angle = std::f64::consts::TAU * self.uniform();
        mean + std_dev * radius * angle.cos()
    }
}

struct Cohort {
    file_name: &'static str,
    /// Mean T1 → T2 change as a fraction of the T1 weight.
    mean_change: f64,
}

const COHORTS: [Cohort; 2] = [
    Cohort {
        file_name: "experimental.txt",
        mean_change: -0.06,
    },
    Cohort {
        file_name: "controle.txt",
        mean_change: 0.0,
    },
];

/// Share of lines that get a '-' in one of the two weights.
const MISSING_RATE: f64 = 0.08;

fn write_cohort(path: &Path, cohort: &Cohort, rows: usize, rng: &mut SplitMix64) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let mut missing = 0;

    for _ in 0..rows {
        let (gender, mean_weight) = if rng.uniform() < 0.5 {
            ("H", 80.0)
        } else {
            ("F", 65.0)
        };
        let t1 = rng.normal(mean_weight, 9.0).max(35.0);
        let t2 = t1 * (1.0 + rng.normal(cohort.mean_change, 0.03));

        let (t1, t2) = if rng.uniform() < MISSING_RATE {
            missing += 1;
            if rng.uniform() < 0.5 {
                ("-".to_string(), format!("{t2:.1}"))
            } else {
                (format!("{t1:.1}"), "-".to_string())
            }
        } else {
            (format!("{t1:.1}"), format!("{t2:.1}"))
        };
        writeln!(out, "{gender}:{t1}:{t2}")?;
    }

    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(missing)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SplitMix64(args.seed);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for cohort in &COHORTS {
        let path = args.out_dir.join(cohort.file_name);
        let missing = write_cohort(&path, cohort, args.rows, &mut rng)?;
        println!(
            "Wrote {} lines ({missing} with a missing weight) to {}",
            args.rows,
            path.display()
        );
    }
    Ok(())
}
