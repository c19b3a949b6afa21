mod boxmuller;
mod error;
mod stats;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use clap::{Parser, Subcommand};
use rand::{SeedableRng, distr::Distribution, rngs::StdRng};
use rand_distr::StandardNormal;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zigmt_rs::{DEFAULT_SEED, ZigNormal, ZigguratMt};

use crate::{
    boxmuller::BoxMuller,
    error::{BenchError, Result},
    stats::{Histogram, Summary},
};

#[derive(Parser, Debug)]
#[command(version, about = "Benchmark and inspect the Ziggurat normal generator", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time several normal generators against each other
    Bench {
        /// Draws per repetition
        #[arg(short, long, default_value_t = 1_000_000)]
        draws: usize,

        /// Repetitions per generator
        #[arg(short, long, default_value_t = 10)]
        reps: usize,

        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u32,
    },
    /// Histogram of Ziggurat draws with expected bin counts
    Histogram {
        #[arg(short, long, default_value_t = 1_000_000)]
        draws: usize,

        #[arg(short, long, default_value_t = 100)]
        bins: usize,

        /// Standard deviation
        #[arg(long, default_value_t = 1.0)]
        sigma: f64,

        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u32,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

struct Timing {
    name: &'static str,
    ns_per_draw: f64,
    summary: Summary,
}

fn time_generator<F: FnMut() -> f64>(
    name: &'static str,
    draws: usize,
    reps: usize,
    mut next: F,
) -> Timing {
    info!(generator = name, draws, reps, "timing");

    let mut summary = Summary::default();
    let start = Instant::now();
    for _ in 0..reps {
        for _ in 0..draws {
            summary.push(next());
        }
    }
    let elapsed = start.elapsed();

    Timing {
        name,
        ns_per_draw: elapsed.as_nanos() as f64 / (draws * reps) as f64,
        summary,
    }
}

fn bench(draws: usize, reps: usize, seed: u32) -> Result<()> {
    if draws == 0 || reps == 0 {
        return Err(BenchError::InvalidArgument(
            "draws and reps must be positive".into(),
        ));
    }

    let mut zig = ZigguratMt::new(seed);
    let mut zig_std = StdRng::seed_from_u64(seed as u64);
    let mut rd_std = StdRng::seed_from_u64(seed as u64);
    let mut bm = BoxMuller::new(seed);
    let zn = ZigNormal::new();

    let timings = [
        time_generator("ziggurat-mt", draws, reps, || zig.norm()),
        time_generator("zignormal-stdrng", draws, reps, || zn.sample(&mut zig_std)),
        time_generator("rand_distr-stdrng", draws, reps, || {
            StandardNormal.sample(&mut rd_std)
        }),
        time_generator("boxmuller-shr3", draws, reps, || bm.gaussian(1.0)),
    ];

    let base = timings[0].ns_per_draw;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "{:<20} {:>10} {:>10} {:>10} {:>10}",
        "generator", "ns/draw", "relative", "mean", "variance"
    )?;
    for t in &timings {
        writeln!(
            out,
            "{:<20} {:>10.3} {:>10.2} {:>10.5} {:>10.5}",
            t.name,
            t.ns_per_draw,
            t.ns_per_draw / base,
            t.summary.mean(),
            t.summary.variance()
        )?;
    }
    Ok(())
}

fn histogram(
    draws: usize,
    bins: usize,
    sigma: f64,
    seed: u32,
    output: Option<PathBuf>,
) -> Result<()> {
    if draws == 0 {
        return Err(BenchError::InvalidArgument("draws must be positive".into()));
    }
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(BenchError::InvalidArgument(format!(
            "sigma must be positive, got {}",
            sigma
        )));
    }

    let mut rng = ZigguratMt::new(seed);
    let variate: Vec<f64> = (0..draws).map(|_| rng.gaussian(sigma)).collect();
    let hist = Histogram::from_samples(&variate, bins)?;

    match output {
        Some(path) => {
            info!(path = %path.display(), "writing histogram");
            let mut out = BufWriter::new(File::create(path)?);
            hist.write_to(&mut out, draws, sigma)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            hist.write_to(&mut stdout.lock(), draws, sigma)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(command = ?args.command, "starting");

    match args.command {
        Command::Bench { draws, reps, seed } => bench(draws, reps, seed),
        Command::Histogram {
            draws,
            bins,
            sigma,
            seed,
            output,
        } => histogram(draws, bins, sigma, seed, output),
    }
}
