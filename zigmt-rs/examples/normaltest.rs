use clap::Parser;
use std::f64::consts::PI;
use zigmt_rs::ZigguratMt;

#[derive(Parser, Debug)]
#[command(version, about = "Histogram of Ziggurat normal variates", long_about = None)]
struct Args {
    /// Number of variates
    #[arg(short, long, default_value_t = 10_000_000)]
    nvariates: usize,

    /// Number of histogram bins
    #[arg(short, long, default_value_t = 100)]
    bins: usize,

    /// Standard deviation
    #[arg(short, long, default_value_t = 1.0)]
    sigma: f64,

    #[arg(long, default_value_t = 42)]
    seed: u32,
}

fn main() {
    let args = Args::parse();
    let nb = args.bins.max(1);
    let mut rng = ZigguratMt::new(args.seed);

    let variate: Vec<f64> = (0..args.nvariates)
        .map(|_| rng.gaussian(args.sigma))
        .collect();

    let (minv, maxv) = variate
        .iter()
        .fold((0.0f64, 0.0f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let binwidth = (maxv - minv) / nb as f64;

    // Expected count per bin from the density at the bin centre
    let a = args.nvariates as f64 * binwidth / (args.sigma * (2.0 * PI).sqrt());
    let b = -0.5 / (args.sigma * args.sigma);

    let mut bin = vec![0usize; nb];
    for &v in &variate {
        let mut j = ((v - minv) / binwidth).floor() as usize;
        if j >= nb {
            j = nb - 1; // guard against max edge
        }
        bin[j] += 1;
    }

    (0..nb).for_each(|i| {
        let x = binwidth * (i as f64 + 0.5) + minv;
        let expected = a * (x * x * b).exp();
        println!("{:.6} {} {:.1}", x, bin[i], expected);
    });
}
