use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use qkd_bb84::protocols::bb84;
use qkd_bb84::{Backend, Bb84Config, RawConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "BB84 quantum key distribution simulator")]
struct Args {
    /// TOML file with bits_len, sample_size, seed, eve_ratio and backend
    /// (see bb84.toml for the reference run).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of qubits Alice sends.
    #[arg(long, allow_negative_numbers = true)]
    bits_len: Option<i64>,

    /// Number of sifted bits revealed for comparison.
    #[arg(long, allow_negative_numbers = true)]
    sample_size: Option<i64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Fraction of qubits intercepted by an eavesdropper (0.0 - 1.0).
    #[arg(long)]
    eve_ratio: Option<f64>,

    #[arg(long, value_enum)]
    backend: Option<BackendArg>,

    /// Run this many seeds and print only the detection statistics.
    #[arg(long)]
    trials: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BackendArg {
    Ideal,
    Density,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Ideal => Backend::Ideal,
            BackendArg::Density => Backend::DensityMatrix,
        }
    }
}

fn load_config(args: &Args) -> Result<Bb84Config> {
    let mut raw = match &args.config {
        Some(path) => RawConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RawConfig::default(),
    };

    if let Some(v) = args.bits_len {
        raw.bits_len = v;
    }
    if let Some(v) = args.sample_size {
        raw.sample_size = v;
    }
    if let Some(v) = args.seed {
        raw.seed = v;
    }
    if let Some(v) = args.eve_ratio {
        raw.eve_ratio = v;
    }
    if let Some(v) = args.backend {
        raw.backend = v.into();
    }

    Bb84Config::try_from(raw).context("invalid configuration")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    match args.trials {
        Some(trials) => {
            let summary = bb84::run_trials(&config, trials).context("BB84 trials failed")?;
            println!("{summary}");
        }
        None => {
            let result = bb84::run(&config).context("BB84 run failed")?;
            println!("{result}");
        }
    }

    Ok(())
}
