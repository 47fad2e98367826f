use nbsim::{RunConfig, Scenario, TraceRenderer};
use nbsim::{bench_forces, bench_update};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(about = "Step a 2D n-body universe with gravity and merging collisions")]
struct Args {
    /// YAML run config, looked up under scenarios/
    #[arg(short, long, default_value = "planets.yaml")]
    file_name: String,

    /// Scenario text file to run instead of the config's
    #[arg(long, requires_all = ["dt", "max_time"])]
    scenario: Option<PathBuf>,

    /// Step size
    #[arg(long)]
    dt: Option<f64>,

    /// End time
    #[arg(long)]
    max_time: Option<f64>,

    /// Run the timing benchmarks and exit
    #[arg(long)]
    bench: bool,
}

fn scenarios_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

// load here to keep main clean
fn load_run_config(file_name: &str) -> Result<RunConfig> {
    let config_path = scenarios_dir().join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open run config {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let cfg = RunConfig::from_reader(reader)
        .with_context(|| format!("invalid run config {}", config_path.display()))?;
    Ok(cfg)
}

fn resolve_run_config(args: &Args) -> Result<(RunConfig, PathBuf)> {
    // (config, directory its scenario path is relative to)
    let (mut cfg, base) = match &args.scenario {
        Some(path) => (RunConfig::new(path.clone(), 0.0, 0.0), Path::new(".").to_path_buf()),
        None => (load_run_config(&args.file_name)?, scenarios_dir()),
    };
    if let Some(dt) = args.dt {
        cfg.delta_time = dt;
    }
    if let Some(max_time) = args.max_time {
        cfg.max_time = max_time;
    }
    ensure!(cfg.delta_time > 0.0, "delta time must be positive, got {}", cfg.delta_time);
    Ok((cfg, base))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("nbsim=info".parse()?))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_update();
        return Ok(());
    }

    let (cfg, base) = resolve_run_config(&args)?;
    let mut scenario = Scenario::build_scenario(&cfg, &base)?;

    let mut renderer = TraceRenderer::default();
    let summary = scenario.run(&mut renderer);

    tracing::info!(
        ticks = summary.ticks,
        aborted = summary.aborted_ticks,
        merges = summary.merges,
        t = summary.final_time,
        stalled = summary.stalled,
        "simulation finished"
    );

    println!("{}", scenario.universe);

    Ok(())
}
