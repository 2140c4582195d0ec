use ar_app::{
    AppError, AppResult, ConfigOverrides, RunOptions, RunStage, RunWorker, config_service,
    run_service,
};
use ar_results::{export_csv, write_config_report};
use ar_sim::{Configuration, Series, Solution};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "ar-cli")]
#[command(about = "Autorotation CLI - propeller spin-up simulation in crossflow", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and export its results
    Run {
        /// Configuration file (YAML or JSON); reference scenario when omitted
        config_path: Option<PathBuf>,
        #[command(flatten)]
        overrides: OverrideArgs,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
        /// Directory holding the run cache
        #[arg(long, default_value = ".")]
        store_dir: PathBuf,
        /// Directory for `<name>.csv` and `<name>_config.txt`
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Do not write the CSV and configuration report
        #[arg(long)]
        no_export: bool,
        /// Keep every time sample instead of min/max decimating long runs
        #[arg(long)]
        full_resolution: bool,
    },
    /// Write the reference scenario to a configuration file
    DefaultConfig {
        /// Output path; the extension selects YAML or JSON
        output: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        /// Configuration file (YAML or JSON)
        config_path: PathBuf,
    },
    /// List cached runs
    Runs {
        /// Directory holding the run cache
        #[arg(long, default_value = ".")]
        store_dir: PathBuf,
    },
    /// Delete a cached run
    DeleteRun {
        run_id: String,
        /// Directory holding the run cache
        #[arg(long, default_value = ".")]
        store_dir: PathBuf,
    },
    /// Export a cached run
    Export {
        run_id: String,
        /// Directory holding the run cache
        #[arg(long, default_value = ".")]
        store_dir: PathBuf,
        /// Export only this series against time (e.g. angular_velocity, torque)
        #[arg(long)]
        series: Option<String>,
        /// Output CSV file for a single series (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Directory for the full export
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct OverrideArgs {
    /// Simulated time in seconds
    #[arg(long)]
    sim_time: Option<f64>,
    /// Time step in seconds
    #[arg(long)]
    dt: Option<f64>,
    /// Radial strip width in meters
    #[arg(long)]
    dr: Option<f64>,
    /// Axial freestream speed in m/s
    #[arg(long)]
    freestream: Option<f64>,
    /// Number of blades
    #[arg(long)]
    blades: Option<u32>,
    /// Initial shaft speed in rpm
    #[arg(long)]
    initial_rpm: Option<f64>,
    /// Motor velocity constant in rpm per volt
    #[arg(long)]
    kv_rpm: Option<f64>,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        ConfigOverrides {
            sim_time_s: args.sim_time,
            time_step_s: args.dt,
            radial_step_m: args.dr,
            freestream_x: args.freestream,
            num_blades: args.blades,
            initial_rpm: args.initial_rpm,
            kv_rpm_per_volt: args.kv_rpm,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config_path,
            overrides,
            no_cache,
            store_dir,
            out_dir,
            no_export,
            full_resolution,
        } => cmd_run(
            config_path.as_deref(),
            overrides.into(),
            !no_cache,
            &store_dir,
            (!no_export).then_some(out_dir.as_path()),
            full_resolution,
        ),
        Commands::DefaultConfig { output } => cmd_default_config(&output),
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Runs { store_dir } => cmd_runs(&store_dir),
        Commands::DeleteRun { run_id, store_dir } => cmd_delete_run(&store_dir, &run_id),
        Commands::Export {
            run_id,
            store_dir,
            series,
            output,
            out_dir,
        } => match series {
            Some(name) => cmd_export_series(&store_dir, &run_id, &name, output.as_deref()),
            None => cmd_export(&store_dir, &run_id, &out_dir),
        },
    }
}

fn cmd_run(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
    use_cache: bool,
    store_dir: &Path,
    out_dir: Option<&Path>,
    full_resolution: bool,
) -> AppResult<()> {
    let mut config = match config_path {
        Some(path) => {
            println!("Loading configuration: {}", path.display());
            config_service::load_config(path)?
        }
        None => Configuration::default(),
    };
    overrides.apply(&mut config)?;

    println!(
        "Running autorotation: {} blades, {:.3} s at dt = {} s",
        config.propeller.num_blades,
        config.simulation.sim_time_s,
        config.simulation.time_step_s
    );

    let mut options = RunOptions {
        use_cache,
        ..RunOptions::default()
    };
    if full_resolution {
        options.engine.decimate_to = None;
    }

    let mut worker = RunWorker::start(config, options, Some(store_dir.to_path_buf()));
    let mut stage = RunStage::CheckingCache;
    while !worker.is_finished() {
        if let Some(latest) = worker.poll_stage() {
            stage = latest;
        }
        render_cli_progress(stage, worker.progress());
        thread::sleep(Duration::from_millis(100));
    }
    let response = worker.wait()?;
    clear_progress_line();

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Simulation completed: {}", response.run_id);
    }
    println!(
        "  Timing: solve={:.3}s save={:.3}s cache={:.3}s total={:.3}s",
        response.timing.solve_time_s,
        response.timing.save_time_s,
        response.timing.load_cache_time_s,
        response.timing.total_time_s
    );
    print_solution_summary(&response.solution);

    if let Some(dir) = out_dir {
        export_solution(&response.solution, dir)?;
    }

    Ok(())
}

fn cmd_default_config(output: &Path) -> AppResult<()> {
    config_service::save_config(output, &Configuration::default())?;
    println!("✓ Wrote reference configuration to {}", output.display());
    Ok(())
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let config = config_service::load_config(config_path)?;
    println!("✓ Configuration is valid");
    println!(
        "  {} time steps, {} radial stations",
        config.time_steps(),
        config.radial_stations()
    );
    Ok(())
}

fn cmd_runs(store_dir: &Path) -> AppResult<()> {
    let runs = run_service::list_runs(store_dir)?;

    if runs.is_empty() {
        println!("No cached runs found in {}", store_dir.display());
    } else {
        println!("Cached runs:");
        for manifest in runs {
            println!(
                "  {} {} ({} samples, {:.3} s) {}",
                manifest.run_id,
                manifest.solution_name,
                manifest.sample_count,
                manifest.sim_time_s,
                manifest.timestamp
            );
        }
    }
    Ok(())
}

fn cmd_delete_run(store_dir: &Path, run_id: &str) -> AppResult<()> {
    run_service::delete_run(store_dir, run_id)?;
    println!("✓ Deleted run {}", run_id);
    Ok(())
}

fn cmd_export(store_dir: &Path, run_id: &str, out_dir: &Path) -> AppResult<()> {
    let (_manifest, solution) = run_service::load_run(store_dir, run_id)?;
    export_solution(&solution, out_dir)
}

fn cmd_export_series(
    store_dir: &Path,
    run_id: &str,
    name: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let series = Series::from_name(name)
        .ok_or_else(|| AppError::InvalidInput(format!("unknown series '{}'", name)))?;
    let (_manifest, solution) = run_service::load_run(store_dir, run_id)?;

    // Build CSV
    let mut csv = format!(
        "{},{}\n",
        Series::Time.axis_label(),
        series.axis_label()
    );
    for (t, val) in solution.time.iter().zip(solution.series(series)) {
        csv.push_str(&format!("{:.6},{:.6}\n", t, val));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            solution.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn export_solution(solution: &Solution, dir: &Path) -> AppResult<()> {
    std::fs::create_dir_all(dir)?;
    let csv_path = export_csv(solution, dir)?;
    let report_path = write_config_report(solution, dir)?;
    println!("✓ Wrote {}", csv_path.display());
    println!("✓ Wrote {}", report_path.display());
    Ok(())
}

fn print_solution_summary(solution: &Solution) {
    println!("  Name: {}", solution.name);
    println!("  Time points: {}", solution.len());
    if let (Some(omega), Some(lift)) = (solution.angular_velocity.last(), solution.lift.last()) {
        println!("  Final angular velocity: {:.4} rad/s", omega);
        println!("  Final lift: {:.4} N", lift);
    }
}

fn render_cli_progress(stage: RunStage, fraction: f64) {
    let width = 28usize;
    let filled = ((fraction * width as f64).round() as usize).min(width);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    print!(
        "\r[{}] {:>6.2}%  phase={}",
        bar,
        fraction * 100.0,
        stage.label()
    );
    let _ = io::stdout().flush();
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(80));
    let _ = io::stdout().flush();
}
