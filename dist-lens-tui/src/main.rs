mod tui;

use clap::{CommandFactory, Parser, Subcommand};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dist_lens_common::Config;
use dist_lens_core::{
    export_csv, export_json, load_samples, print_summary, summarize, write_random_values,
    Histogram, MersenneTwister, Precision,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::{Path, PathBuf};
use std::{io, time::Duration};
use tui::app::App;
use tui::events::handle_key;
use tui::session::Session;
use tui::ui::render;

// Default sample file, shared by the generate and inspect commands.
const DEFAULT_INPUT: &str = "Output.txt";

fn parse_bins(s: &str) -> Result<usize, String> {
    // validate bin count at CLI parse time
    let v: usize = s.parse().map_err(|_| format!("not an integer: {s}"))?;
    if v > 0 {
        Ok(v)
    } else {
        Err("bins must be at least 1".into())
    }
}

fn parse_precision(s: &str) -> Result<Precision, String> {
    Precision::from_name(s).ok_or_else(|| format!("precision must be double, float or int, got {s}"))
}

#[derive(Parser)]
#[command(name = "dist-lens", version, about = "Sample distribution inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a sample file and open the histogram viewer
    Inspect {
        #[arg(default_value = DEFAULT_INPUT)]
        path: String,
        #[arg(long, value_parser = parse_bins)]
        bins: Option<usize>,
    },
    /// Print summary statistics without opening the viewer
    Summary {
        #[arg(default_value = DEFAULT_INPUT)]
        path: String,
    },
    /// Append Mersenne Twister output to a sample file
    Generate {
        #[arg(long)]
        count: Option<u64>,
        #[arg(long)]
        range: Option<f64>,
        #[arg(long, value_parser = parse_precision)]
        precision: Option<Precision>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = DEFAULT_INPUT)]
        out: String,
    },
    /// Export the summary and histogram as data (json or csv)
    Export {
        #[arg(default_value = DEFAULT_INPUT)]
        path: String,
        #[arg(long)]
        format: Option<String>,
        #[arg(long, value_parser = parse_bins)]
        bins: Option<usize>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    match cli.command {
        Commands::Inspect { path, bins } => run_tui(path, bins, config)?,
        Commands::Summary { path } => run_summary(path)?,
        Commands::Generate {
            count,
            range,
            precision,
            seed,
            out,
        } => run_generate(count, range, precision, seed, out, &config)?,
        Commands::Export {
            path,
            format,
            bins,
            output,
        } => run_export(path, format, bins, output, &config)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }
    Ok(())
}

fn load_and_profile(path: &str, bins: usize) -> anyhow::Result<(dist_lens_core::SampleSummary, Histogram)> {
    let samples = load_samples(Path::new(path)).map_err(|e| anyhow::anyhow!("{path}: {e}"))?;
    let summary = summarize(&samples).map_err(|e| anyhow::anyhow!("{path}: {e}"))?;
    let histogram = Histogram::build(&samples, bins).map_err(|e| anyhow::anyhow!("{path}: {e}"))?;
    Ok((summary, histogram))
}

fn run_tui(input_path: String, bins: Option<usize>, config: Config) -> anyhow::Result<()> {
    let bins = bins.unwrap_or(config.histogram.bins);
    let (summary, histogram) = load_and_profile(&input_path, bins)?;
    println!(
        "Minimum Value: {} Maximum Value: {}",
        summary.min, summary.max
    );

    let mut app = App::new(input_path, config);
    app.summary = Some(summary);
    app.histogram = Some(histogram);
    if let Some(s) = Session::load() {
        app.restore_from_session(&s);
    }
    app.status_msg = "Ready — q:quit ?:help".into();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick = Duration::from_millis(66); // 15Hz
    loop {
        terminal.draw(|f| render(f, &app))?;
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }
        if app.should_quit {
            break;
        }
    }
    let _ = app.to_session().save();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    println!("Plots shown");
    Ok(())
}

fn run_summary(input_path: String) -> anyhow::Result<()> {
    let samples =
        load_samples(Path::new(&input_path)).map_err(|e| anyhow::anyhow!("{input_path}: {e}"))?;
    let summary = summarize(&samples).map_err(|e| anyhow::anyhow!("{input_path}: {e}"))?;
    print_summary(&summary);
    Ok(())
}

fn run_generate(
    count: Option<u64>,
    range: Option<f64>,
    precision: Option<Precision>,
    seed: Option<u64>,
    out: String,
    config: &Config,
) -> anyhow::Result<()> {
    let count = count.unwrap_or(config.generator.count);
    let range = range.unwrap_or(config.generator.range);
    let precision = match precision {
        Some(p) => p,
        None => Precision::from_name(&config.generator.precision)
            .ok_or_else(|| anyhow::anyhow!("bad precision in config: {}", config.generator.precision))?,
    };
    let mut rng = match seed {
        Some(s) => MersenneTwister::with_seed(s),
        None => MersenneTwister::default(),
    };
    write_random_values(Path::new(&out), count, range, precision, &mut rng)
        .map_err(|e| anyhow::anyhow!("{out}: {e}"))?;
    println!("Appended {count} {} values to {out}", precision.as_str());
    Ok(())
}

fn run_export(
    input_path: String,
    format: Option<String>,
    bins: Option<usize>,
    output: Option<String>,
    config: &Config,
) -> anyhow::Result<()> {
    let bins = bins.unwrap_or(config.histogram.bins);
    let (summary, histogram) = load_and_profile(&input_path, bins)?;
    let format = format.unwrap_or_else(|| config.export.format.clone());
    let out_path: PathBuf = if let Some(ref o) = output {
        PathBuf::from(o)
    } else {
        Path::new(&config.export.output_dir).join(format!("profile.{format}"))
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match format.as_str() {
        "json" => {
            export_json(&out_path, &summary, &histogram).map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Exported to {}", out_path.display());
        }
        "csv" => {
            export_csv(&out_path, &histogram).map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Exported to {}", out_path.display());
        }
        _ => anyhow::bail!("Unknown format: {format} (use json or csv)"),
    }
    Ok(())
}
