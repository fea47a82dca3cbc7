use std::fs::File;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use linemeter::count::count_lines;
use linemeter::usage::{SystemProbe, UsageReporter};

/// Input location, fixed relative to the working directory.
const INPUT_PATH: &str = "files/custom_2017_2020.csv";

#[derive(Parser)]
#[command(
    name = "linemeter",
    about = "Count lines in a file while sampling process memory and elapsed time",
    version
)]
struct Cli {
    /// Emit the final usage snapshot as JSON instead of its debug form.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    #[cfg(feature = "perf-tracing")]
    linemeter::perf::init_tracing()?;

    let cli = Cli::parse();
    let start = Instant::now();
    let workdir = std::env::current_dir().wrap_err("failed to resolve working directory")?;
    let path = workdir.join(INPUT_PATH);

    let mut reporter = UsageReporter::new(SystemProbe::new());
    reporter.report(start);

    let file = File::open(&path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    reporter.report(start);

    // `count_lines` takes the handle by value, so it is closed on every exit
    // path, including the error one.
    let count = count_lines(file).wrap_err("line count aborted")?;
    println!("{count}");

    let snapshot = reporter.report(start);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{snapshot:#?}");
    }

    Ok(())
}
