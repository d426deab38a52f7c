use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use polarkit::{init_logging, MachineConfig, PointsFileWriter, PointsGenerator};

/// Generate plotter waypoints from a polargraph command file
#[derive(Parser, Debug)]
#[command(name = "polarkit", version = polarkit::VERSION, about)]
struct Cli {
    /// Command file to process (one `Cxx,...,END` command per line)
    input: PathBuf,

    /// Points file to write
    #[arg(short, long, default_value = "points.txt")]
    output: PathBuf,

    /// Machine configuration file (JSON); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    tracing::info!(
        version = polarkit::VERSION,
        built = polarkit::BUILD_DATE,
        "polarkit starting"
    );

    let machine = match &cli.config {
        Some(path) => MachineConfig::load_from_file(path)
            .with_context(|| format!("failed to load machine config {}", path.display()))?,
        None => MachineConfig::default(),
    };

    let writer = PointsFileWriter::create(&cli.output)
        .with_context(|| format!("failed to create points file {}", cli.output.display()))?;

    let mut generator = PointsGenerator::new(machine, writer);
    generator
        .run_file(&cli.input)
        .with_context(|| format!("failed to process {}", cli.input.display()))?;

    let (summary, writer) = generator.finish()?;
    tracing::info!(
        points = writer.points_written(),
        path = %writer.path().display(),
        rejected = summary.moves_rejected,
        "points file written"
    );

    Ok(())
}
