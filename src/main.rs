use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colortemp_rs::color_pipeline::{
    AnalysisConfig, FrameAnalysisPipeline, MatchingFunction, ReductionMode, ReferenceTable,
    TableLayout, TemperatureEstimator,
};
use colortemp_rs::logger;

use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "colortemp", version, about = "Estimate the average color temperature of frames")]
struct Args {
    /// Blackbody reference table (fixed-width text)
    #[arg(long)]
    table: PathBuf,

    /// Frame image files to analyze
    #[arg(required = true)]
    frames: Vec<PathBuf>,

    /// Channel reduction: mean or median. Unknown values fall back to mean.
    #[arg(long, default_value = "mean")]
    mode: String,

    /// Color matching function: 2deg or 10deg
    #[arg(long, default_value_t = MatchingFunction::TenDegree)]
    cmf: MatchingFunction,

    /// First table line holding data (0-based)
    #[arg(long, default_value_t = TableLayout::default().first_data_row)]
    first_row: usize,

    /// Last table line holding data (0-based, inclusive)
    #[arg(long, default_value_t = 800, conflicts_with = "all_rows")]
    last_row: usize,

    /// Parse data rows until the end of the table
    #[arg(long)]
    all_rows: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init();

    info!("Starting colortemp...");

    let last_row = if args.all_rows { None } else { Some(args.last_row) };
    let layout = TableLayout::with_rows(args.first_row, last_row);
    let table = ReferenceTable::from_file(&args.table, &layout)
        .with_context(|| format!("loading reference table {}", args.table.display()))?;

    let config = AnalysisConfig::builder()
        .reduction(ReductionMode::from_name(&args.mode))
        .matching_function(args.cmf)
        .build();
    let pipeline = FrameAnalysisPipeline::new(TemperatureEstimator::new(table), config);

    info!("Reduction: {}", pipeline.config().reduction);
    info!("Matching function: {}", pipeline.config().matching_function);

    let mut failed = 0usize;
    for frame in &args.frames {
        match pipeline.analyze_file(frame) {
            Ok(report) => {
                info!("{}: {}", frame.display(), report);
                if report.estimation.confidence < 0.0 {
                    warn!("{}: no close blackbody match", frame.display());
                }
            }
            Err(e) if e.is_recoverable() => {
                failed += 1;
                error!("{}: skipped: {}", frame.display(), e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        analyzed = args.frames.len() - failed,
        skipped = failed,
        "Done"
    );

    Ok(())
}
