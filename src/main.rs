use std::path::PathBuf;

use cupro::outline::PatternOutline;
use cupro::site;
use cupro::sizes::MeasurementTable;

fn main() -> miette::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(cupro::defaults::OUTPUT_DIR));

    let table = MeasurementTable::builtin();
    let outline = PatternOutline::reference_cup();
    let summary = site::generate(&table, &outline, &out_dir)?;

    println!(
        "Generated {} pattern drawings and the catalog page in '{}'.",
        summary.artifacts,
        out_dir.display()
    );
    Ok(())
}
