use anyhow::Result;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use tpch_prep::{convert_all, default_file_names, report, TrimMode};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let file_names = default_file_names();
    info!("converting {} table files", file_names.len());
    let converted = convert_all(Path::new("."), &file_names, TrimMode::FixedOffset)?;

    for file in &converted {
        let table_report = report(file)?;
        info!(
            file = %table_report.file,
            lines = table_report.lines,
            short_lines = table_report.short_lines,
            records = table_report.records,
            expected_fields = ?table_report.expected_fields,
            field_mismatches = table_report.field_mismatches,
            "checked"
        );
    }

    Ok(())
}
