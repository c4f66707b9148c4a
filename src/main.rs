use clap::Parser;
use color_eyre::Result;
use std::io::{Write, stdout};

use iotstat::cli::Args;
use iotstat::config;
use iotstat::input::CsvFileSource;
use iotstat::processor::process_recordings;

fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    // Load config early so statistic defaults are known before parsing specs
    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }

    let args = Args::parse();

    let mut statistics = args.statistics(&config_result.config.statistics.defaults())?;
    let filters = args.filters();
    let source = CsvFileSource::new(&args.input);

    log::debug!(
        "Processing {:?} with {} filter(s) and {} statistic(s)",
        source.path(),
        filters.len(),
        statistics.len()
    );

    let mut out = stdout().lock();
    let summary = process_recordings(&source, &filters, &mut statistics, &mut out)?;
    out.flush()?;

    log::debug!("Done: {:?}", summary);

    Ok(())
}

/// Stderr logger with timestamps; level from RUST_LOG, warnings by default
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}
