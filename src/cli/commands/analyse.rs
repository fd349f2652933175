use super::{fetch_inputs, load_config};
use crate::analysis::{OutputFormat, ReportFormatter, SegmentationEngine};
use crate::errors::{AppError, AppResult};
use crate::source::files::{load_daily_records, load_volume_records, write_json};
use crate::source::CubeClient;
use crate::types::{DailyActivityRecord, UserVolumeRecord};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Run the power user analysis
#[derive(Args)]
pub struct AnalyseCommand {
    /// Saved volume snapshot (Cube JSON response or CSV); fetches from the API when omitted
    #[arg(long)]
    pub volume_file: Option<PathBuf>,

    /// Saved daily activity feed (Cube JSON response or CSV)
    #[arg(long, requires = "volume_file")]
    pub daily_file: Option<PathBuf>,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Results JSON path (overrides config.toml)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Do not write the results JSON file
    #[arg(long)]
    pub no_save: bool,

    /// Cube API key (overrides config.toml and CUBE_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
}

impl AnalyseCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = load_config(&self.api_key)?;

        let (snapshot, daily) = match &self.volume_file {
            Some(path) => self.load_from_files(path)?,
            None => {
                let client = CubeClient::new(config.api.clone())?;
                fetch_inputs(&client).await?
            }
        };

        let engine = SegmentationEngine::new(config.analysis.clone());
        let report = match engine.run(&snapshot, &daily) {
            Ok(report) => report,
            Err(AppError::NoData(reason)) => {
                warn!("Nothing to analyse: {}", reason);
                println!("\nNo data available. Exiting.");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let format = OutputFormat::parse(&self.format);
        print!("{}", ReportFormatter::format_report(&report, &format)?);

        if !self.no_save {
            let path = self
                .output
                .clone()
                .unwrap_or_else(|| config.output.results_path.clone());
            write_json(&path, &report)?;
            info!("Results written to {}", path.display());
            println!("\nResults saved to {}", path.display());
        }

        Ok(())
    }

    fn load_from_files(
        &self,
        volume_path: &Path,
    ) -> AppResult<(Vec<UserVolumeRecord>, Vec<DailyActivityRecord>)> {
        let snapshot = load_volume_records(volume_path)?;
        let daily = match &self.daily_file {
            Some(path) => load_daily_records(path)?,
            None => Vec::new(),
        };
        Ok((snapshot, daily))
    }
}
