use super::load_config;
use crate::errors::AppResult;
use crate::source::files::save_cube_response;
use crate::source::{daily_activity_query, volume_snapshot_query, CubeClient};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

pub const VOLUME_SNAPSHOT_FILE: &str = "volume_snapshot.json";
pub const DAILY_ACTIVITY_FILE: &str = "daily_activity.json";

/// Download raw Cube responses
#[derive(Args)]
pub struct FetchCommand {
    /// Directory for the saved responses
    #[arg(long, default_value = "./output_data/cube")]
    pub output_dir: PathBuf,

    /// Cube API key (overrides config.toml and CUBE_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
}

impl FetchCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = load_config(&self.api_key)?;
        let client = CubeClient::new(config.api.clone())?;

        let volume_query = volume_snapshot_query(client.config());
        let daily_query = daily_activity_query(client.config());
        let (volume, daily) =
            futures::try_join!(client.load(&volume_query), client.load(&daily_query))?;

        let volume_path = self.output_dir.join(VOLUME_SNAPSHOT_FILE);
        let daily_path = self.output_dir.join(DAILY_ACTIVITY_FILE);
        save_cube_response(&volume_path, &volume)?;
        save_cube_response(&daily_path, &daily)?;

        info!(
            "Saved {} volume rows and {} daily rows to {}",
            volume.data.len(),
            daily.data.len(),
            self.output_dir.display()
        );
        println!("Volume snapshot written to: {}", volume_path.display());
        println!("Daily activity written to: {}", daily_path.display());
        Ok(())
    }
}
