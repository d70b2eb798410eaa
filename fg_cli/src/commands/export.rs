use crate::client::CliClient;
use crate::error::Result;
use fg_core::error::ErrorCore;
use fg_core::server::payload::export_data::ExportData;
use std::path::PathBuf;

pub async fn handle(cli_client: &CliClient, output: Option<PathBuf>) -> Result<()> {
    let response = cli_client.export().await?;
    let export: ExportData = serde_json::from_str(&response).map_err(ErrorCore::from)?;
    let path = output.unwrap_or_else(|| PathBuf::from(export.file_name()));
    let pretty = serde_json::to_string_pretty(&export).map_err(ErrorCore::from)?;
    std::fs::write(&path, pretty)?;
    println!(
        "Exported {} conversation(s) to {}",
        export.conversations.len(),
        path.display()
    );
    Ok(())
}
