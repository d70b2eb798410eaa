use crate::client::CliClient;
use crate::error::{ErrorCli, Result};
use fg_core::error::ErrorCore;
use fg_core::server::payload::health_response::HealthResponse;
use fg_core::server::payload::test_gemini_response::TestGeminiResponse;

pub async fn health(cli_client: &CliClient) -> Result<()> {
    let health: HealthResponse =
        serde_json::from_str(&cli_client.health().await?).map_err(ErrorCore::from)?;
    println!("{} v{}: {}", health.service, health.version, health.status);
    for feature in health.features {
        println!("  - {feature}");
    }
    Ok(())
}

pub async fn test_gemini(cli_client: &CliClient) -> Result<()> {
    let (status, body) = cli_client.test_gemini().await?;
    let report: TestGeminiResponse = serde_json::from_str(&body).map_err(ErrorCore::from)?;
    if report.status != "success" {
        return Err(ErrorCli::Api {
            status,
            message: report.message,
        });
    }
    println!("✅ {}", report.message);
    if let Some(sample) = report.test_response {
        println!("{sample}");
    }
    Ok(())
}
