use crate::client::CliClient;
use crate::error::Result;
use inquire::Confirm;

pub async fn handle(cli_client: &CliClient, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::new("Delete every conversation and your profile? This cannot be undone.")
            .with_default(false)
            .prompt()?;
    if !confirmed {
        println!("Nothing deleted.");
        return Ok(());
    }
    cli_client.clear_data().await?;
    println!("All data cleared.");
    Ok(())
}
