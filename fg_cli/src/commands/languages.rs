use crate::client::CliClient;
use crate::error::Result;
use fg_core::error::ErrorCore;
use fg_core::types::language::Language;

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    let languages: Vec<Language> =
        serde_json::from_str(&cli_client.list_languages().await?).map_err(ErrorCore::from)?;
    println!("code\tlanguage\n======");
    for language in languages {
        println!(
            "{}\t{} {} ({})",
            language.code, language.flag, language.name, language.native_name
        );
    }
    Ok(())
}
