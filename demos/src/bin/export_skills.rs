use skills_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "all_skills.csv".to_string());

    let client = SkillsClient::new(Config::new()).await?;
    info!("✓ Client created and authenticated");

    let response = client.list_all_skills(None).await?.error_for_status()?;
    let body: serde_json::Value = response.parse_json()?;
    let records = body
        .get("skills")
        .or_else(|| body.get("data"))
        .and_then(serde_json::Value::as_array)
        .cloned()
        .unwrap_or_default();

    let rows = export_records_csv(&records, &path)?;
    info!("Wrote {} skills to {}", rows, path);

    Ok(())
}
