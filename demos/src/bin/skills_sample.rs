use skills_client::prelude::*;
use tracing::{info, warn};

const JOB_POSTING: &str = r#"
    Front End Web Developer

    Great candidates have...

        Strong JavaScript skills, including ES6 and a modern framework, e.g. React, Ember, Angular, Vue
        Familiarity with server-side languages like PHP, Python, or Node

    Great candidates also have...

        Experience with a particular JS MV* framework (we happen to use React)
        Experience working with databases
        Experience with AWS
        Familiarity with microservice architecture
        Familiarity with modern CSS practices, e.g. LESS, SASS, CSS-in-JS

    People who succeed in this position are...

        Team oriented and ready to work closely with other developers
        Determined to produce clean, well-tested code
        Comfortable with working in rapid development cycles
        Skilled oral and written communicators
        Enthusiastic for learning and pushing the envelope
"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Creating client and authenticating...");
    let client = SkillsClient::new(Config::new()).await?;

    info!("Token: {:?}", client.token().await);
    info!("Token valid: {}", client.is_valid_token().await?);

    info!("Versions: {}", client.list_versions().await?.text());
    info!("All skills: {}", client.list_all_skills(None).await?.text());

    let search = client.search_skills(Some("python"), None, None).await?;
    let found: SkillsResponse = search.parse_json()?;
    info!("Search results:\n{}", found);

    match found.skills.first() {
        Some(skill) => {
            info!("First skill id: {}", skill.id);
            let details = client.get_skill_by_id(&skill.id, None).await?;
            info!("Skill details: {}", details.text());
        }
        None => warn!("No skill matched the search"),
    }

    let types: SkillTypesResponse = client.list_skill_types(None).await?.parse_json()?;
    info!("Skill types: {}", types);

    info!(
        "Extracted skills: {}",
        client.extract_skills(JOB_POSTING, None).await?.text()
    );

    let traced = client.extract_skills_with_source(JOB_POSTING, None).await?;
    if let Some(quota) = traced.rate_limit() {
        info!("Extraction quota remaining: {:?}", quota.remaining);
    }
    info!("Extracted skills with source: {}", traced.text());

    Ok(())
}
