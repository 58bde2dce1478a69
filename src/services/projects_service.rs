use crate::models::Project;
use crate::services::SupabaseClient;

/// Load community projects, newest first
pub async fn fetch_projects(
    client: &SupabaseClient,
    access_token: Option<&str>,
) -> Result<Vec<Project>, String> {
    log::info!("🏗️ Loading projects...");
    let projects: Vec<Project> = client
        .select("projects", "select=*&order=created_at.desc", access_token)
        .await?;

    log::info!("✅ Projects loaded: {}", projects.len());
    Ok(projects)
}
