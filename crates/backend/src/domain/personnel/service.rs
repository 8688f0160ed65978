use contracts::domain::personnel::aggregate::{Person, PersonUpdate};

use super::repository;

/// Full roster for the personnel table
pub async fn list_all() -> anyhow::Result<Vec<Person>> {
    repository::list_all().await
}

/// Apply an edited roster line. Returns false when the person is unknown.
pub async fn update(update: PersonUpdate) -> anyhow::Result<bool> {
    tracing::info!(
        person_id = update.id,
        org = update.assigned_org.as_deref().unwrap_or(""),
        quals = update.quals.len(),
        "updating roster line"
    );
    repository::update(&update).await
}
