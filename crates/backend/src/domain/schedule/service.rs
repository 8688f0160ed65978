use chrono::NaiveDate;
use contracts::domain::schedule::aggregate::{Schedule, ShellDuty, ShellFlyingLine};

use super::repository;

pub async fn list_schedules() -> anyhow::Result<Vec<Schedule>> {
    repository::list_schedules().await
}

pub async fn flying_shell(date: NaiveDate) -> anyhow::Result<Vec<ShellFlyingLine>> {
    repository::flying_shell(date).await
}

pub async fn duty_shell(date: NaiveDate) -> anyhow::Result<Vec<ShellDuty>> {
    repository::duty_shell(date).await
}
