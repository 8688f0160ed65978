use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use contracts::domain::personnel::aggregate::Organization;
use contracts::domain::schedule::aggregate::{Duty, Schedule, ShellDuty, ShellFlyingLine};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::shared::data::db::get_connection;

pub mod schedule {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "schedule")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub name: String,
        pub start_date: ChronoDateTime,
        pub end_date: ChronoDateTime,
        pub submission_date_time: ChronoDateTime,
        pub status: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod shell_line {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "shell_line")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub num: i32,
        pub start_date_time: ChronoDateTime,
        pub org_id: i32,
        pub fly_go: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod duty {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "duty")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub duty_type_id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod shell_duty {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "shell_duty")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub duty_id: i32,
        pub start_date_time: ChronoDateTime,
        pub end_date_time: ChronoDateTime,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_schedules() -> anyhow::Result<Vec<Schedule>> {
    let items = schedule::Entity::find()
        .order_by_asc(schedule::Column::StartDate)
        .all(conn())
        .await?
        .into_iter()
        .map(|m| Schedule {
            id: m.id,
            name: m.name,
            start_date: m.start_date,
            end_date: m.end_date,
            submission_date_time: m.submission_date_time,
            status: m.status,
        })
        .collect();
    Ok(items)
}

/// Flying lines whose takeoff falls on the given day, in line order.
pub async fn flying_shell(date: NaiveDate) -> anyhow::Result<Vec<ShellFlyingLine>> {
    let day_start = date.and_hms_opt(0, 0, 0).expect("midnight is valid");
    let day_end = day_start + Duration::days(1);

    let orgs: HashMap<i32, Organization> = crate::domain::personnel::repository::org::Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(|m| (m.id, Organization { id: m.id, name: m.name }))
        .collect();

    let lines = shell_line::Entity::find()
        .filter(shell_line::Column::StartDateTime.gte(day_start))
        .filter(shell_line::Column::StartDateTime.lt(day_end))
        .order_by_asc(shell_line::Column::Num)
        .all(conn())
        .await?;

    let mut result = Vec::with_capacity(lines.len());
    for m in lines {
        let org = orgs
            .get(&m.org_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("shell line {} references unknown org {}", m.id, m.org_id))?;
        result.push(ShellFlyingLine {
            id: m.id,
            num: m.num,
            start_date_time: m.start_date_time,
            fly_go: m.fly_go,
            org,
        });
    }
    Ok(result)
}

/// Duty blocks that start on the given day, earliest first.
pub async fn duty_shell(date: NaiveDate) -> anyhow::Result<Vec<ShellDuty>> {
    let day_start = date.and_hms_opt(0, 0, 0).expect("midnight is valid");
    let day_end = day_start + Duration::days(1);

    let duties: HashMap<i32, Duty> = duty::Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(|m| {
            (
                m.id,
                Duty {
                    id: m.id,
                    duty_type_id: m.duty_type_id,
                    name: m.name,
                },
            )
        })
        .collect();

    let blocks = shell_duty::Entity::find()
        .filter(shell_duty::Column::StartDateTime.gte(day_start))
        .filter(shell_duty::Column::StartDateTime.lt(day_end))
        .order_by_asc(shell_duty::Column::StartDateTime)
        .all(conn())
        .await?;

    let mut result = Vec::with_capacity(blocks.len());
    for m in blocks {
        let duty = duties
            .get(&m.duty_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("shell duty {} references unknown duty {}", m.id, m.duty_id))?;
        result.push(ShellDuty {
            id: m.id,
            duty,
            start_date_time: m.start_date_time,
            end_date_time: m.end_date_time,
        });
    }
    Ok(result)
}
