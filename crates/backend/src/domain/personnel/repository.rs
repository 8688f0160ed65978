use std::collections::HashMap;

use contracts::domain::personnel::aggregate::{Organization, Person, PersonUpdate, Qualification};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait};

use crate::shared::data::db::get_connection;

pub mod person_line {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "person_line")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub first_name: String,
        pub middle_name: String,
        pub last_name: String,
        pub ausm_tier: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod org {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "org")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod qual {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "qual")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub type_id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod person_qual {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "person_qual")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub person_line_id: i32,
        #[sea_orm(primary_key, auto_increment = false)]
        pub qual_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod person_org {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "person_org")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub person_line_id: i32,
        #[sea_orm(primary_key, auto_increment = false)]
        pub org_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All roster lines with their org and qualifications joined in.
pub async fn list_all() -> anyhow::Result<Vec<Person>> {
    let lines = person_line::Entity::find().all(conn()).await?;
    let orgs: HashMap<i32, Organization> = org::Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(|m| (m.id, Organization { id: m.id, name: m.name }))
        .collect();
    let quals: HashMap<i32, Qualification> = qual::Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(|m| {
            (
                m.id,
                Qualification {
                    id: m.id,
                    name: m.name,
                },
            )
        })
        .collect();
    let person_orgs = person_org::Entity::find().all(conn()).await?;
    let person_quals = person_qual::Entity::find().all(conn()).await?;

    let mut org_by_person: HashMap<i32, Organization> = HashMap::new();
    for link in person_orgs {
        if let Some(o) = orgs.get(&link.org_id) {
            org_by_person.insert(link.person_line_id, o.clone());
        }
    }
    let mut quals_by_person: HashMap<i32, Vec<Qualification>> = HashMap::new();
    for link in person_quals {
        if let Some(q) = quals.get(&link.qual_id) {
            quals_by_person
                .entry(link.person_line_id)
                .or_default()
                .push(q.clone());
        }
    }

    let mut persons: Vec<Person> = lines
        .into_iter()
        .map(|m| Person {
            id: m.id,
            first_name: m.first_name,
            middle_name: m.middle_name,
            last_name: m.last_name,
            ausm_tier: m.ausm_tier,
            assigned_org: org_by_person.remove(&m.id),
            quals: quals_by_person.remove(&m.id).unwrap_or_default(),
        })
        .collect();
    persons.sort_by(|a, b| {
        (a.last_name.to_lowercase(), a.first_name.to_lowercase())
            .cmp(&(b.last_name.to_lowercase(), b.first_name.to_lowercase()))
    });
    Ok(persons)
}

/// Replace a person's org assignment and qualification set. Org and quals
/// arrive by name and are resolved against their tables; names that do not
/// resolve are ignored. Returns false when the person does not exist.
pub async fn update(update: &PersonUpdate) -> anyhow::Result<bool> {
    if person_line::Entity::find_by_id(update.id)
        .one(conn())
        .await?
        .is_none()
    {
        return Ok(false);
    }

    let new_org = match update.assigned_org.as_deref() {
        Some(name) if !name.is_empty() => {
            org::Entity::find()
                .filter(org::Column::Name.eq(name))
                .one(conn())
                .await?
        }
        _ => None,
    };
    let new_quals = qual::Entity::find()
        .filter(qual::Column::Name.is_in(update.quals.clone()))
        .all(conn())
        .await?;

    let txn = conn().begin().await?;

    person_org::Entity::delete_many()
        .filter(person_org::Column::PersonLineId.eq(update.id))
        .exec(&txn)
        .await?;
    if let Some(o) = new_org {
        person_org::Entity::insert(person_org::ActiveModel {
            person_line_id: Set(update.id),
            org_id: Set(o.id),
        })
        .exec(&txn)
        .await?;
    }

    person_qual::Entity::delete_many()
        .filter(person_qual::Column::PersonLineId.eq(update.id))
        .exec(&txn)
        .await?;
    for q in new_quals {
        person_qual::Entity::insert(person_qual::ActiveModel {
            person_line_id: Set(update.id),
            qual_id: Set(q.id),
        })
        .exec(&txn)
        .await?;
    }

    txn.commit().await?;
    Ok(true)
}
