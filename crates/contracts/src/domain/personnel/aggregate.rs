use serde::{Deserialize, Serialize};

/// Flying organization (flight/squadron element) a person can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i32,
    pub name: String,
}

/// Qualification held by a person (e.g. "SOF", "RSU Controller")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub id: i32,
    pub name: String,
}

/// Roster line for one person, as served by `GET /api/personnel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub ausm_tier: i32,
    pub assigned_org: Option<Organization>,
    pub quals: Vec<Qualification>,
}

impl Person {
    /// "Last, First" display form used by the roster table
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    pub fn holds_qual(&self, name: &str) -> bool {
        self.quals.iter().any(|q| q.name == name)
    }
}

/// Body of `PUT /api/personnel/{id}`.
///
/// The full record with the edited fields applied. Organization and
/// qualifications travel by name; the backend resolves them against its
/// own tables, so the client never has to know their ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub id: i32,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub ausm_tier: i32,
    pub assigned_org: Option<String>,
    pub quals: Vec<String>,
}

impl PersonUpdate {
    /// Start an update from the current record, keeping org and quals as-is.
    pub fn from_person(person: &Person) -> Self {
        Self {
            id: person.id,
            first_name: person.first_name.clone(),
            middle_name: person.middle_name.clone(),
            last_name: person.last_name.clone(),
            ausm_tier: person.ausm_tier,
            assigned_org: person.assigned_org.as_ref().map(|o| o.name.clone()),
            quals: person.quals.iter().map(|q| q.name.clone()).collect(),
        }
    }
}
