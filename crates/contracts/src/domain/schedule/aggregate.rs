use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::personnel::aggregate::Organization;

/// A submitted or in-progress weekly schedule, as served by
/// `GET /api/schedules`. `status` is free text owned by the scheduler;
/// the UI only distinguishes "Completed" and "Pending" from everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub submission_date_time: NaiveDateTime,
    pub status: String,
}

/// One flying line of the shell for a given day: line number, takeoff
/// time, fly/go ordinal and the organization flying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellFlyingLine {
    pub id: i32,
    pub num: i32,
    pub start_date_time: NaiveDateTime,
    pub fly_go: i32,
    pub org: Organization,
}

/// A duty position that can appear on the duty shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duty {
    pub id: i32,
    pub duty_type_id: i32,
    pub name: String,
}

/// One duty block of the shell for a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellDuty {
    pub id: i32,
    pub duty: Duty,
    pub start_date_time: NaiveDateTime,
    pub end_date_time: NaiveDateTime,
}

impl ShellFlyingLine {
    pub fn date(&self) -> NaiveDate {
        self.start_date_time.date()
    }
}

impl ShellDuty {
    pub fn date(&self) -> NaiveDate {
        self.start_date_time.date()
    }
}
