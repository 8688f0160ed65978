use chrono::{Duration, Local, NaiveTime};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

/// Populate an empty database with a working data set: the five flying
/// orgs, the qualification catalog, a few roster lines, past schedules and
/// a shell for today and tomorrow so the build wizard has data to show.
pub async fn seed_if_empty(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let existing = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS n FROM org".to_string(),
        ))
        .await?;
    let count: i64 = existing
        .map(|row| row.try_get("", "n").unwrap_or(0))
        .unwrap_or(0);
    if count > 0 {
        return Ok(());
    }

    tracing::info!("Empty database, inserting seed data");

    let mut statements: Vec<String> = vec![
        "INSERT INTO org (id, name) VALUES (1,'M'),(2,'N'),(3,'O'),(4,'P'),(5,'X')".into(),
        "INSERT INTO qual_type (id, name) VALUES (1,'Duty'),(2,'Flying')".into(),
        "INSERT INTO qual (id, type_id, name) VALUES \
         (1,1,'Operations Supervisor'),(2,1,'SOF'),(3,1,'RSU Controller'),\
         (4,1,'RSU Observer'),(5,2,'IPC Pilot'),(6,2,'FPC Pilot'),\
         (7,2,'FCF Pilot'),(8,2,'PIT IP'),(9,2,'SEFE')"
            .into(),
        "INSERT INTO person_line (id, first_name, middle_name, last_name, ausm_tier) VALUES \
         (1,'Joshua','','Keeler',2),\
         (2,'Lucas','','Van Epps',1),\
         (3,'Dan','','Hawkins',3),\
         (4,'Montana','','Burgess',2)"
            .into(),
        "INSERT INTO person_org (person_line_id, org_id) VALUES (2,3),(3,1),(4,4)".into(),
        "INSERT INTO person_qual (person_line_id, qual_id) VALUES \
         (1,1),(2,3),(2,4),(3,2),(3,5),(4,9)"
            .into(),
        "INSERT INTO schedule (id, name, start_date, end_date, submission_date_time, status) VALUES \
         (1,'Week 27','2024-07-01 00:00:00','2024-07-05 00:00:00','2024-06-26 14:30:00','Completed'),\
         (2,'Week 28','2024-07-08 00:00:00','2024-07-12 00:00:00','2024-07-03 15:05:00','Pending'),\
         (3,'Week 29','2024-07-15 00:00:00','2024-07-19 00:00:00','2024-07-10 16:40:00','Rejected')"
            .into(),
        "INSERT INTO duty_type (id, name) VALUES (1,'Supervisory'),(2,'RSU')".into(),
        "INSERT INTO duty (id, duty_type_id, name) VALUES \
         (1,1,'Operations Supervisor'),(2,1,'SOF'),(3,2,'RSU Controller'),(4,2,'RSU Observer')"
            .into(),
    ];

    // Shell rows for today and tomorrow, three flying lines and two duty
    // blocks per day.
    let mut line_id = 1;
    let mut shell_duty_id = 1;
    for day_offset in 0..2 {
        let date = Local::now().date_naive() + Duration::days(day_offset);
        for (i, (hour, minute, org_id, fly_go)) in
            [(8u32, 30u32, 1, 1), (9, 0, 3, 1), (13, 30, 4, 2)].into_iter().enumerate()
        {
            let takeoff = date.and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap());
            statements.push(format!(
                "INSERT INTO shell_line (id, num, start_date_time, org_id, fly_go) \
                 VALUES ({}, {}, '{}', {}, {})",
                line_id,
                i + 1,
                takeoff.format("%Y-%m-%d %H:%M:%S"),
                org_id,
                fly_go
            ));
            line_id += 1;
        }
        for (duty_id, start_h, end_h) in [(1, 7u32, 12u32), (2, 12, 17)] {
            let start = date.and_time(NaiveTime::from_hms_opt(start_h, 0, 0).unwrap());
            let end = date.and_time(NaiveTime::from_hms_opt(end_h, 0, 0).unwrap());
            statements.push(format!(
                "INSERT INTO shell_duty (id, duty_id, start_date_time, end_date_time) \
                 VALUES ({}, {}, '{}', '{}')",
                shell_duty_id,
                duty_id,
                start.format("%Y-%m-%d %H:%M:%S"),
                end.format("%Y-%m-%d %H:%M:%S")
            ));
            shell_duty_id += 1;
        }
    }

    for sql in statements {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql))
            .await?;
    }

    Ok(())
}
