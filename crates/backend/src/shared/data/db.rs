use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Connect to the sqlite database and make sure the schema exists.
/// Must be called once before any repository is used.
pub async fn initialize_database(db_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_path).is_absolute() {
        std::path::PathBuf::from(db_path)
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    create_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database connection already initialized"))?;

    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("database connection not initialized, call initialize_database first")
}

async fn create_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS org (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS qual_type (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS qual (
            id INTEGER PRIMARY KEY,
            type_id INTEGER NOT NULL DEFAULT 1,
            name TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS person_line (
            id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            middle_name TEXT NOT NULL DEFAULT '',
            last_name TEXT NOT NULL,
            ausm_tier INTEGER NOT NULL DEFAULT 3
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS person_qual (
            person_line_id INTEGER NOT NULL,
            qual_id INTEGER NOT NULL,
            PRIMARY KEY (person_line_id, qual_id)
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS person_org (
            person_line_id INTEGER NOT NULL,
            org_id INTEGER NOT NULL,
            PRIMARY KEY (person_line_id, org_id)
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS schedule (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            submission_date_time TEXT NOT NULL,
            status TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS shell_line (
            id INTEGER PRIMARY KEY,
            num INTEGER NOT NULL,
            start_date_time TEXT NOT NULL,
            org_id INTEGER NOT NULL,
            fly_go INTEGER NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS duty_type (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS duty (
            id INTEGER PRIMARY KEY,
            duty_type_id INTEGER NOT NULL,
            name TEXT NOT NULL
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS shell_duty (
            id INTEGER PRIMARY KEY,
            duty_id INTEGER NOT NULL,
            start_date_time TEXT NOT NULL,
            end_date_time TEXT NOT NULL
        );
        "#,
    ];

    for sql in statements {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}
