use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables created at startup when missing, in creation order
const SCHEMA: &[(&str, &str)] = &[
    (
        "sys_settings",
        r#"
        CREATE TABLE IF NOT EXISTS sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            description TEXT,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ),
    (
        "sys_users",
        r#"
        CREATE TABLE IF NOT EXISTS sys_users (
            id TEXT PRIMARY KEY NOT NULL,
            username TEXT NOT NULL UNIQUE,
            email TEXT,
            password_hash TEXT NOT NULL,
            full_name TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_admin INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            last_login_at TEXT,
            created_by TEXT
        );
        "#,
    ),
    (
        "sys_refresh_tokens",
        r#"
        CREATE TABLE IF NOT EXISTS sys_refresh_tokens (
            id TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL,
            token_hash TEXT NOT NULL,
            expires_at TEXT NOT NULL,
            created_at TEXT NOT NULL,
            revoked_at TEXT
        );
        "#,
    ),
    (
        "system_log",
        r#"
        CREATE TABLE IF NOT EXISTS system_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            source TEXT NOT NULL,
            category TEXT NOT NULL,
            message TEXT NOT NULL
        );
        "#,
    ),
    (
        "a001_property",
        r#"
        CREATE TABLE IF NOT EXISTS a001_property (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            customer_id TEXT,
            address TEXT NOT NULL DEFAULT '',
            city TEXT NOT NULL DEFAULT '',
            country TEXT NOT NULL DEFAULT '',
            timezone TEXT NOT NULL DEFAULT '',
            currency TEXT NOT NULL DEFAULT '',
            star_rating INTEGER,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a002_customer",
        r#"
        CREATE TABLE IF NOT EXISTS a002_customer (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            legal_name TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            vat_number TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_room",
        r#"
        CREATE TABLE IF NOT EXISTS a003_room (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            property_id TEXT NOT NULL,
            room_type TEXT NOT NULL,
            floor INTEGER NOT NULL DEFAULT 0,
            capacity INTEGER NOT NULL DEFAULT 1,
            status TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_a003_room_property ON a003_room (property_id);
        "#,
    ),
    (
        "a004_reservation",
        r#"
        CREATE TABLE IF NOT EXISTS a004_reservation (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            property_id TEXT NOT NULL,
            room_id TEXT,
            guest_name TEXT NOT NULL,
            guest_email TEXT NOT NULL DEFAULT '',
            guest_phone TEXT NOT NULL DEFAULT '',
            check_in TEXT NOT NULL,
            check_out TEXT NOT NULL,
            adults INTEGER NOT NULL DEFAULT 1,
            children INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL,
            total_amount REAL NOT NULL DEFAULT 0,
            currency TEXT NOT NULL DEFAULT '',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_a004_reservation_property ON a004_reservation (property_id, check_in);
        CREATE INDEX IF NOT EXISTS idx_a004_reservation_room ON a004_reservation (room_id);
        "#,
    ),
];

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Opening database {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;

    for (table, sql) in SCHEMA {
        ensure_table(&conn, table, sql).await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

async fn ensure_table(conn: &DatabaseConnection, table: &str, sql: &str) -> anyhow::Result<()> {
    let existing = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?",
            [table.into()],
        ))
        .await?;
    if !existing.is_empty() {
        return Ok(());
    }

    tracing::info!("Creating {} table", table);
    // One statement per call, sea-orm does not batch on SQLite
    for statement in sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("{};", statement),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_table_names_match_statements() {
        for (table, sql) in SCHEMA {
            assert!(
                sql.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table)),
                "{}",
                table
            );
        }
    }

    #[test]
    fn test_aggregate_tables_follow_full_name() {
        use contracts::domain::a003_room::aggregate::Room;
        use contracts::domain::common::AggregateRoot;
        assert!(SCHEMA.iter().any(|(t, _)| *t == Room::full_name()));
    }
}
