// Integration tests for the SQLite schema and its migration runner

use rusqlite::Connection;
use toyrobot_store::migrations::{applied_migrations, apply_migrations};

fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = Connection::open_in_memory().unwrap();

    // When: Migrations are applied
    apply_migrations(&mut conn).unwrap();

    // Then: The key-value table and the version table exist
    assert_eq!(table_names(&conn), vec!["kv_entries", "schema_version"]);
}

#[test]
fn test_reapplying_is_a_no_op() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    assert_eq!(applied_migrations(&conn).unwrap(), vec!["001_kv_entries"]);
}

#[test]
fn test_checksum_is_recorded() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = '001_kv_entries'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(checksum.len(), 64);
    assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_migrations_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.db");

    {
        let mut conn = toyrobot_store::db::open(&path).unwrap();
        apply_migrations(&mut conn).unwrap();
    }

    let mut conn = toyrobot_store::db::open(&path).unwrap();
    apply_migrations(&mut conn).unwrap();
    assert_eq!(applied_migrations(&conn).unwrap().len(), 1);
}
