// Integration tests for the key-value adapters and the repositories on top

use toyrobot_core::{Direction, Robot, Table};
use toyrobot_store::{KeyValueStore, MemoryStore, RobotRepository, SqliteStore, TableRepository};

fn exercise_store(store: &dyn KeyValueStore) {
    let robots = RobotRepository::new(store);
    let tables = TableRepository::new(store);

    // Given: An empty store
    assert_eq!(robots.find().unwrap(), None);
    assert_eq!(tables.find().unwrap(), None);

    // When: A table and a robot are saved
    tables.save(&Table::default()).unwrap();
    robots.save(&Robot::new(1, 2, Direction::East)).unwrap();

    // Then: Both read back unchanged
    assert_eq!(tables.find().unwrap(), Some(Table::new(5, 5)));
    assert_eq!(
        robots.find().unwrap().map(|r| r.report()),
        Some("1,2,EAST".to_string())
    );

    // And: Deleting the robot leaves the table alone
    robots.delete().unwrap();
    robots.delete().unwrap();
    assert_eq!(robots.find().unwrap(), None);
    assert!(tables.exists().unwrap());

    // And: Clearing removes everything
    store.clear().unwrap();
    assert_eq!(tables.find().unwrap(), None);
}

#[test]
fn test_memory_store_contract() {
    exercise_store(&MemoryStore::new());
}

#[test]
fn test_sqlite_store_contract() {
    exercise_store(&SqliteStore::open_in_memory().unwrap());
}

#[test]
fn test_sqlite_state_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game").join("state.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        TableRepository::new(&store).save(&Table::new(3, 4)).unwrap();
        RobotRepository::new(&store)
            .save(&Robot::new(3, 4, Direction::South))
            .unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(
        TableRepository::new(&store).find().unwrap(),
        Some(Table::new(3, 4))
    );
    assert_eq!(
        RobotRepository::new(&store).find().unwrap(),
        Some(Robot::new(3, 4, Direction::South))
    );
}

#[test]
fn test_repositories_share_one_store() {
    let store = SqliteStore::open_in_memory().unwrap();
    TableRepository::new(&store).save(&Table::default()).unwrap();

    let count: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_entries", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
