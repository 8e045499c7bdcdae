use notiflog::LogStore;

fn fresh_store(dir: &tempfile::TempDir) -> LogStore {
    let store = LogStore::new(dir.path().join("logs.db"));
    store.ensure_schema().unwrap();
    store
}

#[test]
fn list_all_returns_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    let mail = store
        .append("Mail", "New message", "2024-01-01 10:00:00")
        .unwrap();
    let chat = store.append("Chat", "Ping", "2024-01-01 10:05:00").unwrap();
    assert_eq!((mail, chat), (1, 2));

    let logs = store.list_all().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id, 2);
    assert_eq!(logs[0].title, "Chat");
    assert_eq!(logs[0].text, "Ping");
    assert_eq!(logs[0].time, "2024-01-01 10:05:00");
    assert_eq!(logs[1].id, 1);
    assert_eq!(logs[1].title, "Mail");
}

#[test]
fn ids_increase_in_append_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    let ids: Vec<i64> = (0..25)
        .map(|i| {
            store
                .append(&format!("t{i}"), &format!("b{i}"), "2024-01-01 00:00:00")
                .unwrap()
        })
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    let listed: Vec<i64> = store.list_all().unwrap().iter().map(|e| e.id).collect();
    let mut expected = ids.clone();
    expected.reverse();
    assert_eq!(listed, expected);
}

#[test]
fn list_all_on_empty_table_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn ensure_schema_twice_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);
    store.append("Mail", "kept", "2024-01-01 10:00:00").unwrap();

    store.ensure_schema().unwrap();
    LogStore::new(store.path()).ensure_schema().unwrap();

    let logs = store.list_all().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].text, "kept");
}

#[test]
fn fields_round_trip_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    let title = "  Заголовок 🚀 'quoted' \"double\"  ";
    let text = format!("line1\nline2\r\n\t{}", "long ".repeat(2000));
    store.append(title, &text, "not-a-date").unwrap();
    store.append("", "", "").unwrap();

    let logs = store.list_all().unwrap();
    assert_eq!(logs[1].title, title);
    assert_eq!(logs[1].text, text);
    assert_eq!(logs[1].time, "not-a-date");
    assert_eq!(logs[0].title, "");
    assert_eq!(logs[0].text, "");
    assert_eq!(logs[0].time, "");
}

#[test]
fn data_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs.db");

    {
        let store = LogStore::new(&path);
        store.ensure_schema().unwrap();
        store.append("Mail", "persisted", "2024-01-01 10:00:00").unwrap();
    }

    let reopened = LogStore::new(&path);
    let logs = reopened.list_all().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].title, "Mail");
}

#[test]
fn list_all_without_schema_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::new(dir.path().join("missing.db"));

    assert!(store.list_all().is_err());
}

#[test]
fn open_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file.
    let store = LogStore::new(dir.path());

    assert!(store.append("a", "b", "c").is_err());
}

#[test]
fn concurrent_appends_all_land() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 0..10 {
                    store
                        .append(&format!("thread{t}"), &format!("{i}"), "2024-01-01 00:00:00")
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let logs = store.list_all().unwrap();
    assert_eq!(logs.len(), 40);
    assert!(logs.windows(2).all(|w| w[0].id > w[1].id));
}

#[test]
fn stats_counts_today_and_total() {
    let dir = tempfile::tempdir().unwrap();
    let store = fresh_store(&dir);
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    store.append("old", "", "2000-01-01 00:00:00").unwrap();
    store.append("new", "", &now).unwrap();
    store.append("new", "", &now).unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.today, 2);
    assert!(stats.file_size_bytes > 0);
}
