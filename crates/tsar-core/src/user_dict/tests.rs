use super::*;
use crate::dict::Dictionary;

fn temp_dict() -> (tempfile::TempDir, UserDictionary) {
    let dir = tempfile::tempdir().unwrap();
    let dict = UserDictionary::new(dir.path().join(USER_DICT_FILENAME));
    (dir, dict)
}

#[test]
fn add_and_lookup() {
    let (_dir, dict) = temp_dict();
    assert!(dict.add("тест", "тестъ"));
    assert_eq!(dict.lookup("тест").as_deref(), Some("тестъ"));
}

#[test]
fn add_trims_and_lowercases() {
    let (_dir, dict) = temp_dict();
    assert!(dict.add("  Тест ", " тестъ  "));
    assert_eq!(dict.list(), vec![("тест".to_string(), "тестъ".to_string())]);
}

#[test]
fn add_empty_is_noop() {
    let (_dir, dict) = temp_dict();
    assert!(!dict.add("   ", "тестъ"));
    assert!(!dict.add("тест", " "));
    assert!(dict.is_empty());
    assert!(!dict.path().exists());
}

#[test]
fn add_overwrites() {
    let (_dir, dict) = temp_dict();
    dict.add("тест", "тестъ");
    dict.add("ТЕСТ", "тѣстъ");
    assert_eq!(dict.len(), 1);
    assert_eq!(dict.lookup("тест").as_deref(), Some("тѣстъ"));
}

#[test]
fn add_writes_through() {
    let (_dir, dict) = temp_dict();
    dict.add("тест", "тестъ");
    let stored = read_store(dict.path()).unwrap();
    assert_eq!(stored.get("тест").map(String::as_str), Some("тестъ"));
}

#[test]
fn remove_writes_through() {
    let (_dir, dict) = temp_dict();
    dict.add("тест", "тестъ");
    dict.add("кот", "котъ");
    assert!(dict.remove(" Тест"));
    assert_eq!(dict.lookup("тест"), None);
    let stored = read_store(dict.path()).unwrap();
    assert!(!stored.contains_key("тест"));
    assert!(stored.contains_key("кот"));
}

#[test]
fn remove_not_found() {
    let (_dir, dict) = temp_dict();
    assert!(!dict.remove("тест"));
    assert!(!dict.path().exists());
}

#[test]
fn list_sorted() {
    let (_dir, dict) = temp_dict();
    dict.add("яблоко", "яблоко");
    dict.add("арбуз", "арбузъ");
    dict.add("кот", "котъ");
    let words: Vec<String> = dict.list().into_iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["арбуз", "кот", "яблоко"]);
}

#[test]
fn file_roundtrip() {
    let (_dir, dict) = temp_dict();
    dict.add("тест", "тестъ");
    dict.add("кот", "котъ");

    let loaded = UserDictionary::open(dict.path());
    assert_eq!(loaded.list(), dict.list());
}

#[test]
fn open_nonexistent_returns_empty() {
    let (_dir, dict) = temp_dict();
    let loaded = UserDictionary::open(dict.path());
    assert!(loaded.is_empty());
    assert_eq!(dict.load().unwrap(), 0);
}

#[test]
fn malformed_store_loads_empty() {
    let (_dir, dict) = temp_dict();
    fs::write(dict.path(), "{ not json").unwrap();
    assert!(matches!(dict.load(), Err(LoadError::Json(_))));
    assert!(dict.is_empty());

    let reopened = UserDictionary::open(dict.path());
    assert!(reopened.is_empty());
}

#[test]
fn load_replaces_memory() {
    let (_dir, dict) = temp_dict();
    dict.add("тест", "тестъ");
    fs::write(dict.path(), r#"{"кот": "котъ"}"#).unwrap();
    assert_eq!(dict.load().unwrap(), 1);
    assert_eq!(dict.lookup("тест"), None);
    assert_eq!(dict.lookup("кот").as_deref(), Some("котъ"));
}

#[test]
fn save_failure_keeps_memory() {
    let dir = tempfile::tempdir().unwrap();
    // The parent "directory" is a regular file, so every save fails.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let dict = UserDictionary::new(blocker.join(USER_DICT_FILENAME));
    assert!(dict.add("тест", "тестъ"));
    assert_eq!(dict.lookup("тест").as_deref(), Some("тестъ"));
    assert!(dict.save().is_err());
}

#[test]
fn export_is_pretty_sorted_object() {
    let (_dir, dict) = temp_dict();
    dict.add("кот", "котъ");
    dict.add("арбуз", "арбузъ");
    let json = dict.export();
    assert!(json.contains('\n'));
    assert!(json.find("арбуз").unwrap() < json.find("кот").unwrap());
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["кот"], "котъ");
}

#[test]
fn export_empty() {
    let (_dir, dict) = temp_dict();
    assert_eq!(dict.export(), "{}");
}

#[test]
fn import_merges() {
    let (_dir, dict) = temp_dict();
    dict.add("тест", "тестъ");
    dict.add("кот", "котъ");

    let n = dict.import(r#"{"кот": "котище", "дуб": "дубъ", "пусто": ""}"#);
    assert_eq!(n, 2);
    assert_eq!(dict.lookup("тест").as_deref(), Some("тестъ"));
    assert_eq!(dict.lookup("кот").as_deref(), Some("котище"));
    assert_eq!(dict.lookup("дуб").as_deref(), Some("дубъ"));
    assert_eq!(dict.lookup("пусто"), None);

    let stored = read_store(dict.path()).unwrap();
    assert_eq!(stored.len(), 3);
}

#[test]
fn import_malformed_returns_zero() {
    let (_dir, dict) = temp_dict();
    dict.add("тест", "тестъ");
    assert_eq!(dict.import("not json"), 0);
    assert_eq!(dict.import(r#"["a", "b"]"#), 0);
    assert_eq!(dict.list().len(), 1);
}

#[test]
fn import_nothing_does_not_create_store() {
    let (_dir, dict) = temp_dict();
    assert_eq!(dict.import("{}"), 0);
    assert!(!dict.path().exists());
}

#[test]
fn export_import_roundtrip() {
    let (_dir, dict) = temp_dict();
    dict.add("тест", "тестъ");
    dict.add("кот", "котъ");
    let before = dict.list();
    assert_eq!(dict.import(&dict.export()), 2);
    assert_eq!(dict.list(), before);
}

#[test]
fn concurrent_adds_are_all_persisted() {
    let (_dir, dict) = temp_dict();
    std::thread::scope(|s| {
        for t in 0..4 {
            let dict = &dict;
            s.spawn(move || {
                for i in 0..10 {
                    dict.add(&format!("слово{t}x{i}"), "словъ");
                }
            });
        }
    });
    assert_eq!(dict.len(), 40);
    assert_eq!(read_store(dict.path()).unwrap().len(), 40);
}
