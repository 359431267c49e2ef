use std::fs;
use std::path::Path;

use bibliotheca_api::LibraryApi;
use bibliotheca_api::app::{
    CreateBookScheme, DeleteBookScheme, ReadAllBookScheme, ReadBookScheme, UpdateBookScheme,
};
use bibliotheca_infra::Settings;
use serde_json::Value;

fn create(
    api: &mut LibraryApi<bibliotheca_infra::JsonBooksUnitOfWork>,
    title: &str,
    author: &str,
    year: i32,
) -> String {
    api.create(CreateBookScheme {
        title: title.to_string(),
        author: author.to_string(),
        year,
    })
    .expect("create failed")
    .oid()
    .to_string()
}

fn data_file(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("data file missing")).unwrap()
}

#[test]
fn library_lifecycle_through_the_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::new(dir.path().join("resources").join("data").join("database.json"));
    settings.ensure_dirs().unwrap();
    let mut api = LibraryApi::from_settings(&settings);

    // Empty library reads as "no result", not a crash.
    assert!(api.read_all(ReadAllBookScheme {}).is_none());
    assert!(!settings.database_path().exists());

    let war = create(&mut api, "Война и мир", "Лев Толстой", 1869);
    let _ = create(&mut api, "1984", "George Orwell", 1949);

    let file = data_file(settings.database_path());
    assert_eq!(file.as_array().unwrap().len(), 2);
    assert_eq!(file[0]["title"], "Война и мир");
    assert_eq!(file[0]["status"], "in stock");

    // Duplicate title and obscene title are both rejected.
    assert!(api
        .create(CreateBookScheme {
            title: "1984".into(),
            author: "Someone Else".into(),
            year: 2000,
        })
        .is_none());
    assert!(api
        .create(CreateBookScheme {
            title: "Полная хуйня".into(),
            author: "Иван Петров".into(),
            year: 2000,
        })
        .is_none());
    assert_eq!(data_file(settings.database_path()).as_array().unwrap().len(), 2);

    let issued = api
        .update(UpdateBookScheme {
            oid: war.clone(),
            title: "Война и мир".into(),
            author: "Лев Толстой".into(),
            year: 1869,
            status: "issued".into(),
        })
        .unwrap();
    assert!(issued.is_issued());

    // A second facade over the same file sees committed state.
    let mut reopened = LibraryApi::from_settings(&settings);
    let found = reopened.read(ReadBookScheme { oid: war.clone() }).unwrap();
    assert_eq!(found.status().as_str(), "issued");

    assert_eq!(reopened.delete(DeleteBookScheme { oid: war }), Some(()));
    let titles: Vec<String> = api
        .read_all(ReadAllBookScheme {})
        .unwrap()
        .iter()
        .map(|b| b.title().as_str().to_string())
        .collect();
    assert_eq!(titles, ["1984"]);
}

#[test]
fn raw_json_input_drives_the_facade() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::new(dir.path().join("database.json"));
    let mut api = LibraryApi::from_settings(&settings);

    let scheme: CreateBookScheme = serde_json::from_str(
        r#"{"title": "Мастер и Маргарита", "author": "Михаил Булгаков", "year": 1967}"#,
    )
    .unwrap();
    let book = api.create(scheme).unwrap();

    assert_eq!(
        api.read_by_title_and_author("Мастер и Маргарита", "Михаил Булгаков"),
        Some(book)
    );
    assert!(api.read_by_title_and_author("Мастер и Маргарита", "Лев Толстой").is_none());
}
