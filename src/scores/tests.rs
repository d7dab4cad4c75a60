//! Score table tests

use super::*;


/// Build a table from name and score pairs
///
fn table(entries: &[(&str, i32)]) -> Table {
    Table::new(
        entries
            .iter()
            .map(|(name, score)| Entry {name: name.to_string(), score: *score})
            .collect(),
    )
}


#[test]
fn entries_rank_by_score_then_name() {
    let table = table(&[("ada", 5), ("zoe", 11), ("bob", 5)]);
    let names: Vec<_> = table.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["zoe", "bob", "ada"]);
}


#[test]
fn short_tables_accept_any_score() {
    let table = table(&[("ada", 100)]);
    assert!(table.qualifies(-50));
    assert!(Table::default().qualifies(0));
}


#[test]
fn full_tables_require_beating_the_minimum() {
    let entries: Vec<_> = (0..LENGTH as i32).map(|n| ("p", n * 10)).collect();
    let table = table(&entries);

    assert!(!table.qualifies(0));
    assert!(!table.qualifies(-5));
    assert!(table.qualifies(1));
    assert!(table.qualifies(95));
}


#[test]
fn insertion_drops_the_lowest_entry() {
    let entries: Vec<_> = (0..LENGTH as i32).map(|n| ("p", n * 10)).collect();
    let mut table = table(&entries);

    table.insert("new".to_string(), 42);
    assert_eq!(table.entries().len(), LENGTH);
    assert!(table.entries().iter().any(|e| e.name == "new"));
    assert!(table.entries().iter().all(|e| e.score > 0));
}


#[test]
fn entry_parsing() {
    assert_eq!(
        Entry::parse("bob - 12"),
        Some(Entry {name: "bob".to_string(), score: 12}),
    );
    assert_eq!(
        Entry::parse("a - b - 42"),
        Some(Entry {name: "a - b".to_string(), score: 42}),
    );
    assert_eq!(
        Entry::parse("bob - -5"),
        Some(Entry {name: "bob".to_string(), score: -5}),
    );
    assert_eq!(Entry::parse("nonsense"), None);
    assert_eq!(Entry::parse("bob - twelve"), None);
}


#[quickcheck]
fn entry_line_roundtrip(name: crate::tests::ASCIIString, score: i32) -> bool {
    let entry = Entry {name: name.into(), score};
    Entry::parse(&entry.to_string()) == Some(entry)
}


#[test]
fn table_lines_match_the_file_format() {
    let table = table(&[("ada", 5), ("zoe", 11)]);
    assert_eq!(table.to_string(), "zoe - 11\nada - 5");
}


#[test]
fn tabulation_pads_the_name_column() {
    let table = table(&[("ada", 5), ("bartholomew", 11)]);
    assert_eq!(
        table.tabulate(),
        concat!(
            "PLAYER      | SCORES\n",
            "------------+-------\n",
            "bartholomew | 11\n",
            "ada         | 5\n",
        ),
    );
}


#[test]
fn empty_tables_tabulate_to_headers_only() {
    assert_eq!(
        Table::default().tabulate(),
        "PLAYER | SCORES\n-------+-------\n",
    );
}


#[test]
fn level_file_store_roundtrip() {
    let path = std::env::temp_dir().join("egg-roll-store-test.level");
    std::fs::write(&path, "1\n5\n#0O\nold - 1\n").expect("could not seed level file");
    let mut store = LevelFile::new(path.clone());

    let mut table = Table::default();
    table.insert("ada".to_string(), 9);
    table.insert("bob".to_string(), 4);
    store.save(&table).expect("could not save scores");
    assert_eq!(
        std::fs::read_to_string(&path).expect("could not read level file"),
        "1\n5\n#0O\nada - 9\nbob - 4\n",
    );

    store.clear().expect("could not clear scores");
    assert_eq!(
        std::fs::read_to_string(&path).expect("could not read level file"),
        "1\n5\n#0O\n",
    );

    std::fs::remove_file(path).expect("could not remove level file");
}
