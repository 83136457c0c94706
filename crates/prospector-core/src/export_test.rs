use super::*;

fn person(i: usize) -> Person {
    Person {
        name: format!("Person {i}"),
        title: format!("Title {i}"),
        company_filter: "Google".to_string(),
        role_filter: "Product Manager".to_string(),
        profile_url: format!("https://www.linkedin.com/in/person-{i}"),
    }
}

fn people(n: usize) -> Vec<Person> {
    (0..n).map(person).collect()
}

fn read_rows(path: &Path) -> Vec<Person> {
    let mut reader = csv::Reader::from_path(path).expect("export should be readable");
    reader
        .deserialize()
        .collect::<Result<Vec<Person>, _>>()
        .expect("rows should deserialize")
}

#[test]
fn plan_chunks_counts_are_ceiling_of_total_over_size() {
    for (total, size, expected) in [(10, 3, 4), (9, 3, 3), (1, 1, 1), (250, 100, 3)] {
        let chunks = plan_chunks(total, size);
        assert_eq!(chunks.len(), expected, "total={total} size={size}");
        assert!(chunks.iter().all(|r| !r.is_empty()));
        assert_eq!(chunks.iter().map(ExactSizeIterator::len).sum::<usize>(), total);
        assert_eq!(chunks.first().map(|r| r.start), Some(0));
        assert!(chunks.windows(2).all(|w| w[0].end == w[1].start));
    }
}

#[test]
fn plan_chunks_zero_size_disables_splitting() {
    assert_eq!(plan_chunks(250, 0), vec![0..250]);
}

#[test]
fn plan_chunks_under_limit_is_single_range() {
    assert_eq!(plan_chunks(100, 100), vec![0..100]);
}

#[test]
fn plan_chunks_empty_input_is_single_empty_range() {
    assert_eq!(plan_chunks(0, 10), vec![0..0]);
}

#[test]
fn export_unsplit_writes_single_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let rows = people(3);

    let files = export_people(dir.path(), "Google_PMs", &rows, 0).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, dir.path().join("Google_PMs.csv"));
    assert_eq!(files[0].rows, 3);
    assert_eq!(read_rows(&files[0].path), rows);
}

#[test]
fn export_split_writes_numbered_parts_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let rows = people(5);

    let files = export_people(dir.path(), "out", &rows, 2).unwrap();

    let names: Vec<String> = files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["out_part1.csv", "out_part2.csv", "out_part3.csv"]);

    let round_tripped: Vec<Person> = files.iter().flat_map(|f| read_rows(&f.path)).collect();
    assert_eq!(round_tripped, rows);
    assert_eq!(files.iter().map(|f| f.rows).collect::<Vec<_>>(), vec![2, 2, 1]);
}

#[test]
fn export_writes_header_row_in_field_order() {
    let dir = tempfile::tempdir().unwrap();
    let files = export_people(dir.path(), "out", &people(1), 100).unwrap();

    let contents = std::fs::read_to_string(&files[0].path).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(header, "name,title,company_filter,role_filter,profile_url");
}

#[test]
fn export_empty_run_writes_header_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let files = export_people(dir.path(), "empty", &[], 10).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].rows, 0);
    let contents = std::fs::read_to_string(&files[0].path).unwrap();
    assert_eq!(contents.trim_end(), "name,title,company_filter,role_filter,profile_url");
}

#[test]
fn export_creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("exports").join("2026");

    let files = export_people(&nested, "out", &people(2), 100).unwrap();

    assert!(nested.is_dir());
    assert!(files[0].path.starts_with(&nested));
}

#[test]
fn export_quotes_fields_containing_commas() {
    let dir = tempfile::tempdir().unwrap();
    let mut row = person(0);
    row.title = "PM, Payments | LinkedIn".to_string();

    let files = export_people(dir.path(), "out", std::slice::from_ref(&row), 0).unwrap();

    assert_eq!(read_rows(&files[0].path), vec![row]);
}
