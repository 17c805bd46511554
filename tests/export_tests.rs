use chrono::NaiveDate;

use dojoadmin::api::Student;
use dojoadmin::export::{parse_csv, to_csv, to_csv_rows, CsvRecord};
use dojoadmin::list::FilterState;

fn student(id: &str, name: &str, belt: &str) -> Student {
    Student {
        id: id.to_string(),
        full_name: name.to_string(),
        email: format!("{}@example.com", id),
        phone: "555-0000".to_string(),
        branch_id: "b-1".to_string(),
        belt_rank: belt.to_string(),
        enrolled_at: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        active: true,
    }
}

#[test]
fn round_trip_preserves_rows_and_columns() {
    let students = vec![
        student("s-1", "Kenta Mori", "blue"),
        student("s-2", "Mori, Hana", "white"),
        student("s-3", "Jo \"The Wall\" Park", "black"),
    ];

    let csv = to_csv(&students);
    let parsed = parse_csv(&csv);

    assert_eq!(parsed.len(), students.len() + 1);
    let columns = Student::csv_headers().len();
    for row in &parsed {
        assert_eq!(row.len(), columns);
    }

    assert_eq!(parsed[2][1], "Mori, Hana");
    assert_eq!(parsed[3][1], "Jo \"The Wall\" Park");
}

#[test]
fn exporting_the_filtered_rows_matches_the_visible_set() {
    let students = vec![
        student("s-1", "Kenta Mori", "blue"),
        student("s-2", "Hana Sato", "white"),
        student("s-3", "Aiko Mori", "blue"),
    ];

    let mut state = FilterState::new(10);
    state.set_search_term("mori");
    let filtered: Vec<Student> = state.filtered(&students).into_iter().cloned().collect();

    let csv = to_csv(&filtered);
    let parsed = parse_csv(&csv);
    assert_eq!(parsed.len(), 3); // header + 2 matches
}

#[test]
fn fields_with_newlines_survive_quoting() {
    let rows = vec![vec![
        "b-1".to_string(),
        "12 River St\nSuite 4".to_string(),
    ]];
    let csv = to_csv_rows(&["ID", "Address"], &rows);
    let parsed = parse_csv(&csv);

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1][1], "12 River St\nSuite 4");
}

#[test]
fn crlf_input_parses_like_lf() {
    let parsed = parse_csv("a,b\r\nc,d\r\n");
    assert_eq!(parsed, vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["c".to_string(), "d".to_string()],
    ]);
}

#[test]
fn empty_input_yields_no_rows() {
    assert!(parse_csv("").is_empty());
}
