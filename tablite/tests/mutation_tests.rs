//! INSERT / UPDATE / DELETE tests
//!
//! Covers returned counts, fail-fast validation with no side effects,
//! readiness checks and the on-disk layout after a rewrite.

#[path = "testutils/mod.rs"]
mod testutils;

use tablite::{
    ArityPolicy, EngineConfig, OperationKind, Payload, QueryBuilder, QueryDescriptor, TableError,
};
use testutils::test_fixture::TestFixture;

#[test]
fn test_update_without_filter_changes_every_row() {
    let fixture = TestFixture::with_school_data().expect("Failed to create fixture");

    let result = fixture.assert_query_succeeds(QueryBuilder::update("students").set("state", "NY"));
    assert_eq!(result.operation, OperationKind::Update);
    assert_eq!(result.columns, vec!["updated_rows"]);
    assert_eq!(result.rows[0].get_integer("updated_rows"), Some(4));

    let all = fixture.assert_query_succeeds(QueryBuilder::select("students"));
    assert_eq!(all.column_values("state"), vec!["NY"; 4]);
}

#[test]
fn test_update_with_filter_changes_matching_rows_only() {
    let fixture = TestFixture::with_school_data().expect("Failed to create fixture");

    let result = fixture.assert_query_succeeds(
        QueryBuilder::update("students")
            .set("state", "NV")
            .set("name", "Cal")
            .filter("state", "CA"),
    );
    assert_eq!(result.rows[0].get_integer("updated_rows"), Some(2));
    assert_eq!(
        fixture.read_table("students"),
        "id,name,state\n1,Cal,NV\n2,Bob,TX\n3,Cal,NV\n4,Dan,\n"
    );
}

#[test]
fn test_update_matching_nothing_leaves_file_untouched() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    let original = "id,name,state\r\n1,Alice,CA\r\n2,Bob,TX\r\n";
    fixture.write_table("students", original).unwrap();

    let result = fixture.assert_query_succeeds(
        QueryBuilder::update("students")
            .set("state", "WA")
            .filter("name", "Nobody"),
    );
    assert_eq!(result.rows[0].get_integer("updated_rows"), Some(0));
    assert_eq!(fixture.read_table("students"), original);
}

#[test]
fn test_delete_counts_and_rewrites() {
    let fixture = TestFixture::with_school_data().expect("Failed to create fixture");

    let result = fixture.assert_query_succeeds(
        QueryBuilder::delete("enrollments").filter("course", "Math"),
    );
    assert_eq!(result.operation, OperationKind::Delete);
    assert_eq!(result.rows[0].get_integer("deleted_rows"), Some(3));
    assert_eq!(
        fixture.read_table("enrollments"),
        "id,student_id,course,grade\n2,1,History,75\n4,2,Art,\n6,3,Art,8\n"
    );

    let result = fixture.assert_query_succeeds(
        QueryBuilder::delete("enrollments").filter("course", "Math"),
    );
    assert_eq!(result.rows[0].get_integer("deleted_rows"), Some(0));

    let result = fixture.assert_query_succeeds(QueryBuilder::delete("enrollments"));
    assert_eq!(result.rows[0].get_integer("deleted_rows"), Some(3));
    assert_eq!(fixture.row_count("enrollments"), 0);
}

#[test]
fn test_insert_fills_unspecified_columns_with_empty() {
    let fixture = TestFixture::with_students().expect("Failed to create fixture");

    let result = fixture.assert_query_succeeds(QueryBuilder::insert("students").set("name", "Eve"));
    assert_eq!(result.rows_affected, 1);
    assert_eq!(
        fixture.read_table("students"),
        "id,name,state\n1,Alice,CA\n2,Bob,TX\n3,Eve,\n"
    );

    // An empty payload still appends a row with a fresh id
    let result = fixture.assert_query_succeeds(
        QueryBuilder::insert("students").payload(Payload::new()),
    );
    assert_eq!(result.generated_id(), Some(4));
}

#[test]
fn test_invalid_payload_has_no_side_effects() {
    let fixture = TestFixture::with_students().expect("Failed to create fixture");
    let original = fixture.read_table("students");

    let queries = [
        QueryBuilder::insert("students").set("name", "Eve").set("age", "20"),
        QueryBuilder::update("students").set("name", "Eve").set("age", "20"),
        QueryBuilder::update("students").set("name", "Eve").filter("age", "20"),
        QueryBuilder::delete("students").filter("age", "20"),
    ];
    for query in queries {
        let err = fixture.assert_query_fails(query);
        assert!(
            matches!(
                err,
                TableError::UnknownColumn { ref column, ref table }
                    if column == "age" && table == "students"
            ),
            "unexpected error: {}",
            err
        );
        assert_eq!(fixture.read_table("students"), original);
    }
}

#[test]
fn test_not_ready_queries() {
    let fixture = TestFixture::with_students().expect("Failed to create fixture");

    for operation in [
        OperationKind::Select,
        OperationKind::Insert,
        OperationKind::Update,
        OperationKind::Delete,
    ] {
        let err = fixture.assert_query_fails(QueryBuilder::new(operation));
        assert!(matches!(err, TableError::NotReady(_)), "{}: {}", operation, err);
    }

    for query in [QueryBuilder::insert("students"), QueryBuilder::update("students")] {
        let err = fixture.assert_query_fails(query);
        assert!(matches!(err, TableError::NotReady(_)));
    }
}

#[test]
fn test_mutations_on_missing_table() {
    let fixture = TestFixture::new().expect("Failed to create fixture");

    let err = fixture.assert_query_fails(QueryBuilder::insert("ghosts").set("name", "Boo"));
    assert!(matches!(err, TableError::NotFound { .. }));
    assert!(!fixture.table_path("ghosts").exists());
}

#[test]
fn test_descriptor_from_json_executes() {
    let fixture = TestFixture::with_students().expect("Failed to create fixture");

    let descriptor = QueryDescriptor::from_json(
        r#"{"operation": "INSERT", "table": "students", "payload": {"name": "Eve", "state": "OR"}}"#,
    )
    .unwrap();
    let result = fixture.execute(descriptor).unwrap();
    assert_eq!(result.generated_id(), Some(3));

    let descriptor = QueryDescriptor::from_json(
        r#"{"operation": "SELECT", "table": "students", "projection": ["name"], "sort": {"column": "name", "direction": "desc"}}"#,
    )
    .unwrap();
    let result = fixture.execute(descriptor).unwrap();
    assert_eq!(result.column_values("name"), vec!["Eve", "Bob", "Alice"]);
}

#[test]
fn test_short_rows_are_padded_and_rewritten_full_width() {
    let fixture = TestFixture::new().expect("Failed to create fixture");
    fixture
        .write_table("students", "id,name,state\n1,Alice\n2,Bob,TX\n")
        .unwrap();

    let result = fixture.assert_query_succeeds(
        QueryBuilder::select("students").filter("state", ""),
    );
    assert_eq!(result.column_values("name"), vec!["Alice"]);

    fixture.assert_query_succeeds(QueryBuilder::insert("students").set("name", "Eve"));
    assert_eq!(
        fixture.read_table("students"),
        "id,name,state\n1,Alice,\n2,Bob,TX\n3,Eve,\n"
    );
}

#[test]
fn test_strict_arity_rejects_short_rows() {
    let fixture = TestFixture::with_config(EngineConfig {
        arity: ArityPolicy::Strict,
        ..EngineConfig::default()
    })
    .expect("Failed to create fixture");
    fixture
        .write_table("students", "id,name,state\n1,Alice\n")
        .unwrap();

    let err = fixture.assert_query_fails(QueryBuilder::select("students"));
    assert!(matches!(err, TableError::Malformed { line: 2, .. }));
}

#[test]
fn test_custom_delimiter_and_id_column() {
    let fixture = TestFixture::with_config(EngineConfig {
        delimiter: '\t',
        extension: "tsv".to_string(),
        id_column: "key".to_string(),
        ..EngineConfig::default()
    })
    .expect("Failed to create fixture");
    fixture
        .write_table("people", "key\tname\n7\tAlice\n")
        .unwrap();

    let result = fixture.assert_query_succeeds(
        QueryBuilder::insert("people").set("name", "Bob, Jr."),
    );
    assert_eq!(result.rows[0].get_integer("id"), Some(8));
    assert_eq!(
        fixture.read_table("people"),
        "key\tname\n7\tAlice\n8\tBob, Jr.\n"
    );
}
