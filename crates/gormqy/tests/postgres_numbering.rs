//! `$n` numbering for the tokio-postgres hand-off.

#![cfg(feature = "postgres")]

use gormqy::{Query, QyError, Value, concat_col, number_placeholders, number_placeholders_from};
use tokio_postgres::types::{ToSql, Type};

#[test]
fn numbers_placeholders_left_to_right() {
    let mut q = Query::new();
    q.condition()
        .eq("name", "Tom")
        .and()
        .gt("age", 10)
        .end_with_group()
        .or_condition()
        .eq("name", "Sam")
        .and()
        .le("age", 5)
        .end_with_group();

    let numbered = q.to_numbered().unwrap();
    assert_eq!(
        numbered.sql(),
        "(name = $1 AND age > $2) OR (name = $3 AND age <= $4)"
    );
    assert_eq!(numbered.params(), q.where_values());
}

#[test]
fn expands_membership_lists() {
    let mut q = Query::new();
    q.condition()
        .in_list("id", [1, 2, 3])
        .and()
        .not_in("role", ["guest"])
        .and()
        .eq("active", true)
        .end();

    let (sql, params) = q.to_numbered().unwrap().into_parts();
    assert_eq!(sql, "id IN ($1, $2, $3) AND role NOT IN ($4) AND active = $5");
    assert_eq!(
        params,
        vec![
            Value::Int(1),
            Value::Int(2),
            Value::Int(3),
            Value::from("guest"),
            Value::Bool(true),
        ]
    );
}

#[test]
fn empty_list_renders_null() {
    let mut q = Query::new();
    q.condition().in_list("id", Vec::<i64>::new()).end();

    let numbered = q.to_numbered().unwrap();
    assert_eq!(numbered.sql(), "id IN (NULL)");
    assert!(numbered.params().is_empty());
}

#[test]
fn empty_not_in_matches_every_row() {
    let mut q = Query::new();
    q.condition()
        .eq("a", 1)
        .and()
        .not_in("id", Vec::<i64>::new())
        .end();

    let numbered = q.to_numbered().unwrap();
    assert_eq!(numbered.sql(), "a = $1 AND id <> ALL('{}')");
    assert_eq!(numbered.params(), &[Value::Int(1)]);
}

#[test]
fn empty_not_in_keeps_surrounding_brackets() {
    let mut q = Query::new();
    q.condition()
        .begin_group()
        .not_in("id", Vec::<i64>::new())
        .or()
        .in_list("role", Vec::<&str>::new())
        .end_group()
        .and()
        .eq("b", 2)
        .end_with_group();

    let numbered = q.to_numbered().unwrap();
    assert_eq!(
        numbered.sql(),
        "((id <> ALL('{}') OR role IN (NULL)) AND b = $1)"
    );
}

#[test]
fn question_mark_in_literal_is_not_a_placeholder() {
    let mut q = Query::new();
    q.condition()
        .contain(concat_col("?", ["a", "b"]), "x")
        .and()
        .eq("c", 1)
        .end();

    let numbered = q.to_numbered().unwrap();
    assert_eq!(numbered.sql(), "concat_ws('?', a, b) LIKE $1 AND c = $2");
    assert_eq!(numbered.params().len(), 2);
}

#[test]
fn bare_question_mark_in_column_still_counts() {
    let mut q = Query::new();
    q.condition().eq("meta ? 'k' AND flag", true).end();

    let err = q.to_numbered().unwrap_err();
    assert!(matches!(
        err,
        QyError::ParamMismatch {
            placeholders: 2,
            values: 1
        }
    ));
}

#[test]
fn list_outside_in_binds_as_array() {
    let mut q = Query::new();
    q.condition().eq("tags", vec!["a", "b"]).end();

    let numbered = q.to_numbered().unwrap();
    assert_eq!(numbered.sql(), "tags = $1");
    assert_eq!(numbered.params_ref().len(), 1);
}

#[test]
fn numbering_with_offset() {
    let values = vec![Value::from(1), Value::from(vec![2, 3])];
    let numbered = number_placeholders_from("a = ? AND b IN (?)", &values, 2).unwrap();
    assert_eq!(numbered.sql(), "a = $3 AND b IN ($4, $5)");
}

#[test]
fn mismatched_counts_are_rejected() {
    let err = number_placeholders("a = ? AND b = ?", &[Value::from(1)]).unwrap_err();
    assert!(err.is_param_mismatch());
    assert!(matches!(
        err,
        QyError::ParamMismatch {
            placeholders: 2,
            values: 1
        }
    ));
}

#[test]
fn empty_query_numbers_to_empty() {
    let numbered = Query::new().to_numbered().unwrap();
    assert_eq!(numbered.sql(), "");
    assert!(numbered.params().is_empty());
}

#[test]
fn int_values_narrow_to_column_type() {
    let mut buf = bytes::BytesMut::new();
    Value::from(7).to_sql_checked(&Type::INT4, &mut buf).unwrap();
    assert_eq!(&buf[..], &7i32.to_be_bytes());

    let mut buf = bytes::BytesMut::new();
    Value::from(7).to_sql_checked(&Type::INT8, &mut buf).unwrap();
    assert_eq!(&buf[..], &7i64.to_be_bytes());

    let mut buf = bytes::BytesMut::new();
    let err = Value::from(70_000)
        .to_sql_checked(&Type::INT2, &mut buf)
        .map(|_| ())
        .unwrap_err();
    assert!(err.to_string().contains("INT2"));
}

#[test]
fn text_and_null_encode() {
    let mut buf = bytes::BytesMut::new();
    Value::from("Tom").to_sql_checked(&Type::TEXT, &mut buf).unwrap();
    assert_eq!(&buf[..], b"Tom");

    let mut buf = bytes::BytesMut::new();
    let is_null = Value::Null.to_sql_checked(&Type::TEXT, &mut buf).unwrap();
    assert!(matches!(is_null, tokio_postgres::types::IsNull::Yes));
}

#[test]
fn float_narrows_for_float4() {
    let mut buf = bytes::BytesMut::new();
    Value::from(1.5).to_sql_checked(&Type::FLOAT4, &mut buf).unwrap();
    assert_eq!(&buf[..], &1.5f32.to_be_bytes());
}
