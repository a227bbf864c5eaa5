//! Tests for query evaluation and JSON batch files.

use pivot::query::evaluate_batch;
use pivot::{Answer, Query};

#[test]
fn test_every_op_evaluates() {
    let queries = vec![
        Query::Median {
            a: vec![1, 2],
            b: vec![3, 4],
        },
        Query::Kth {
            a: vec![2, 3, 6, 7, 9],
            b: vec![1, 4, 8, 10],
            k: 5,
        },
        Query::Rotated {
            seq: vec![4, 5, 6, 7, 0, 1, 2],
            target: 0,
        },
        Query::Range {
            seq: vec![5, 7, 7, 8, 8, 10],
            target: 8,
        },
        Query::NextGreater {
            seq: vec![2, 5, -3, -4, 6, 7, 2],
            circular: true,
        },
        Query::Digits {
            digits: "462839".to_string(),
            k: 2,
            min: false,
        },
    ];

    let answers: Vec<Option<Answer>> = evaluate_batch(&queries, false)
        .into_iter()
        .map(|o| o.ok)
        .collect();

    assert_eq!(
        answers,
        vec![
            Some(Answer::Median(Some(2.5))),
            Some(Answer::Element(Some(6))),
            Some(Answer::Rotated {
                index: 4,
                offset: 4
            }),
            Some(Answer::Range([3, 4])),
            Some(Answer::Values(vec![5, 6, 6, 6, 7, -1, 5])),
            Some(Answer::Digits("6839".to_string())),
        ]
    );
}

#[test]
fn test_invalid_queries_report_errors_in_place() {
    let queries = vec![
        Query::Rotated {
            seq: vec![1, 1, 2],
            target: 1,
        },
        Query::Median {
            a: vec![1],
            b: vec![2],
        },
    ];
    let outcomes = evaluate_batch(&queries, false);
    assert_eq!(outcomes[0].op, "rotated");
    assert!(outcomes[0].ok.is_none());
    assert!(outcomes[0].error.as_deref().unwrap().contains("duplicate"));
    assert!(outcomes[1].is_ok());
}

#[test]
fn test_kth_out_of_range_is_not_an_error() {
    let outcome = Query::Kth {
        a: vec![1],
        b: vec![],
        k: 2,
    }
    .evaluate(false);
    assert!(outcome.is_ok());
    assert_eq!(outcome.ok, Some(Answer::Element(None)));
}

#[cfg(feature = "serde_json")]
mod json {
    use pivot::query::{evaluate_batch, load_batch, parse_batch};
    use pivot::Query;
    use std::io::Write;

    #[test]
    fn test_load_batch_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"op": "median", "a": [1, 3], "b": [2]}},
                {{"op": "range", "seq": [5, 7, 7, 8, 8, 10], "target": 6}},
                {{"op": "digits", "digits": "10", "k": 2, "min": true}}
            ]"#
        )
        .unwrap();

        let queries = load_batch(file.path()).unwrap();
        assert_eq!(queries.len(), 3);
        assert_eq!(
            queries[2],
            Query::Digits {
                digits: "10".to_string(),
                k: 2,
                min: true
            }
        );

        let json = serde_json::to_value(evaluate_batch(&queries, false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"op": "median", "ok": 2.0},
                {"op": "range", "ok": [-1, -1]},
                {"op": "digits", "ok": "0"}
            ])
        );
    }

    #[test]
    fn test_load_batch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_batch(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.starts_with("Failed to read"));
    }

    #[test]
    fn test_stats_appear_only_for_stack_queries() {
        let queries = parse_batch(
            r#"[
                {"op": "next_greater", "seq": [3, 2, 1], "circular": false},
                {"op": "rotated", "seq": [2, 3, 1], "target": 1}
            ]"#,
        )
        .unwrap();
        let json = serde_json::to_value(evaluate_batch(&queries, true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"op": "next_greater", "ok": [-1, -1, -1], "stats": {"pushes": 3, "pops": 0}},
                {"op": "rotated", "ok": {"index": 2, "offset": 2}}
            ])
        );
    }

    #[test]
    fn test_error_outcome_shape() {
        let queries = parse_batch(r#"[{"op": "digits", "digits": "4x", "k": 1}]"#).unwrap();
        let json = serde_json::to_value(evaluate_batch(&queries, false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"op": "digits", "error": "non-digit character 'x' at position 1"}
            ])
        );
    }
}
