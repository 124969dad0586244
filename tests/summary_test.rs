use oop_exercises::model::{CategoryCreate, CategorySummary, NumericSummary, SummaryCreate};
use oop_exercises::validation::{FailureKind, Number, Value};

#[test]
fn test_numeric_summary_statistics() {
    let s = NumericSummary::new(vec![10, 20, 30], "Sales", "USD").unwrap();
    assert_eq!(s.mean(), 20.0);
    assert_eq!(s.minimum(), Number::Int(10));
    assert_eq!(s.maximum(), Number::Int(30));
    assert_eq!(s.count(), 3);
    assert_eq!(s.total(), Number::Int(60));
    assert_eq!(s.report(), "Sales summary: mean=20.0 USD, min=10 USD, max=30 USD");
    assert_eq!(s.to_string(), "NumericSummary(name='Sales', unit='USD', count=3)");
}

#[test]
fn test_numeric_summary_mixed_numbers() {
    let data: Vec<Value> = vec![3.into(), 1.5.into(), 2.into()];
    let s = NumericSummary::new(data, "Numbers", "n").unwrap();
    assert_eq!(s.minimum(), Number::Float(1.5));
    assert_eq!(s.maximum(), Number::Int(3));
    assert_eq!(s.total(), Number::Float(6.5));
    assert_eq!(s.total().to_string(), "6.5");

    // First extremal element wins
    let ties: Vec<Value> = vec![1.into(), 1.0.into()];
    let s = NumericSummary::new(ties, "Ties", "n").unwrap();
    assert!(s.minimum().is_int());
    assert!(s.maximum().is_int());
}

#[test]
fn test_numeric_summary_rejections() {
    let empty: Vec<i32> = Vec::new();
    let err = NumericSummary::new(empty, "Test", "kg").unwrap_err();
    assert_eq!(err.kind(), FailureKind::Range);
    assert_eq!(err.to_string(), "data cannot be empty");

    let mixed: Vec<Value> = vec![1.into(), "two".into()];
    assert_eq!(
        NumericSummary::new(mixed, "Test", "kg").unwrap_err().kind(),
        FailureKind::Type
    );
    assert_eq!(
        NumericSummary::new(vec![1], "   ", "kg").unwrap_err().kind(),
        FailureKind::Range
    );
    assert_eq!(
        NumericSummary::new(vec![1], "Test", 5).unwrap_err().kind(),
        FailureKind::Type
    );
}

#[test]
fn test_numeric_summary_from_payload() {
    let ok = NumericSummary::try_from(SummaryCreate {
        data: vec![2, 4, 6].into(),
        name: "Avg".into(),
        unit: "n".into(),
    })
    .unwrap();
    assert_eq!(ok.mean(), 4.0);

    let err = NumericSummary::try_from(SummaryCreate {
        data: "1,2,3".into(),
        name: "Avg".into(),
        unit: "n".into(),
    })
    .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Type);
    assert_eq!(err.field(), "data");
}

#[test]
fn test_category_summary_statistics() {
    let s = CategorySummary::new(["Apple", "Banana", "Apple", "Orange"], "Fruits").unwrap();
    assert_eq!(s.total(), 4);
    assert_eq!(
        s.most_common(2),
        vec![("Apple".to_string(), 2), ("Banana".to_string(), 1)]
    );
    assert_eq!(s.unique_count(), 3);
    assert_eq!(s.proportion("Apple"), 0.5);
    assert_eq!(s.proportion("Grape"), 0.0);
    assert_eq!(s.to_string(), "CategorySummary(name='Fruits', total=4)");
}

#[test]
fn test_category_summary_ties_and_limits() {
    let s = CategorySummary::new(["C", "B", "A", "B", "C"], "Letters").unwrap();
    assert_eq!(
        s.most_common(10),
        vec![
            ("C".to_string(), 2),
            ("B".to_string(), 2),
            ("A".to_string(), 1)
        ]
    );
    assert!(s.most_common(0).is_empty());

    let thirds = CategorySummary::new(["A", "B", "A"], "Test").unwrap();
    assert_eq!(thirds.proportion("A"), 2.0 / 3.0);
}

#[test]
fn test_category_summary_accepts_empty_data() {
    let empty: [&str; 0] = [];
    let s = CategorySummary::new(empty, "Nothing").unwrap();
    assert_eq!(s.total(), 0);
    assert_eq!(s.unique_count(), 0);
    assert!(s.most_common(3).is_empty());
    assert_eq!(s.proportion("Apple"), 0.0);
}

#[test]
fn test_category_summary_rejections() {
    let mixed: Vec<Value> = vec!["A".into(), 1.into()];
    assert_eq!(
        CategorySummary::new(mixed, "Test").unwrap_err().kind(),
        FailureKind::Type
    );
    assert_eq!(
        CategorySummary::new(["A"], "").unwrap_err().kind(),
        FailureKind::Range
    );

    let err = CategorySummary::try_from(CategoryCreate {
        data: Value::Int(3),
        name: "Test".into(),
    })
    .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Type);
}
