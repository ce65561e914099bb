use super::*;
use proptest::prelude::*;

fn key_term(table: &DbTable, column: &str, value: Value, kind: FieldKind) -> DbExpr {
    DbExpr::equal(
        DbExpr::column(table.clone(), DbColumn::new(column, kind)),
        DbExpr::parameter(value, kind),
    )
}

fn order_lines() -> DbTable {
    DbTable::new("OrderLine")
}

#[test]
fn and_all_left_folds_in_order() {
    let table = order_lines();
    let a = key_term(&table, "OrderId", Value::Int64(10), FieldKind::Int64);
    let b = key_term(&table, "LineNo", Value::Int32(2), FieldKind::Int32);
    let c = key_term(&table, "Sku", Value::from("x"), FieldKind::Text);

    let folded = DbExpr::and_all([a.clone(), b.clone(), c.clone()]).expect("non-empty");

    assert_eq!(folded, DbExpr::and(DbExpr::and(a.clone(), b.clone()), c.clone()));
    assert_eq!(folded.conjuncts(), vec![&a, &b, &c]);
    assert_eq!(folded.node_count(), 11);
}

#[test]
fn and_all_of_nothing_is_none() {
    assert_eq!(DbExpr::and_all(Vec::new()), None);
}

#[test]
fn single_term_is_not_wrapped() {
    let term = key_term(&order_lines(), "OrderId", Value::Int64(1), FieldKind::Int64);

    assert_eq!(DbExpr::and_all([term.clone()]), Some(term.clone()));
    assert_eq!(term.conjuncts(), vec![&term]);
}

#[test]
fn display_renders_qualified_columns_and_typed_parameters() {
    let table = order_lines().with_schema("sales");
    let expr = DbExpr::and(
        key_term(&table, "OrderId", Value::Int64(10), FieldKind::Int64),
        key_term(&table, "LineNo", Value::Int32(2), FieldKind::Int32),
    );

    assert_eq!(
        expr.to_string(),
        "(sales.OrderLine.OrderId = @10:int64 AND sales.OrderLine.LineNo = @2:int32)"
    );
}

#[test]
fn equal_trees_share_a_fingerprint() {
    let table = order_lines();
    let build = || {
        DbExpr::and(
            key_term(&table, "OrderId", Value::Int64(10), FieldKind::Int64),
            key_term(&table, "LineNo", Value::Int32(2), FieldKind::Int32),
        )
    };

    assert_eq!(build().fingerprint(), build().fingerprint());
}

#[test]
fn fingerprint_distinguishes_integer_width() {
    let table = order_lines();
    let narrow = key_term(&table, "Id", Value::Int32(1), FieldKind::Int64);
    let wide = key_term(&table, "Id", Value::Int64(1), FieldKind::Int64);

    assert_ne!(narrow.fingerprint(), wide.fingerprint());
}

#[test]
fn fingerprint_distinguishes_table_and_schema() {
    let plain = key_term(&order_lines(), "Id", Value::Int64(1), FieldKind::Int64);
    let other = key_term(&DbTable::new("Order"), "Id", Value::Int64(1), FieldKind::Int64);
    let scoped = key_term(
        &order_lines().with_schema("sales"),
        "Id",
        Value::Int64(1),
        FieldKind::Int64,
    );

    assert_ne!(plain.fingerprint(), other.fingerprint());
    assert_ne!(plain.fingerprint(), scoped.fingerprint());
}

#[test]
fn fingerprint_distinguishes_operand_order() {
    let table = order_lines();
    let a = key_term(&table, "OrderId", Value::Int64(10), FieldKind::Int64);
    let b = key_term(&table, "LineNo", Value::Int32(2), FieldKind::Int32);

    assert_ne!(
        DbExpr::and(a.clone(), b.clone()).fingerprint(),
        DbExpr::and(b, a).fingerprint()
    );
}

proptest! {
    #[test]
    fn fingerprint_tracks_structural_equality(
        left in prop::collection::vec(any::<i64>(), 1..6),
        right in prop::collection::vec(any::<i64>(), 1..6),
    ) {
        let table = order_lines();
        let build = |values: &[i64]| {
            DbExpr::and_all(
                values
                    .iter()
                    .map(|v| key_term(&table, "Id", Value::Int64(*v), FieldKind::Int64)),
            )
            .expect("non-empty")
        };

        let (l, r) = (build(&left), build(&right));
        prop_assert_eq!(l == r, l.fingerprint() == r.fingerprint());
    }
}
