use super::*;
use crate::test_fixtures::{CITY, USER};

#[test]
fn strip_convert_removes_nested_wrappers_only_at_top() {
    let user = Param::new("user", &USER);
    let inner = user.member("active");
    let wrapped = inner.clone().boxed().convert(ExprType::Scalar(FieldKind::Bool));

    assert_eq!(wrapped.strip_convert(), &inner);
    assert_eq!(inner.strip_convert(), &inner);
}

#[test]
fn member_type_comes_from_entity_model() {
    let user = Param::new("user", &USER);

    assert_eq!(
        user.member("id").static_type(),
        ExprType::Scalar(FieldKind::Int64)
    );
    assert_eq!(
        user.member("name").static_type(),
        ExprType::Scalar(FieldKind::Text)
    );
    assert_eq!(user.member("nope").static_type(), ExprType::Unknown);
    assert_eq!(user.expr().static_type(), ExprType::Entity(USER.path));
}

#[test]
fn comparisons_and_logic_are_boolean() {
    let user = Param::new("user", &USER);
    let city = Param::new("city", &CITY);
    let cond = user
        .member("city_id")
        .equal(city.member("id"))
        .or(user.member("active"));

    assert!(cond.static_type().is_bool());
    assert!(!Expr::constant(1i64).static_type().is_bool());
    assert_eq!(Expr::join_type(JoinType::Left).static_type(), ExprType::JoinType);
}

#[test]
fn constants_fold_through_conversions_and_logic() {
    let folded = Expr::constant(1i64)
        .equal(Expr::constant(1i64))
        .and(Expr::constant(true).boxed())
        .fold_constant();

    assert_eq!(folded, Some(Literal::Value(Value::Bool(true))));
    assert_eq!(
        Expr::join_type(JoinType::Right).boxed().fold_constant(),
        Some(Literal::JoinType(JoinType::Right))
    );
}

#[test]
fn parameter_dependent_nodes_do_not_fold() {
    let user = Param::new("user", &USER);

    assert_eq!(user.member("active").fold_constant(), None);
    assert_eq!(
        Expr::constant(true).and(user.member("active")).fold_constant(),
        None
    );
    // && over non-boolean operands has no constant value
    assert_eq!(
        Expr::constant(1i64).and(Expr::constant(true)).fold_constant(),
        None
    );
}

#[test]
fn referenced_params_are_deduplicated_in_first_use_order() {
    let user = Param::new("user", &USER);
    let city = Param::new("city", &CITY);
    let cond = city
        .member("id")
        .equal(user.member("city_id"))
        .and(city.member("name").not_equal(Expr::constant("x")));

    assert_eq!(cond.referenced_params(), vec![&city, &user]);
}

#[test]
fn display_parenthesizes_nested_logic() {
    let user = Param::new("user", &USER);
    let city = Param::new("city", &CITY);
    let cond = user
        .member("city_id")
        .equal(city.member("id"))
        .and(user.member("active").or(city.member("name").equal(Expr::constant("x"))));

    assert_eq!(
        cond.to_string(),
        r#"user.city_id == city.id && (user.active || city.name == "x")"#
    );
}

#[test]
fn lambda_position_uses_parameter_identity() {
    let user = Param::new("user", &USER);
    let city = Param::new("city", &CITY);
    let lambda = Lambda::new(vec![user.clone(), city.clone()], Expr::array(Vec::new()));

    assert_eq!(lambda.position(&city), Some(1));
    assert_eq!(lambda.position(&Param::new("city", &USER)), None);
    assert_eq!(lambda.to_string(), "|user, city| []");
}
