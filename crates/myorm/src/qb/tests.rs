//! Integration tests for the qb module.

use mysql_async::Value;

use crate::qb::{self, Connector, compile};

fn placeholders(sql: &str) -> usize {
    sql.chars().filter(|&c| c == '?').count()
}

#[test]
fn test_eq() {
    let (sql, args) = qb::eq("id", 1).render("users").unwrap();
    assert_eq!(sql, "`users`.`id` = ?");
    assert_eq!(args, vec![Value::from(1)]);
}

#[test]
fn test_comparison_operators() {
    for (expr, op) in [
        (qb::neq("n", 1), "<>"),
        (qb::gt("n", 1), ">"),
        (qb::lt("n", 1), "<"),
        (qb::gte("n", 1), ">="),
        (qb::lte("n", 1), "<="),
    ] {
        let (sql, args) = expr.render("t").unwrap();
        assert_eq!(sql, format!("`t`.`n` {op} ?"));
        assert_eq!(args.len(), 1);
    }
}

#[test]
fn test_between() {
    let (sql, args) = qb::between("age", 18, 65).render("users").unwrap();
    assert_eq!(sql, "`users`.`age` BETWEEN ? AND ?");
    assert_eq!(args, vec![Value::from(18), Value::from(65)]);
}

#[test]
fn test_null_checks() {
    let (sql, args) = qb::is_null("deleted_at").render("users").unwrap();
    assert_eq!(sql, "`users`.`deleted_at` IS NULL");
    assert!(args.is_empty());

    let (sql, _) = qb::not_null("deleted_at").render("users").unwrap();
    assert_eq!(sql, "`users`.`deleted_at` IS NOT NULL");
}

#[test]
fn test_like_variants() {
    let (_, args) = qb::like("name", "al").render("users").unwrap();
    assert_eq!(args, vec![Value::from("%al%")]);

    let (_, args) = qb::starts_with("name", "al").render("users").unwrap();
    assert_eq!(args, vec![Value::from("al%")]);

    let (_, args) = qb::ends_with("name", "ce").render("users").unwrap();
    assert_eq!(args, vec![Value::from("%ce")]);
}

#[test]
fn test_in_list() {
    let (sql, args) = qb::in_list("id", vec![1, 2, 3]).render("t").unwrap();
    assert_eq!(sql, "`t`.`id` IN (?, ?, ?)");
    assert_eq!(args, vec![Value::from(1), Value::from(2), Value::from(3)]);
}

#[test]
fn test_in_list_single_element() {
    let (sql, args) = qb::in_list("id", vec![7]).render("t").unwrap();
    assert_eq!(sql, "`t`.`id` IN (?)");
    assert_eq!(args.len(), 1);
}

#[test]
fn test_in_list_empty_renders_always_false() {
    // Documented policy: an empty IN list is invalid SQL, so the predicate
    // degenerates to a clause that matches no rows.
    let (sql, args) = qb::in_list("id", Vec::<i64>::new()).render("t").unwrap();
    assert_eq!(sql, "1=0");
    assert!(args.is_empty());
}

#[test]
fn test_raw_with_args() {
    let (sql, args) = qb::raw("LENGTH(`t`.`name`) > ?", [3]).render("t").unwrap();
    assert_eq!(sql, "LENGTH(`t`.`name`) > ?");
    assert_eq!(args.len(), 1);
}

#[test]
fn test_custom_builder_sees_table() {
    let expr = qb::custom(|table| Ok((format!("`{table}`.`flag` = 1"), Vec::new())));
    let (sql, _) = expr.render("audit").unwrap();
    assert_eq!(sql, "`audit`.`flag` = 1");
}

#[test]
fn test_or_of_ands_brackets_both_sides() {
    let exprs = vec![qb::or(vec![
        qb::and(vec![qb::eq("a", 1), qb::eq("b", 2)]),
        qb::and(vec![qb::eq("c", 3), qb::eq("d", 4)]),
    ])];
    let (sql, args) = compile("t", Connector::And, false, &exprs).unwrap();
    assert_eq!(
        sql,
        "((`t`.`a` = ? AND `t`.`b` = ?) OR (`t`.`c` = ? AND `t`.`d` = ?))"
    );
    assert_eq!(placeholders(&sql), args.len());
}

#[test]
fn test_placeholder_count_matches_args() {
    let exprs = vec![
        qb::eq("a", 1),
        qb::between("b", 2, 3),
        qb::in_list("c", vec![4, 5, 6]),
        qb::or(vec![qb::eq("d", 7), qb::is_null("e")]),
        qb::raw("`t`.`f` REGEXP ?", ["^x"]),
    ];
    let (sql, args) = compile("t", Connector::And, false, &exprs).unwrap();
    assert_eq!(placeholders(&sql), args.len());
    assert_eq!(args.len(), 8);
}

#[test]
fn test_argument_order_is_left_to_right() {
    let exprs = vec![
        qb::or(vec![qb::eq("a", 1), qb::eq("b", 2)]),
        qb::in_list("c", vec![3, 4]),
    ];
    let (_, args) = compile("t", Connector::And, false, &exprs).unwrap();
    assert_eq!(
        args,
        vec![
            Value::from(1),
            Value::from(2),
            Value::from(3),
            Value::from(4),
        ]
    );
}
