use anyhow::Result;
use atomiser::read::read_all;
use atomiser::number::Number;
use atomiser::value::{Value, list, string, symbol};

const INPUT: &[u8] = include_bytes!("t-input.lisp");

fn int(n: i64) -> Value {
    Value::Number(Number::Integer(n))
}

#[test]
fn t1() -> Result<()> {
    let vals = read_all(INPUT)?;
    assert_eq!(vals.len(), 9);

    assert_eq!(vals[0], list(vec![
        symbol("define"),
        list(vec![symbol("square"), symbol("x")]),
        list(vec![symbol("*"), symbol("x"), symbol("x")])]));
    assert_eq!(vals[1], Value::Array(vec![int(0), int(1), int(2), int(3)]));
    assert_eq!(vals[2], string("a string with \"quotes\" and a\ttab"));
    assert_eq!(vals[3], list(vec![
        int(10), int(255), int(16), int(2), int(8), int(0),
        Value::Number(Number::Float(11.9)),
        Value::Number(Number::Float(0.5))]));

    let dotted = vals[4].as_list().expect("list");
    assert_eq!(dotted.len(), 1);
    assert_eq!(dotted.dotted_tail(), Some(&symbol("b")));

    assert_eq!(vals[5], list(vec![
        symbol("nested"),
        list(vec![symbol("lists"),
                  Value::Array(vec![symbol("and"), string("arrays")])]),
        list(vec![])]));
    assert_eq!(vals[6], Value::Array(vec![]));
    assert!(matches!(vals[7], Value::Number(Number::BigInteger(_))));
    assert_eq!(vals[8], list(vec![symbol("x"), symbol("..."), symbol(".y")]));
    Ok(())
}
