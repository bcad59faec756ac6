//! End-to-end binary generator tests.
//!
//! Binary generators repeatedly decode a fixed-width pattern from the
//! front of a bit buffer, threading the remainder as their state, and
//! halt quietly once the remaining bits no longer fit the pattern.

use rill_tests::prelude::*;

fn byte_and_nibble_body(env: &Bindings) -> Value {
    Value::pair(
        env.get("x").cloned().unwrap_or(Value::Int(0)),
        env.get("y").cloned().unwrap_or(Value::Int(0)),
    )
}

#[test]
fn test_decodes_pairs_then_halts() {
    // GIVEN for <<x::8, y::4 <- [1, 2, 3, 4]>>, do: {x, y}
    let comprehension = Comprehension::new(
        vec![Clause::bits(
            vec![BitSegment::bind("x", 8), BitSegment::bind("y", 4)],
            |_: &Bindings| BitBuf::from_bytes(vec![1, 2, 3, 4]),
            Span::default(),
        )],
        byte_and_nibble_body,
        Span::default(),
    );

    // WHEN
    let collected: Vec<Value> = compile(comprehension).unwrap().collect();

    // THEN two 12-bit matches succeed, the trailing 8 bits halt the
    // generator without an error
    assert_eq!(
        collected,
        vec![
            Value::pair(Value::Int(1), Value::Int(0)),
            Value::pair(Value::Int(32), Value::Int(3)),
        ]
    );
}

#[test]
fn test_empty_buffer_yields_nothing() {
    let comprehension = Comprehension::new(
        vec![Clause::bits(
            vec![BitSegment::bind("x", 8)],
            |_: &Bindings| BitBuf::from_bytes(vec![]),
            Span::default(),
        )],
        var_body("x"),
        Span::default(),
    );

    let collected: Vec<Value> = compile(comprehension).unwrap().collect();

    assert!(collected.is_empty());
}

#[test]
fn test_literal_field_mismatch_halts() {
    // GIVEN records shaped <<0xAB, value::8>>; the third record's header
    // does not match
    let comprehension = Comprehension::new(
        vec![Clause::bits(
            vec![BitSegment::literal(0xAB, 8), BitSegment::bind("v", 8)],
            |_: &Bindings| BitBuf::from_bytes(vec![0xAB, 1, 0xAB, 2, 0xFF, 3]),
            Span::default(),
        )],
        var_body("v"),
        Span::default(),
    );

    // WHEN
    let collected: Vec<Value> = compile(comprehension).unwrap().collect();

    // THEN decoding stops at the bad header, keeping what matched
    assert_eq!(collected, vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn test_binary_source_sees_outer_bindings() {
    // GIVEN for x <- [1, 2], <<y::8 <- buffer_for(x)>>, do: {x, y}
    let comprehension = Comprehension::new(
        vec![
            Clause::bind(
                Pattern::bind("x"),
                int_source(vec![1, 2]),
                Span::default(),
            ),
            Clause::bits(
                vec![BitSegment::bind("y", 8)],
                |env: &Bindings| {
                    let x = env.get("x").and_then(Value::as_int).unwrap_or(0) as u8;
                    BitBuf::from_bytes(vec![x * 10, x * 10 + 1])
                },
                Span::default(),
            ),
        ],
        |env: &Bindings| {
            Value::pair(
                env.get("x").cloned().unwrap_or(Value::Int(0)),
                env.get("y").cloned().unwrap_or(Value::Int(0)),
            )
        },
        Span::default(),
    );

    // WHEN
    let collected: Vec<Value> = compile(comprehension).unwrap().collect();

    // THEN each outer binding decodes its own buffer to exhaustion
    assert_eq!(
        collected,
        vec![
            Value::pair(Value::Int(1), Value::Int(10)),
            Value::pair(Value::Int(1), Value::Int(11)),
            Value::pair(Value::Int(2), Value::Int(20)),
            Value::pair(Value::Int(2), Value::Int(21)),
        ]
    );
}

#[test]
fn test_buffer_is_not_decoded_until_pulled() {
    use std::cell::Cell;
    use std::rc::Rc;

    let evaluated = Rc::new(Cell::new(false));
    let flag = evaluated.clone();
    let comprehension = Comprehension::new(
        vec![Clause::bits(
            vec![BitSegment::bind("x", 8)],
            move |_: &Bindings| {
                flag.set(true);
                BitBuf::from_bytes(vec![7])
            },
            Span::default(),
        )],
        var_body("x"),
        Span::default(),
    );

    let mut seq = compile(comprehension).unwrap();
    assert!(!evaluated.get());

    assert_eq!(seq.next(), Some(Value::Int(7)));
    assert!(evaluated.get());
}
