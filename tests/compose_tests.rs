//! Integration tests for right-to-left composition.

use std::cell::RefCell;

use pipework::callable::{Callable, by_ref};
use pipework::{Compose, compose, pipe};
use rstest::rstest;

fn add3(value: i32) -> i32 {
    value + 3
}

fn mul3(value: i32) -> i32 {
    value * 3
}

fn add(first: i32, second: i32) -> i32 {
    first + second
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
#[case(2, 9)]
#[case(0, 3)]
#[case(-1, 0)]
fn test_compose_applies_rightmost_first(#[case] input: i32, #[case] expected: i32) {
    assert_eq!(compose((add3, mul3)).invoke((input,)), expected);
    assert_eq!(add3(mul3(input)), expected);
}

#[test]
fn test_compose_records_call_order() {
    let log = RefCell::new(Vec::new());
    let record = |name: &'static str| {
        let log = &log;
        move |value: u8| {
            log.borrow_mut().push(name);
            value
        }
    };

    compose((record("outer"), record("middle"), record("inner"))).invoke((0,));
    assert_eq!(*log.borrow(), vec!["inner", "middle", "outer"]);
}

#[test]
fn test_compose_innermost_receives_all_arguments() {
    let doubled_sum = compose((|value: i32| value * 2, add));
    assert_eq!(doubled_sum.invoke((3, 4)), 14);
}

#[test]
fn test_compose_changes_types_from_right_to_left() {
    let shout = compose((
        |text: String| format!("{text}!"),
        |text: &str| text.to_uppercase(),
    ));
    assert_eq!(shout.invoke(("hey",)), "HEY!");
}

// =============================================================================
// Relation to pipe
// =============================================================================

#[rstest]
#[case(-7)]
#[case(0)]
#[case(11)]
fn test_compose_mirrors_pipe(#[case] input: i32) {
    let forward = pipe((add3, mul3, |value: i32| value - 1));
    let backward = compose((|value: i32| value - 1, mul3, add3));
    assert_eq!(forward.invoke((input,)), backward.invoke((input,)));
}

#[test]
fn test_compose_of_pipes() {
    let inner = pipe((add3, mul3));
    let outer = compose((by_ref(&inner), by_ref(&inner)));
    assert_eq!(outer.invoke((0,)), 36);
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_compose_macro_matches_constructor() {
    let from_macro = pipework::compose![add3, mul3];
    let from_function = Compose::new((add3, mul3));
    assert_eq!(from_macro.invoke((4,)), from_function.invoke((4,)));
}

#[test]
fn test_compose_single_function_is_that_function() {
    assert_eq!(compose((mul3,)).invoke((5,)), mul3(5));
}

#[test]
fn test_compose_functions_accessors() {
    let mut composed = compose((add3 as fn(i32) -> i32, mul3 as fn(i32) -> i32));
    assert_eq!((composed.functions().0)(1), 4);

    composed.functions_mut().0 = mul3;
    assert_eq!(composed.invoke((2,)), 18);
    assert_eq!((composed.into_functions().1)(2), 6);
}
