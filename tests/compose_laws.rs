//! Property-based tests for the combinator laws.
//!
//! ## Pipe Laws
//! - **Identity**: `pipe((f,)).invoke(a) == f(a)`
//! - **Chaining**: `pipe((f, g)).invoke(a) == g(f(a))`
//! - **Associativity**: `pipe((pipe((f, g)), h)) == pipe((f, pipe((g, h))))`
//!
//! ## Compose Laws
//! - **Duality**: `compose((g, f)).invoke(a) == pipe((f, g)).invoke(a)`
//!
//! ## Battery Laws
//! - **Ordering**: `battery((f, g)).invoke(a) == (f(a), g(a))`
//! - **Arity**: the result tuple has one slot per member, `()` included
//!
//! ## Auto-Unpack Laws
//! - **Spreading**: `auto_unpack(f).invoke(((a, b),)) == f(a, b)`
//! - **Transparency**: `auto_unpack(f).invoke((a,)) == f(a)` for non-tuple `a`

use std::cell::Cell;

use pipework::callable::{Callable, apply, owned};
use pipework::{auto_unpack, battery, compose, pipe};
use proptest::prelude::*;

fn add3(value: i32) -> i32 {
    value.wrapping_add(3)
}

fn mul3(value: i32) -> i32 {
    value.wrapping_mul(3)
}

fn add(first: i32, second: i32) -> i32 {
    first.wrapping_add(second)
}

fn mul(first: i32, second: i32) -> i32 {
    first.wrapping_mul(second)
}

fn divint(numerator: i32, denominator: i32) -> (i32, i32) {
    (numerator / denominator, numerator % denominator)
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// Identity Law: a one-stage pipe behaves like its stage.
    #[test]
    fn prop_pipe_identity(x in any::<i32>()) {
        prop_assert_eq!(pipe((add3,)).invoke((x,)), add3(x));
    }

    /// Chaining Law: pipe((f, g))(x) == g(f(x))
    #[test]
    fn prop_pipe_chaining(x in any::<i32>()) {
        prop_assert_eq!(pipe((add3, mul3)).invoke((x,)), mul3(add3(x)));
        prop_assert_eq!(pipe((mul3, add3)).invoke((x,)), add3(mul3(x)));
    }

    /// Associativity Law: grouping of nested pipes does not matter.
    #[test]
    fn prop_pipe_associativity(x in any::<i32>()) {
        let negate = |value: i32| value.wrapping_neg();

        let left = pipe((pipe((add3, mul3)), negate));
        let right = pipe((add3, pipe((mul3, negate))));

        prop_assert_eq!(left.invoke((x,)), right.invoke((x,)));
    }

    /// Multi-argument first stage: pipe((f, g))(a, b) == g(f(a, b))
    #[test]
    fn prop_pipe_multi_argument_source(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(pipe((add, mul3)).invoke((a, b)), mul3(add(a, b)));
    }

    /// Invoking through apply is the same as invoking directly.
    #[test]
    fn prop_apply_matches_invoke(x in any::<i32>()) {
        let pipeline = pipe((add3, mul3));
        prop_assert_eq!(apply(&pipeline, (x,)), pipeline.invoke((x,)));
        prop_assert_eq!(apply(&owned(&pipeline), (x,)), pipeline.invoke((x,)));
    }
}

// =============================================================================
// Compose Laws
// =============================================================================

proptest! {
    /// Duality Law: compose is pipe read backwards.
    #[test]
    fn prop_compose_pipe_duality(x in any::<i32>()) {
        prop_assert_eq!(compose((mul3, add3)).invoke((x,)), pipe((add3, mul3)).invoke((x,)));
    }

    /// compose((f, g))(x) == f(g(x))
    #[test]
    fn prop_compose_definition(x in any::<i32>()) {
        prop_assert_eq!(compose((add3, mul3)).invoke((x,)), add3(mul3(x)));
    }
}

// =============================================================================
// Battery Laws
// =============================================================================

proptest! {
    /// Ordering Law: results appear in declaration order.
    #[test]
    fn prop_battery_ordering(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(battery((add, mul)).invoke((a, b)), (add(a, b), mul(a, b)));
        prop_assert_eq!(battery((mul, add)).invoke((a, b)), (mul(a, b), add(a, b)));
    }

    /// Arity Law: a unit-returning member still occupies its slot and runs once.
    #[test]
    fn prop_battery_unit_member(a in any::<i32>(), b in any::<i32>()) {
        let calls = Cell::new(0_u32);
        let observe = |_: i32, _: i32| calls.set(calls.get() + 1);

        let (sum, (), product) = battery((add, observe, mul)).invoke((a, b));

        prop_assert_eq!(sum, add(a, b));
        prop_assert_eq!(product, mul(a, b));
        prop_assert_eq!(calls.get(), 1);
    }

    /// Side effects happen in declaration order.
    #[test]
    fn prop_battery_side_effect_order(seed in any::<u8>()) {
        let order = Cell::new(u32::from(seed));
        let first = |_: ()| {
            order.set(order.get() * 2);
            order.get()
        };
        let second = |_: ()| {
            order.set(order.get() + 1);
            order.get()
        };

        let start = u32::from(seed);
        prop_assert_eq!(battery((first, second)).invoke(((),)), (start * 2, start * 2 + 1));
    }
}

// =============================================================================
// Auto-Unpack Laws
// =============================================================================

proptest! {
    /// Spreading Law: auto_unpack(f)((a, b)) == f(a, b)
    #[test]
    fn prop_auto_unpack_spreading(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(auto_unpack(add).invoke(((a, b),)), add(a, b));
    }

    /// Transparency Law: a non-tuple argument reaches the function unchanged.
    #[test]
    fn prop_auto_unpack_transparency(x in any::<i32>(), text in ".{0,16}") {
        prop_assert_eq!(auto_unpack(add3).invoke((x,)), add3(x));

        let length = auto_unpack(|value: String| value.chars().count());
        prop_assert_eq!(length.invoke((text.clone(),)), text.chars().count());
    }

    /// Forwarding Law: several arguments are passed through untouched.
    #[test]
    fn prop_auto_unpack_forwarding(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(auto_unpack(add).invoke((a, b)), add(a, b));
    }

    /// pipe((divint, auto_unpack(add)))(n, d) == quotient + remainder
    #[test]
    fn prop_divint_then_add(numerator in -10_000_i32..10_000, denominator in 1_i32..100) {
        let (quotient, remainder) = divint(numerator, denominator);
        prop_assert_eq!(
            pipe((divint, auto_unpack(add))).invoke((numerator, denominator)),
            quotient + remainder
        );
    }
}

// =============================================================================
// Documented scenarios
// =============================================================================

#[test]
fn test_pipe_scenarios() {
    assert_eq!(pipe((add3, mul3)).invoke((2,)), 15);
    assert_eq!(pipe((mul3, add3)).invoke((2,)), 9);
}

#[test]
fn test_battery_scenario() {
    assert_eq!(battery((add, mul)).invoke((3, 4)), (7, 12));
}

#[test]
fn test_auto_unpack_scenarios() {
    assert_eq!(auto_unpack(add).invoke(((2, 1),)), 3);
    assert_eq!(pipe((divint, auto_unpack(add))).invoke((5, 2)), 3);
}
