//! Fixed-arity expansion tables.
//!
//! Each table invokes a callback macro once per supported arity with the
//! ordered `(type parameter, tuple index)` pairs of that arity. The tables
//! stop at twelve, the same bound the standard library uses for its tuple
//! trait implementations.

/// Expands `$callback` for tuples of arity 0 through 12.
///
/// Arguments per arity: `T0 0, T1 1, ...`.
macro_rules! for_each_tuple {
    ($callback:ident) => {
        $callback!();
        $callback!(T0 0);
        $callback!(T0 0, T1 1);
        $callback!(T0 0, T1 1, T2 2);
        $callback!(T0 0, T1 1, T2 2, T3 3);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10, T11 11);
    };
}

/// Expands `$callback` for fan-outs of 1 through 12 members.
///
/// Arguments per arity: the leading members, then `;` and the last member.
macro_rules! for_each_fan_out {
    ($callback:ident) => {
        $callback!(; T0 0);
        $callback!(T0 0; T1 1);
        $callback!(T0 0, T1 1; T2 2);
        $callback!(T0 0, T1 1, T2 2; T3 3);
        $callback!(T0 0, T1 1, T2 2, T3 3; T4 4);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4; T5 5);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5; T6 6);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6; T7 7);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7; T8 8);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8; T9 9);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9; T10 10);
        $callback!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10; T11 11);
    };
}

/// Expands `$callback` for left-to-right chains of 1 through 12 stages.
///
/// Arguments per arity: `[types] [outputs]`, the first stage `T0 O0 0`,
/// then every later stage with its predecessor's output, e.g. `T1 O1 O0 1`,
/// and finally the output of the chain.
macro_rules! for_each_chain {
    ($callback:ident) => {
        $callback!([T0] [O0] T0 O0 0; ; O0);
        $callback!([T0, T1] [O0, O1] T0 O0 0; T1 O1 O0 1; O1);
        $callback!([T0, T1, T2] [O0, O1, O2] T0 O0 0; T1 O1 O0 1, T2 O2 O1 2; O2);
        $callback!([T0, T1, T2, T3] [O0, O1, O2, O3] T0 O0 0; T1 O1 O0 1, T2 O2 O1 2, T3 O3 O2 3; O3);
        $callback!([T0, T1, T2, T3, T4] [O0, O1, O2, O3, O4] T0 O0 0; T1 O1 O0 1, T2 O2 O1 2, T3 O3 O2 3, T4 O4 O3 4; O4);
        $callback!([T0, T1, T2, T3, T4, T5] [O0, O1, O2, O3, O4, O5] T0 O0 0; T1 O1 O0 1, T2 O2 O1 2, T3 O3 O2 3, T4 O4 O3 4, T5 O5 O4 5; O5);
        $callback!([T0, T1, T2, T3, T4, T5, T6] [O0, O1, O2, O3, O4, O5, O6] T0 O0 0; T1 O1 O0 1, T2 O2 O1 2, T3 O3 O2 3, T4 O4 O3 4, T5 O5 O4 5, T6 O6 O5 6; O6);
        $callback!([T0, T1, T2, T3, T4, T5, T6, T7] [O0, O1, O2, O3, O4, O5, O6, O7] T0 O0 0; T1 O1 O0 1, T2 O2 O1 2, T3 O3 O2 3, T4 O4 O3 4, T5 O5 O4 5, T6 O6 O5 6, T7 O7 O6 7; O7);
        $callback!([T0, T1, T2, T3, T4, T5, T6, T7, T8] [O0, O1, O2, O3, O4, O5, O6, O7, O8] T0 O0 0; T1 O1 O0 1, T2 O2 O1 2, T3 O3 O2 3, T4 O4 O3 4, T5 O5 O4 5, T6 O6 O5 6, T7 O7 O6 7, T8 O8 O7 8; O8);
        $callback!([T0, T1, T2, T3, T4, T5, T6, T7, T8, T9] [O0, O1, O2, O3, O4, O5, O6, O7, O8, O9] T0 O0 0; T1 O1 O0 1, T2 O2 O1 2, T3 O3 O2 3, T4 O4 O3 4, T5 O5 O4 5, T6 O6 O5 6, T7 O7 O6 7, T8 O8 O7 8, T9 O9 O8 9; O9);
        $callback!([T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10] [O0, O1, O2, O3, O4, O5, O6, O7, O8, O9, O10] T0 O0 0; T1 O1 O0 1, T2 O2 O1 2, T3 O3 O2 3, T4 O4 O3 4, T5 O5 O4 5, T6 O6 O5 6, T7 O7 O6 7, T8 O8 O7 8, T9 O9 O8 9, T10 O10 O9 10; O10);
        $callback!([T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11] [O0, O1, O2, O3, O4, O5, O6, O7, O8, O9, O10, O11] T0 O0 0; T1 O1 O0 1, T2 O2 O1 2, T3 O3 O2 3, T4 O4 O3 4, T5 O5 O4 5, T6 O6 O5 6, T7 O7 O6 7, T8 O8 O7 8, T9 O9 O8 9, T10 O10 O9 10, T11 O11 O10 11; O11);
    };
}

/// Expands `$callback` for right-to-left chains of 1 through 12 functions.
///
/// Same shape as [`for_each_chain`], but the stages are listed from the
/// last tuple element to the first.
macro_rules! for_each_reverse_chain {
    ($callback:ident) => {
        $callback!([T0] [O0] T0 O0 0; ; O0);
        $callback!([T0, T1] [O0, O1] T1 O1 1; T0 O0 O1 0; O0);
        $callback!([T0, T1, T2] [O0, O1, O2] T2 O2 2; T1 O1 O2 1, T0 O0 O1 0; O0);
        $callback!([T0, T1, T2, T3] [O0, O1, O2, O3] T3 O3 3; T2 O2 O3 2, T1 O1 O2 1, T0 O0 O1 0; O0);
        $callback!([T0, T1, T2, T3, T4] [O0, O1, O2, O3, O4] T4 O4 4; T3 O3 O4 3, T2 O2 O3 2, T1 O1 O2 1, T0 O0 O1 0; O0);
        $callback!([T0, T1, T2, T3, T4, T5] [O0, O1, O2, O3, O4, O5] T5 O5 5; T4 O4 O5 4, T3 O3 O4 3, T2 O2 O3 2, T1 O1 O2 1, T0 O0 O1 0; O0);
        $callback!([T0, T1, T2, T3, T4, T5, T6] [O0, O1, O2, O3, O4, O5, O6] T6 O6 6; T5 O5 O6 5, T4 O4 O5 4, T3 O3 O4 3, T2 O2 O3 2, T1 O1 O2 1, T0 O0 O1 0; O0);
        $callback!([T0, T1, T2, T3, T4, T5, T6, T7] [O0, O1, O2, O3, O4, O5, O6, O7] T7 O7 7; T6 O6 O7 6, T5 O5 O6 5, T4 O4 O5 4, T3 O3 O4 3, T2 O2 O3 2, T1 O1 O2 1, T0 O0 O1 0; O0);
        $callback!([T0, T1, T2, T3, T4, T5, T6, T7, T8] [O0, O1, O2, O3, O4, O5, O6, O7, O8] T8 O8 8; T7 O7 O8 7, T6 O6 O7 6, T5 O5 O6 5, T4 O4 O5 4, T3 O3 O4 3, T2 O2 O3 2, T1 O1 O2 1, T0 O0 O1 0; O0);
        $callback!([T0, T1, T2, T3, T4, T5, T6, T7, T8, T9] [O0, O1, O2, O3, O4, O5, O6, O7, O8, O9] T9 O9 9; T8 O8 O9 8, T7 O7 O8 7, T6 O6 O7 6, T5 O5 O6 5, T4 O4 O5 4, T3 O3 O4 3, T2 O2 O3 2, T1 O1 O2 1, T0 O0 O1 0; O0);
        $callback!([T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10] [O0, O1, O2, O3, O4, O5, O6, O7, O8, O9, O10] T10 O10 10; T9 O9 O10 9, T8 O8 O9 8, T7 O7 O8 7, T6 O6 O7 6, T5 O5 O6 5, T4 O4 O5 4, T3 O3 O4 3, T2 O2 O3 2, T1 O1 O2 1, T0 O0 O1 0; O0);
        $callback!([T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11] [O0, O1, O2, O3, O4, O5, O6, O7, O8, O9, O10, O11] T11 O11 11; T10 O10 O11 10, T9 O9 O10 9, T8 O8 O9 8, T7 O7 O8 7, T6 O6 O7 6, T5 O5 O6 5, T4 O4 O5 4, T3 O3 O4 3, T2 O2 O3 2, T1 O1 O2 1, T0 O0 O1 0; O0);
    };
}

pub(crate) use for_each_chain;
pub(crate) use for_each_fan_out;
pub(crate) use for_each_reverse_chain;
pub(crate) use for_each_tuple;
