// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit-distance metric.
//!
//! The tree prunes with the triangle inequality, so a metric that breaks any
//! of the axioms silently drops matches.

#![no_main]

use arbitrary::Arbitrary;
use bkvocab::distance;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MetricInput {
    a: String,
    b: String,
    c: String,
}

/// Keep the quadratic DP fast enough for the fuzzer.
fn cap(s: &str) -> String {
    s.chars().take(40).collect()
}

fuzz_target!(|input: MetricInput| {
    let (a, b, c) = (cap(&input.a), cap(&input.b), cap(&input.c));
    let ab = distance(&a, &b);
    let bc = distance(&b, &c);
    let ac = distance(&a, &c);

    // INVARIANT 1: identity
    assert_eq!(distance(&a, &a), 0, "d(a, a) != 0 for a={:?}", a);
    assert_eq!(ab == 0, a == b, "d(a, b) = 0 iff a == b, a={:?} b={:?}", a, b);

    // INVARIANT 2: symmetry
    assert_eq!(ab, distance(&b, &a), "asymmetric for a={:?} b={:?}", a, b);

    // INVARIANT 3: triangle inequality
    assert!(
        ac <= ab + bc,
        "d(a,c)={} > d(a,b)+d(b,c)={} for {:?} {:?} {:?}",
        ac,
        ab + bc,
        a,
        b,
        c
    );

    // INVARIANT 4: bounded by lengths
    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(ab >= la.abs_diff(lb), "d={} below length difference", ab);
    assert!(ab <= la.max(lb), "d={} above longer length", ab);
});
