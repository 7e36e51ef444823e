//! Integration tests for the full prime gap pipeline.
//!
//! Fixed-bound cases pin exact stage outputs; property tests check the
//! structural invariants against a trial-division reference.

use pipeline::{consecutive_gaps, count_frequencies, distinct_gaps, primes_below, run, Bound};
use proptest::prelude::*;

fn is_prime_by_trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

// =============================================================================
// Fixed bounds
// =============================================================================

#[test]
fn test_stages_below_ten() {
    let primes = primes_below(Bound::new(10)).unwrap();
    let gaps = consecutive_gaps(&primes);
    let distinct = distinct_gaps(&gaps);
    let table = count_frequencies(&gaps, &distinct);

    assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);
    assert_eq!(gaps.as_slice(), &[0, 1, 2, 2]);
    assert_eq!(distinct.as_slice(), &[0, 1, 2]);
    assert_eq!(table.counts(), &[1, 1, 2]);
    assert_eq!(table.total(), 4);
}

#[test]
fn test_stages_below_twenty() {
    let primes = primes_below(Bound::new(20)).unwrap();
    let gaps = consecutive_gaps(&primes);
    let distinct = distinct_gaps(&gaps);
    let table = count_frequencies(&gaps, &distinct);

    assert_eq!(primes.as_slice(), &[2, 3, 5, 7, 11, 13, 17, 19]);
    assert_eq!(gaps.as_slice(), &[0, 1, 2, 2, 4, 2, 4, 2]);
    assert_eq!(distinct.as_slice(), &[0, 1, 2, 4]);
    assert_eq!(table.counts(), &[1, 1, 4, 2]);
    assert_eq!(table.total(), 8);
}

#[test]
fn test_every_stage_empty_for_degenerate_bounds() {
    for bound in [0, 1] {
        let primes = primes_below(Bound::new(bound)).unwrap();
        let gaps = consecutive_gaps(&primes);
        let distinct = distinct_gaps(&gaps);
        let table = count_frequencies(&gaps, &distinct);

        assert!(primes.is_empty());
        assert!(gaps.is_empty());
        assert!(distinct.is_empty());
        assert!(table.is_empty());
    }
}

#[test]
fn test_bound_two_has_no_primes() {
    // 2 itself is excluded, so the table has no sentinel row.
    let report = run(Bound::new(2)).unwrap();
    assert_eq!(report.prime_count, 0);
    assert!(report.table.is_empty());
    assert_eq!(report.table.max_gap(), None);
}

#[test]
fn test_bound_three_has_only_the_sentinel() {
    let report = run(Bound::new(3)).unwrap();
    assert_eq!(report.table.gaps(), &[0]);
    assert_eq!(report.table.counts(), &[1]);
}

#[test]
fn test_known_gap_record_below_one_million() {
    // The largest prime gap below 10^6 is 114 (492113 -> 492227).
    let report = run(Bound::new(1_000_000)).unwrap();
    assert_eq!(report.table.max_gap(), Some(114));
    assert_eq!(report.prime_count, 78_498);
    assert_eq!(report.table.total(), 78_498);
}

#[test]
fn test_run_is_deterministic() {
    let first = run(Bound::new(100_000)).unwrap();
    let second = run(Bound::new(100_000)).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    #[test]
    fn test_primes_match_trial_division(bound in 0u64..3_000) {
        let primes = primes_below(Bound::new(bound)).unwrap();
        let expected: Vec<u64> = (0..bound).filter(|&n| is_prime_by_trial_division(n)).collect();
        prop_assert_eq!(primes.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_frequency_total_equals_prime_count(bound in 0u64..20_000) {
        let report = run(Bound::new(bound)).unwrap();
        prop_assert_eq!(report.table.total(), report.prime_count as u64);
    }

    #[test]
    fn test_distinct_gaps_strictly_ascending(bound in 0u64..20_000) {
        let report = run(Bound::new(bound)).unwrap();
        prop_assert!(report.table.gaps().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_sentinel_counted_exactly_once(bound in 3u64..20_000) {
        let report = run(Bound::new(bound)).unwrap();
        prop_assert_eq!(report.table.gaps()[0], 0);
        prop_assert_eq!(report.table.counts()[0], 1);
    }

    #[test]
    fn test_real_gaps_after_three_are_even(bound in 4u64..20_000) {
        let primes = primes_below(Bound::new(bound)).unwrap();
        let gaps = consecutive_gaps(&primes);
        // Index 0 is the sentinel and index 1 is 3 - 2.
        prop_assert_eq!(gaps.as_slice()[1], 1);
        prop_assert!(gaps.iter().skip(2).all(|gap| gap % 2 == 0));
    }
}
