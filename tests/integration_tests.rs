use rand::Rng;
use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::VecDeque;
use totalsort::prelude::*;

/// Counts how often the sort consults it.
struct CountingComparator<'a> {
    calls: &'a Cell<usize>,
}

impl Comparator<i64> for CountingComparator<'_> {
    fn compare(&self, a: &i64, b: &i64) -> Ordering {
        self.calls.set(self.calls.get() + 1);
        a.cmp(b)
    }
}

fn assert_sorted<T: Ord + std::fmt::Debug>(data: &[T]) {
    for (i, w) in data.windows(2).enumerate() {
        assert!(w[0] <= w[1], "Sort failed at index {}: {:?} > {:?}", i, w[0], w[1]);
    }
}

#[test]
fn test_basic_sort_integers() {
    let mut input = vec![5, 3, 8, 1, 9, 2];
    sort(&mut input, NaturalOrder);
    assert_eq!(input, vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn test_basic_sort_strings() {
    let mut input = vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
        "date".to_string(),
    ];

    sort_natural(&mut input);
    assert_eq!(input, vec!["apple", "banana", "cherry", "date"]);
}

#[test]
fn test_empty_and_single_never_compare() {
    let calls = Cell::new(0);

    let mut empty: Vec<i64> = vec![];
    sort(&mut empty, CountingComparator { calls: &calls });
    assert!(empty.is_empty());

    let mut single = vec![42_i64];
    sort(&mut single, CountingComparator { calls: &calls });
    assert_eq!(single, vec![42]);

    // Zero-length range inside a longer sequence.
    let mut data = vec![3_i64, 2, 1];
    sort_range(&mut data, 1, 0, CountingComparator { calls: &calls });
    sort_range(&mut data, 2, 1, CountingComparator { calls: &calls });
    assert_eq!(data, vec![3, 2, 1]);

    assert_eq!(calls.get(), 0);
}

#[test]
fn test_small_sizes_exhaustive() {
    // Every size handled by the small-range tier, plus a few past it.
    let mut rng = rand::rng();
    for len in 0..=40 {
        for _ in 0..50 {
            let mut input: Vec<i64> = (0..len).map(|_| rng.random_range(-10..10)).collect();
            let mut expected = input.clone();
            expected.sort();

            sort(&mut input, NaturalOrder);
            assert_eq!(input, expected, "len {}", len);
        }
    }
}

#[test]
fn test_reverse_sorted_17() {
    // One past the insertion sort threshold.
    let mut input: Vec<i64> = (0..17).rev().collect();
    let mut expected = input.clone();
    expected.sort();

    sort(&mut input, NaturalOrder);
    assert_eq!(input, expected);
}

#[test]
fn test_patterns() {
    let n = 5_000_i64;
    let patterns: Vec<(&str, Vec<i64>)> = vec![
        ("ascending", (0..n).collect()),
        ("descending", (0..n).rev().collect()),
        ("all_equal", vec![7; n as usize]),
        (
            "organ_pipe",
            (0..n / 2).chain((0..n / 2).rev()).collect(),
        ),
        ("saw", (0..n).map(|i| i % 37).collect()),
        (
            "push_front",
            (1..n).chain(std::iter::once(0)).collect(),
        ),
    ];

    for (name, mut input) in patterns {
        let mut expected = input.clone();
        expected.sort();

        sort(&mut input, NaturalOrder);
        assert_eq!(input, expected, "pattern {}", name);
    }
}

#[test]
fn test_idempotent() {
    let mut rng = rand::rng();
    let mut input: Vec<i64> = (0..10_000).map(|_| rng.random_range(0..1000)).collect();

    sort(&mut input, NaturalOrder);
    let once = input.clone();
    sort(&mut input, NaturalOrder);

    assert_eq!(input, once);
}

#[test]
fn test_fuzz_random() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..2_000);
        let mut input: Vec<i64> = (0..len).map(|_| rng.random()).collect();

        let mut expected = input.clone();
        expected.sort();

        sort(&mut input, NaturalOrder);
        assert_eq!(input, expected);
    }
}

#[test]
fn test_sort_by_closure_descending() {
    let mut input: Vec<u32> = (0..1_000).collect();
    sort_by(&mut input, |a, b| b.cmp(a));

    let expected: Vec<u32> = (0..1_000).rev().collect();
    assert_eq!(input, expected);
}

#[test]
fn test_sort_by_key_permutation_preserved() {
    // Sorting by a partial key must not create, lose or duplicate records.
    let mut rng = rand::rng();
    let mut input: Vec<(u8, u32)> = (0..3_000).map(|i| (rng.random_range(0..8), i)).collect();

    sort_by(&mut input, |a, b| a.0.cmp(&b.0));

    assert!(input.windows(2).all(|w| w[0].0 <= w[1].0));
    let mut ids: Vec<u32> = input.iter().map(|r| r.1).collect();
    ids.sort();
    assert_eq!(ids, (0..3_000).collect::<Vec<_>>());
}

#[test]
fn test_sort_range_leaves_outside_untouched() {
    let mut rng = rand::rng();
    let mut input: Vec<i64> = (0..500).map(|_| rng.random_range(0..100)).collect();
    let original = input.clone();

    sort_range(&mut input, 100, 300, NaturalOrder);

    assert_eq!(input[..100], original[..100]);
    assert_eq!(input[400..], original[400..]);
    assert_sorted(&input[100..400]);

    let mut expected = original[100..400].to_vec();
    expected.sort();
    assert_eq!(input[100..400], expected[..]);
}

#[test]
fn test_try_sort_range_rejects_bad_ranges() {
    let mut input = vec![3, 2, 1];

    assert_eq!(
        try_sort_range(&mut input, 2, 2, NaturalOrder),
        Err(RangeError::OutOfBounds {
            start: 2,
            len: 2,
            seq_len: 3
        })
    );
    assert_eq!(
        try_sort_range(&mut input, usize::MAX, 2, NaturalOrder),
        Err(RangeError::Overflow {
            start: usize::MAX,
            len: 2
        })
    );
    assert_eq!(input, vec![3, 2, 1]);

    assert_eq!(try_sort_range(&mut input, 0, 3, NaturalOrder), Ok(()));
    assert_eq!(input, vec![1, 2, 3]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_sort_range_panics_on_bad_range() {
    let mut input = vec![1, 2, 3];
    sort_range(&mut input, 1, 3, NaturalOrder);
}

#[test]
fn test_range_error_display() {
    let err = RangeError::OutOfBounds {
        start: 4,
        len: 3,
        seq_len: 5,
    };
    assert_eq!(
        err.to_string(),
        "range 4..7 out of bounds for sequence of length 5"
    );

    let err = RangeError::Overflow {
        start: usize::MAX,
        len: 1,
    };
    assert!(err.to_string().contains("overflows usize"));
}

#[test]
fn test_vecdeque_sort() {
    let mut rng = rand::rng();
    let mut input: VecDeque<i64> = VecDeque::with_capacity(1_000);
    // Push at both ends so the storage wraps around.
    for _ in 0..500 {
        input.push_back(rng.random_range(0..1_000));
        input.push_front(rng.random_range(0..1_000));
    }

    let mut expected: Vec<i64> = input.iter().copied().collect();
    expected.sort();

    sort(&mut input, NaturalOrder);
    assert_eq!(input.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_fixed_buffer_sort() {
    let mut buffer = FixedBuffer::from_fn(2_000, |i| ((i * 7919) % 2_000) as i64);
    assert_eq!(buffer.len(), 2_000);

    sort(&mut buffer, NaturalOrder);
    assert_eq!(buffer.into_vec(), (0..2_000).collect::<Vec<i64>>());
}

#[test]
fn test_fixed_buffer_construction() {
    let zeroes: FixedBuffer<u8> = FixedBuffer::new(4);
    assert_eq!(zeroes.as_slice(), &[0_u8, 0, 0, 0]);

    let mut sevens = FixedBuffer::filled(3, 7_u8);
    sevens[1] = 1;
    assert_eq!(sevens.as_slice(), &[7_u8, 1, 7]);

    sevens.copy_from_slice(&[3, 2, 1]);
    sevens.as_mut_slice()[0] = 9;
    sort_natural(&mut sevens);
    assert_eq!(sevens.as_slice(), &[1_u8, 2, 9]);

    let empty: FixedBuffer<u8> = FixedBuffer::from(Vec::new());
    assert!(empty.is_empty());
}

#[test]
fn test_inconsistent_comparator_terminates() {
    // A comparator that answers at random is neither antisymmetric nor transitive. The
    // output order is unspecified, but the sort must finish without panicking and must
    // still hold exactly the input elements.
    let rng = std::cell::RefCell::new(rand::rng());
    let random_order = |_: &i64, _: &i64| match rng.borrow_mut().random_range(0..3) {
        0 => Ordering::Less,
        1 => Ordering::Equal,
        _ => Ordering::Greater,
    };

    for len in [2, 3, 16, 17, 100, 5_000] {
        let mut input: Vec<i64> = (0..len).collect();
        sort(&mut input, &random_order);

        input.sort();
        assert_eq!(input, (0..len).collect::<Vec<_>>());
    }
}

#[test]
fn test_comparator_calls_bounded() {
    // n log n with a generous constant; quadratic behavior would blow far past it.
    let calls = Cell::new(0);
    let n = 100_000_usize;
    let mut input: Vec<i64> = (0..n as i64).map(|i| (i * 31_337) % n as i64).collect();

    sort(&mut input, CountingComparator { calls: &calls });

    assert_sorted(&input);
    let bound = 4 * n * (n.ilog2() as usize + 1);
    assert!(calls.get() < bound, "{} comparisons", calls.get());
}
