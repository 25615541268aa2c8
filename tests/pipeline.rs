use rstream::collectors::{counting, grouping_by_with, partitioning_by, summing_i64, to_list};
use rstream::comparator::{comparing, reversed};
use rstream::{Stream, StreamErr};
use std::cell::Cell;
use std::rc::Rc;

const NUMBERS: [i32; 8] = [1, 4, 7, 6, 2, 9, 7, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Status {
    Active,
    Blocked,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
struct Account {
    amount: i64,
    status: Status,
}

fn accounts() -> Vec<Account> {
    vec![
        Account { amount: 3333, status: Status::Active },
        Account { amount: 15000, status: Status::Blocked },
        Account { amount: 15000, status: Status::Active },
        Account { amount: 8800, status: Status::Active },
        Account { amount: 45000, status: Status::Blocked },
        Account { amount: 0, status: Status::Removed },
    ]
}

/// 每个终端操作执行一次并丢弃结果
fn run_terminal(stream: &mut Stream<i32>, which: usize) -> Result<(), StreamErr> {
    match which {
        0 => stream.count().map(drop),
        1 => stream.to_list().map(drop),
        2 => stream.find_first().map(drop),
        3 => stream.find_any().map(drop),
        4 => stream.any_match(|n| n > 3).map(drop),
        5 => stream.all_match(|n| n > 3).map(drop),
        6 => stream.none_match(|n| n > 3).map(drop),
        7 => stream.reduce(|a, b| a + b).map(drop),
        8 => stream.reduce_with(0, |a, b| a + b).map(drop),
        9 => stream.max().map(drop),
        10 => stream.min_by(|a, b| a.cmp(b)).map(drop),
        11 => stream.for_each(|_| {}),
        12 => stream.collect(counting()).map(drop),
        13 => stream.to_array().map(drop),
        14 => stream.iterator().map(drop),
        _ => stream.sum().map(drop),
    }
}

#[test]
fn second_terminal_always_fails() {
    for first in 0..16 {
        for second in 0..16 {
            let mut stream = Stream::of(NUMBERS).filter(|n| n % 2 == 0);
            assert!(run_terminal(&mut stream, first).is_ok(), "first terminal {first}");
            let err = run_terminal(&mut stream, second).unwrap_err();
            assert!(matches!(err, StreamErr::AlreadyConsumed { .. }), "terminals {first} then {second}");
        }
    }
}

#[test]
fn filter_and_skip_counts() {
    assert_eq!(Stream::of(NUMBERS).filter(|n| *n > 5).count(), Ok(5));
    assert_eq!(Stream::of(NUMBERS).skip(4).filter(|n| *n > 5).count(), Ok(3));
    assert_eq!(Stream::<i32>::empty().filter(|n| *n > 5).count(), Ok(0));
}

#[test]
fn distinct_keeps_first_occurrences() {
    assert_eq!(Stream::of(NUMBERS).distinct().to_list(), Ok(vec![1, 4, 7, 6, 2, 9, 8]));
}

#[test]
fn flat_map_flattens_in_order() {
    let nested: Vec<Vec<char>> = vec![vec![], vec!['a'], vec!['b', 'c']];
    assert_eq!(Stream::of(nested).flat_map(|v| v).to_list(), Ok(vec!['a', 'b', 'c']));
}

#[test]
fn limit_never_over_pulls_unbounded_source() {
    let pulled = Rc::new(Cell::new(0));
    let counter = pulled.clone();
    let source = Stream::generate(move || {
        counter.set(counter.get() + 1);
        counter.get()
    });
    assert_eq!(source.map(|n| n * 10).limit(4).to_list(), Ok(vec![10, 20, 30, 40]));
    assert_eq!(pulled.get(), 4);
}

#[test]
fn grouping_accounts_by_status() {
    let totals = Stream::from_collection(accounts())
        .collect(grouping_by_with(|a: &Account| a.status, summing_i64(|a: &Account| a.amount)))
        .unwrap();
    assert_eq!(totals.len(), 3);
    assert_eq!(totals[&Status::Active], 27133);
    assert_eq!(totals[&Status::Blocked], 60000);
    assert_eq!(totals[&Status::Removed], 0);
}

#[test]
fn partition_accounts_by_amount() {
    let parts = Stream::from_collection(accounts()).collect(partitioning_by(|a: &Account| a.amount > 10000)).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[true].len() + parts[false].len(), 6);
    assert!(parts[true].iter().all(|a| a.amount > 10000));
    assert!(parts[false].iter().all(|a| a.amount <= 10000));
}

#[test]
fn sorting_accounts_with_comparators() {
    let amounts = Stream::from_collection(accounts())
        .sorted_by(reversed(comparing(|a: &Account| a.amount)))
        .map(|a| a.amount)
        .limit(3)
        .collect(to_list());
    assert_eq!(amounts, Ok(vec![45000, 15000, 15000]));
}

#[test]
fn reduce_on_empty_input() {
    assert_eq!(Stream::<i32>::empty().reduce(|a, b| a + b), Ok(None));
    assert_eq!(Stream::<i32>::empty().reduce_with(100, |a, b| a + b), Ok(100));
    assert_eq!(Stream::of(NUMBERS).filter(|n| *n > 100).max(), Ok(None));
}
