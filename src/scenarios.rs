//! Built-in scenarios exercising a capacity-10 store through its
//! growing, filled and cleared states.

use crate::harness::{CaseResult, Cases, Scenario};
use crate::ring_store::RingStore;

const CAPACITY: usize = 10;

const EMPTY: [i32; 0] = [];

pub fn all() -> Vec<Scenario> {
    vec![
        Scenario { name: "when_empty",             run: when_empty },
        Scenario { name: "when_partially_filled",  run: when_partially_filled },
        Scenario { name: "when_completely_filled", run: when_completely_filled },
        Scenario { name: "when_cleared",           run: when_cleared },
        Scenario { name: "when_zero_capacity",     run: when_zero_capacity },
    ]
}

pub fn find(name: &str) -> Option<Scenario> {
    all().into_iter().find(|s| s.name == name)
}

fn partially_filled() -> RingStore<i32> {
    let mut values = RingStore::new(CAPACITY);
    values.extend([30, 25, 20, 15, 10, 5, 0]);
    values
}

fn completely_filled() -> RingStore<i32> {
    let mut values = partially_filled();
    values.extend(100..=105);
    values
}

fn when_empty() -> Vec<CaseResult> {
    let values: RingStore<i32> = RingStore::new(CAPACITY);

    let mut cases = Cases::new();
    cases.check(line!(), &values.latest(0), &EMPTY);
    cases.check(line!(), &values.latest(5), &EMPTY);
    cases.check(line!(), &values.latest(10), &EMPTY);
    cases.check(line!(), &values.latest(20), &EMPTY);
    cases.check(line!(), &values.earliest(0), &EMPTY);
    cases.check(line!(), &values.earliest(5), &EMPTY);
    cases.check(line!(), &values.earliest(10), &EMPTY);
    cases.check(line!(), &values.earliest(20), &EMPTY);
    cases.finish()
}

fn when_partially_filled() -> Vec<CaseResult> {
    let values = partially_filled();

    let mut cases = Cases::new();
    cases.check(line!(), &values.latest(0), &EMPTY);
    cases.check(line!(), &values.latest(3), &[0, 5, 10]);
    cases.check(line!(), &values.latest(10), &[0, 5, 10, 15, 20, 25, 30]);
    cases.check(line!(), &values.latest(20), &[0, 5, 10, 15, 20, 25, 30]);
    cases.check(line!(), &values.earliest(0), &EMPTY);
    cases.check(line!(), &values.earliest(3), &[30, 25, 20]);
    cases.check(line!(), &values.earliest(10), &[30, 25, 20, 15, 10, 5, 0]);
    cases.check(line!(), &values.earliest(20), &[30, 25, 20, 15, 10, 5, 0]);
    cases.finish()
}

fn when_completely_filled() -> Vec<CaseResult> {
    let values = completely_filled();

    let mut cases = Cases::new();
    cases.check(line!(), &values.latest(0), &EMPTY);
    cases.check(line!(), &values.latest(3), &[105, 104, 103]);
    cases.check(line!(), &values.latest(10), &[105, 104, 103, 102, 101, 100, 0, 5, 10, 15]);
    cases.check(line!(), &values.latest(20), &[105, 104, 103, 102, 101, 100, 0, 5, 10, 15]);
    cases.check(line!(), &values.earliest(0), &EMPTY);
    cases.check(line!(), &values.earliest(3), &[15, 10, 5]);
    cases.check(line!(), &values.earliest(10), &[15, 10, 5, 0, 100, 101, 102, 103, 104, 105]);
    cases.check(line!(), &values.earliest(20), &[15, 10, 5, 0, 100, 101, 102, 103, 104, 105]);
    cases.finish()
}

fn when_cleared() -> Vec<CaseResult> {
    let mut values = completely_filled();
    values.clear();
    let after_clear = [values.latest(10), values.earliest(10)];

    values.extend([1, 2, 3]);

    let mut cases = Cases::new();
    cases.check(line!(), &after_clear[0], &EMPTY);
    cases.check(line!(), &after_clear[1], &EMPTY);
    cases.check(line!(), &[values.size()], &[3]);
    cases.check(line!(), &values.latest(2), &[3, 2]);
    cases.check(line!(), &values.earliest(5), &[1, 2, 3]);
    cases.finish()
}

fn when_zero_capacity() -> Vec<CaseResult> {
    let mut values: RingStore<i32> = RingStore::new(0);
    values.extend([1, 2, 3]);

    let mut cases = Cases::new();
    cases.check(line!(), &[values.size()], &[0]);
    cases.check(line!(), &values.latest(3), &EMPTY);
    cases.check(line!(), &values.earliest(3), &EMPTY);
    cases.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::run_all;

    #[test]
    fn builtin_scenarios_all_pass() {
        let summary = run_all(&all());
        for sc in &summary.scenarios {
            for c in sc.cases.iter().filter(|c| !c.passed) {
                panic!("{} case {}: got {} expected {}", sc.name, c.number, c.got, c.expected);
            }
        }
        assert_eq!(summary.passed, 5);
        assert!(summary.ok());
    }

    #[test]
    fn cases_are_numbered_from_one() {
        let cases = when_empty();
        let numbers: Vec<usize> = cases.iter().map(|c| c.number).collect();
        assert_eq!(numbers, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn each_case_records_its_own_line() {
        for sc in all() {
            let lines: Vec<u32> = (sc.run)().iter().map(|c| c.line).collect();
            assert!(lines.windows(2).all(|w| w[0] < w[1]), "{}: {:?}", sc.name, lines);
        }
    }

    #[test]
    fn find_by_name() {
        assert!(find("when_empty").is_some());
        assert!(find("when_nothing").is_none());
    }
}
