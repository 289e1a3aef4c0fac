use grabbag::rolling::RollingArray;
use grabbag::Error;
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::VecDeque;

#[derive(Arbitrary, Clone, Copy, Debug)]
enum Op {
    Append(u16),
    Set(#[proptest(strategy = "0usize..10")] usize, u16),
    Get(#[proptest(strategy = "0usize..10")] usize),
    Clear,
}

/// Run `ops` against both a `RollingArray` and a `VecDeque` that drops from the front on overflow,
/// checking they agree after every step.
fn check_against_model(capacity: usize, ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut history = RollingArray::new(capacity).unwrap();
    let mut model: VecDeque<u16> = VecDeque::with_capacity(capacity);

    for op in ops {
        match op {
            Op::Append(value) => {
                history.append(value);
                if model.len() == capacity {
                    model.pop_front();
                }
                model.push_back(value);
            }
            Op::Set(index, value) => {
                let result = history.set(index, value);
                if index < model.len() {
                    prop_assert_eq!(result, Ok(()));
                    model[index] = value;
                } else {
                    prop_assert_eq!(
                        result,
                        Err(Error::IndexOutOfRange {
                            index: index as isize,
                            count: model.len()
                        })
                    );
                }
            }
            Op::Get(index) => {
                prop_assert_eq!(history.get(index).ok(), model.get(index));
            }
            Op::Clear => {
                history.clear();
                model.clear();
            }
        }

        prop_assert_eq!(history.len(), model.len());
        prop_assert_eq!(history.iter().collect::<Vec<_>>(), model.iter().collect::<Vec<_>>());
        prop_assert_eq!(history.oldest().ok(), model.front());
        prop_assert_eq!(history.latest().ok(), model.back());
    }

    Ok(())
}

proptest! {
    #[test]
    fn matches_deque_model(capacity in 1usize..8, ops in proptest::collection::vec(any::<Op>(), 0..64)) {
        check_against_model(capacity, ops)?;
    }

    // Appending capacity + k values leaves exactly the last `capacity` of them, in order
    #[test]
    fn keeps_last_capacity_values(capacity in 1usize..16, extra in 0usize..40) {
        let mut history = RollingArray::new(capacity).unwrap();
        let values = (0..capacity + extra).collect::<Vec<_>>();
        for value in &values {
            history.append(*value);
        }

        prop_assert_eq!(history.len(), capacity);
        for i in 0..capacity {
            prop_assert_eq!(history.get(i), Ok(&values[extra + i]));
        }
        prop_assert!(history.get(capacity).is_err());
    }
}
