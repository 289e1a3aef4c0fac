use grabbag::bag::{RandomBag, RefillSource};
use grabbag::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use test_log::test;

#[test]
fn generator_called_fill_count_times_per_filling() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = {
        let calls = Arc::clone(&calls);
        RefillSource::generator(move |buffer: &mut Vec<usize>| {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            buffer.push(call);
            buffer.push(call + 100);
        })
    };

    let mut bag = RandomBag::new_from_seed(source, 3, 0x1234).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(bag.remaining(), 6);

    let mut drawn = bag.pop_many(6).unwrap();
    drawn.sort_unstable();
    assert_eq!(drawn, vec![0, 1, 2, 100, 101, 102]);
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    bag.pop_one().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 6);
}

#[test]
fn generator_yielding_nothing_is_rejected() {
    let result = RandomBag::new_from_seed(RefillSource::generator(|_: &mut Vec<u32>| {}), 1, 0);
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn generator_yielding_nothing_on_later_call_is_rejected() {
    // The first call adds an item, the second adds nothing
    let calls = Arc::new(AtomicUsize::new(0));
    let source = {
        let calls = Arc::clone(&calls);
        RefillSource::generator(move |buffer: &mut Vec<u32>| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                buffer.push(1);
            }
        })
    };

    let result = RandomBag::new_from_seed(source, 2, 0);
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn failed_refill_surfaces_from_pop() {
    let mut bag = RandomBag::new_from_seed(RefillSource::items(vec![1u32, 2]), 1, 0).unwrap();
    bag.set_refill_generator(|_| {});

    // The current filling is still handed out
    assert_eq!(bag.pop_many(2).unwrap().len(), 2);

    assert!(matches!(bag.pop_one(), Err(Error::Configuration(_))));
    assert_eq!(bag.remaining(), 0);
    assert!(matches!(bag.pop_many(3), Err(Error::Configuration(_))));
}

#[test]
fn endless_stops_after_failed_refill() {
    let mut bag = RandomBag::new_from_seed(RefillSource::items(vec![1u32]), 1, 0).unwrap();
    bag.set_refill_generator(|_| {});

    let drawn = bag.endless().collect::<Vec<_>>();
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0], Ok(1));
    assert!(matches!(drawn[1], Err(Error::Configuration(_))));
}

#[test]
fn set_refill_items_applies_from_next_filling() {
    let mut bag = RandomBag::new_from_seed(RefillSource::items(vec!['a', 'b', 'c']), 1, 11).unwrap();
    bag.pop_one().unwrap();
    bag.set_refill_items(vec!['x', 'y']).unwrap();
    assert_eq!(bag.remaining(), 2);

    let mut old = bag.pop_many(2).unwrap();
    old.retain(|c| !['a', 'b', 'c'].contains(c));
    assert!(old.is_empty());

    let mut new = bag.pop_many(2).unwrap();
    new.sort_unstable();
    assert_eq!(new, vec!['x', 'y']);
}

#[test]
fn set_refill_items_rejects_empty() {
    let mut bag = RandomBag::new_from_seed(RefillSource::items(vec![1]), 1, 0).unwrap();
    assert!(matches!(bag.set_refill_items(Vec::new()), Err(Error::Configuration(_))));

    // The old source is still active
    bag.reset().unwrap();
    assert_eq!(bag.pop_one(), Ok(1));
}

#[test]
fn setting_items_replaces_generator() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = {
        let calls = Arc::clone(&calls);
        RefillSource::generator(move |buffer: &mut Vec<u8>| {
            calls.fetch_add(1, Ordering::SeqCst);
            buffer.push(0);
        })
    };

    let mut bag = RandomBag::new_from_seed(source, 1, 0).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    bag.set_refill_items(vec![9]).unwrap();
    bag.reset().unwrap();
    bag.reset().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(bag.pop_one(), Ok(9));
}

#[test]
fn set_refill_source_switches_modes() {
    let mut bag = RandomBag::new_from_seed(RefillSource::items(vec![1u8]), 2, 0).unwrap();

    bag.set_refill_source(RefillSource::generator(|buffer: &mut Vec<u8>| buffer.push(5)))
        .unwrap();
    bag.reset().unwrap();
    assert_eq!(bag.pop_many(2).unwrap(), vec![5, 5]);

    bag.set_refill_source(RefillSource::from(vec![7u8])).unwrap();
    bag.reset().unwrap();
    assert_eq!(bag.pop_many(2).unwrap(), vec![7, 7]);

    assert!(bag.set_refill_source(RefillSource::Items(vec![])).is_err());
}

#[test]
fn refill_source_debug_hides_generator() {
    let source = RefillSource::generator(|buffer: &mut Vec<u8>| buffer.push(1));
    assert_eq!(format!("{:?}", source), "Generator(\"..\")");
    assert_eq!(format!("{:?}", RefillSource::items(vec![1, 2])), "Items([1, 2])");
}
