//! Concurrency Tests
//!
//! Interleaved register/resolve calls from many threads over many distinct
//! type keys.

use class_registry::Registry;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

const THREADS: usize = 8;
const ROUNDS: usize = 200;

/// One distinct type per `N`
#[derive(Debug)]
struct Slot<const N: usize>(usize);

#[derive(Debug, PartialEq)]
struct Baseline(&'static str);

struct Counted;

fn register_slot<const N: usize>(registry: &Registry) {
    registry.register(Slot::<N>(N));
}

fn has_slot<const N: usize>(registry: &Registry) -> bool {
    registry.resolve::<Slot<N>>().is_some_and(|slot| slot.0 == N)
}

type SlotOps = (fn(&Registry), fn(&Registry) -> bool);

macro_rules! slot_ops {
    ($($n:literal)*) => {
        vec![$((register_slot::<$n> as fn(&Registry), has_slot::<$n> as fn(&Registry) -> bool)),*]
    };
}

fn slot_ops() -> Vec<SlotOps> {
    slot_ops!(
        0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
        16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
        32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47
        48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
    )
}

#[test]
fn test_concurrent_disjoint_registration_loses_nothing() {
    let registry = Registry::new();
    registry.register(Baseline("ready"));
    let ops = slot_ops();

    thread::scope(|scope| {
        for worker in 0..THREADS {
            let registry = &registry;
            let ops = &ops;
            scope.spawn(move || {
                for (register, _) in ops.iter().skip(worker).step_by(THREADS) {
                    register(registry);
                    // Interleave reads of a key registered before the threads started
                    let baseline = registry.resolve::<Baseline>().expect("baseline registered");
                    assert_eq!(*baseline, Baseline("ready"));
                }
            });
        }
    });

    assert_eq!(registry.len(), ops.len() + 1);
    for (index, (_, has)) in ops.iter().enumerate() {
        assert!(has(&registry), "slot {index} missing after concurrent registration");
    }
}

#[test]
fn test_concurrent_register_and_resolve_interleaved() {
    let registry = Registry::new();
    let ops = slot_ops();
    let (seeded, pending) = ops.split_at(ops.len() / 2);
    for (register, _) in seeded {
        register(&registry);
    }

    thread::scope(|scope| {
        for worker in 0..THREADS {
            let registry = &registry;
            scope.spawn(move || {
                for (register, _) in pending.iter().skip(worker).step_by(THREADS) {
                    register(registry);
                }
            });
            scope.spawn(move || {
                for _ in 0..ROUNDS {
                    for (_, has) in seeded {
                        assert!(has(registry));
                    }
                }
            });
        }
    });

    for (_, has) in &ops {
        assert!(has(&registry));
    }
}

#[test]
fn test_concurrent_factory_resolution_counts_every_call() {
    let registry = Registry::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    registry.register_factory(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Counted
    });

    thread::scope(|scope| {
        for _ in 0..THREADS {
            let registry = &registry;
            scope.spawn(move || {
                for _ in 0..ROUNDS {
                    assert!(registry.resolve::<Counted>().is_some());
                }
            });
        }
    });

    assert_eq!(calls.load(Ordering::SeqCst), THREADS * ROUNDS);
}

#[test]
fn test_concurrent_registry_aware_factories_do_not_deadlock() {
    let registry = Registry::new();
    registry.register(Baseline("dependency"));
    registry.register_factory_with(|registry: &Registry| {
        let baseline = registry.resolve::<Baseline>().expect("dependency registered");
        register_slot::<0>(registry);
        baseline.0.len()
    });

    thread::scope(|scope| {
        for _ in 0..THREADS {
            let registry = &registry;
            scope.spawn(move || {
                for _ in 0..ROUNDS {
                    assert_eq!(registry.resolve::<usize>().as_deref(), Some(&10));
                }
            });
        }
    });

    assert!(has_slot::<0>(&registry));
}
