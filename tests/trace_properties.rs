//! Property tests over generated lists

use std::time::Instant;

use cycle_stepper::chain::{Chain, Layout};
use cycle_stepper::core::{Algorithm, ListInput};
use cycle_stepper::detector::TraceOutcome;
use cycle_stepper::playback::{PlaybackController, PlaybackEvent, Pointer};
use proptest::prelude::*;
use proptest::sample::Index;

fn list_input() -> impl Strategy<Value = ListInput> {
    (
        prop::collection::vec(-1000i64..1000, 0..40),
        any::<Index>(),
        any::<bool>(),
    )
        .prop_map(|(values, index, cyclic)| {
            let cycle = if cyclic && !values.is_empty() {
                index.index(values.len()) as i64
            } else {
                -1
            };
            ListInput::new(values, cycle).unwrap()
        })
}

#[test]
fn floyd_meets_within_list_length_for_every_cycle() {
    for n in 1..60usize {
        let values: Vec<i64> = (0..n as i64).collect();
        for cycle in 0..n {
            let chain = Chain::from(&ListInput::new(values.clone(), cycle as i64).unwrap());
            let trace = Algorithm::Floyd.trace(&chain);

            assert!(trace.found_cycle());
            assert!(trace.len() <= n, "n={n} cycle={cycle} len={}", trace.len());
        }
    }
}

proptest! {
    #[test]
    fn acyclic_traces_end_at_the_tail(input in list_input()) {
        prop_assume!(input.cycle().is_none());
        let chain = Chain::from(&input);

        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&chain);
            match trace.last() {
                None => prop_assert!(input.is_empty()),
                Some(last) => {
                    prop_assert_eq!(trace.outcome(), TraceOutcome::NoCycle);
                    prop_assert!(last.fast.is_none_or(|fast| chain.next(fast).is_none()));
                }
            }
        }
    }

    #[test]
    fn cyclic_traces_end_with_aliased_pointers(input in list_input()) {
        prop_assume!(input.cycle().is_some());
        let chain = Chain::from(&input);
        let table = chain.index_table();

        for algorithm in Algorithm::ALL {
            let trace = algorithm.trace(&chain);
            let last = trace.last().unwrap();
            prop_assert!(last.aliased());
            prop_assert_eq!(trace.outcome(), TraceOutcome::CycleFound { meeting: last.slow });

            // Every step before the last keeps the pointers apart
            let len = trace.len();
            prop_assert!(trace.steps()[..len - 1].iter().all(|pair| !pair.aliased()));

            let info = trace.cycle_info(&chain).unwrap();
            prop_assert_eq!(table.index_of(info.entry), input.cycle());
            prop_assert_eq!(info.length, input.len() - input.cycle().unwrap());
        }
    }

    #[test]
    fn trace_lengths_are_bounded(input in list_input()) {
        let chain = Chain::from(&input);
        let n = input.len();

        let floyd = Algorithm::Floyd.trace(&chain);
        if input.cycle().is_some() {
            // Pointers meet within one lap of mu + lambda = n nodes
            prop_assert!(floyd.len() <= n);
        } else {
            prop_assert!(floyd.len() <= n + 1);
        }
        prop_assert!(Algorithm::Brent.trace(&chain).len() <= 4 * n + 4);
    }

    #[test]
    fn algorithms_agree_with_the_input(input in list_input()) {
        let chain = Chain::from(&input);

        let floyd = Algorithm::Floyd.trace(&chain);
        let brent = Algorithm::Brent.trace(&chain);

        prop_assert_eq!(floyd.found_cycle(), input.cycle().is_some());
        prop_assert_eq!(brent.found_cycle(), input.cycle().is_some());
    }

    #[test]
    fn layout_places_slots_one_pitch_apart(input in list_input()) {
        let layout = Layout::from(&input);
        let expected = input.len() + usize::from(input.cycle().is_none());

        prop_assert_eq!(layout.slots().len(), expected);
        for (i, slot) in layout.slots().iter().enumerate() {
            prop_assert_eq!(slot.position, Layout::position_of(i));
        }
        for pair in layout.slots().windows(2) {
            prop_assert_eq!(pair[1].position.x - pair[0].position.x, 90.0);
            prop_assert_eq!(pair[1].position.y, pair[0].position.y);
        }
    }

    #[test]
    fn auto_follow_always_finishes(input in list_input(), slow in any::<bool>()) {
        let mut controller = PlaybackController::from_input(&input, Algorithm::Floyd);
        let pointer = if slow { Pointer::Slow } else { Pointer::Fast };
        controller.apply(PlaybackEvent::ToggleFollow(pointer));

        let mut now = Instant::now();
        let mut ticks = 0;
        while controller.state().mode.is_following() {
            controller.tick(now);
            now += controller.state().speed.auto_delay();
            ticks += 1;
            prop_assert!(ticks <= controller.trace().len() + 1);
        }

        prop_assert!(controller.is_finished());
    }
}
