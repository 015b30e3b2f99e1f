use std::time::Duration;

use fightmove::input::{InputBuffer, BUFFER_CAPACITY};
use fightmove::motion::{fallback, normalize, relevant_inputs};
use fightmove::{ButtonCategory, Direction, FighterDirection, Sample};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::LeftDown),
        Just(Direction::Down),
        Just(Direction::RightDown),
        Just(Direction::Right),
        Just(Direction::RightUp),
        Just(Direction::Up),
        Just(Direction::LeftUp),
        Just(Direction::Neutral),
        Just(Direction::Unknown),
    ]
}

fn sample_button() -> impl Strategy<Value = ButtonCategory> {
    prop_oneof![
        Just(ButtonCategory::None),
        Just(ButtonCategory::LightPunch),
        Just(ButtonCategory::MediumPunch),
        Just(ButtonCategory::HeavyPunch),
        Just(ButtonCategory::LightKick),
        Just(ButtonCategory::MediumKick),
        Just(ButtonCategory::HeavyKick),
    ]
}

fn facing() -> impl Strategy<Value = FighterDirection> {
    prop_oneof![Just(FighterDirection::Left), Just(FighterDirection::Right)]
}

fn samples(max: usize) -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec((direction(), sample_button()), 0..max).prop_map(|inputs| {
        inputs
            .into_iter()
            .enumerate()
            .map(|(i, (direction, button))| {
                Sample::new(direction, button, Duration::from_millis(i as u64 * 16))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn buffer_never_exceeds_capacity(stream in samples(200)) {
        let mut buffer = InputBuffer::new();
        for sample in stream {
            buffer.push(sample);
            prop_assert!(buffer.len() <= BUFFER_CAPACITY);
        }
    }

    #[test]
    fn push_accepts_exactly_the_changes(stream in samples(120)) {
        let mut buffer = InputBuffer::new();
        for sample in stream {
            let before = buffer.snapshot();
            let expected = sample.direction != Direction::Unknown
                && before.first().map_or(true, |head| !head.same_input(&sample));

            let accepted = buffer.push(sample);
            prop_assert_eq!(accepted, expected);

            if accepted {
                prop_assert_eq!(buffer.history().head().copied(), Some(sample));
                let after = buffer.snapshot();
                let mut expected_tail = before.clone();
                expected_tail.truncate(BUFFER_CAPACITY - 1);
                prop_assert_eq!(&after[1..], &expected_tail[..]);
            } else {
                prop_assert_eq!(buffer.snapshot(), before);
            }
        }
    }

    #[test]
    fn buffer_is_ordered_by_recency(stream in samples(120)) {
        let mut buffer = InputBuffer::new();
        for sample in stream {
            buffer.push(sample);
        }
        let snapshot = buffer.snapshot();
        for pair in snapshot.windows(2) {
            prop_assert!(pair[0].timestamp >= pair[1].timestamp);
            prop_assert!(!pair[0].same_input(&pair[1]));
        }
    }

    #[test]
    fn normalize_round_trips_through_two_flips(
        d in direction(),
        motion_facing in facing(),
        current in facing(),
    ) {
        let once = normalize(d, motion_facing, current);
        prop_assert_eq!(normalize(once, current, motion_facing), d);
        prop_assert_eq!(d.mirrored().mirrored(), d);
    }

    #[test]
    fn relevant_inputs_is_all_or_nothing(
        stream in samples(60),
        count in 0usize..12,
        ignore_neutral in any::<bool>(),
    ) {
        let mut buffer = InputBuffer::new();
        for sample in stream {
            buffer.push(sample);
        }

        let window = relevant_inputs(buffer.history(), count, ignore_neutral);
        let meaningful = buffer
            .snapshot()
            .iter()
            .filter(|sample| !(ignore_neutral && sample.is_resting()))
            .count();

        if meaningful >= count {
            prop_assert_eq!(window.len(), count);
        } else {
            prop_assert!(window.is_empty());
        }
        if ignore_neutral {
            prop_assert!(window.iter().all(|sample| !sample.is_resting()));
        }
        for pair in window.windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn fallback_is_a_pure_function(d in direction(), b in sample_button()) {
        let sample = Sample::new(d, b, Duration::from_millis(5));
        prop_assert_eq!(fallback(&sample), fallback(&sample));
    }
}
