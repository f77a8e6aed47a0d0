//! Property tests for the lightbox cursor.
//!
//! Navigation is closed under modulo: N steps of +1 return to the start,
//! −1 from 0 lands on N−1, and no sequence of moves leaves the gallery.

use filomena_core::{Gallery, Lightbox, LightboxCommand, LightboxKey, LightboxState};
use proptest::prelude::*;

fn lightbox(n: usize) -> Lightbox {
    Lightbox::new(Gallery::from_sources(
        (0..n).map(|i| Some(format!("/media/rooms/{i}.webp"))),
    ))
}

proptest! {
    #[test]
    fn full_cycle_returns_to_start(n in 1usize..40, start in 0usize..40) {
        let start = start % n;
        let mut lightbox = lightbox(n);
        lightbox.open(start as i64);
        for _ in 0..n {
            lightbox.navigate(1);
        }
        prop_assert_eq!(lightbox.state(), LightboxState::Open(start));
    }

    #[test]
    fn back_from_first_is_last(n in 1usize..40) {
        let mut lightbox = lightbox(n);
        lightbox.open(0);
        lightbox.navigate(-1);
        prop_assert_eq!(lightbox.cursor(), n - 1);
    }

    #[test]
    fn moves_stay_in_range(n in 1usize..20, moves in prop::collection::vec(-50i64..50, 0..64)) {
        let mut lightbox = lightbox(n);
        lightbox.open(0);
        let mut expected: i64 = 0;
        for step in moves {
            let command = lightbox.navigate(step);
            expected = (expected + step).rem_euclid(n as i64);
            prop_assert!(lightbox.cursor() < n);
            prop_assert_eq!(lightbox.cursor() as i64, expected);
            match command {
                Some(LightboxCommand::Render(frame)) => {
                    prop_assert_eq!(frame.position, lightbox.cursor() + 1);
                    prop_assert_eq!(frame.count, n);
                }
                other => prop_assert!(false, "unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn extreme_directions_do_not_overflow(n in 1usize..20, direction in any::<i64>()) {
        let mut lightbox = lightbox(n);
        lightbox.open(0);
        lightbox.navigate(direction);
        prop_assert!(lightbox.cursor() < n);
    }

    #[test]
    fn gallery_is_stable_across_sessions(n in 0usize..10, opens in prop::collection::vec(0i64..10, 1..8)) {
        let mut lightbox = lightbox(n);
        let before = lightbox.gallery().clone();
        for index in opens {
            lightbox.open(index);
            lightbox.handle_key(LightboxKey::Next);
            lightbox.close();
        }
        prop_assert_eq!(lightbox.gallery(), &before);
        prop_assert_eq!(lightbox.state(), LightboxState::Closed);
    }
}
