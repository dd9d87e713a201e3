//! Advance policy
//!
//! Decides which queue index plays after the current one:
//! - Shuffle: uniformly random, never the current index when there is a choice
//! - Sequential: the following index, wrapping only in repeat-all
//!
//! Repeat-one is not handled here. It applies to natural track end only, and
//! the controller restarts the track itself.

use canto_core::RepeatMode;
use rand::Rng;

/// Next queue index, or `None` when playback should stop
///
/// With no current index the sequential successor is 0.
pub fn next_index<R: Rng + ?Sized>(
    len: usize,
    current: Option<usize>,
    shuffle: bool,
    repeat: RepeatMode,
    rng: &mut R,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    if shuffle {
        return Some(random_other(len, current, rng));
    }

    let next = current.map_or(0, |i| i + 1);
    if next < len {
        Some(next)
    } else if repeat == RepeatMode::All {
        Some(0)
    } else {
        None
    }
}

/// Uniform pick over `0..len` excluding `current` when `len > 1`
fn random_other<R: Rng + ?Sized>(len: usize, current: Option<usize>, rng: &mut R) -> usize {
    match current {
        Some(current) if len > 1 && current < len => {
            // Draw from the len-1 other slots and skip over the current one
            let pick = rng.gen_range(0..len - 1);
            if pick >= current {
                pick + 1
            } else {
                pick
            }
        }
        _ => rng.gen_range(0..len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn empty_queue_stops() {
        assert_eq!(next_index(0, None, false, RepeatMode::All, &mut rng()), None);
        assert_eq!(next_index(0, None, true, RepeatMode::All, &mut rng()), None);
    }

    #[test]
    fn sequential_advances_and_stops_at_end() {
        let mut rng = rng();
        assert_eq!(next_index(3, None, false, RepeatMode::Off, &mut rng), Some(0));
        assert_eq!(next_index(3, Some(0), false, RepeatMode::Off, &mut rng), Some(1));
        assert_eq!(next_index(3, Some(2), false, RepeatMode::Off, &mut rng), None);
        assert_eq!(next_index(3, Some(2), false, RepeatMode::One, &mut rng), None);
    }

    #[test]
    fn repeat_all_wraps() {
        assert_eq!(
            next_index(3, Some(2), false, RepeatMode::All, &mut rng()),
            Some(0)
        );
    }

    #[test]
    fn shuffle_single_track_repeats_it() {
        assert_eq!(next_index(1, Some(0), true, RepeatMode::Off, &mut rng()), Some(0));
    }

    #[test]
    fn shuffle_never_repeats_current() {
        let mut rng = rng();
        for _ in 0..500 {
            let next = next_index(4, Some(2), true, RepeatMode::Off, &mut rng).unwrap();
            assert_ne!(next, 2);
            assert!(next < 4);
        }
    }

    #[test]
    fn shuffle_reaches_every_other_index() {
        let mut rng = rng();
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[next_index(5, Some(0), true, RepeatMode::Off, &mut rng).unwrap()] = true;
        }
        assert_eq!(seen, [false, true, true, true, true]);
    }
}
