/// Mulberry32 step constant.
const INCREMENT: u32 = 0x6D2B_79F5;

/// Small deterministic generator behind the daily puzzle deal.
///
/// Owns a single 32-bit cursor and is constructed fresh for every deal; the
/// cursor is never shared between deals. The draw stream for a given seed is
/// a compatibility surface: archived puzzles are regenerated from their date
/// on every load, so the mixing steps below must stay bit-for-bit stable
/// across releases.
#[derive(Debug)]
pub struct DailyRng {
    state: u32,
}

impl DailyRng {
    pub fn new(seed: u32) -> Self {
        // scramble the raw seed once so near-identical seeds (consecutive
        // dates) do not start from near-identical cursors
        DailyRng {
            state: mix(seed.wrapping_add(INCREMENT)),
        }
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(INCREMENT);
        f64::from(mix(self.state)) / 4_294_967_296.0
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        min + (self.next_f64() * ((max - min + 1) as f64)).floor() as i64
    }

    /// Uniform element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.range(0, items.len() as i64 - 1) as usize]
    }
}

fn mix(state: u32) -> u32 {
    let mut t = state;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    t ^ (t >> 14)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = DailyRng::new(20251201);
        let mut b = DailyRng::new(20251201);

        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = DailyRng::new(20251201);
        let mut b = DailyRng::new(20251202);

        let draws_a: Vec<f64> = (0..8).map(|_| a.next_f64()).collect();
        let draws_b: Vec<f64> = (0..8).map(|_| b.next_f64()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut rng = DailyRng::new(42);
        for _ in 0..1000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value), "draw {} out of [0, 1)", value);
        }
    }

    #[test]
    fn test_range_is_inclusive_and_bounded() {
        let mut rng = DailyRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..1000 {
            let value = rng.range(1, 6);
            assert!((1..=6).contains(&value), "range draw {} out of bounds", value);
            seen[(value - 1) as usize] = true;
        }
        // a thousand draws over six buckets should hit every bucket
        assert!(seen.iter().all(|hit| *hit), "range never produced some values: {:?}", seen);
    }

    #[test]
    fn test_pick_returns_slice_elements() {
        let mut rng = DailyRng::new(99);
        let items = ["a", "b", "c"];
        for _ in 0..50 {
            let picked = rng.pick(&items);
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_single_element_pick() {
        let mut rng = DailyRng::new(1);
        assert_eq!(*rng.pick(&[17]), 17);
    }
}
