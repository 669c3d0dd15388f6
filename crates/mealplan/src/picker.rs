use rand::{SeedableRng, rngs::StdRng, seq::IteratorRandom};

/// Source of the uniform draws made by the day planner.
pub trait Picker {
    /// Draws an index in `0..len`, `None` when `len` is zero.
    fn pick_index(&mut self, len: usize) -> Option<usize>;

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.pick_index(items.len()).and_then(|index| items.get(index))
    }
}

pub struct RandomPicker(StdRng);

impl RandomPicker {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Picker for RandomPicker {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        (0..len).choose(&mut self.0)
    }
}

/// Always takes the head of the pool, so picks follow ranking order.
#[derive(Default, Clone, Copy, Debug)]
pub struct FirstPicker;

impl Picker for FirstPicker {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then_some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool_yields_nothing() {
        let items: [u8; 0] = [];

        assert_eq!(RandomPicker::seeded(1).pick(&items), None);
        assert_eq!(FirstPicker.pick(&items), None);
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let items = (0..50).collect::<Vec<u32>>();
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);

        let left = (0..20).map(|_| *a.pick(&items).unwrap()).collect::<Vec<_>>();
        let right = (0..20).map(|_| *b.pick(&items).unwrap()).collect::<Vec<_>>();

        assert_eq!(left, right);
    }

    #[test]
    fn test_random_picker_stays_in_bounds() {
        let mut picker = RandomPicker::seeded(7);

        for len in 1..30 {
            let index = picker.pick_index(len).unwrap();
            assert!(index < len);
        }
    }

    #[test]
    fn test_first_picker() {
        assert_eq!(FirstPicker.pick(&["a", "b"]), Some(&"a"));
    }
}
