/// A vector kept sorted on every `push`, the first element being the one to extract next.
///
/// The order is given by a strict `precedes(a, b)` predicate: `true` means `a` has to stay
/// in front of `b`. A new element goes in front of all elements it is equivalent to.
pub struct OrderedSequence<T, F> {
    elements: Vec<T>,
    precedes: F,
}

fn ascending<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

fn descending<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

impl<T: Ord> OrderedSequence<T, fn(&T, &T) -> bool> {
    /// Smallest element first.
    pub fn ascending() -> Self {
        Self::new(ascending::<T>)
    }

    /// Largest element first.
    pub fn descending() -> Self {
        Self::new(descending::<T>)
    }
}

impl<T, F> OrderedSequence<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(precedes: F) -> Self {
        Self {
            elements: Vec::new(),
            precedes,
        }
    }

    // binary search for the first position whose element does not precede `element`
    fn lower_bound(&self, element: &T) -> usize {
        let mut first = 0;
        let mut last = self.elements.len();
        while first < last {
            let mid = first + (last - first) / 2;
            if (self.precedes)(&self.elements[mid], element) {
                first = mid + 1;
            } else {
                last = mid;
            }
        }
        first
    }

    pub fn push(&mut self, element: T) {
        let idx = self.lower_bound(&element);
        self.elements.insert(idx, element);
    }

    /// The element that would be extracted next.
    ///
    /// # Panics
    /// If the sequence is empty.
    pub fn front(&self) -> &T {
        match self.elements.first() {
            Some(element) => element,
            None => panic!("front() called on an empty OrderedSequence"),
        }
    }

    /// Removes the front element. Does nothing on an empty sequence.
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.elements.remove(0))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sequence_is_empty() {
        let seq: OrderedSequence<i32, _> = OrderedSequence::ascending();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut seq: OrderedSequence<i32, _> = OrderedSequence::ascending();
        assert_eq!(seq.pop(), None);
        assert!(seq.is_empty());
    }

    #[test]
    #[should_panic]
    fn front_on_empty_panics() {
        let seq: OrderedSequence<i32, _> = OrderedSequence::descending();
        seq.front();
    }

    #[test]
    fn ascending_yields_smallest_first() {
        let mut seq = OrderedSequence::ascending();
        for it in [5, 1, 4, 1, 9] {
            seq.push(it);
        }
        assert_eq!(*seq.front(), 1);
        let drained: Vec<i32> = std::iter::from_fn(|| seq.pop()).collect();
        assert_eq!(drained, vec![1, 1, 4, 5, 9]);
    }

    #[test]
    fn descending_yields_largest_first() {
        let mut seq = OrderedSequence::descending();
        for it in [(0, 3), (7, 1), (2, 2), (7, 0)] {
            seq.push(it);
        }
        assert_eq!(*seq.front(), (7, 1));
        let drained: Vec<(i32, i32)> = std::iter::from_fn(|| seq.pop()).collect();
        assert_eq!(drained, vec![(7, 1), (7, 0), (2, 2), (0, 3)]);
    }

    #[test]
    fn equivalent_elements_are_inserted_in_front() {
        // compare by key only; the tag tells which insertion came first
        let mut seq = OrderedSequence::new(|a: &(u8, char), b: &(u8, char)| a.0 < b.0);
        seq.push((1, 'a'));
        seq.push((2, 'b'));
        seq.push((1, 'c'));
        seq.push((1, 'd'));
        let order: Vec<char> = seq.iter().map(|it| it.1).collect();
        assert_eq!(order, vec!['d', 'c', 'a', 'b']);
    }

    #[test]
    fn stays_sorted_under_random_pushes() {
        use rand::{Rng, SeedableRng};
        use rand_pcg::Pcg64;

        let mut rng = Pcg64::seed_from_u64(99);
        let mut seq = OrderedSequence::ascending();
        for _ in 0..500 {
            seq.push(rng.gen_range(-50..50));
            if rng.gen_bool(0.3) {
                seq.pop();
            }
        }
        let items: Vec<i32> = seq.iter().copied().collect();
        assert!(items.windows(2).all(|w| w[0] <= w[1]));
    }
}
