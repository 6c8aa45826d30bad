/// In-place adjacent-exchange sort.
///
/// `out_of_order(a, b)` is called for neighbouring elements `a` (left) and `b` (right)
/// and must return `true` when `b` has to end up before `a`. Equal elements are never
/// exchanged, so the relative order of ties is kept. Quadratic in the number of elements.
pub fn exchange_sort<T, F>(items: &mut [T], mut out_of_order: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = items.len();
    if n < 2 {
        return;
    }
    for pass in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if out_of_order(&items[j], &items[j + 1]) {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_element_slices_are_untouched() {
        let mut empty: [i32; 0] = [];
        exchange_sort(&mut empty, |a, b| a > b);

        let mut single = [42];
        exchange_sort(&mut single, |a, b| a > b);
        assert_eq!(single, [42]);
    }

    #[test]
    fn sorts_ascending_with_greater_than() {
        let mut items = vec![5, 1, 4, 2, 8, 0, 2];
        exchange_sort(&mut items, |a, b| a > b);
        assert_eq!(items, vec![0, 1, 2, 2, 4, 5, 8]);
    }

    #[test]
    fn sorts_descending_with_less_than() {
        let mut items = vec![3, 9, 1, 7];
        exchange_sort(&mut items, |a, b| a < b);
        assert_eq!(items, vec![9, 7, 3, 1]);
    }

    #[test]
    fn ties_keep_their_input_order() {
        // sort by weight only, the label tells the input position
        let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        exchange_sort(&mut items, |a, b| a.0 > b.0);
        assert_eq!(
            items,
            vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[test]
    fn agrees_with_std_stable_sort() {
        use rand::{Rng, SeedableRng};
        use rand_pcg::Pcg64;

        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..50 {
            let len = rng.gen_range(0..40);
            let items: Vec<(u8, usize)> = (0..len).map(|i| (rng.gen_range(0..6), i)).collect();

            let mut expected = items.clone();
            expected.sort_by_key(|it| it.0);

            let mut actual = items;
            exchange_sort(&mut actual, |a, b| a.0 > b.0);
            assert_eq!(actual, expected);
        }
    }
}
