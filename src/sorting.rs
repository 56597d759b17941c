/// Sort `items` in place with selection sort, returning the number of swaps
/// performed.
///
/// For each position the minimum of the remaining unsorted suffix is found
/// and swapped into place. The inner scan runs through the final index
/// inclusive, so a minimum sitting in the last slot is still moved; the
/// result is always in non-decreasing order. O(n²) comparisons, no storage
/// beyond the loop indices.
pub fn selection_sort<T: Ord>(items: &mut [T]) -> usize {
    let len = items.len();
    if len < 2 {
        return 0;
    }

    let mut swaps = 0;
    for i in 0..len - 1 {
        let mut min_index = i;
        for j in i + 1..len {
            if items[j] < items[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            items.swap(i, min_index);
            swaps += 1;
        }
    }
    swaps
}
