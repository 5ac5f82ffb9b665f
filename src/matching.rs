//! Pairing up an even number of indices.

use itertools::Itertools;
use unordered_pair::UnorderedPair;

/// One way of splitting an index set into disjoint pairs.
///
/// Every pair is built as `UnorderedPair(first, partner)` with `first < partner`.
pub type Matching = Vec<UnorderedPair<usize>>;

/// Visit every perfect matching of the indices `0..n`, one at a time.
///
/// The lowest remaining index is paired in turn with each other remaining index, ascending, and the rest is matched recursively.
/// This yields each matching exactly once, `(n - 1)!!` in total, holding only the matching under construction in memory.
/// `n == 0` has a single empty matching; odd `n` has none.
pub fn for_each_perfect_matching<F: FnMut(&Matching)>(n: usize, mut visit: F) {
    if n % 2 == 0 {
        let mut so_far = Vec::with_capacity(n / 2);
        extend_matchings(&mut visit, &mut so_far, &(0..n).collect_vec());
    }
}

/// Every perfect matching of the indices `0..n`, in the order [`for_each_perfect_matching`] visits them.
pub fn perfect_matchings(n: usize) -> Vec<Matching> {
    let mut matchings = Vec::new();
    for_each_perfect_matching(n, |matching| matchings.push(matching.clone()));
    matchings
}

fn extend_matchings<F: FnMut(&Matching)>(visit: &mut F, so_far: &mut Matching, remaining: &[usize]) {
    let Some((&first, rest)) = remaining.split_first() else {
        visit(so_far);
        return;
    };

    for &partner in rest {
        so_far.push(UnorderedPair(first, partner));
        let remainder = rest.iter()
            .copied()
            .filter(|index| *index != partner)
            .collect_vec();
        extend_matchings(visit, so_far, &remainder);
        so_far.pop();
    }
}
