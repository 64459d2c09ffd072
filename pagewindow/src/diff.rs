use crate::PageIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Change {
    Enter(PageIndex),
    Leave(PageIndex),
}

/// Diffs two inclusive index windows edge by edge.
///
/// The forward edge is processed first, then the backward edge. `f` receives `Enter(i)` for
/// every index in `next` that is not in `prev` and `Leave(i)` for every index in `prev` that is
/// not in `next`, each exactly once, ascending within an edge.
///
/// While the windows overlap, an edge that moved by one page produces exactly one call, which is
/// the common case during a drag. A jump to a disjoint window sweeps every index of both.
pub(crate) fn diff_windows(
    prev: (PageIndex, PageIndex),
    next: (PageIndex, PageIndex),
    mut f: impl FnMut(Change),
) {
    let (prev_low, prev_high) = prev;
    let (next_low, next_high) = next;
    debug_assert!(prev_low <= prev_high && next_low <= next_high);

    if next_high > prev_high {
        for i in (prev_high + 1).max(next_low)..=next_high {
            f(Change::Enter(i));
        }
    } else if next_high < prev_high {
        for i in (next_high + 1).max(prev_low)..=prev_high {
            f(Change::Leave(i));
        }
    }

    if next_low < prev_low {
        for i in next_low..=(prev_low - 1).min(next_high) {
            f(Change::Enter(i));
        }
    } else if next_low > prev_low {
        for i in prev_low..=(next_low - 1).min(prev_high) {
            f(Change::Leave(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn run(prev: (usize, usize), next: (usize, usize)) -> (Vec<usize>, Vec<usize>) {
        let mut entered = Vec::new();
        let mut left = Vec::new();
        diff_windows(prev, next, |change| match change {
            Change::Enter(i) => entered.push(i),
            Change::Leave(i) => left.push(i),
        });
        (entered, left)
    }

    #[test]
    fn identical_windows_produce_nothing() {
        assert_eq!(run((2, 3), (2, 3)), (Vec::new(), Vec::new()));
    }

    #[test]
    fn single_step_touches_one_index_per_edge() {
        assert_eq!(run((0, 0), (0, 1)), (alloc::vec![1], Vec::new()));
        assert_eq!(run((0, 1), (1, 1)), (Vec::new(), alloc::vec![0]));
        assert_eq!(run((0, 0), (1, 1)), (alloc::vec![1], alloc::vec![0]));
    }

    #[test]
    fn disjoint_jump_sweeps_both_windows() {
        assert_eq!(run((1, 2), (3, 4)), (alloc::vec![3, 4], alloc::vec![1, 2]));
        assert_eq!(run((5, 7), (0, 2)), (alloc::vec![0, 1, 2], alloc::vec![5, 6, 7]));
    }

    #[test]
    fn matches_set_difference_exhaustively() {
        for a in 0..8usize {
            for b in a..8 {
                for c in 0..8usize {
                    for d in c..8 {
                        let (entered, left) = run((a, b), (c, d));
                        let want_enter: Vec<usize> =
                            (c..=d).filter(|i| !(a..=b).contains(i)).collect();
                        let want_leave: Vec<usize> =
                            (a..=b).filter(|i| !(c..=d).contains(i)).collect();
                        let mut entered_sorted = entered.clone();
                        entered_sorted.sort_unstable();
                        let mut left_sorted = left.clone();
                        left_sorted.sort_unstable();
                        assert_eq!(entered_sorted, want_enter, "{:?} -> {:?}", (a, b), (c, d));
                        assert_eq!(left_sorted, want_leave, "{:?} -> {:?}", (a, b), (c, d));
                    }
                }
            }
        }
    }
}
