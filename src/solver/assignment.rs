/// Minimum-cost perfect assignment of rows to columns (Kuhn-Munkres with potentials).
///
/// `costs` must have at most as many rows as columns.
/// Returns the total cost and the column assigned to each row.
pub(crate) fn min_cost_assignment(costs: &[Vec<i64>]) -> (i64, Vec<usize>) {
    let n = costs.len();
    if n == 0 {
        return (0, Vec::new());
    }
    let m = costs[0].len();
    assert!(n <= m, "More rows ({}) than columns ({})", n, m);

    // 1-based, index 0 is a sentinel
    let mut u = vec![0i64; n + 1];
    let mut v = vec![0i64; m + 1];
    let mut row_of_col = vec![0usize; m + 1];
    let mut way = vec![0usize; m + 1];

    for row in 1..=n {
        row_of_col[0] = row;
        let mut col0 = 0;
        let mut min_v = vec![i64::max_value(); m + 1];
        let mut used = vec![false; m + 1];

        loop {
            used[col0] = true;
            let row0 = row_of_col[col0];
            let mut delta = i64::max_value();
            let mut col1 = 0;
            for col in 1..=m {
                if used[col] {
                    continue;
                }
                let cur = costs[row0 - 1][col - 1] - u[row0] - v[col];
                if cur < min_v[col] {
                    min_v[col] = cur;
                    way[col] = col0;
                }
                if min_v[col] < delta {
                    delta = min_v[col];
                    col1 = col;
                }
            }
            for col in 0..=m {
                if used[col] {
                    u[row_of_col[col]] += delta;
                    v[col] -= delta;
                } else {
                    min_v[col] -= delta;
                }
            }
            col0 = col1;
            if row_of_col[col0] == 0 {
                break;
            }
        }

        // augment along the alternating path
        loop {
            let col1 = way[col0];
            row_of_col[col0] = row_of_col[col1];
            col0 = col1;
            if col0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0; n];
    let mut total = 0;
    for col in 1..=m {
        let row = row_of_col[col];
        if row != 0 {
            assignment[row - 1] = col - 1;
            total += costs[row - 1][col - 1];
        }
    }
    (total, assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(min_cost_assignment(&[]), (0, vec![]));
    }

    #[test]
    fn square() {
        let costs = vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]];
        assert_eq!(min_cost_assignment(&costs), (5, vec![1, 0, 2]));
    }

    #[test]
    fn greedy_is_not_optimal() {
        // picking the cheapest edge first (0 -> 0) forces 1 -> 1 for a total of 101
        let costs = vec![vec![1, 2], vec![2, 100]];
        assert_eq!(min_cost_assignment(&costs), (4, vec![1, 0]));
    }

    #[test]
    fn more_columns() {
        let costs = vec![vec![7, 3, 9], vec![6, 8, 1]];
        assert_eq!(min_cost_assignment(&costs), (4, vec![1, 2]));
    }
}
