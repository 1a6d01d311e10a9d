//! Seek cost computation.

/// Total head movement along `[head] ++ sequence`.
///
/// Integer arithmetic throughout; an empty sequence costs 0. Each move
/// fits in `u64`, and a total that would exceed `u64::MAX` saturates.
///
/// # Example
/// ```
/// use disk_schedule::scheduler::seek_cost;
///
/// assert_eq!(seek_cost(&[65, 67, 37], 53), 12 + 2 + 30);
/// assert_eq!(seek_cost(&[], 53), 0);
/// ```
pub fn seek_cost(sequence: &[i64], head: i64) -> u64 {
    sequence
        .iter()
        .scan(head, |current, &next| {
            let step = next.abs_diff(*current);
            *current = next;
            Some(step)
        })
        .fold(0u64, u64::saturating_add)
}

/// Mean seek per visited position; 0 when nothing was visited.
pub fn average_seek(total_seek: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total_seek as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_classic_cost() {
        let sequence = [98, 183, 37, 122, 14, 124, 65, 67];
        assert_eq!(seek_cost(&sequence, 53), 640);
    }

    #[test]
    fn test_cost_includes_first_move() {
        assert_eq!(seek_cost(&[10], 50), 40);
        assert_eq!(seek_cost(&[50], 50), 0);
    }

    #[test]
    fn test_cost_wrap_is_direct_distance() {
        // 183 -> 199 -> 0 -> 14
        assert_eq!(seek_cost(&[199, 0, 14], 183), 16 + 199 + 14);
    }

    #[test]
    fn test_extreme_tracks_saturate() {
        assert_eq!(seek_cost(&[i64::MAX], 0), i64::MAX as u64);
        assert_eq!(seek_cost(&[i64::MAX, 0], 0), 2 * i64::MAX as u64);
        assert_eq!(seek_cost(&[i64::MAX, 0, i64::MAX], 0), u64::MAX);
    }

    #[test]
    fn test_average() {
        assert!((average_seek(640, 8) - 80.0).abs() < 1e-10);
        assert!((average_seek(0, 0) - 0.0).abs() < 1e-10);
        assert!((average_seek(10, 0) - 0.0).abs() < 1e-10);
    }
}
