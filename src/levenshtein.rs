//! Levenshtein distance calculation for venue-name matching.

/// Calculate the Levenshtein distance between two strings: the minimum number
/// of single-character insertions, deletions, or substitutions needed to turn
/// `a` into `b`.
///
/// Operates on `char`s, so multi-byte characters count as one edit each.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // table[i][j] = edits to turn the first j chars of `a` into the first i
    // chars of `b`.
    let mut table = vec![vec![0usize; a_chars.len() + 1]; b_chars.len() + 1];
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }

    for i in 1..=b_chars.len() {
        for j in 1..=a_chars.len() {
            table[i][j] = if b_chars[i - 1] == a_chars[j - 1] {
                table[i - 1][j - 1]
            } else {
                let substitution = table[i - 1][j - 1];
                let insertion = table[i][j - 1];
                let deletion = table[i - 1][j];
                1 + substitution.min(insertion).min(deletion)
            };
        }
    }

    table[b_chars.len()][a_chars.len()]
}

/// Calculate Levenshtein distance with an upper bound, returning `None` as
/// soon as the distance is known to exceed `threshold`.
///
/// Cheaper than [`levenshtein_distance`] when only the threshold comparison
/// matters, as it does for venue grouping: two rows of the table instead of
/// the full matrix, and a bail-out once every cell in a row is past the bound.
/// Agrees with the full matrix on every input within the bound.
pub fn levenshtein_distance_threshold(a: &str, b: &str, threshold: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // The length gap is a lower bound on the distance.
    if a_chars.len().abs_diff(b_chars.len()) > threshold {
        return None;
    }
    if a_chars.is_empty() || b_chars.is_empty() {
        let distance = a_chars.len().max(b_chars.len());
        return (distance <= threshold).then_some(distance);
    }

    let mut prev: Vec<usize> = (0..=a_chars.len()).collect();
    let mut curr = vec![0usize; a_chars.len() + 1];

    for (i, bc) in b_chars.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, ac) in a_chars.iter().enumerate() {
            curr[j + 1] = if bc == ac {
                prev[j]
            } else {
                1 + prev[j].min(curr[j]).min(prev[j + 1])
            };
            row_min = row_min.min(curr[j + 1]);
        }

        if row_min > threshold {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[a_chars.len()];
    (distance <= threshold).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("hult center", "hult centre"), 2);
        assert_eq!(levenshtein_distance("wow hall", "wow hal"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_levenshtein_distance_symmetry() {
        let pairs = [
            ("hult center", "hult centre"),
            ("wow hall", "shedd institute"),
            ("", "stage left"),
            ("a", "ab"),
        ];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_levenshtein_distance_identity() {
        for s in ["", "wow hall", "the hult center"] {
            assert_eq!(levenshtein_distance(s, s), 0);
        }
    }

    #[test]
    fn test_levenshtein_distance_threshold() {
        assert_eq!(
            levenshtein_distance_threshold("kitten", "sitting", 3),
            Some(3)
        );
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(
            levenshtein_distance_threshold("wow hall", "wow hall", 0),
            Some(0)
        );
        assert_eq!(levenshtein_distance_threshold("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_threshold("a", "ab", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("", "ab", 2), Some(2));
    }

    #[test]
    fn test_threshold_agrees_with_full_matrix() {
        let names = ["hult center", "hult centre", "wow hall", "", "wow  hall"];
        for a in names {
            for b in names {
                let full = levenshtein_distance(a, b);
                for threshold in 0..=3 {
                    let bounded = levenshtein_distance_threshold(a, b, threshold);
                    if full <= threshold {
                        assert_eq!(bounded, Some(full), "{a:?} vs {b:?} @ {threshold}");
                    } else {
                        assert_eq!(bounded, None, "{a:?} vs {b:?} @ {threshold}");
                    }
                }
            }
        }
    }
}
