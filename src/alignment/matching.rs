use crate::types::SubstringMatch;

/// Longest contiguous run shared by `a` and `b`.
///
/// Among equal-length maxima the one starting earliest in `a` wins, then the
/// one starting earliest in `b`. A zero-size match at `(0, 0)` means the
/// sequences share nothing.
///
/// Runs in O(|a|·|b|) time with two rows of O(|b|) memory, and stops early
/// once the whole of `b` has been found.
pub fn longest_common_substring(a: &[char], b: &[char]) -> SubstringMatch {
    let mut best = SubstringMatch::default();
    if a.is_empty() || b.is_empty() {
        return best;
    }

    // run lengths ending at (i - 1, j - 1) and (i, j - 1), shifted by one column
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            let run = if ca == cb { prev[j] + 1 } else { 0 };
            curr[j + 1] = run;
            if run > best.size {
                best = SubstringMatch {
                    a_start: i + 1 - run,
                    b_start: j + 1 - run,
                    size: run,
                };
            }
        }
        if best.size == b.len() {
            break;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
