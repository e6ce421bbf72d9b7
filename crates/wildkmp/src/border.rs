// local imports
use crate::symbol::{WILDCARD, symbols_match};

/// Computes the border array (prefix function) of a pattern under wildcard
/// equality.
///
/// `border[i]` is the length of the longest proper border of `pattern[..=i]`,
/// i.e. the longest prefix that is also a suffix of that slice when symbols
/// are compared with [`symbols_match`]. `border[0]` is always 0 and
/// `border[i] <= i` throughout.
///
/// The classic incremental recursion is used as long as it is sound. It stops
/// being sound the moment the fallback chain — including its starting
/// candidate — lands on a position holding the wildcard: a wildcard matches
/// everything, so the chain's claim that the next-shorter border is the
/// next-best candidate no longer holds. When that is detected, the border for
/// the current index is recomputed exhaustively instead: every candidate
/// length is tested prefix-against-suffix, and the widest one that holds
/// wins.
///
/// The exhaustive check is O(i) per triggering index, so a pattern whose
/// wildcards keep landing on border-chain heads costs up to O(m²) overall.
/// That cost is intrinsic to wildcard-aware border computation and is kept
/// as-is; it is the very thing the refined borders and the benchmark harness
/// exist to compare against.
///
/// An empty pattern yields an empty array; callers are expected to reject
/// empty patterns before relying on the result.
pub fn border_array(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut border = vec![0; m];

    for i in 1..m {
        let mut j = border[i - 1];
        let mut tainted = pattern[j] == WILDCARD;
        if !tainted {
            while j > 0 && !symbols_match(pattern[j], pattern[i]) {
                j = border[j - 1];
                if pattern[j] == WILDCARD {
                    tainted = true;
                    break;
                }
            }
        }
        if tainted {
            border[i] = widest_border(pattern, i);
        } else {
            if symbols_match(pattern[j], pattern[i]) {
                j += 1;
            }
            border[i] = j;
        }
    }

    border
}

/// Exhaustive fallback: the widest border of `pattern[..=i]`, testing every
/// candidate length from shortest to longest.
fn widest_border(pattern: &[u8], i: usize) -> usize {
    let mut widest = 0;
    for k in 0..i {
        if border_holds(pattern, i, k) {
            widest = k + 1;
        }
    }
    widest
}

/// Whether the length-`k+1` prefix matches the length-`k+1` suffix ending at
/// `last`, symbol by symbol under wildcard equality.
fn border_holds(pattern: &[u8], last: usize, k: usize) -> bool {
    (0..=k).all(|i| symbols_match(pattern[i], pattern[last - k + i]))
}

/// Derives the refined border array from the plain one.
///
/// This is the classical KMP failure-function refinement with wildcard
/// equality in the lookahead test. For each position, if the pattern symbol
/// right after the border would mismatch the same way the scan just did,
/// falling back to `border[i]` is pointless and the fallback chains straight
/// through to `refined[border[i] - 1]`; when `border[i]` is 0 there is no
/// shorter border left and the refined value is 0. The last entry has no
/// lookahead symbol and keeps its plain border unconditionally.
///
/// The refined array never changes which occurrences a scan reports, only
/// how many fallback steps a mismatch costs.
pub fn refined_border_array(pattern: &[u8], border: &[usize]) -> Vec<usize> {
    let m = pattern.len();
    let mut refined = vec![0; m];
    if m == 0 {
        return refined;
    }

    for i in 1..m - 1 {
        if !symbols_match(pattern[border[i]], pattern[i + 1]) {
            refined[i] = border[i];
        } else if border[i] > 0 {
            refined[i] = refined[border[i] - 1];
        }
    }
    refined[m - 1] = border[m - 1];

    refined
}

#[cfg(test)]
mod tests;
