//! Key parsing and ranking
//!
//! Converts textual keys into zero-based integer permutations: direct digit
//! targets for Table Transposition, and rank-sorted orderings for Double
//! Transposition's sub-keys.

use crate::alphabet::RUSSIAN_LOWER;
use crate::error::{CipherError, Result};

/// Rank of a key character in the closed ranking table.
///
/// Digits `1`-`9` rank 1-9, Cyrillic letters (`а`..`я` including `ё`, in
/// alphabet order) rank 10-42, Latin letters `a`..`z` rank 43-68. Uppercase
/// input is folded first. Any other character (including `0`) is an error.
pub fn char_rank(c: char) -> Result<usize> {
    let c = c.to_lowercase().next().unwrap_or(c);
    if let Some(d) = c.to_digit(10) {
        if d >= 1 {
            return Ok(d as usize);
        }
        return Err(CipherError::UnrankableChar(c));
    }
    // Cyrillic letters share their alphabet order; the placeholder is not ranked.
    if c != '_' {
        if let Some(i) = RUSSIAN_LOWER.chars().position(|a| a == c) {
            return Ok(10 + i);
        }
    }
    if c.is_ascii_lowercase() {
        return Ok(43 + (c as usize - 'a' as usize));
    }
    Err(CipherError::UnrankableChar(c))
}

/// Parses a Table Transposition key into zero-based target positions.
///
/// The key must be a digit string whose digits form a permutation of `1..=k`
/// with no zero and no repeats; `targets[j]` is where block character `j`
/// lands on encryption.
pub fn digit_targets(key: &str) -> Result<Vec<usize>> {
    let mut targets = Vec::with_capacity(key.chars().count());
    for c in key.chars() {
        let d = c.to_digit(10).ok_or(CipherError::NonDigitKey(c))? as usize;
        if d == 0 {
            return Err(CipherError::InvalidPermutationKey(
                "digit 0 is not a valid position".to_string(),
            ));
        }
        targets.push(d - 1);
    }
    if targets.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    let k = targets.len();
    let mut seen = vec![false; k];
    for &t in &targets {
        if t >= k {
            return Err(CipherError::InvalidPermutationKey(format!(
                "digit {} exceeds key length {}",
                t + 1,
                k
            )));
        }
        if seen[t] {
            return Err(CipherError::InvalidPermutationKey(format!(
                "digit {} repeats",
                t + 1
            )));
        }
        seen[t] = true;
    }
    Ok(targets)
}

/// Orders the positions of `key` by the rank of their characters.
///
/// Returns, for each sorted position, the original index in the unsorted key;
/// ties break by stable sort order (first occurrence wins).
pub fn rank_permutation(key: &str) -> Result<Vec<usize>> {
    let ranks: Vec<usize> = key.chars().map(char_rank).collect::<Result<_>>()?;
    if ranks.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    let mut order: Vec<usize> = (0..ranks.len()).collect();
    order.sort_by_key(|&i| ranks[i]);
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_table_is_contiguous() {
        assert_eq!(char_rank('1').unwrap(), 1);
        assert_eq!(char_rank('9').unwrap(), 9);
        assert_eq!(char_rank('а').unwrap(), 10);
        assert_eq!(char_rank('ё').unwrap(), 16);
        assert_eq!(char_rank('я').unwrap(), 42);
        assert_eq!(char_rank('a').unwrap(), 43);
        assert_eq!(char_rank('z').unwrap(), 68);
        assert_eq!(char_rank('П').unwrap(), char_rank('п').unwrap());
    }

    #[test]
    fn rank_rejects_outsiders() {
        assert_eq!(char_rank('0').unwrap_err(), CipherError::UnrankableChar('0'));
        assert_eq!(char_rank('_').unwrap_err(), CipherError::UnrankableChar('_'));
        assert_eq!(char_rank('!').unwrap_err(), CipherError::UnrankableChar('!'));
    }

    #[test]
    fn digit_targets_parse_permutations() {
        assert_eq!(digit_targets("2143").unwrap(), vec![1, 0, 3, 2]);
        assert_eq!(digit_targets("1").unwrap(), vec![0]);
    }

    #[test]
    fn digit_targets_reject_bad_keys() {
        assert!(matches!(
            digit_targets("2133"),
            Err(CipherError::InvalidPermutationKey(_))
        ));
        assert!(matches!(
            digit_targets("103"),
            Err(CipherError::InvalidPermutationKey(_))
        ));
        assert!(matches!(
            digit_targets("159"),
            Err(CipherError::InvalidPermutationKey(_))
        ));
        assert!(matches!(digit_targets("2a43"), Err(CipherError::NonDigitKey('a'))));
        assert_eq!(digit_targets("").unwrap_err(), CipherError::EmptyKey);
    }

    #[test]
    fn rank_permutation_is_stable() {
        // "21435" -> ranks 2,1,4,3,5 -> sorted original indices
        assert_eq!(rank_permutation("21435").unwrap(), vec![1, 0, 3, 2, 4]);
        // "пакет" -> ranks 26,10,21,15,29
        assert_eq!(rank_permutation("пакет").unwrap(), vec![1, 3, 2, 0, 4]);
        // ties: first occurrence wins
        assert_eq!(rank_permutation("аа").unwrap(), vec![0, 1]);
    }
}
