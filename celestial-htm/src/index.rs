//! HTM index encoding.
//!
//! An index is a path from a root trixel down the mesh, packed into a `u64`
//! most-significant bit first:
//!
//! ```text
//!   1 | r r r | c c | c c | ... | c c
//!   ^   root    level 1  level 2   level L
//!   marker bit
//! ```
//!
//! The marker bit only records where the encoding starts. With `j` the
//! position of the most significant set bit, an index is well formed iff `j`
//! is odd and greater than 1, and its level is `(j - 3) / 2`. Root trixels
//! are therefore `8..16` and a level-`L` index has `4 + 2L` significant bits.
//!
//! Appending child bits at the low end means the level-`L` descendants of
//! index `i` at level `l` are exactly `[i << 2(L - l), (i + 1) << 2(L - l))`,
//! which is what lets a region's pixels be stored as a few intervals.
//!
//! # Names
//!
//! The textual form (see [`to_string`]) is a hemisphere letter followed by
//! base-4 digits: `N` for roots 4–7 and `S` for roots 0–3, then the low two
//! root bits, then one digit per level. `"S0"` is root 0 and `"N32"` is child
//! 2 of root 7. Names are `level + 2` characters long.

use crate::{HtmError, HtmResult, MAX_LEVEL};

/// Level encoded in `index`, or `None` if the marker bit is misplaced.
///
/// This only checks the bit pattern; a `Some` level may still exceed
/// [`MAX_LEVEL`]. Use [`validate`] for the full check.
pub fn level(index: u64) -> Option<u32> {
    if index == 0 {
        return None;
    }
    let j = 63 - index.leading_zeros();
    if j & 1 == 0 || j == 1 {
        return None;
    }
    Some((j - 3) >> 1)
}

/// Returns the level of a valid index.
pub fn validate(index: u64) -> HtmResult<u32> {
    match level(index) {
        Some(l) if l <= MAX_LEVEL => Ok(l),
        Some(l) => Err(HtmError::invalid_index(
            index,
            format!("level {} exceeds maximum {}", l, MAX_LEVEL),
        )),
        None => Err(HtmError::invalid_index(
            index,
            "most significant bit must be at an odd position greater than 1",
        )),
    }
}

pub fn is_valid(index: u64) -> bool {
    validate(index).is_ok()
}

/// Checks a requested subdivision level.
pub fn check_level(level: u32) -> HtmResult<u32> {
    if level > MAX_LEVEL {
        return Err(HtmError::invalid_level(level));
    }
    Ok(level)
}

/// Root trixel number (0–7) of a valid index.
pub fn root(index: u64) -> HtmResult<usize> {
    let l = validate(index)?;
    Ok(((index >> (2 * l)) & 7) as usize)
}

/// The index one level up, or `None` for a root.
pub fn parent(index: u64) -> HtmResult<Option<u64>> {
    let l = validate(index)?;
    Ok((l > 0).then_some(index >> 2))
}

/// Child `selector` (0–3) of `index`.
pub fn child(index: u64, selector: u8) -> HtmResult<u64> {
    let l = validate(index)?;
    if l >= MAX_LEVEL {
        return Err(HtmError::invalid_index(
            index,
            "trixels at the maximum level have no children",
        ));
    }
    if selector > 3 {
        return Err(HtmError::invalid_index(
            index,
            format!("child selector {} is not in 0-3", selector),
        ));
    }
    Ok((index << 2) | u64::from(selector))
}

/// The four children of `index`, in child order 0–3.
pub fn children(index: u64) -> HtmResult<[u64; 4]> {
    let first = child(index, 0)?;
    Ok([first, first | 1, first | 2, first | 3])
}

/// Level-`target_level` descendants of `index` as the half-open interval
/// `[first, last)`. A trixel is its own descendant at its own level.
pub fn descendant_range(index: u64, target_level: u32) -> HtmResult<(u64, u64)> {
    let l = validate(index)?;
    check_level(target_level)?;
    if target_level < l {
        return Err(HtmError::invalid_level(target_level));
    }
    let shift = 2 * (target_level - l);
    Ok((index << shift, (index + 1) << shift))
}

/// The 2-bit child codes of `index`, shallowest first.
pub(crate) fn child_codes(index: u64, level: u32) -> impl Iterator<Item = usize> {
    (0..level)
        .rev()
        .map(move |k| ((index >> (2 * k)) & 3) as usize)
}

/// Formats an index as its HTM name, e.g. `"N3120"`.
pub fn to_string(index: u64) -> HtmResult<String> {
    let l = validate(index)?;
    let mut name = String::with_capacity(l as usize + 2);
    name.push(if (index >> (2 * l + 2)) & 1 == 1 {
        'N'
    } else {
        'S'
    });
    for k in (0..=l).rev() {
        name.push(char::from(b'0' + ((index >> (2 * k)) & 3) as u8));
    }
    Ok(name)
}

/// Parses an HTM name produced by [`to_string`].
pub fn parse(name: &str) -> HtmResult<u64> {
    let bytes = name.as_bytes();
    let mut index: u64 = match bytes.first() {
        Some(b'N') => 3,
        Some(b'S') => 2,
        _ => return Err(HtmError::invalid_name(name, "must start with 'N' or 'S'")),
    };
    let digits = &bytes[1..];
    if digits.is_empty() {
        return Err(HtmError::invalid_name(name, "missing root digit"));
    }
    if digits.len() > MAX_LEVEL as usize + 1 {
        return Err(HtmError::invalid_name(
            name,
            format!("more than {} levels", MAX_LEVEL),
        ));
    }
    for &d in digits {
        match d {
            b'0'..=b'3' => index = (index << 2) | u64::from(d - b'0'),
            _ => {
                return Err(HtmError::invalid_name(
                    name,
                    "digits must be in 0-3",
                ))
            }
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_of_roots() {
        for i in 8..16u64 {
            assert_eq!(level(i), Some(0));
        }
        assert_eq!(level(32), Some(1));
        assert_eq!(level(63), Some(1));
    }

    #[test]
    fn test_level_rejects_bad_marker() {
        assert_eq!(level(0), None);
        assert_eq!(level(1), None);
        assert_eq!(level(2), None);
        assert_eq!(level(3), None);
        assert_eq!(level(4), None);
        assert_eq!(level(7), None);
        assert_eq!(level(16), None);
        assert_eq!(level(31), None);
    }

    #[test]
    fn test_validate_max_level() {
        let deepest = 8u64 << (2 * MAX_LEVEL);
        assert_eq!(validate(deepest), Ok(MAX_LEVEL));
        let too_deep = 8u64 << (2 * (MAX_LEVEL + 1));
        assert!(matches!(
            validate(too_deep),
            Err(HtmError::InvalidIndex { .. })
        ));
        assert!(validate(0).is_err());
        assert!(!is_valid(u64::MAX));
    }

    #[test]
    fn test_check_level() {
        assert_eq!(check_level(0), Ok(0));
        assert_eq!(check_level(MAX_LEVEL), Ok(MAX_LEVEL));
        assert_eq!(
            check_level(MAX_LEVEL + 1),
            Err(HtmError::invalid_level(MAX_LEVEL + 1))
        );
    }

    #[test]
    fn test_root_parent_children() {
        let i = (13u64 << 4) | 0b1001;
        assert_eq!(root(i), Ok(5));
        assert_eq!(parent(i), Ok(Some((13 << 2) | 0b10)));
        assert_eq!(parent(13), Ok(None));
        assert_eq!(children(13), Ok([52, 53, 54, 55]));
        assert!(children(8u64 << (2 * MAX_LEVEL)).is_err());
        assert_eq!(child(13, 2), Ok(54));
        assert!(child(13, 4).is_err());
        assert!(child(0, 0).is_err());
    }

    #[test]
    fn test_descendant_range_partitions_parent() {
        let i = 14u64 << 2 | 3;
        let (first, last) = descendant_range(i, 5).unwrap();
        let kids = children(i).unwrap();
        let mut expected_first = first;
        for k in kids {
            let (a, b) = descendant_range(k, 5).unwrap();
            assert_eq!(a, expected_first);
            assert!(first <= a && b <= last);
            assert!(b - a < last - first);
            expected_first = b;
        }
        assert_eq!(expected_first, last);
        assert_eq!(descendant_range(i, 1), Ok((i, i + 1)));
        assert!(descendant_range(i, 0).is_err());
        assert!(descendant_range(i, MAX_LEVEL + 1).is_err());
    }

    #[test]
    fn test_child_codes() {
        let i = (9u64 << 6) | 0b10_01_11;
        let codes: Vec<usize> = child_codes(i, 3).collect();
        assert_eq!(codes, vec![2, 1, 3]);
    }

    #[test]
    fn test_to_string_roots() {
        let names: Vec<String> = (8..16u64).map(|i| to_string(i).unwrap()).collect();
        assert_eq!(names, ["S0", "S1", "S2", "S3", "N0", "N1", "N2", "N3"]);
    }

    #[test]
    fn test_to_string_deeper() {
        let i = (15u64 << 4) | 0b10_01;
        assert_eq!(to_string(i).unwrap(), "N321");
        assert!(to_string(0).is_err());
        assert!(to_string(5).is_err());
    }

    #[test]
    fn test_parse_round_trip() {
        for name in ["S0", "N3", "N321", "S0123012301230123012301230"] {
            let i = parse(name).unwrap();
            assert_eq!(to_string(i).unwrap(), name);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("").is_err());
        assert!(parse("N").is_err());
        assert!(parse("X01").is_err());
        assert!(parse("N04").is_err());
        assert!(parse("n01").is_err());
        let too_long = format!("N{}", "0".repeat(MAX_LEVEL as usize + 2));
        assert!(matches!(parse(&too_long), Err(HtmError::InvalidName { .. })));
    }
}
