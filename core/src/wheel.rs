//! The fixed character wheel every flap rotates through.
//!
//! Order matters: a flap can only move forward one symbol at a time, so the
//! position of two characters on the wheel decides how many flips separate
//! them.

/// Every displayable symbol, in rotation order. Space is the rest position.
pub const CHARS: &str = " ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&?.:-";

/// Number of symbols on the wheel.
pub const LEN: usize = CHARS.len();

/// The symbol every unknown character collapses to.
pub const BLANK: char = ' ';

/// Position of `ch` on the wheel, if it is a member.
pub fn index_of(ch: char) -> Option<usize> {
    if !ch.is_ascii() {
        return None;
    }
    CHARS.bytes().position(|b| b == ch as u8)
}

/// Symbol at `index`, wrapping around the wheel.
pub fn at(index: usize) -> char {
    char::from(CHARS.as_bytes()[index % LEN])
}

pub fn contains(ch: char) -> bool {
    index_of(ch).is_some()
}

/// Maps `ch` onto the wheel, replacing anything unknown with [`BLANK`].
pub fn normalize(ch: char) -> char {
    if contains(ch) { ch } else { BLANK }
}

/// The symbol one flip after `ch`. Unknown characters are treated as blank.
pub fn next(ch: char) -> char {
    at(index_of(ch).unwrap_or(0) + 1)
}

/// Number of forward flips needed to go from `from` to `to`.
pub fn distance(from: char, to: char) -> usize {
    let from = index_of(from).unwrap_or(0);
    let to = index_of(to).unwrap_or(0);
    (to + LEN - from) % LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_starts_blank_and_has_no_duplicates() {
        assert_eq!(at(0), BLANK);
        assert_eq!(LEN, 47);
        for (i, ch) in CHARS.chars().enumerate() {
            assert_eq!(index_of(ch), Some(i), "{ch:?} appears twice");
        }
    }

    #[test]
    fn unknown_characters_normalize_to_blank() {
        for ch in ['a', 'z', '*', '\n', 'é', '中', '_', '\''] {
            assert_eq!(normalize(ch), BLANK, "{ch:?}");
        }
        assert_eq!(normalize('Q'), 'Q');
        assert_eq!(normalize('7'), '7');
        assert_eq!(normalize('&'), '&');
    }

    #[test]
    fn next_wraps_from_last_symbol_to_blank() {
        assert_eq!(next(' '), 'A');
        assert_eq!(next('Z'), '0');
        assert_eq!(next('-'), ' ');
    }

    #[test]
    fn distance_is_forward_only() {
        assert_eq!(distance(' ', 'A'), 1);
        assert_eq!(distance('A', ' '), LEN - 1);
        assert_eq!(distance('B', 'A'), LEN - 1);
        assert_eq!(distance('H', 'H'), 0);
    }
}
