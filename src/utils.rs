/// Splits a line on single spaces once its line terminator is removed.
pub(crate) fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.trim_end_matches(['\r', '\n']).split(' ')
}

/// Finds the argument of the last token starting with `letter`.
///
/// This is a plain prefix test: `Xfoo` yields `foo`.
pub(crate) fn find_argument<'a>(tokens: &[&'a str], letter: char) -> Option<&'a str> {
    tokens
        .iter()
        .rev()
        .find_map(|token| token.strip_prefix(letter))
}

/// Truncates toward zero, then sends `value / 256` and `value % 256` as two bytes.
pub(crate) fn wrap_u16(value: f64) -> u16 {
    split_be(value as i64)
}

/// Both halves use truncating division and keep their low 8 bits only, so a negative value is
/// not its two's complement: `-2` gives `[0x00, 0xFE]`.
pub(crate) fn split_be(value: i64) -> u16 {
    u16::from_be_bytes([(value / 256) as u8, value as u8])
}

#[cfg(test)]
mod test {
    use super::{find_argument, split_be, tokenize, wrap_u16};
    use alloc::vec::Vec;

    #[test]
    fn last_matching_token_wins() {
        let tokens = ["X1", "Y2", "X3"];
        assert_eq!(find_argument(&tokens, 'X'), Some("3"));
        assert_eq!(find_argument(&tokens, 'A'), None);
    }

    #[test]
    fn line_terminators_are_not_part_of_the_last_token() {
        let tokens: Vec<_> = tokenize("G0 X1\r\n").collect();
        assert_eq!(tokens, ["G0", "X1"]);
    }

    #[test]
    fn double_spaces_yield_empty_tokens() {
        let tokens: Vec<_> = tokenize("G0  X1").collect();
        assert_eq!(tokens, ["G0", "", "X1"]);
    }

    #[test]
    fn out_of_range_values_wrap() {
        assert_eq!(wrap_u16(140.9), 140);
        assert_eq!(wrap_u16(65536. + 12.), 12);
        assert_eq!(wrap_u16(-1.5), 0x00FF);
    }

    #[test]
    fn negative_values_split_with_truncating_division() {
        assert_eq!(split_be(-2).to_be_bytes(), [0x00, 0xFE]);
        assert_eq!(split_be(-100).to_be_bytes(), [0x00, 0x9C]);
        assert_eq!(split_be(-300).to_be_bytes(), [0xFF, 0xD4]);
        assert_eq!(split_be(300).to_be_bytes(), [0x01, 0x2C]);
    }
}
