use crate::core::tables::letter_digit;

/// Lowercases `name` and keeps only letters that carry a numerology digit.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| letter_digit(*c).is_some())
        .collect()
}

/// Folds tens and units together until a single digit remains.
pub fn reduce_digits(mut total: u32) -> u32 {
    while total > 9 {
        total = total / 10 + total % 10;
    }
    total
}

/// Single-digit name number; 0 when the name holds no recognised letter.
pub fn name_number(name: &str) -> u32 {
    let total = normalize_name(name)
        .chars()
        .filter_map(letter_digit)
        .map(u32::from)
        .sum();
    reduce_digits(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_digits() {
        assert_eq!(reduce_digits(0), 0);
        assert_eq!(reduce_digits(9), 9);
        assert_eq!(reduce_digits(10), 1);
        assert_eq!(reduce_digits(49), 4); // 4+9=13 -> 1+3
        assert_eq!(reduce_digits(123), 6); // 12+3=15 -> 1+5
    }

    #[test]
    fn test_name_number_known_value() {
        // n6 g8 u4 y8 e6 n6 + v5 a1 n6 + a1 n6 = 57 -> 12 -> 3
        assert_eq!(name_number("Nguyen Van An"), 3);
    }

    #[test]
    fn test_name_number_is_case_insensitive() {
        assert_eq!(name_number("An"), name_number("AN"));
        assert_eq!(name_number("an"), name_number("aN"));
        assert_eq!(name_number("Đức"), name_number("đỨc"));
    }

    #[test]
    fn test_vietnamese_letters() {
        // đ5 ư4 c3 = 12 -> 3; "ứ" carries a tone mark and is stripped
        assert_eq!(name_number("đưc"), 3);
        assert_eq!(normalize_name("Đức"), "đc");
        assert_eq!(normalize_name("Trần Thị Ơn"), "trnthơn");
    }

    #[test]
    fn test_name_number_single_digit_for_letters() {
        for name in ["a", "zzzzzzzzzz", "Lê Văn Tám", "Phạm Minh Chính", "xyz"] {
            let n = name_number(name);
            assert!((1..=9).contains(&n), "{} -> {}", name, n);
        }
    }

    #[test]
    fn test_name_without_letters_is_zero() {
        assert_eq!(name_number("123 !?"), 0);
        assert_eq!(name_number(""), 0);
    }
}
