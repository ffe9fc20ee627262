//! Property-based tests for jpform.

use jpform::prelude::*;
use proptest::prelude::*;

fn to_fullwidth(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '!'..='~' => char::from_u32(c as u32 + 0xFEE0).unwrap(),
            _ => c,
        })
        .collect()
}

// ============================================================================
// IDEMPOTENCE: filter(filter(x)) == filter(x)
// ============================================================================

proptest! {
    #[test]
    fn postal_filter_idempotent(s in ".*", with_hyphen in any::<bool>()) {
        let kind = PostalCode::new().hyphenated(with_hyphen);
        let once = kind.filter(&s);
        prop_assert_eq!(kind.filter(&once), once);
    }

    #[test]
    fn tel_filter_idempotent(s in ".*", with_hyphen in any::<bool>()) {
        let kind = Tel::new().hyphenated(with_hyphen);
        let once = kind.filter(&s);
        prop_assert_eq!(kind.filter(&once), once);
    }
}

// ============================================================================
// POSTAL CODE: round-trip and fullwidth equivalence
// ============================================================================

proptest! {
    #[test]
    fn postal_round_trip_between_modes(digits in "[0-9]{7}") {
        let hyphenated = PostalCode::new().hyphenated(true).filter(&digits);
        prop_assert_eq!(&hyphenated, &format!("{}-{}", &digits[..3], &digits[3..]));

        let back = PostalCode::new().filter(&hyphenated);
        prop_assert_eq!(back, digits);
    }

    #[test]
    fn postal_fullwidth_equivalence(digits in "[0-9]{7}", with_hyphen in any::<bool>()) {
        let kind = PostalCode::new().hyphenated(with_hyphen);
        prop_assert_eq!(kind.filter(&to_fullwidth(&digits)), kind.filter(&digits));
    }

    #[test]
    fn postal_valid_in_both_modes(digits in "[0-9]{7}") {
        for with_hyphen in [false, true] {
            let mut item = postal_code_input(PostalCode::new().hyphenated(with_hyphen));
            item.set_value(&digits);
            prop_assert!(item.validate().is_ok());
            prop_assert!(item.postal_code().is_some());
        }
    }
}

// ============================================================================
// TELEPHONE: digit rules and fullwidth equivalence
// ============================================================================

proptest! {
    #[test]
    fn tel_accepts_any_leading_zero_number(rest in "[0-9]{9,10}") {
        let number = format!("0{rest}");
        let mut item = tel_input(Tel::new());
        item.set_value(&number);
        prop_assert!(item.validate().is_ok());
    }

    #[test]
    fn tel_rejects_wrong_length(digits in "0[0-9]{0,7}|0[0-9]{11,14}") {
        let mut item = tel_input(Tel::new());
        item.set_value(&digits);
        prop_assert!(item.validate().is_err());
    }

    #[test]
    fn tel_rejects_missing_leading_zero(digits in "[1-9][0-9]{9,10}") {
        let mut item = tel_input(Tel::new());
        item.set_value(&digits);
        prop_assert!(item.validate().is_err());
    }

    #[test]
    fn tel_fullwidth_equivalence(rest in "[0-9]{9,10}") {
        let number = format!("0{rest}");
        let kind = Tel::new();
        prop_assert_eq!(kind.filter(&to_fullwidth(&number)), kind.filter(&number));
    }

    #[test]
    fn tel_two_hyphens_anywhere_are_valid(
        rest in "[0-9]{9,10}",
        cut_a in 1usize..9,
        cut_b in 1usize..9,
    ) {
        // Split the digit string at two interior points; any such
        // placement must validate in hyphen mode.
        prop_assume!(cut_a < cut_b);
        let number = format!("0{rest}");
        let hyphenated = format!(
            "{}-{}-{}",
            &number[..cut_a],
            &number[cut_a..cut_b],
            &number[cut_b..]
        );

        let mut item = tel_input(Tel::new().hyphenated(true));
        item.set_value(&hyphenated);
        prop_assert!(item.validate().is_ok(), "rejected {}", hyphenated);
    }
}

// ============================================================================
// PREFECTURE: closure over the enumeration
// ============================================================================

proptest! {
    #[test]
    fn prefecture_code_closure(value in "[0-9]{1,3}") {
        let mut select = PrefectureCodeSelect::new();
        select.set_value(&value);

        let in_table = PREFECTURES.iter().any(|(code, _)| *code == value);
        prop_assert_eq!(select.validate().is_ok(), in_table);
    }

    #[test]
    fn prefecture_name_rejects_arbitrary_text(value in ".{1,8}") {
        let mut select = PrefectureSelect::new();
        select.set_value(&value);

        let in_table = PREFECTURES.iter().any(|(_, name)| *name == value);
        prop_assert_eq!(select.validate().is_ok(), in_table);
    }

    #[test]
    fn empty_option_stays_first_under_any_label(label in ".{0,12}") {
        let mut select = PrefectureCodeSelect::new();
        select.set_empty_option_label(&label);

        let first = select.options().iter().next().unwrap();
        prop_assert_eq!(first.key.as_ref(), "");
        prop_assert_eq!(first.label.as_ref(), label.as_str());
        prop_assert_eq!(select.options().len(), 48);
    }
}
