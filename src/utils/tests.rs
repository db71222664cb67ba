use crate::utils::{
    UtilsError, concat_numbers, digit_value, validate_digit_string, validate_length,
};

#[test]
fn test_digit_value() {
    assert_eq!(digit_value('0', 0), Ok(0));
    assert_eq!(digit_value('7', 3), Ok(7));
    assert_eq!(digit_value('9', 13), Ok(9));
}

#[test]
fn test_digit_value_rejects_non_digits() {
    assert_eq!(
        digit_value('H', 0),
        Err(UtilsError::InvalidDigit {
            character: 'H',
            position: 0
        })
    );
    assert!(digit_value('-', 2).is_err());
    assert!(digit_value('٣', 1).is_err());
}

#[test]
fn test_concat_numbers() {
    assert_eq!(concat_numbers(&[49, 38, 53, 28, 9, 47, 54]), "4938532894754");
    assert_eq!(concat_numbers(&[1, 2, 30]), "1230");
    assert_eq!(concat_numbers(&[]), "");
}

#[test]
fn test_validate_digit_string_valid() {
    assert!(validate_digit_string("12345").is_ok());
    assert!(validate_digit_string("0").is_ok());
    assert!(validate_digit_string("999").is_ok());
}

#[test]
fn test_validate_digit_string_invalid() {
    assert_eq!(validate_digit_string(""), Err(UtilsError::EmptyDigitString));
    assert_eq!(
        validate_digit_string("12a45"),
        Err(UtilsError::InvalidDigit {
            character: 'a',
            position: 2
        })
    );
    assert!(validate_digit_string("12.45").is_err());
    assert!(validate_digit_string("-12638").is_err());
}

#[test]
fn test_validate_length_bounds() {
    assert!(validate_length("1234567", 7, 14).is_ok());
    assert!(validate_length("12345678901234", 7, 14).is_ok());
    assert_eq!(
        validate_length("42", 7, 14),
        Err(UtilsError::LengthOutOfBounds {
            length: 2,
            min: 7,
            max: 14
        })
    );
    assert!(validate_length("472844278465445", 7, 14).is_err());
}

#[test]
fn test_validate_length_empty() {
    assert_eq!(validate_length("", 7, 14), Err(UtilsError::EmptyDigitString));
}

#[test]
fn test_validate_length_counts_characters() {
    // Multi-byte characters count once; digit checks happen later.
    assert!(validate_length("ééééééé", 7, 14).is_ok());
}
