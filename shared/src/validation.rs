//! Field validation predicates
//!
//! Pure `&str -> bool` checks the interactive shell applies before a value
//! reaches the repositories. Malformed input is reported as `false`, never
//! as a panic or an error.

// ── Field shape limits ──────────────────────────────────────────────

/// Salary: up to 7 integer digits, optional up to 3 decimals.
const SALARY_INT_DIGITS: usize = 7;
const SALARY_FRAC_DIGITS: usize = 3;

/// Experience: up to 2 integer digits, optional single decimal.
const EXPERIENCE_INT_DIGITS: usize = 2;
const EXPERIENCE_FRAC_DIGITS: usize = 1;

/// Phone numbers are exactly 10 digits with a 6-9 lead.
const PHONE_LEN: usize = 10;

// ── Predicates ──────────────────────────────────────────────────────

/// Letters and spaces only, at least two characters.
pub fn is_valid_name(value: &str) -> bool {
    value.chars().count() >= 2
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace())
}

/// Non-negative amount: 1-7 integer digits, optionally a dot and up to
/// 3 decimal digits.
pub fn is_valid_salary(value: &str) -> bool {
    decimal_shape(value, SALARY_INT_DIGITS, SALARY_FRAC_DIGITS)
}

/// Exactly 10 digits, leading digit in 6-9.
pub fn is_valid_phone_number(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == PHONE_LEN
        && matches!(bytes[0], b'6'..=b'9')
        && bytes.iter().all(|b| b.is_ascii_digit())
}

/// Years of prior experience: 1-2 integer digits, optional single decimal.
pub fn is_valid_experience(value: &str) -> bool {
    decimal_shape(value, EXPERIENCE_INT_DIGITS, EXPERIENCE_FRAC_DIGITS)
}

/// Employee identifiers as the generator emits them: literal `e5`, two
/// zeros, then at least one digit.
pub fn is_valid_employee_id(value: &str) -> bool {
    value
        .strip_prefix("e500")
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Digits-and-optional-point shape shared by salary and experience.
/// A trailing dot with no decimals is accepted ("1500.").
fn decimal_shape(value: &str, max_int: usize, max_frac: usize) -> bool {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (value, None),
    };
    if int_part.is_empty()
        || int_part.len() > max_int
        || !int_part.bytes().all(|b| b.is_ascii_digit())
    {
        return false;
    }
    match frac_part {
        Some(frac) => frac.len() <= max_frac && frac.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_letters_and_spaces() {
        assert!(is_valid_name("Jane Doe"));
        assert!(is_valid_name("al"));
        assert!(is_valid_name("Mary Ann Smith"));
    }

    #[test]
    fn test_name_rejects_short_and_non_alpha() {
        assert!(!is_valid_name("a"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("J4ne"));
        assert!(!is_valid_name("Jane-Doe"));
        assert!(!is_valid_name("jose.perez"));
    }

    #[test]
    fn test_phone_number_accepts_ten_digits_lead_6_to_9() {
        assert!(is_valid_phone_number("6123456789"));
        assert!(is_valid_phone_number("7000000000"));
        assert!(is_valid_phone_number("8999999999"));
        assert!(is_valid_phone_number("9876543210"));
    }

    #[test]
    fn test_phone_number_rejects_bad_lead_or_length() {
        assert!(!is_valid_phone_number("5123456789"));
        assert!(!is_valid_phone_number("0123456789"));
        assert!(!is_valid_phone_number("612345678"));
        assert!(!is_valid_phone_number("61234567890"));
        assert!(!is_valid_phone_number("612345678x"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn test_salary_shapes() {
        assert!(is_valid_salary("0"));
        assert!(is_valid_salary("1234567"));
        assert!(is_valid_salary("1500.5"));
        assert!(is_valid_salary("1500.555"));
        assert!(is_valid_salary("1500."));

        assert!(!is_valid_salary("12345678"));
        assert!(!is_valid_salary("1500.5555"));
        assert!(!is_valid_salary("-1500"));
        assert!(!is_valid_salary(".5"));
        assert!(!is_valid_salary("15,00"));
        assert!(!is_valid_salary("abc"));
        assert!(!is_valid_salary(""));
    }

    #[test]
    fn test_experience_shapes() {
        assert!(is_valid_experience("0"));
        assert!(is_valid_experience("7"));
        assert!(is_valid_experience("99.9"));
        assert!(is_valid_experience("10."));

        assert!(!is_valid_experience("100"));
        assert!(!is_valid_experience("9.99"));
        assert!(!is_valid_experience("-1"));
        assert!(!is_valid_experience("seven"));
    }

    #[test]
    fn test_employee_id_matches_generator_output() {
        assert!(is_valid_employee_id("e5001"));
        assert!(is_valid_employee_id("e5002"));
        assert!(is_valid_employee_id("e50012345"));

        assert!(!is_valid_employee_id("e500"));
        assert!(!is_valid_employee_id("e5101"));
        assert!(!is_valid_employee_id("E5001"));
        assert!(!is_valid_employee_id("5001"));
        assert!(!is_valid_employee_id("e500x"));
        assert!(!is_valid_employee_id(""));
    }
}
