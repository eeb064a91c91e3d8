//! Field validation rules.
//!
//! Validators form a closed tagged-variant enumeration rather than
//! arbitrary predicate objects: each [`FieldRule`] variant carries only
//! its configuration data, and dispatch is an explicit exhaustive
//! match. [`FieldRule::accepts`] is total; a malformed value is
//! rejected, never an error.

use serde::Serialize;

/// Eye colours accepted for the `ecl` field.
pub const EYE_COLOURS: &[&str] = &["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

/// Shape of a string a [`FieldRule::Pattern`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PatternKind {
    /// `#` followed by exactly six lowercase hex digits.
    HexColour,
    /// Exactly `len` ASCII digits. Leading zeroes are allowed.
    Digits { len: usize },
}

impl PatternKind {
    /// Whether `value` has this shape.
    pub fn matches(self, value: &str) -> bool {
        match self {
            PatternKind::HexColour => match value.strip_prefix('#') {
                Some(rest) => {
                    rest.len() == 6 && rest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
                }
                None => false,
            },
            PatternKind::Digits { len } => {
                value.len() == len && value.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

/// A single field's validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldRule {
    /// A base-10 integer within an inclusive range.
    IntRange {
        min: i64,
        max: i64,
        /// When false, zero-padded values are rejected before parsing.
        allow_leading_zero: bool,
    },
    /// One of a fixed set of accepted strings.
    Choice { options: &'static [&'static str] },
    /// A string with a fixed shape.
    Pattern { kind: PatternKind },
    /// A length with unit: 150..=193 for `cm`, 59..=76 for `in`.
    Height,
    /// Accepts every value.
    Any,
    /// Rejects every value. Fields outside the known set get this rule.
    Reject,
}

impl FieldRule {
    /// The rule for a named field.
    ///
    /// The mapping is closed: a field outside the known set maps to
    /// [`FieldRule::Reject`], so a document carrying one is invalid.
    pub fn for_field(name: &str) -> FieldRule {
        match name {
            "byr" => FieldRule::IntRange {
                min: 1920,
                max: 2002,
                allow_leading_zero: false,
            },
            "iyr" => FieldRule::IntRange {
                min: 2010,
                max: 2020,
                allow_leading_zero: false,
            },
            "eyr" => FieldRule::IntRange {
                min: 2020,
                max: 2030,
                allow_leading_zero: false,
            },
            "hgt" => FieldRule::Height,
            "hcl" => FieldRule::Pattern {
                kind: PatternKind::HexColour,
            },
            "ecl" => FieldRule::Choice {
                options: EYE_COLOURS,
            },
            "pid" => FieldRule::Pattern {
                kind: PatternKind::Digits { len: 9 },
            },
            "cid" => FieldRule::Any,
            _ => FieldRule::Reject,
        }
    }

    /// Whether `value` satisfies this rule.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            FieldRule::IntRange {
                min,
                max,
                allow_leading_zero,
            } => {
                if !allow_leading_zero && value.starts_with('0') {
                    return false;
                }
                match value.parse::<i64>() {
                    Ok(number) => min <= number && number <= max,
                    Err(_) => false,
                }
            }
            FieldRule::Choice { options } => options.contains(&value),
            FieldRule::Pattern { kind } => kind.matches(value),
            FieldRule::Height => {
                if let Some(number) = value.strip_suffix("cm") {
                    FieldRule::IntRange {
                        min: 150,
                        max: 193,
                        allow_leading_zero: true,
                    }
                    .accepts(number)
                } else if let Some(number) = value.strip_suffix("in") {
                    FieldRule::IntRange {
                        min: 59,
                        max: 76,
                        allow_leading_zero: true,
                    }
                    .accepts(number)
                } else {
                    false
                }
            }
            FieldRule::Any => true,
            FieldRule::Reject => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_accepts(name: &str, value: &str) -> bool {
        FieldRule::for_field(name).accepts(value)
    }

    #[test]
    fn birth_year_bounds() {
        assert!(field_accepts("byr", "1920"));
        assert!(field_accepts("byr", "2002"));
        assert!(!field_accepts("byr", "1919"));
        assert!(!field_accepts("byr", "2003"));
    }

    #[test]
    fn year_fields_reject_zero_padding() {
        assert!(!field_accepts("byr", "01999"));
        assert!(!field_accepts("iyr", "02015"));
    }

    #[test]
    fn year_fields_reject_non_numeric_values() {
        assert!(!field_accepts("eyr", "twenty"));
        assert!(!field_accepts("eyr", ""));
    }

    #[test]
    fn height_accepts_both_units() {
        assert!(field_accepts("hgt", "60in"));
        assert!(field_accepts("hgt", "190cm"));
        assert!(!field_accepts("hgt", "190in"));
        assert!(!field_accepts("hgt", "149cm"));
    }

    #[test]
    fn height_rejects_a_missing_unit() {
        assert!(!field_accepts("hgt", "190"));
        assert!(!field_accepts("hgt", ""));
    }

    #[test]
    fn hair_colour_is_a_lowercase_hex_triplet() {
        assert!(field_accepts("hcl", "#123abc"));
        assert!(!field_accepts("hcl", "#123abz"));
        assert!(!field_accepts("hcl", "123abc"));
        assert!(!field_accepts("hcl", "#123ABC"));
        assert!(!field_accepts("hcl", "#123abcd"));
    }

    #[test]
    fn eye_colour_is_a_closed_choice() {
        assert!(field_accepts("ecl", "brn"));
        assert!(!field_accepts("ecl", "wat"));
    }

    #[test]
    fn id_is_exactly_nine_digits() {
        assert!(field_accepts("pid", "000000001"));
        assert!(!field_accepts("pid", "0123456789"));
        assert!(!field_accepts("pid", "12345678"));
        assert!(!field_accepts("pid", "12345678a"));
    }

    #[test]
    fn country_id_accepts_anything() {
        assert!(field_accepts("cid", "100"));
        assert!(field_accepts("cid", ""));
    }

    #[test]
    fn unknown_fields_reject_everything() {
        assert_eq!(FieldRule::for_field("xyz"), FieldRule::Reject);
        assert!(!field_accepts("xyz", "1"));
    }
}
