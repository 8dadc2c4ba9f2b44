//! Info-step form validation.
//!
//! Every field is checked and all failures are reported together, so the
//! form can show each message inline.

use crate::errors::{AppError, FieldError};
use crate::models::{Gender, UserInfo, UserInfoForm};
use crate::regions;
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 120;

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Trims a name and collapses runs of inner whitespace to one space.
pub fn normalize_name(raw: &str) -> String {
    whitespace_regex().replace_all(raw.trim(), " ").into_owned()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validates a raw submission into an immutable [`UserInfo`].
pub fn validate_user_info(form: &UserInfoForm) -> Result<UserInfo, AppError> {
    let mut errors = Vec::new();

    let name = normalize_name(&form.name);
    if name.chars().count() < MIN_NAME_CHARS {
        errors.push(FieldError::new("name", "Name must be at least 2 characters."));
    }

    let name_hi = normalize_name(&form.name_hi);
    if name_hi.is_empty() {
        errors.push(FieldError::new("name_hi", "कृपया हिंदी में नाम दर्ज करें।"));
    }

    let age = match form.age {
        None => {
            errors.push(FieldError::new("age", "Please enter your age."));
            None
        }
        Some(age) if age < MIN_AGE => {
            errors.push(FieldError::new("age", "Please enter your age."));
            None
        }
        Some(age) if age > MAX_AGE => {
            errors.push(FieldError::new("age", "Please enter a valid age."));
            None
        }
        Some(age) => u8::try_from(age).ok(),
    };

    let gender = non_empty(form.gender.as_deref()).and_then(Gender::parse);
    if gender.is_none() {
        errors.push(FieldError::new("gender", "Please select your gender."));
    }

    let state = non_empty(form.state.as_deref()).filter(|s| regions::is_known_state(s));
    if state.is_none() {
        errors.push(FieldError::new("state", "Please select your state/UT."));
    }

    // A district only counts when it belongs to the chosen state.
    let district = non_empty(form.district.as_deref())
        .filter(|d| state.is_some_and(|s| regions::district_belongs_to(s, d)));
    if district.is_none() {
        errors.push(FieldError::new("district", "Please select your district."));
    }

    match (age, gender, state, district) {
        (Some(age), Some(gender), Some(state), Some(district)) if errors.is_empty() => {
            Ok(UserInfo {
                name,
                name_hi,
                age,
                gender,
                state: state.to_string(),
                district: district.to_string(),
            })
        }
        _ => Err(AppError::Validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> UserInfoForm {
        UserInfoForm {
            name: "  Asha   Verma ".to_string(),
            name_hi: "आशा वर्मा".to_string(),
            age: Some(30),
            gender: Some("Female".to_string()),
            state: Some("Madhya Pradesh".to_string()),
            district: Some("Bhopal".to_string()),
        }
    }

    fn failing_fields(form: &UserInfoForm) -> Vec<&'static str> {
        match validate_user_info(form) {
            Err(AppError::Validation(errors)) => errors.iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_form_is_normalized() {
        let info = validate_user_info(&valid_form()).unwrap();
        assert_eq!(info.name, "Asha Verma");
        assert_eq!(info.age, 30);
        assert_eq!(info.gender, Gender::Female);
        assert_eq!(info.district, "Bhopal");
    }

    #[test]
    fn test_all_failures_are_reported_together() {
        let form = UserInfoForm {
            name: "A".to_string(),
            ..Default::default()
        };
        assert_eq!(
            failing_fields(&form),
            vec!["name", "name_hi", "age", "gender", "state", "district"]
        );
    }

    #[test]
    fn test_age_bounds() {
        for (age, ok) in [(0, false), (1, true), (120, true), (121, false), (-5, false)] {
            let form = UserInfoForm {
                age: Some(age),
                ..valid_form()
            };
            assert_eq!(validate_user_info(&form).is_ok(), ok, "age {}", age);
        }
    }

    #[test]
    fn test_district_must_belong_to_state() {
        let form = UserInfoForm {
            district: Some("Pune".to_string()),
            ..valid_form()
        };
        assert_eq!(failing_fields(&form), vec!["district"]);
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let form = UserInfoForm {
            gender: Some("Robot".to_string()),
            ..valid_form()
        };
        assert_eq!(failing_fields(&form), vec!["gender"]);
    }
}
