//! Username and employee field validation.
//!
//! Two independent checks live here: the username format rule used by
//! `/checkuser`, and the field validation run before an employee is saved.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::EmployeeForm;

/// Username accepted by `/checkuser`: 6-16 of `[a-z0-9_-]` or 2-5 CJK ideographs.
static USERNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-z0-9_-]{6,16}|[\x{2E80}-\x{9FFF}]{2,5})$").expect("valid username regex")
});

/// Employee name accepted on save. Unlike the username rule, upper case is allowed.
static EMP_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9_-]{6,16}|[\x{2E80}-\x{9FFF}]{2,5})$").expect("valid name regex")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z0-9_.-]+)@([\da-z.-]+)\.([a-z.]{2,6})$").expect("valid email regex")
});

pub const MSG_USERNAME_MALFORMED: &str = "2-5位中文或6-16位英文和数字";
pub const MSG_USERNAME_UNAVAILABLE: &str = "用户名不可用";

pub const MSG_NAME_REQUIRED: &str = "用户名不能为空";
pub const MSG_NAME_MALFORMED: &str = "用户名必须是2-5位中文或者6-16位英文和数字的组合";
pub const MSG_EMAIL_REQUIRED: &str = "邮箱不能为空";
pub const MSG_EMAIL_MALFORMED: &str = "邮箱格式不正确";

/// Check the username format rule.
pub fn is_valid_username(name: &str) -> bool {
    USERNAME_RE.is_match(name)
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field, e.g. `empName`
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Validate an employee form before it is inserted.
pub fn validate_employee(form: &EmployeeForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match form.emp_name.as_deref() {
        None => errors.push(FieldError::new("empName", MSG_NAME_REQUIRED)),
        Some(name) if !EMP_NAME_RE.is_match(name) => {
            errors.push(FieldError::new("empName", MSG_NAME_MALFORMED))
        }
        Some(_) => {}
    }

    match form.email.as_deref() {
        None => errors.push(FieldError::new("email", MSG_EMAIL_REQUIRED)),
        Some(email) if !EMAIL_RE.is_match(email) => {
            errors.push(FieldError::new("email", MSG_EMAIL_MALFORMED))
        }
        Some(_) => {}
    }

    errors
}

/// Collapse errors into one message per field. The first message reported
/// for a field wins.
pub fn error_fields(errors: &[FieldError]) -> BTreeMap<&'static str, &'static str> {
    let mut map = BTreeMap::new();
    for err in errors {
        map.entry(err.field).or_insert(err.message);
    }
    map
}
