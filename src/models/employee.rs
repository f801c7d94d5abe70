//! Employee model and the form payload used to create or update one.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};

use super::Department;

/// Gender code stored as a single letter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Gender::M),
            "F" => Ok(Gender::F),
            other => Err(format!("unknown gender code `{}`", other)),
        }
    }
}

/// An employee row, joined with its department on reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub emp_id: i32,
    pub emp_name: Option<String>,
    pub gender: Option<Gender>,
    pub email: Option<String>,
    pub d_id: Option<i32>,
    pub birthday: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub department: Option<Department>,
}

/// Form-encoded employee fields sent by POST /emp and PUT /emp/{empId}.
///
/// Every field is optional and an empty value counts as absent. On update the
/// form replaces the whole row, so an absent field clears the stored column.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub emp_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub d_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub hire_date: Option<NaiveDate>,
}

/// Deserialize an optional form value, mapping `""` to `None`.
fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> Result<EmployeeForm, serde_urlencoded::de::Error> {
        serde_urlencoded::from_str(query)
    }

    #[test]
    fn test_form_full() {
        let form = parse(
            "empName=zhangsan&gender=M&email=zs%40example.com&dId=1&birthday=1990-05-01&hireDate=2020-01-15",
        )
        .unwrap();

        assert_eq!(form.emp_name.as_deref(), Some("zhangsan"));
        assert_eq!(form.gender, Some(Gender::M));
        assert_eq!(form.email.as_deref(), Some("zs@example.com"));
        assert_eq!(form.d_id, Some(1));
        assert_eq!(form.birthday, NaiveDate::from_ymd_opt(1990, 5, 1));
        assert_eq!(form.hire_date, NaiveDate::from_ymd_opt(2020, 1, 15));
    }

    #[test]
    fn test_form_empty_values_are_absent() {
        let form = parse("empName=&gender=&dId=&birthday=").unwrap();
        assert!(form.emp_name.is_none());
        assert!(form.gender.is_none());
        assert!(form.d_id.is_none());
        assert!(form.birthday.is_none());
        assert!(form.email.is_none());
    }

    #[test]
    fn test_form_keeps_values_as_sent() {
        let form = parse("empName=+zhangsan+&email=zs%40example.com+").unwrap();
        assert_eq!(form.emp_name.as_deref(), Some(" zhangsan "));
        assert_eq!(form.email.as_deref(), Some("zs@example.com "));
    }

    #[test]
    fn test_form_rejects_bad_typed_fields() {
        assert!(parse("gender=X").is_err());
        assert!(parse("dId=abc").is_err());
        assert!(parse("birthday=01/02/2000").is_err());
    }

    #[test]
    fn test_employee_serializes_camel_case() {
        let emp = Employee {
            emp_id: 7,
            emp_name: Some("lisi_01".into()),
            gender: Some(Gender::F),
            email: None,
            d_id: Some(2),
            birthday: None,
            hire_date: None,
            department: Some(Department {
                dept_id: 2,
                dept_name: "测试部".into(),
            }),
        };

        let value = serde_json::to_value(&emp).unwrap();
        assert_eq!(value["empId"], 7);
        assert_eq!(value["empName"], "lisi_01");
        assert_eq!(value["gender"], "F");
        assert_eq!(value["dId"], 2);
        assert_eq!(value["department"]["deptName"], "测试部");
    }
}
