//! Department model.

use serde::{Deserialize, Serialize};

/// A department an employee can belong to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub dept_id: i32,
    pub dept_name: String,
}
