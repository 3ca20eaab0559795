//! Employee data model.
//!
//! # Responsibilities
//! - Mirror the upstream employee record (`employee_*` wire names)
//! - Define the create/delete request payloads
//!
//! # Design Decisions
//! - Records are owned by the upstream system and never mutated here;
//!   every transformation produces new values
//! - Serde renames keep the Rust fields idiomatic while matching the
//!   upstream JSON contract exactly

use serde::{Deserialize, Serialize};

/// An employee record as served by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    /// Upstream-assigned identifier (UUID string).
    pub id: String,

    #[serde(rename = "employee_name")]
    pub name: String,

    #[serde(rename = "employee_salary")]
    pub salary: i32,

    #[serde(rename = "employee_age")]
    pub age: i32,

    #[serde(rename = "employee_title")]
    pub title: String,

    #[serde(rename = "employee_email")]
    pub email: String,
}

/// Payload for creating a new employee upstream.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateEmployeeInput {
    pub name: String,
    pub salary: i32,
    pub age: i32,
    pub title: String,
    pub email: String,
}

/// Payload for deleting an employee upstream. The upstream API deletes
/// by name, not by id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteEmployeeInput {
    pub name: String,
}
