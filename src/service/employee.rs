//! Employee queries and commands on top of the upstream adapter.
//!
//! # Responsibilities
//! - List/search/fetch employees, delegating storage to the upstream
//! - Derive read-only aggregates (highest salary, top-10 earners)
//! - Create and delete employees through the upstream API
//!
//! # Design Decisions
//! - Records are never mutated; transforms build new vectors
//! - Search is a case-insensitive substring match on the name
//! - Top-10 uses a stable sort so salary ties keep fetch order
//! - Delete resolves the id to a name first, because the upstream
//!   deletes by name

use crate::model::{CreateEmployeeInput, DeleteEmployeeInput, Employee};
use crate::upstream::{UpstreamClient, UpstreamResult};

/// Service layer translating between the façade contract and the
/// upstream envelope API.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    client: UpstreamClient,
}

impl EmployeeService {
    /// Create a service backed by the given upstream client.
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// All employees known upstream; empty when the upstream has none.
    pub async fn list_all(&self) -> UpstreamResult<Vec<Employee>> {
        let employees = self.client.list().await?.unwrap_or_default();
        if employees.is_empty() {
            tracing::warn!("No employees returned by upstream");
        }
        Ok(employees)
    }

    /// Employees whose name contains `query`, case-insensitively.
    pub async fn search_by_name(&self, query: &str) -> UpstreamResult<Vec<Employee>> {
        let employees = self.list_all().await?;
        let matches = filter_by_name(employees, query);
        if matches.is_empty() {
            tracing::info!(query, "No employees matched search");
        }
        Ok(matches)
    }

    /// A single employee by id, or `None` when absent upstream.
    pub async fn get_by_id(&self, id: &str) -> UpstreamResult<Option<Employee>> {
        let employee = self.client.get(id).await?;
        if employee.is_none() {
            tracing::warn!(id, "Employee not found");
        }
        Ok(employee)
    }

    /// The maximum salary across all employees; 0 when there are none.
    pub async fn highest_salary(&self) -> UpstreamResult<i32> {
        let employees = self.list_all().await?;
        Ok(max_salary(&employees))
    }

    /// Names of the ten highest-paid employees, best first.
    pub async fn top10_earner_names(&self) -> UpstreamResult<Vec<String>> {
        let employees = self.list_all().await?;
        Ok(top_earner_names(employees, 10))
    }

    /// Create an employee upstream; `None` when the upstream omitted
    /// the created record.
    pub async fn create(&self, input: CreateEmployeeInput) -> UpstreamResult<Option<Employee>> {
        let created = self.client.create(&input).await?;
        match &created {
            Some(employee) => {
                tracing::info!(id = %employee.id, name = %employee.name, "Created employee")
            }
            None => tracing::error!(name = %input.name, "Upstream did not confirm creation"),
        }
        Ok(created)
    }

    /// Delete the employee with the given id, returning the deleted
    /// name only when the upstream confirms the deletion.
    pub async fn delete_by_id(&self, id: &str) -> UpstreamResult<Option<String>> {
        let Some(employee) = self.client.get(id).await? else {
            tracing::warn!(id, "Employee not found for deletion");
            return Ok(None);
        };

        let input = DeleteEmployeeInput {
            name: employee.name.clone(),
        };
        if self.client.delete(&input).await? {
            tracing::info!(id, name = %employee.name, "Deleted employee");
            Ok(Some(employee.name))
        } else {
            tracing::error!(id, name = %employee.name, "Upstream did not confirm deletion");
            Ok(None)
        }
    }
}

/// Keep the employees whose name contains `query`, case-insensitively.
fn filter_by_name(employees: Vec<Employee>, query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    employees
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}

/// Maximum salary present, or 0 for an empty list.
fn max_salary(employees: &[Employee]) -> i32 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `limit` highest-paid employees, salary descending.
/// The sort is stable, so ties keep their original fetch order.
fn top_earner_names(mut employees: Vec<Employee>, limit: usize) -> Vec<String> {
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    employees
        .into_iter()
        .take(limit)
        .map(|e| e.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: &str, salary: i32) -> Employee {
        Employee {
            id: format!("id-{name}"),
            name: name.to_string(),
            salary,
            age: 35,
            title: "Engineer".to_string(),
            email: "test@company.com".to_string(),
        }
    }

    #[test]
    fn test_filter_matches_case_insensitively() {
        let employees = vec![employee("John Doe", 1000)];

        let matched = filter_by_name(employees.clone(), "john");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "John Doe");

        let unmatched = filter_by_name(employees, "nonexistent");
        assert!(unmatched.is_empty());
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_by_name(Vec::new(), "anything").is_empty());
    }

    #[test]
    fn test_max_salary() {
        assert_eq!(max_salary(&[]), 0);

        let employees = vec![
            employee("A", 52_000),
            employee("B", 118_000),
            employee("C", 97_500),
        ];
        assert_eq!(max_salary(&employees), 118_000);
    }

    #[test]
    fn test_top_earners_ordering() {
        let employees = vec![
            employee("Dylan Cann", 100_000),
            employee("Carissa Beebe", 120_000),
        ];

        let names = top_earner_names(employees, 10);
        assert_eq!(names, vec!["Carissa Beebe", "Dylan Cann"]);
    }

    #[test]
    fn test_top_earners_truncates_to_limit() {
        let employees: Vec<Employee> = (0..15)
            .map(|i| employee(&format!("E{i}"), 1_000 * (i + 1)))
            .collect();

        let names = top_earner_names(employees, 10);
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "E14");
        assert_eq!(names[9], "E5");
    }

    #[test]
    fn test_top_earners_stable_on_ties() {
        let employees = vec![
            employee("First", 90_000),
            employee("Second", 90_000),
            employee("Richer", 95_000),
        ];

        let names = top_earner_names(employees, 10);
        assert_eq!(names, vec!["Richer", "First", "Second"]);
    }
}
