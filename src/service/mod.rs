//! Employee query/command service subsystem.
//!
//! # Data Flow
//! ```text
//! façade handler
//!     → employee.rs (list/search/get/create/delete + derived aggregates)
//!     → upstream client (fetch/mutate)
//!     → in-memory transforms (filter, stable sort, max)
//! ```

pub mod employee;

pub use employee::EmployeeService;
