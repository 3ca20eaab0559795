//! Employee API façade library.

pub mod config;
pub mod http;
pub mod model;
pub mod service;
pub mod upstream;

pub use config::AppConfig;
pub use http::HttpServer;
pub use model::Employee;
pub use service::EmployeeService;
pub use upstream::UpstreamClient;
