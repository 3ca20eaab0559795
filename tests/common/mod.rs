//! Shared utilities for integration testing.
//!
//! Provides an in-process mock of the upstream employee API speaking
//! the `{data, status, error}` envelope contract, plus a helper that
//! boots the real façade against it on an ephemeral port.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

use employee_api::config::AppConfig;
use employee_api::http::HttpServer;
use employee_api::model::{CreateEmployeeInput, DeleteEmployeeInput, Employee};

/// Handle to the mock upstream's mutable state.
#[derive(Clone, Default)]
pub struct MockUpstream {
    pub employees: Arc<Mutex<Vec<Employee>>>,
    /// When set, create requests answer with a data-less envelope.
    pub fail_creates: Arc<AtomicBool>,
    /// When set, delete requests answer `data: false` and keep the record.
    pub fail_deletes: Arc<AtomicBool>,
}

impl MockUpstream {
    pub fn seed(&self, employees: Vec<Employee>) {
        *self.employees.lock().unwrap() = employees;
    }
}

/// Build a test employee record.
pub fn employee(name: &str, salary: i32) -> Employee {
    Employee {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        salary,
        age: 40,
        title: "Engineer".to_string(),
        email: "test@company.com".to_string(),
    }
}

/// Start the mock upstream on an ephemeral port.
pub async fn start_mock_upstream() -> (SocketAddr, MockUpstream) {
    let state = MockUpstream::default();

    let app = Router::new()
        .route("/api/v1/employee", get(list).post(create).delete(delete))
        .route("/api/v1/employee/{id}", get(get_by_id))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, state)
}

/// Start the real façade pointed at the given upstream address.
pub async fn start_facade(upstream: SocketAddr) -> SocketAddr {
    let mut config = AppConfig::default();
    config.upstream.base_url = format!("http://{}/api/v1/employee", upstream);
    config.upstream.timeout_secs = 5;
    config.timeouts.request_secs = 5;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}

fn envelope(data: Value) -> Json<Value> {
    Json(json!({
        "data": data,
        "status": "Successfully processed request.",
    }))
}

async fn list(State(state): State<MockUpstream>) -> Json<Value> {
    let employees = state.employees.lock().unwrap().clone();
    envelope(json!(employees))
}

async fn get_by_id(State(state): State<MockUpstream>, Path(id): Path<String>) -> Json<Value> {
    let found = state
        .employees
        .lock()
        .unwrap()
        .iter()
        .find(|e| e.id == id)
        .cloned();
    match found {
        Some(e) => envelope(json!(e)),
        None => envelope(Value::Null),
    }
}

async fn create(
    State(state): State<MockUpstream>,
    Json(input): Json<CreateEmployeeInput>,
) -> Json<Value> {
    if state.fail_creates.load(Ordering::SeqCst) {
        return envelope(Value::Null);
    }

    let created = Employee {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        salary: input.salary,
        age: input.age,
        title: input.title,
        email: input.email,
    };
    state.employees.lock().unwrap().push(created.clone());
    envelope(json!(created))
}

async fn delete(
    State(state): State<MockUpstream>,
    Json(input): Json<DeleteEmployeeInput>,
) -> Json<Value> {
    if state.fail_deletes.load(Ordering::SeqCst) {
        return envelope(json!(false));
    }

    let mut employees = state.employees.lock().unwrap();
    let before = employees.len();
    employees.retain(|e| e.name != input.name);
    envelope(json!(employees.len() < before))
}
