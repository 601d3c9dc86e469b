// rest/routes/health.rs — Plaintext liveness root.

pub async fn liveness() -> &'static str {
    "Task Management API with SQLite is running"
}
