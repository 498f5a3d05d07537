/// Liveness API route

/// GET /ping - liveness probe
pub async fn ping() -> &'static str {
    "pong"
}
