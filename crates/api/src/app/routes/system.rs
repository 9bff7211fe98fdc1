use axum::http::StatusCode;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn home() -> &'static str {
    "Welcome to the Sweet Shop API! Access /sweets for operations."
}
