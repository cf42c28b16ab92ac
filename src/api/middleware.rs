//! API 中间件
//!
//! 给所有响应附加安全头。

use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};

/// Security headers middleware
pub async fn security_headers_middleware(
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let mut response = next.run(req).await;

    response
        .headers_mut()
        .insert("X-Content-Type-Options", "nosniff".parse().unwrap());

    response
        .headers_mut()
        .insert("X-Frame-Options", "DENY".parse().unwrap());

    response.headers_mut().insert(
        "Referrer-Policy",
        "strict-origin-when-cross-origin".parse().unwrap(),
    );

    Ok(response)
}
