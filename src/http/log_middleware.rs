use std::time::Instant;

use http::Extensions;
use log::{debug, warn};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Logs each outgoing request with its status and elapsed time.
pub struct RequestLogMiddleware;

#[async_trait::async_trait]
impl Middleware for RequestLogMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        let start = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed = start.elapsed().as_millis();

        match &result {
            Ok(response) if response.status().is_success() => {
                debug!("{} {} -> {} in {}ms", method, url, response.status(), elapsed)
            }
            Ok(response) => warn!("{} {} -> {} in {}ms", method, url, response.status(), elapsed),
            Err(err) => warn!("{} {} failed after {}ms: {}", method, url, elapsed, err),
        }

        result
    }
}
