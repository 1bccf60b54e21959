use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::error::RequestError;

/// Transport seam of the client. Every request of every operation passes through here.
#[async_trait]
pub trait RequestHandler {
    async fn handle(&self, request: Request) -> Result<Response, RequestError>;
}

pub struct DefaultRequestHandler {
    inner: reqwest::Client,
}

#[async_trait]
impl RequestHandler for DefaultRequestHandler {
    async fn handle(&self, request: Request) -> Result<Response, RequestError> {
        self.inner.execute(request).await.map_err(RequestError::Request)
    }
}

impl From<reqwest::Client> for DefaultRequestHandler {
    fn from(value: reqwest::Client) -> Self {
        Self { inner: value }
    }
}
