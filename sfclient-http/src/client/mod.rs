use http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use reqwest::{Body, Request, Response};
use tracing::{error, trace};
use url::Url;

use sfclient_types::error::FabricError;
use sfclient_types::json::{self, ConversionError, JsonValue};

use crate::error::{ClientError, CreateClientError, RequestError};
use crate::settings::ClientSettings;

pub use chaos::ChaosClient;
pub use events::EventsStoreClient;
pub use health::HealthClient;
pub use mesh::{MeshNetworksClient, MeshServicesClient};
pub use nodes::NodesClient;
pub use partitions::PartitionsClient;
pub use request_handler::{DefaultRequestHandler, RequestHandler};

mod chaos;
mod events;
mod health;
mod mesh;
mod nodes;
mod partitions;
mod request_handler;


/// Client of the HTTP gateway of a Service Fabric cluster.
///
/// Operations are grouped into one trait per resource, e.g. [`NodesClient`] or [`HealthClient`].
pub struct Client {
    base_url: Url,
    requester: Box<dyn RequestHandler + Send + Sync>,
}

impl Client {
    const APPLICATION_JSON: &'static str = "application/json";

    pub fn create(
        settings: &ClientSettings,
        requester: Option<Box<dyn RequestHandler + Send + Sync>>,
    ) -> Result<Self, CreateClientError>
    {
        if settings.endpoint.cannot_be_a_base() {
            return Err(CreateClientError::InvalidBaseUrl { url: settings.endpoint.to_string() });
        }

        let requester = match requester {
            Some(requester) => requester,
            None => {
                let headers = {
                    let mut headers = HeaderMap::new();
                    headers.append(header::ACCEPT, HeaderValue::from_static(Client::APPLICATION_JSON));
                    headers
                };

                let client = reqwest::Client::builder()
                    .default_headers(headers)
                    .https_only(settings.https_only)
                    .timeout(settings.timeout)
                    .build()
                    .map_err(|cause| CreateClientError::InstantiationFailure { cause: format!("Failed to construct client:\n  {cause}") })?;

                Box::new(DefaultRequestHandler::from(client))
            }
        };

        Ok(Self {
            base_url: Clone::clone(&settings.endpoint),
            requester,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn execute(&self, request: Request) -> Result<Response, ClientError> {
        trace!("Sending {} request to '{}'.", request.method(), request.url());
        let response = self.requester.handle(request).await?;
        check_status(response).await
    }

    async fn fetch<T: JsonValue>(&self, url: Url) -> Result<T, ClientError> {
        let response = self.execute(Request::new(Method::GET, url)).await?;
        read_json(response).await
    }

    async fn send_json<B: JsonValue>(&self, method: Method, url: Url, body: &B) -> Result<Response, ClientError> {
        let request = json_request(method, url, body)?;
        self.execute(request).await
    }
}

fn json_request<B: JsonValue>(method: Method, url: Url, body: &B) -> Result<Request, ConversionError> {
    let mut request = Request::new(method, url);

    request.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(Client::APPLICATION_JSON));

    let body = json::to_vec(body)?;

    *request.body_mut() = Some(Body::from(body));

    Ok(request)
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        error!("Received status code '{status}', the cluster did not accept the credentials.");
        return Err(ClientError::InvalidCredentials { status });
    }

    let body = response.bytes().await
        .map_err(RequestError::BodyRead)?;

    let error = json::from_slice::<FabricError>(&body)
        .unwrap_or_else(|_| FabricError {
            code: Default::default(),
            message: (!body.is_empty()).then(|| String::from_utf8_lossy(&body).into_owned()),
        });

    error!("Received status code '{status}' indicating an error:\n  {error}");
    Err(ClientError::Fabric { status, error })
}

async fn read_json<T: JsonValue>(response: Response) -> Result<T, ClientError> {
    let body = response.bytes().await
        .map_err(RequestError::BodyRead)?;
    Ok(json::from_slice(&body)?)
}

/// Like [`read_json`], but an empty body reads as `None`.
async fn read_optional_json<T: JsonValue>(response: Response) -> Result<Option<T>, ClientError> {
    let body = response.bytes().await
        .map_err(RequestError::BodyRead)?;
    if body.is_empty() {
        Ok(None)
    } else {
        Ok(Some(json::from_slice(&body)?))
    }
}
