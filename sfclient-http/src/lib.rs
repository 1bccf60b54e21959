//! Async client of the Service Fabric HTTP gateway.
//!
//! Request and response bodies are converted with [`sfclient_types::json`].

pub use client::{ChaosClient, Client, DefaultRequestHandler, EventsStoreClient, HealthClient, MeshNetworksClient, MeshServicesClient, NodesClient, PartitionsClient, RequestHandler};
pub use error::{ClientError, CreateClientError, RequestError};
pub use settings::ClientSettings;

pub mod error;
pub mod settings;

mod client;
mod routes;
