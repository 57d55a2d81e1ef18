#![doc = include_str!("../README.md")]

extern crate alloc;

mod base;
mod config;
mod context;
mod credential;
mod error;
mod fetch_client;
pub mod header;
mod http_client;
mod request;
mod response;
mod role;

pub use self::{
    base::{BaseCandidate, base_candidates, resolve_base},
    config::*,
    context::ExecutionContext,
    credential::{
        CredentialChain, CredentialError, CredentialProvider, Credentials, DevIdentity,
        DevIdentityProvider, StaticTokenProvider, TokenEndpointProvider,
    },
    error::Error,
    fetch_client::FetchClient,
    http_client::{BareHttpClient, BareRequest, BareResponse, HttpClientError, ReqwestHttpClient},
    request::Request,
    response::{
        FetchError, HttpResponse, NETWORK_FAILURE_STATUS_TEXT, Response, ResponseError,
    },
    role::{Role, normalize_roles},
};
