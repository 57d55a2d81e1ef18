#![doc = include_str!("../README.md")]

extern crate alloc;

use alloc::sync::Arc;
use clap::Parser;
use core::error::Error;
use delivops_fetch::{
    Config, ExecutionContext, FetchClient, ReqwestHttpClient, Request, SerializableConfig,
    compile_config, read_config,
};
use env_logger::Env;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::{path::PathBuf, process::exit};
use tokio::io::{AsyncWriteExt, stdout};
use url::Url;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// An API path, such as `/clients/`.
    path: String,
    /// Sets a request method.
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,
    /// Adds a request header in a `name: value` form.
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,
    /// Sets a request body.
    #[arg(short, long)]
    data: Option<String>,
    /// Sends requests as a browser page served from an origin.
    #[arg(long)]
    browser_origin: Option<Url>,
    /// Reads a configuration file before environment variables.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        path,
        method,
        headers,
        data,
        browser_origin,
        config,
        verbose,
    } = Arguments::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if verbose {
        "debug"
    } else {
        "warn"
    }))
    .init();

    let client = FetchClient::new(
        Arc::new(ReqwestHttpClient::new()?),
        Arc::new(load_config(config).await?),
        browser_origin.map_or(ExecutionContext::Server, ExecutionContext::browser),
    );

    let mut request = Request::new(path)
        .set_method(parse_method(&method)?)
        .set_headers(parse_headers(&headers)?);

    if let Some(data) = data {
        request = request.set_body(data);
    }

    let response = client.request(&request).await;

    eprintln!("{} {}", response.status(), response.status_text());

    let mut output = stdout();
    output.write_all(response.body()?).await?;
    output.flush().await?;

    Ok(())
}

async fn load_config(path: Option<PathBuf>) -> Result<Config, delivops_fetch::Error> {
    let mut config = if let Some(path) = path {
        read_config(&path).await?
    } else {
        SerializableConfig::default()
    };

    config.merge(SerializableConfig::from_vars(std::env::vars()));

    Ok(compile_config(config)?)
}

fn parse_method(method: &str) -> Result<Method, delivops_fetch::Error> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|error| delivops_fetch::Error::InvalidArgument(format!("{method}: {error}")))
}

fn parse_headers(headers: &[String]) -> Result<HeaderMap, delivops_fetch::Error> {
    headers
        .iter()
        .map(|header| -> Result<_, delivops_fetch::Error> {
            let invalid = |message: &dyn core::fmt::Display| {
                delivops_fetch::Error::InvalidArgument(format!("{header}: {message}"))
            };
            let (name, value) = header
                .split_once(':')
                .ok_or_else(|| invalid(&"missing colon"))?;

            Ok((
                HeaderName::from_bytes(name.trim().as_bytes()).map_err(|error| invalid(&error))?,
                HeaderValue::from_str(value.trim()).map_err(|error| invalid(&error))?,
            ))
        })
        .collect()
}
