//! Paycheck Engine HTTP server.
//!
//! Loads the pay policy from `PAYCHECK_POLICY` (default
//! `./config/policy.yaml`) and serves `POST /calculate` on `PAYCHECK_ADDR`
//! (default `127.0.0.1:3000`).

use std::env;

use paycheck_engine::api::{AppState, create_router};
use paycheck_engine::config::PolicyLoader;
use tracing::info;

const DEFAULT_POLICY_PATH: &str = "./config/policy.yaml";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let policy_path =
        env::var("PAYCHECK_POLICY").unwrap_or_else(|_| DEFAULT_POLICY_PATH.to_string());
    let addr = env::var("PAYCHECK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let loader = PolicyLoader::load(&policy_path)?;
    info!(policy = %loader.name(), path = %policy_path, "Loaded pay policy");

    let router = create_router(AppState::new(loader.into_policy()));
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
