//! CLI module for hubview.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with environment fallbacks
//! - Version display
//! - Loading one view model with the production adapters
//!
//! # Usage
//!
//! ```ignore
//! use hubview::cli::{parse_args, run_load, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Load(config) => println!("{}", run_load(config).await?),
//!     CliCommand::Version | CliCommand::Help => {}
//! }
//! ```

pub mod args;
pub mod config;
pub mod version;

pub use args::{parse_args, parse_args_with_env, ArgsError, CliCommand, USAGE};
pub use config::CliConfig;
pub use version::{version_string, VERSION};

use color_eyre::eyre::WrapErr;
use color_eyre::{Report, Result, Section};
use std::sync::Arc;

use crate::adapters::{
    FileContentProvider, FixedConnectivity, HttpContentProvider, ReqwestHttpClient,
};
use crate::loader::{LoaderConfig, ViewModelLoader};
use crate::models::ViewModel;

/// Assemble a loader from CLI configuration.
///
/// Must be called inside a tokio runtime.
pub fn build_loader(config: &CliConfig) -> Result<ViewModelLoader> {
    let local = match &config.cache_dir {
        Some(dir) => FileContentProvider::new(dir),
        None => FileContentProvider::with_default_root()?,
    };

    let connectivity = if config.offline {
        FixedConnectivity::offline()
    } else {
        FixedConnectivity::online()
    };

    let mut loader_config = LoaderConfig::new();
    if let Some(timeout) = config.timeout {
        loader_config = loader_config.with_provider_timeout(timeout);
    }

    let mut builder = ViewModelLoader::builder(config.feature_config())
        .with_connectivity_resolver(Arc::new(connectivity))
        .with_local_provider(Arc::new(local))
        .with_config(loader_config);

    if let Some(url) = &config.remote_url {
        let client = match config.timeout {
            Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
            None => ReqwestHttpClient::new(),
        };
        builder = builder.with_remote_provider(Arc::new(HttpContentProvider::new(client, url)));
    }

    Ok(builder.build()?)
}

/// Load the configured view and return it.
pub async fn load(config: &CliConfig) -> Result<Arc<ViewModel>> {
    let loader = build_loader(config)?;
    tracing::debug!(
        view_uri = %config.view_uri,
        feature = %config.feature,
        policy = %config.policy,
        offline = config.offline,
        "Loading view model"
    );

    match loader.load_view_model().outcome().await {
        Ok(view_model) => Ok(view_model),
        Err(error) => {
            let hint = error.user_message();
            Err(Report::new(error))
                .wrap_err_with(|| format!("failed to load {}", config.view_uri))
                .suggestion(hint)
        }
    }
}

/// Load the configured view and render it as pretty JSON.
pub async fn run_load(config: CliConfig) -> Result<String> {
    let view_model = load(&config).await?;
    serde_json::to_string_pretty(view_model.as_ref()).wrap_err("failed to serialize view model")
}
