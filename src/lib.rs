//! Resolve a subreddit's latest daily discussion thread through the client-credentials grant
//! and answer the inbound request with a temporary redirect to it.
//!
//! Each invocation runs one strictly sequential pipeline: fetch a bearer token, fetch the
//! subreddit listing with it, pick the newest self-post whose title mentions "daily", and map
//! the outcome onto an API-gateway style proxy response.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod flows;
pub mod handler;
pub mod http;
pub mod listing;
pub mod obs;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};
#[cfg(feature = "cli")]
use {color_eyre as _, dotenvy as _, tokio as _, tracing_subscriber as _};
