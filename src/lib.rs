//! OTD booking platform client
//!
//! Client-side core of the resort booking platform: typed domain models, the
//! availability search and checkout-link logic, and the admin back-office
//! controllers, all speaking to the platform's REST API.

use std::sync::Arc;

pub mod admin;
pub mod booking;
pub mod config;
pub mod error;
pub mod http;
pub mod media;
pub mod models;
pub mod services;
pub mod session;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::ApiClient;
pub use media::MediaResolver;
pub use session::Session;

/// Fully wired client stack
#[derive(Clone)]
pub struct Platform {
    pub config: Arc<ClientConfig>,
    pub services: Arc<services::Services>,
    pub session: Session,
}

impl Platform {
    /// Load configuration from files and environment and start anonymous
    pub fn from_env() -> ApiResult<Self> {
        let config = ClientConfig::load()?;
        Self::connect(config, Session::new())
    }

    /// Build the service stack from configuration and an existing session
    /// (pass [`Session::new`] for an anonymous start)
    pub fn connect(config: ClientConfig, session: Session) -> ApiResult<Self> {
        let api = ApiClient::new(&config.api, session.clone())?;
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(api)),
            session,
        })
    }

    pub fn media_resolver(&self) -> MediaResolver {
        MediaResolver::new(&self.config.media)
    }
}
