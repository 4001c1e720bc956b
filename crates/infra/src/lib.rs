mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::Repos;
pub use services::*;
use std::sync::Arc;
pub use system::ISys;
pub use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct FestivoContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: NotificationService,
}

impl FestivoContext {
    /// Must be called from within a tokio runtime: the notifier spawns
    /// its delivery task on creation.
    pub fn create(config: Config, mailer: Arc<dyn IMailer>) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            notifier: NotificationService::new(mailer),
            config,
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> FestivoContext {
    let config = Config::new();
    let mailer: Arc<dyn IMailer> = match &config.mail_gateway_url {
        Some(url) => Arc::new(HttpMailer::new(url.clone())),
        None => {
            info!("MAIL_GATEWAY_URL not set, outgoing email will be kept in memory.");
            Arc::new(InMemoryMailer::new())
        }
    };
    FestivoContext::create(config, mailer)
}
