use std::{env, net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::{
    app::envy::Envy,
    replicate::{ReplicateApi, ReplicateClient},
    sessions::store::SessionStore,
};

mod app;
mod credentials;
mod gallery;
mod images;
mod page;
mod replicate;
mod sessions;

pub struct AppState {
    pub envy: Arc<Envy>,
    pub sessions: SessionStore,
    pub replicate: Arc<dyn ReplicateApi>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flux_studio=info,tower_http=info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    match envy.default_api_token() {
        Some(_) => tracing::info!("default api token found in environment"),
        None => tracing::info!("no default api token, sessions must verify their own"),
    }

    // properties
    let port = envy.port();
    let replicate = ReplicateClient::from_envy(&envy);
    tracing::info!("using replicate api at {}", envy.api_url());

    let state = AppState {
        sessions: SessionStore::new(envy.session_idle_secs()),
        replicate: Arc::new(replicate),
        envy: Arc::new(envy),
    };

    // app
    let app = app::router::build(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("server error: {}", e);
    }
}
