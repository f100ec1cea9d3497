use std::sync::Arc;
use storefront_backend_rs::{
    app::App,
    types::{AppEnvironment, Config, StartupError, ToContext},
};
use tracing_subscriber::prelude::*;

fn init_tracing(environment: &AppEnvironment) {
    let fmt_layer = match environment.uses_json_logs() {
        true => tracing_subscriber::fmt::layer().json().boxed(),
        false => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    let ctx = Arc::new(config.to_context().await?);

    App::new(ctx).serve().await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing(&AppEnvironment::from_env());

    if let Err(err) = run().await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}
