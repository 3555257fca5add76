use std::sync::Arc;

use rescue_hub::config::{init_db, migrate, Config};
use rescue_hub::services::jwt::JwtService;
use rescue_hub::services::mailer::{LogMailer, Mailer, WebhookMailer};
use rescue_hub::services::metrics::MetricsRegistry;
use rescue_hub::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rescue_hub=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let db = init_db(&config).await?;
    tracing::info!("Connected to MySQL");

    migrate(&db).await?;
    tracing::info!("Migrations applied");

    let mailer: Arc<dyn Mailer> = match &config.mail_webhook_url {
        Some(url) => {
            tracing::info!(%url, "Delivering mail through webhook relay");
            Arc::new(WebhookMailer::new(url.clone(), config.mail_from.clone()))
        }
        None => {
            tracing::warn!("MAIL_WEBHOOK_URL not set, verification codes will only be logged");
            Arc::new(LogMailer::new(config.mail_from.clone()))
        }
    };

    let state = Arc::new(AppState {
        db,
        jwt_service: JwtService::new(config.jwt_secret.clone(), config.token_ttl_hours),
        mailer,
        metrics: MetricsRegistry::new()?,
    });

    let app = rescue_hub::create_app(state, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
