use reqwest::Client as HttpClient;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use vitalis_adapters::{
    Argon2Hasher, HttpMailRelay, JwtConfig, JwtTokenIssuer, PostgresUserStore,
    PostgresVerificationStore, config::Settings,
};
use vitalis_auth_service::{AppState, AuthService, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    dotenvy::dotenv().ok();
    let settings = Settings::load()?;

    // Setup database connection pool
    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(settings.postgres.url.expose_secret())
        .await?;

    // Run migrations
    sqlx::migrate!().run(&pg_pool).await?;

    // Create stores
    let user_store = PostgresUserStore::new(pg_pool.clone());
    let verification_store = PostgresVerificationStore::new(pg_pool);

    // Create mail relay client
    let http_client = HttpClient::builder()
        .timeout(Duration::from_millis(settings.mail_relay.timeout_in_millis))
        .build()?;
    let mail_relay = HttpMailRelay::new(settings.mail_relay.base_url.clone(), http_client);

    let hasher = Argon2Hasher::new();
    let token_issuer = JwtTokenIssuer::new(JwtConfig {
        jwt_secret: settings.jwt.secret.clone(),
        token_ttl_in_seconds: settings.jwt.time_to_live,
    });

    let service = AuthService::new(AppState {
        user_store,
        verification_store,
        mail_relay,
        hasher,
        token_issuer,
    });

    let listener = tokio::net::TcpListener::bind(&settings.app.address).await?;
    service.run(listener).await?;

    Ok(())
}
