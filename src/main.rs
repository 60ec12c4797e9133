use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use whisper_relay::application::services::TranscriptionService;
use whisper_relay::infrastructure::audio::TranscriptionEngineFactory;
use whisper_relay::infrastructure::observability::{TracingConfig, init_tracing};
use whisper_relay::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let transcription = &settings.transcription;
    let engine = TranscriptionEngineFactory::create(&transcription.engine_options())?;
    let retry_policy = transcription.retry_policy();

    tracing::info!(
        provider = ?transcription.provider,
        model = %transcription.model,
        max_retries = retry_policy.max_retries(),
        retry_delay_ms = retry_policy.delay().as_millis(),
        "Transcription engine ready"
    );

    let transcription_service = Arc::new(TranscriptionService::new(engine, retry_policy));
    let state = AppState::new(transcription_service)
        .with_max_upload_bytes(transcription.max_upload_bytes());

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
