//! Presign server - issues SigV4 presigned upload and read URLs.
//!
//! This binary exposes `presign-http` over a TCP listener. Callers POST a
//! JSON body naming an object key and receive a time-limited signed URL;
//! the server never transmits object bytes itself.
//!
//! # Usage
//!
//! ```text
//! LISTEN=0.0.0.0:8787 R2_ACCESS_KEY_ID=... R2_SECRET_ACCESS_KEY=... \
//! R2_ACCOUNT_ID=... R2_BUCKET_NAME=... presign-server
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LISTEN` | `0.0.0.0:8787` | Bind address |
//! | `R2_ACCESS_KEY_ID` | *(required)* | Access key ID |
//! | `R2_SECRET_ACCESS_KEY` | *(required)* | Secret access key |
//! | `R2_ACCOUNT_ID` | *(required)* | Storage account identifier |
//! | `R2_BUCKET_NAME` | *(required)* | Bucket name |
//! | `R2_STORAGE_HOST` | `r2.cloudflarestorage.com` | Storage host suffix |
//! | `UPLOAD_EXPIRY_SECS` | `900` | Upload URL validity window |
//! | `READ_EXPIRY_SECS` | `3600` | Read URL validity window |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::net::SocketAddr;

use anyhow::{Context, Result};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use presign_core::{SigV4Signer, Signer, SignerConfig};
use presign_http::{PresignHttpConfig, PresignHttpService};

/// Server version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

/// Read the bind address from `LISTEN`, defaulting to `0.0.0.0:8787`.
fn listen_address() -> String {
    std::env::var("LISTEN").unwrap_or_else(|_| String::from("0.0.0.0:8787"))
}

/// Read the log level from `LOG_LEVEL`, defaulting to `info`.
fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| String::from("info"))
}

/// Build the HTTP-layer config from the signer config's expiry policy.
fn build_http_config(config: &SignerConfig) -> PresignHttpConfig {
    PresignHttpConfig {
        upload_expiry_secs: config.upload_expiry_secs,
        read_expiry_secs: config.read_expiry_secs,
    }
}

/// Run the accept loop, serving connections until a shutdown signal is received.
async fn serve<S: Signer + 'static>(
    listener: TcpListener,
    service: PresignHttpService<S>,
) -> Result<()> {
    let graceful = hyper_util::server::graceful::GracefulShutdown::new();
    let http = HttpConnBuilder::new(TokioExecutor::new());

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        info!("received shutdown signal, draining connections");
    };

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                let (stream, peer_addr) = match result {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let svc = service.clone();
                let conn = http.serve_connection(TokioIo::new(stream), svc);
                let conn = graceful.watch(conn.into_owned());

                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer_addr = %peer_addr, error = %e, "connection error");
                    }
                });
            }

            () = &mut shutdown => {
                info!("shutting down gracefully");
                break;
            }
        }
    }

    // Wait for in-flight requests to complete.
    graceful.shutdown().await;
    info!("all connections drained, exiting");

    Ok(())
}

/// Perform a health check by connecting to the server and requesting the
/// health endpoint.
///
/// Exits with code 0 if healthy, 1 otherwise.
async fn run_health_check(addr: &str) -> Result<()> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    let stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("cannot connect to {addr}"))?;

    let (mut reader, mut writer) = stream.into_split();

    let request = format!("GET /health HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    writer.write_all(request.as_bytes()).await?;
    writer.shutdown().await?;

    let mut response = String::new();
    reader.read_to_string(&mut response).await?;

    if response.contains("200 OK") && response.contains("\"status\":\"running\"") {
        Ok(())
    } else {
        anyhow::bail!("unhealthy response from {addr}")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle --health-check flag for Docker HEALTHCHECK.
    if std::env::args().any(|a| a == "--health-check") {
        let addr = listen_address().replace("0.0.0.0", "127.0.0.1");
        let healthy = run_health_check(&addr).await.is_ok();
        std::process::exit(i32::from(!healthy));
    }

    init_tracing(&log_level())?;

    let config = SignerConfig::from_env();
    let http_config = build_http_config(&config);

    info!(
        account_id = %config.account_id,
        bucket_name = %config.bucket_name,
        storage_host = %config.storage_host,
        upload_expiry_secs = config.upload_expiry_secs,
        read_expiry_secs = config.read_expiry_secs,
        version = VERSION,
        "starting presign server",
    );

    // An incomplete configuration is fatal at startup: every signing request
    // would fail with the same configuration error anyway.
    let signer = SigV4Signer::new(config).context("incomplete signer configuration")?;
    let service = PresignHttpService::new(signer, http_config);

    let listen = listen_address();
    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid bind address: {listen}"))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(%addr, "listening for connections");

    serve(listener, service).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_http_config_from_signer_config() {
        let config = SignerConfig::builder()
            .upload_expiry_secs(120)
            .read_expiry_secs(600)
            .build();
        let http_config = build_http_config(&config);

        assert_eq!(http_config.upload_expiry_secs, 120);
        assert_eq!(http_config.read_expiry_secs, 600);
    }
}
