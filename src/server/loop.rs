// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// Accept loop for the weather service
///
/// Runs until `shutdown` completes. Connections already being served keep
/// running in their own tasks; the listener is closed on return.
pub async fn start_server_loop<S>(
    listener: TcpListener,
    state: Arc<config::AppState>,
    shutdown: S,
) where
    S: Future<Output = &'static str>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            reason = &mut shutdown => {
                logger::log_shutdown(reason);
                break;
            }
        }
    }

    let in_flight = state.active_connections.load(Ordering::SeqCst);
    if in_flight > 0 {
        tracing::info!("Listener closed with {in_flight} connection(s) still in flight");
    }
}
