//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are recorded only after [`init_profiling`] turns them on, so the
//! `profile_function!` calls sprinkled through layout and dispatch are cheap
//! when nobody is watching.

pub use puffin::profile_function;

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Record scopes in-process only.
    InProcess,
    /// Send profiling data to puffin_viewer via HTTP.
    #[cfg(feature = "profiling-server")]
    PuffinHttp,
}

#[cfg(feature = "profiling-server")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use trellis_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::InProcess);
/// ```
pub fn init_profiling(backend: ProfilingBackend) {
    puffin::set_scopes_on(true);
    match backend {
        ProfilingBackend::InProcess => {
            tracing::info!("Puffin scopes enabled");
        }
        #[cfg(feature = "profiling-server")]
        ProfilingBackend::PuffinHttp => match puffin_http::Server::new("0.0.0.0:8585") {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        },
    }
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per frame, before the event pump.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
