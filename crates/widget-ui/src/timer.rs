use std::time::Duration;

/// Suspend the current task for `delay`.
///
/// Backed by `setTimeout` in the browser and the tokio timer elsewhere.
pub async fn sleep(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}
