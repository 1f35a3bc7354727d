use tracing_subscriber::EnvFilter;

/// tracing サブスクライバを初期化する（プロセスにつき一度だけ呼ぶ）
pub fn init(service_name: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("crud_console_lib=info,crud_console=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(service = service_name, "logging initialized");
}
