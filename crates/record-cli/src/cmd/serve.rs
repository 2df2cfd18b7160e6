use anyhow::Context;
use record_core::config::Config;
use record_core::store;
use std::path::Path;
use std::sync::Arc;

pub fn run(root: &Path, port: Option<u16>, bind: Option<String>) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let port = port.unwrap_or(config.server.port);
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());

    // Opened before the runtime exists: the sheets client is blocking.
    let rows = store::open(&config.store, root).context("failed to open row store")?;
    store::seed_headers(rows.as_ref()).context("failed to write header row")?;

    let rt = tokio::runtime::Runtime::new()?;
    let server_rows = Arc::clone(&rows);
    let result = rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}"))
            .await
            .with_context(|| format!("failed to bind {bind}:{port}"))?;
        let addr = listener.local_addr()?;
        println!(
            "RecordRecord webhook ({} store) → http://{addr}/sms",
            config.store.kind()
        );

        tokio::select! {
            res = record_server::serve_on(server_rows, listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    });
    drop(rt);
    drop(rows);
    result
}
