use anyhow::Context;
use wsite::kernel::config::load_config;
use wsite_logger::Logger;
use wsite_runtime::{RuntimeConfig, build_runtime_with_config};
use wsite_server::Server;

fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let runtime = build_runtime_with_config(&RuntimeConfig::high_performance())?;
    runtime.block_on(async { Server::builder().config(cfg).build().await?.run().await })
}
