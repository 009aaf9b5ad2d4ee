mod booster;
mod config;
mod creator;
mod market;
#[cfg(test)]
mod testkit;

use anyhow::Result;
use booster::Booster;
use config::{Config, Task};
use creator::Creator;
use log::info;
use market::T2Marketplace;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    common::setup_env();
    let config = Config::from_env()?;

    // the boost/create loops are unbounded against live marketplace
    // state; racing them against Ctrl-C makes every await point a
    // cancellation point
    tokio::select! {
        _ = signal::ctrl_c() => info!("interrupted, shutting down"),
        result = run(&config) => result?,
    }

    Ok(())
}

async fn run(config: &Config) -> Result<()> {
    let cost = t2::pricing::effective_cost(config.uom, config.volume, config.cost)?;
    let client = t2::Client::new(config.auth_code.clone(), config.region);
    let market = T2Marketplace::new(client, config.number.clone());

    if matches!(config.task, Task::Boost | Task::All) {
        Booster::new(
            market.clone(),
            config.traffic_type,
            config.volume,
            cost,
            config.boost_balance,
            config.poll_interval,
            config.top_window,
        )
        .run()
        .await?;
    }

    if matches!(config.task, Task::Create | Task::All) {
        Creator::new(
            market,
            config.traffic_type,
            config.uom,
            config.volume,
            cost,
            config.orders_count,
            config.emojis.clone(),
            config.poll_interval,
            config.top_window,
        )
        .run()
        .await?;
    }

    Ok(())
}
