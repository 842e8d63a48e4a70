use clap::Parser;
use leaderboard_client::{api, config::Config, context::Context, load_test, rank_lookup, watch};
use structured_logger::{json::new_writer, Builder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::parse();

    Builder::with_level(&config.log_level)
        .with_target_writer("*", new_writer(std::io::stderr()))
        .init();

    let context = Context::new(config)?;

    match context.config.app_component.as_str() {
        "web" => api::serve(context).await?,
        "watch" => watch::serve(context).await?,
        "rank" => rank_lookup::serve(context).await?,
        "load_test" => load_test::serve(context).await?,
        other => anyhow::bail!("unknown app component: {}", other),
    }

    Ok(())
}
