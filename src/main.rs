use clap::Parser;
use tracing::info;

use shortrack::cli::{Cli, Commands, ConfigCommands, config_generate};
use shortrack::config::{get_config, init_config_from};
use shortrack::runtime::modes::{run_shortener_server, run_tracker_server};
use shortrack::system::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let command = cli.command_or_default();

    // 生成配置不需要日志和服务器
    if let Commands::Config {
        action: ConfigCommands::Generate { output_path },
    } = &command
    {
        if let Err(e) = config_generate(output_path.as_deref()) {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
        return Ok(());
    }

    init_config_from(cli.config.as_deref());
    let config = get_config();
    let _guard = init_logging(&config.logging);

    info!("shortrack {} starting", env!("CARGO_PKG_VERSION"));

    match command {
        Commands::Tracker => run_tracker_server().await,
        _ => run_shortener_server().await,
    }
}
