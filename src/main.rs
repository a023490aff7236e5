use clap::{CommandFactory, Parser};
use shopkeep::cli::{Cli, Commands};
use shopkeep::{Config, init_config, run};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let command = match cli.command {
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Some(Commands::Init) => return init_config(),
        Some(command) => command,
    };

    let config = Config::load()?;
    config.validate()?;

    let worker_threads = config.general.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    let runtime = builder.build()?;
    runtime.block_on(run(command, config))
}
