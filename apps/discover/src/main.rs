mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let Some(command) = command_line.command else {
        cli::Cli::command().print_help()?;
        return Ok(());
    };

    let mut cfg = config::Config::load(command_line.config.as_deref())
        .context("Load configuration error")?;
    if let Some(surface) = command_line.surface {
        cfg = cfg.with_surface(surface);
    }

    let cmd: Box<dyn command::Command> = match command {
        cli::Commands::List {
            category,
            query,
            all,
            window,
            sort,
            json,
        } => Box::new(command::ListCommand::new(
            cfg, category, query, all, window, sort, json,
        )),
        cli::Commands::Show { slug, json } => Box::new(command::ShowCommand::new(cfg, slug, json)),
        cli::Commands::Related { slug, count } => {
            Box::new(command::RelatedCommand::new(cfg, slug, count))
        }
        cli::Commands::Categories => Box::new(command::CategoriesCommand::new(cfg)),
        cli::Commands::CheckRules => Box::new(command::CheckRulesCommand::new(cfg)),
    };
    cmd.execute()
}
