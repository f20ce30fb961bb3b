mod body;
mod config;
mod err;
mod opt;
mod redir;
mod routes;
mod server;

use crate::redir::Table;
use crate::routes::{Handler, Hello, Resolver};

#[tokio::main]
async fn main() -> Result<(), err::DisplayError> {
    let opt::Options {
        verbose,
        listen,
        config,
        source,
    } = clap::Parser::parse();

    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let map_handler = Resolver::new(Table::build(config::builtin_routes()), Box::new(Hello));

    let handler: Box<dyn Handler> = match source {
        opt::Source::Map => Box::new(map_handler),
        opt::Source::Yaml => {
            let data = config::read_or_default(&config).await;
            let routes = redir::decode_yaml(&data)?;
            Box::new(Resolver::new(Table::build(routes), Box::new(map_handler)))
        }
        opt::Source::Json => {
            let routes = redir::decode_json(config::SAMPLE_JSON.as_bytes())?;
            Box::new(Resolver::new(Table::build(routes), Box::new(map_handler)))
        }
    };

    server::run(listen, handler).await?;

    Ok(())
}
