use std::net::IpAddr;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use emcenter_models::contact::ResponseContract;
use emcenter_testing::contact;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Contact {
            host,
            port,
            contract,
        } => contact::start_server(host, port, contract.into()).await?,
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the contact endpoint testing server
    Contact {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8000")]
        port: u16,
        /// The response format to emulate
        #[arg(long, value_enum, default_value_t = Contract::SuccessFlag)]
        contract: Contract,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Contract {
    /// {"success": true, "message": "..."}
    SuccessFlag,
    /// {"status": "ok"}
    Status,
}

impl From<Contract> for ResponseContract {
    fn from(value: Contract) -> Self {
        match value {
            Contract::SuccessFlag => Self::SuccessFlag,
            Contract::Status => Self::Status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }
}
