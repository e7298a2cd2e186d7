use clap::{Parser as ClapParser, Subcommand};
use decicalc::output::format_decimal;
use decicalc::server::{self, config::ServerConfig};
use std::io::{self, Read};
use std::net::IpAddr;

#[derive(ClapParser)]
#[command(name = "decicalc")]
#[command(about = "decicalc - exact decimal arithmetic expressions, from the shell or over HTTP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an infix expression
    Eval {
        /// The expression (reads from stdin if not provided)
        #[arg(allow_hyphen_values = true)]
        expr: Option<String>,
    },

    /// Apply one operator to two operands
    Calc {
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// One of + - * / %
        #[arg(allow_hyphen_values = true)]
        op: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        #[arg(short, long, default_value_t = 5000)]
        port: u16,

        /// Maximum number of history entries kept in memory
        #[arg(long, default_value_t = decicalc::history::DEFAULT_HISTORY_CAPACITY)]
        history_capacity: usize,

        /// Allowed CORS origin for /api (any origin if omitted)
        #[arg(long)]
        cors_origin: Option<String>,

        /// Maximum request body size in KiB
        #[arg(long, default_value_t = 64)]
        max_body_kb: usize,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Eval { expr } => run_eval(expr),
        Commands::Calc { a, op, b } => decicalc::calculate(&a, &op, &b)
            .map(|value| println!("{}", format_decimal(&value)))
            .map_err(anyhow::Error::from),
        Commands::Serve {
            host,
            port,
            history_capacity,
            cors_origin,
            max_body_kb,
        } => run_serve(ServerConfig {
            host,
            port,
            history_capacity,
            cors_origin,
            max_body_size_kb: max_body_kb,
            ..ServerConfig::default()
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_eval(expr: Option<String>) -> anyhow::Result<()> {
    let expr = match expr {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => {
            anyhow::bail!("No expression provided. Pass one as an argument or pipe it to stdin.")
        }
    };

    let expr = expr.trim();
    if expr.is_empty() {
        anyhow::bail!("Empty expression");
    }

    println!("{}", decicalc::evaluate(expr)?);
    Ok(())
}

fn run_serve(config: ServerConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::start_server(config))?;
    Ok(())
}
