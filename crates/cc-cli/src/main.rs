//! CrowdCompute CLI — command-line front end for the node JSON-RPC API.
//!
//! Thin layer over `cc-sdk`: every subcommand maps to one typed call, and
//! any failure (including a result of the wrong shape) ends the process
//! with exit code 1.

mod commands;

use cc_sdk::{ClientConfig, RpcClient};
use clap::{Parser, Subcommand};

/// CrowdCompute CLI — talk to a CrowdCompute node
#[derive(Parser)]
#[command(name = "cc", version, about = "CrowdCompute CLI — talk to a CrowdCompute node")]
pub struct Cli {
    /// JSON-RPC endpoint of the node
    #[arg(long, default_value = "http://127.0.0.1:8080/")]
    url: String,

    /// Log method names and request/response bodies of every call
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a raw JSON-RPC request
    Rpc {
        /// JSON-RPC method name (e.g. "accounts_listAccounts")
        #[arg(long)]
        method: String,
        /// Positional params as a JSON array
        #[arg(long, default_value = "[]")]
        params: String,
        /// Bearer token for authenticated methods
        #[arg(long)]
        token: Option<String>,
    },

    /// Manage accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Manage bootnodes
    Bootnode {
        #[command(subcommand)]
        action: BootnodeAction,
    },

    /// Control the swarm service
    Service {
        #[command(subcommand)]
        action: ServiceAction,
    },

    /// Discover peers
    Discover {
        /// Number of peers to look for
        #[arg(long, default_value_t = 1)]
        count: i64,
    },

    /// Manage container images on remote nodes
    Image {
        #[command(subcommand)]
        action: ImageAction,
    },

    /// Inspect the node's key-value store
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },

    /// Upload a file (e.g. a saved container image)
    Upload {
        /// Path of the file to upload
        file: String,
        /// Bearer token
        #[arg(long)]
        token: String,
        /// Upload endpoint (defaults to --url)
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Create an account; prints its address
    Create {
        #[arg(long)]
        passphrase: String,
    },
    /// Unlock an account; prints a session token
    Unlock {
        #[arg(long)]
        account: String,
        #[arg(long)]
        passphrase: String,
    },
    /// Lock an account
    Lock {
        #[arg(long)]
        account: String,
        #[arg(long)]
        token: String,
    },
    /// Delete an account
    Delete {
        #[arg(long)]
        account: String,
        #[arg(long)]
        passphrase: String,
    },
    /// List accounts
    List,
}

#[derive(Subcommand)]
enum BootnodeAction {
    /// Show configured bootnodes
    Get,
    /// Replace the bootnode list
    Set {
        /// Bootnode addresses (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        nodes: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ServiceAction {
    /// Run a service on a set of nodes
    Run {
        #[arg(long)]
        service: String,
        /// Node IDs (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        nodes: Vec<String>,
    },
    /// Stop the service on a set of nodes
    Stop {
        /// Node IDs (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        nodes: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ImageAction {
    /// Load an uploaded image onto a node
    Push {
        #[arg(long)]
        node: String,
        /// Image hash returned by the upload
        #[arg(long)]
        hash: String,
        #[arg(long)]
        token: String,
    },
    /// Start a container from an image
    Run {
        #[arg(long)]
        node: String,
        #[arg(long)]
        image: String,
        #[arg(long)]
        token: String,
    },
    /// Inspect a container
    Inspect {
        #[arg(long)]
        node: String,
        #[arg(long)]
        container: String,
        #[arg(long)]
        token: String,
    },
    /// List images on a node
    List {
        #[arg(long)]
        node: String,
        #[arg(long)]
        token: String,
    },
    /// List containers on a node
    Containers {
        #[arg(long)]
        node: String,
        #[arg(long)]
        token: String,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Store statistics
    Stats,
    /// Image record by id
    Image {
        #[arg(long)]
        id: String,
    },
    /// Account owning an image hash
    ImageAccount {
        #[arg(long)]
        hash: String,
    },
    /// All records of a type
    Type {
        #[arg(long)]
        name: String,
    },
    /// Every record
    All,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cc_sdk=info,cc_cli=info".into()),
        )
        .init();

    let config = ClientConfig::new(cli.url).with_debug(cli.debug);

    let result = if let Some(command) = cli.command {
        run(command, config)
    } else {
        // No subcommand — show help
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        println!();
        Ok(())
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: ClientConfig) -> Result<(), String> {
    tracing::debug!("[cc] Using endpoint {} (debug: {})", config.url, config.debug);
    let client = RpcClient::with_config(config.clone());
    match command {
        Commands::Rpc {
            method,
            params,
            token,
        } => commands::rpc::call(&client, &method, &params, token.as_deref()),

        Commands::Account { action } => match action {
            AccountAction::Create { passphrase } => commands::account::create(&client, &passphrase),
            AccountAction::Unlock {
                account,
                passphrase,
            } => commands::account::unlock(&client, &account, &passphrase),
            AccountAction::Lock { account, token } => {
                commands::account::lock(&client, &account, &token)
            }
            AccountAction::Delete {
                account,
                passphrase,
            } => commands::account::delete(&client, &account, &passphrase),
            AccountAction::List => commands::account::list(&client),
        },

        Commands::Bootnode { action } => match action {
            BootnodeAction::Get => commands::bootnode::get(&client),
            BootnodeAction::Set { nodes } => commands::bootnode::set(&client, &nodes),
        },

        Commands::Service { action } => match action {
            ServiceAction::Run { service, nodes } => {
                commands::service::run(&client, &service, &nodes)
            }
            ServiceAction::Stop { nodes } => commands::service::stop(&client, &nodes),
        },

        Commands::Discover { count } => commands::service::discover(&client, count),

        Commands::Image { action } => match action {
            ImageAction::Push { node, hash, token } => {
                commands::image::push(&client, &node, &hash, &token)
            }
            ImageAction::Run { node, image, token } => {
                commands::image::run(&client, &node, &image, &token)
            }
            ImageAction::Inspect {
                node,
                container,
                token,
            } => commands::image::inspect(&client, &node, &container, &token),
            ImageAction::List { node, token } => commands::image::list(&client, &node, &token),
            ImageAction::Containers { node, token } => {
                commands::image::containers(&client, &node, &token)
            }
        },

        Commands::Store { action } => match action {
            StoreAction::Stats => commands::store::stats(&client),
            StoreAction::Image { id } => commands::store::image(&client, &id),
            StoreAction::ImageAccount { hash } => commands::store::image_account(&client, &hash),
            StoreAction::Type { name } => commands::store::by_type(&client, &name),
            StoreAction::All => commands::store::all(&client),
        },

        Commands::Upload {
            file,
            token,
            endpoint,
        } => {
            let config = match endpoint {
                Some(url) => ClientConfig { url, ..config },
                None => config,
            };
            commands::upload::run(config, &file, &token)
        }
    }
}
