//! ethrpc CLI — talk to an Ethereum JSON-RPC node from the terminal.
//!
//! Usage:
//! ```bash
//! # Run a sample sequence of calls against a node
//! ethrpc demo --url http://localhost:8545
//!
//! # Send a raw JSON-RPC call
//! ethrpc call --url http://localhost:8545 --method eth_blockNumber
//!
//! # Positional params as a JSON array
//! ethrpc call --method eth_getBlockByNumber --params '["latest", false]'
//! ```
//!
//! When `--url` is omitted, the endpoint comes from the config search order
//! (`ETHRPC_CONFIG`, `ethrpc.json`, `config.json`).

use std::env;
use std::process;

use anyhow::{Context, Result};
use serde_json::Value;

use ethrpc_client::{Config, EthClient};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "demo" => cmd_demo(&args[2..]).await,
        "call" => cmd_call(&args[2..]).await,
        "version" | "--version" | "-V" => {
            println!("ethrpc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("ethrpc {}", env!("CARGO_PKG_VERSION"));
    println!("Talk to an Ethereum JSON-RPC node from the terminal\n");
    println!("USAGE:");
    println!("    ethrpc <COMMAND>\n");
    println!("COMMANDS:");
    println!("    demo       Run a sample sequence of RPC calls");
    println!("    call       Send a raw JSON-RPC call");
    println!("    version    Print version");
    println!("    help       Print this help\n");
    println!("FLAGS:");
    println!("    --url <URL>        RPC endpoint (overrides the config file)");
    println!("    --method <NAME>    Method name for `call`  [required]");
    println!("    --params <JSON>    Positional params for `call`, as a JSON array");
}

fn resolve_url(args: &[String]) -> Result<String> {
    if let Some(url) = parse_flag(args, "--url") {
        return Ok(url);
    }
    let config = Config::discover().context("no --url given and no usable config file")?;
    Ok(config.node_url)
}

async fn cmd_demo(args: &[String]) -> Result<()> {
    let url = resolve_url(args)?;
    let client = EthClient::connect(&url);

    println!("Querying {url}...\n");

    let head = client.block_number().await?;
    println!("Current block number: {head}");

    let block = client.get_block_by_number(&head, false).await?;
    println!("Head block:\n{}", serde_json::to_string_pretty(&block)?);

    let from = "0x7960f1b90b257bff29d5164d16bca4c8030b7f6d";
    let to = "0x7960f1b90b257bff29d5164d16bca4c8030b7f6d";
    let gas = client.estimate_gas(from, to, "0x9184e72a").await?;
    println!("Estimated gas for a sample transfer: {gas}");

    let network = client.net_version().await?;
    println!("Network version: {network}");

    let syncing = client.syncing_status().await?;
    println!("Syncing: {syncing}");

    Ok(())
}

async fn cmd_call(args: &[String]) -> Result<()> {
    let url = resolve_url(args)?;
    let method = parse_flag(args, "--method").context("--method is required")?;

    let params = match parse_flag(args, "--params") {
        Some(raw) => {
            let value: Value =
                serde_json::from_str(&raw).context("--params is not valid JSON")?;
            match value {
                Value::Array(items) => items,
                single => vec![single],
            }
        }
        None => vec![],
    };

    let client = EthClient::connect(&url);
    let result = client.call(&method, params).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).cloned()
}
