//! Minimal external caller for the client core.
//!
//! Sends one command to an RCON server and maps the three terminal
//! outcomes to the conventional exit codes:
//!
//! - `0`: command sent and response obtained
//! - `1`: communication/transport error
//! - `2`: authentication rejected by the server
//!
//! Usage: `rcon_exec <host> <port> <command...>` with the passphrase in
//! the `RCON_PASSPHRASE` environment variable.

use std::process::ExitCode;

use rcon_client::{AuthOutcome, RconClient, Result};

async fn run(host: &str, port: u16, passphrase: &str, command: &str) -> Result<Option<String>> {
    let mut client = RconClient::connect(host, port).await?;
    match client.authenticate(passphrase).await? {
        AuthOutcome::Failure => Ok(None),
        AuthOutcome::Success => {
            let reply = client.execute(command).await?;
            client.close().await;
            Ok(Some(reply))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    rcon_client::utils::logging::init("info");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("usage: rcon_exec <host> <port> <command...>");
        return ExitCode::from(1);
    }
    let host = &args[0];
    let port = match args[1].parse::<u16>() {
        Ok(port) => port,
        Err(_) => {
            eprintln!("invalid port: {}", args[1]);
            return ExitCode::from(1);
        }
    };
    let command = args[2..].join(" ");

    let passphrase = match std::env::var("RCON_PASSPHRASE") {
        Ok(passphrase) => passphrase,
        Err(_) => {
            eprintln!("RCON_PASSPHRASE is not set");
            return ExitCode::from(1);
        }
    };

    match run(host, port, &passphrase, &command).await {
        Ok(Some(reply)) => {
            println!("{reply}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("Authentication failed");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error executing command - {e}");
            ExitCode::from(1)
        }
    }
}
