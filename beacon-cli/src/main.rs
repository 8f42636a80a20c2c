use anyhow::{Context, Result};
use beacon_core::ServerMessage;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

#[derive(Parser)]
#[command(name = "beacon")]
#[command(about = "Probe client for the beacon signaling relay")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to a relay, join a room and watch the signaling traffic.
    Join {
        /// Room to join.
        room: Option<String>,

        /// Username to join as.
        #[arg(short, long)]
        name: Option<String>,

        /// WebSocket endpoint of the relay.
        #[arg(short, long, default_value = "ws://127.0.0.1:3000/signal")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Join { room, name, server } => join(room, name, server).await,
    }
}

async fn join(room: Option<String>, name: Option<String>, server: String) -> Result<()> {
    let room = match room {
        Some(room) => room,
        None => Input::new().with_prompt("Room").interact_text()?,
    };
    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    println!("{}", format!("🔌 Connecting to {server}...").cyan());
    let (ws, _) = connect_async(server.as_str())
        .await
        .with_context(|| format!("failed to connect to {server}"))?;
    let (mut tx, mut rx) = ws.split();

    let join = json!({"type": "join", "roomId": room, "from": name});
    tx.send(Message::text(join.to_string()))
        .await
        .context("failed to send join")?;

    println!(
        "{}",
        "Type a line to send it as an ice payload, Ctrl-D to stop typing.".dimmed()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            msg = rx.next() => match msg {
                Some(Ok(Message::Text(text))) => print_event(text.as_str()),
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    println!("{}", format!("❌ Connection error: {e}").red());
                    break;
                }
                None => {
                    println!("{}", "Connection closed by server".yellow());
                    break;
                }
            },
            line = lines.next_line(), if stdin_open => match line? {
                Some(line) if !line.trim().is_empty() => {
                    let frame = json!({
                        "type": "ice",
                        "roomId": room,
                        "from": name,
                        "payload": line.trim(),
                    });
                    tx.send(Message::text(frame.to_string()))
                        .await
                        .context("failed to send signal")?;
                }
                Some(_) => {}
                None => stdin_open = false,
            },
        }
    }

    Ok(())
}

fn print_event(text: &str) {
    match serde_json::from_str::<ServerMessage>(text) {
        Ok(ServerMessage::Joined { role, users }) => {
            println!(
                "{}",
                format!("✅ Joined as {role}, users: {}", users.join(", "))
                    .green()
                    .bold()
            );
        }
        Ok(ServerMessage::UserList { users }) => {
            println!("{}", format!("👥 Users: {}", users.join(", ")).cyan());
        }
        Ok(ServerMessage::PeerJoined { room_id }) => {
            println!("{}", format!("➕ Peer joined room {room_id}").green());
        }
        Ok(ServerMessage::PeerLeft { room_id }) => {
            println!("{}", format!("➖ Peer left room {room_id}").yellow());
        }
        Ok(ServerMessage::Error { message }) => {
            println!("{}", format!("❌ {message}").red().bold());
        }
        // Anything else is a relayed peer frame, dump it as-is.
        Err(_) => println!("{}", text.dimmed()),
    }
}
