//! Line-oriented chat gateway for local use.
//!
//! Each stdin line is treated as one chat message from a human sender; the
//! handler's replies are printed to stdout. A platform gateway would replace
//! this module wholesale and render `Reply::Report` natively.

use std::io;

use tokio::io::{AsyncBufReadExt, BufReader};

use quotebot_core::{ColorHint, IncomingMessage, MessageHandler, Reply, ReportPayload};

/// Reads messages from stdin until EOF, replying on stdout.
pub async fn run(handler: &MessageHandler) -> io::Result<()> {
    log::info!(
        "listening for messages with prefix '{}'",
        handler.prefix()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let message = IncomingMessage::from_user(line);
        if let Some(reply) = handler.handle(&message).await {
            print_reply(&reply);
        }
    }

    log::info!("stdin closed, shutting down");
    Ok(())
}

fn print_reply(reply: &Reply) {
    match reply {
        Reply::Text(text) => println!("{text}"),
        Reply::Report(report) => print_report(report),
    }
}

fn print_report(report: &ReportPayload) {
    println!("{} {}", report.title, trend_marker(report.color));
    println!("{}", report.subtitle);
    for field in &report.fields {
        println!("  {}: {}", field.name, field.value);
    }
}

fn trend_marker(color: Option<ColorHint>) -> &'static str {
    match color {
        Some(ColorHint::Positive) => "▲",
        Some(ColorHint::Negative) => "▼",
        None => "•",
    }
}
