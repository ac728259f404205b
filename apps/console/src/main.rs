use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use console_core::AdminConsole;
use shared::domain::{LogType, UserRole};
use webhook_gateway::{load_settings, WebhookGateway};

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the scoring service URL from console.toml / environment.
    #[arg(long)]
    service_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(service_url) = args.service_url {
        settings.service_url = service_url;
    }

    let gateway = WebhookGateway::new(&settings)?;
    let console = AdminConsole::new(Arc::new(gateway));
    console.initial_refresh().await;

    let admins = console.admins().await;
    println!("Administrators: {}", admins.len());
    for admin in &admins {
        println!("  {} <{}>", admin.name, admin.email);
    }

    let pending = console.pending_users(UserRole::Company).await;
    println!("Pending company approvals: {}", pending.len());
    for user in &pending {
        println!("  {} <{}>", user.display_name(), user.email);
    }

    println!("Approvals over the last 7 days:");
    for bucket in console.bucket_logs_for_chart(LogType::Approval).await {
        println!("  {}  {}", bucket.date_label, bucket.count);
    }

    Ok(())
}
