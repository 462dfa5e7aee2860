//! OTD back-office command line
//!
//! Thin console front end over the client crate for operators: listing and
//! pruning entities, moving bookings through their status lifecycle, and
//! uploading media. Authenticate once with `login`, then export the printed
//! token as `OTD_TOKEN` for the following commands.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use otd_client::{
    admin::AdminPanel,
    models::BookingStatus,
    ClientConfig, Platform, Session,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = ClientConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("otd_client={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let session = match std::env::var("OTD_TOKEN") {
        Ok(token) if !token.is_empty() => Session::with_token(token),
        _ => Session::new(),
    };

    let platform = Platform::connect(config, session)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let words: Vec<&str> = args.iter().map(String::as_str).collect();

    match words.as_slice() {
        ["login", email, password] => {
            let token = platform.services.auth.login(email, password).await?;
            println!("export OTD_TOKEN={}", token.access_token);
        }
        ["me"] => {
            let user = platform.services.auth.me().await?;
            println!("{} <{}> [{}]", user.full_name(), user.email, user.role);
        }
        ["users", "list"] => {
            let mut panel = AdminPanel::new(&platform.services);
            require(panel.users.refresh().await, panel.users.error())?;
            for user in panel.users.items() {
                println!("{:>5}  {:<30} {:<10} {}", user.id, user.email, user.role, user.full_name());
            }
        }
        ["users", "delete", id] => {
            let id = parse_id(id)?;
            let mut panel = AdminPanel::new(&platform.services);
            require(panel.users.refresh().await, panel.users.error())?;
            require(panel.users.delete(id, prompt).await, panel.users.error())?;
        }
        ["rooms", "list"] => {
            let mut panel = AdminPanel::new(&platform.services);
            require(panel.rooms.refresh().await, panel.rooms.error())?;
            for room in panel.rooms.items() {
                println!(
                    "{:>5}  {:<30} {:>8}/{:<8} {}",
                    room.id, room.title, room.price_weekdays, room.price_weekend, room.category
                );
            }
        }
        ["rooms", "public"] => {
            let budget = Duration::from_millis(platform.config.api.initial_fetch_timeout_ms);
            let rooms = platform.services.rooms.list_public_with_timeout(budget).await?;
            for room in &rooms {
                println!("{:>5}  {}", room.id, room.title);
            }
        }
        ["rooms", "delete", id] => {
            let id = parse_id(id)?;
            let mut panel = AdminPanel::new(&platform.services);
            require(panel.rooms.refresh().await, panel.rooms.error())?;
            require(panel.rooms.delete(id, prompt).await, panel.rooms.error())?;
        }
        ["cabins", "list"] => {
            let mut panel = AdminPanel::new(&platform.services);
            require(panel.cabins.refresh().await, panel.cabins.error())?;
            for cabin in panel.cabins.items() {
                println!(
                    "{:>5}  {:<30} {:>8}/{:<8} {}",
                    cabin.id, cabin.title, cabin.price_weekdays, cabin.price_weekend, cabin.category
                );
            }
        }
        ["cabins", "delete", id] => {
            let id = parse_id(id)?;
            let mut panel = AdminPanel::new(&platform.services);
            require(panel.cabins.refresh().await, panel.cabins.error())?;
            require(panel.cabins.delete(id, prompt).await, panel.cabins.error())?;
        }
        ["bookings", "list"] => {
            let mut panel = AdminPanel::new(&platform.services);
            require(panel.bookings.refresh().await, panel.bookings.error())?;
            for booking in panel.bookings.bookings() {
                println!(
                    "{:>5}  {:<10} {} {} — {}  {} {}",
                    booking.id,
                    booking.status,
                    booking.object_type,
                    booking.start_date.format("%Y-%m-%d"),
                    booking.end_date.format("%Y-%m-%d"),
                    booking.last_name,
                    booking.first_name,
                );
            }
        }
        ["bookings", "status", id, status] => {
            let id = parse_id(id)?;
            let status = BookingStatus::from_str(status)
                .map_err(|_| anyhow::anyhow!("unknown status: {}", status))?;
            let mut panel = AdminPanel::new(&platform.services);
            require(panel.bookings.refresh().await, panel.bookings.error())?;
            if !panel.bookings.set_status(id, status).await {
                bail!("status update failed");
            }
        }
        ["bookings", "delete", id] => {
            let id = parse_id(id)?;
            let mut panel = AdminPanel::new(&platform.services);
            require(panel.bookings.refresh().await, panel.bookings.error())?;
            require(panel.bookings.delete(id, prompt).await, panel.bookings.error())?;
        }
        ["media", "upload", path, ..] => {
            let folder = words.get(3).copied();
            let bytes = std::fs::read(path).with_context(|| format!("cannot read {}", path))?;
            let filename = std::path::Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .context("invalid file name")?;
            let content_type = guess_content_type(filename);

            let ticket = platform
                .services
                .media
                .upload(filename, content_type, folder, bytes)
                .await?;
            println!("{}", ticket.public_url);
        }
        ["media", "delete", key] => {
            platform.services.media.delete(key).await?;
            println!("deleted {}", key);
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

const USAGE: &str = "\
otd-admin — OTD back-office console

USAGE:
    otd-admin login <email> <password>
    otd-admin me
    otd-admin users  list | delete <id>
    otd-admin rooms  list | public | delete <id>
    otd-admin cabins list | delete <id>
    otd-admin bookings list | status <id> <pending|confirmed|cancelled> | delete <id>
    otd-admin media  upload <path> [folder] | delete <key>

Set OTD_TOKEN to the token printed by `login` for authenticated commands.";

fn parse_id(raw: &str) -> anyhow::Result<i64> {
    raw.parse().with_context(|| format!("invalid id: {}", raw))
}

fn require(ok: bool, error: Option<&'static str>) -> anyhow::Result<()> {
    if ok {
        Ok(())
    } else {
        bail!("{}", error.unwrap_or("operation failed"));
    }
}

/// Blocking yes/no console prompt used as the delete confirmation hook
fn prompt(question: &str) -> bool {
    print!("{} [y/N] ", question);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes" | "да")
}

fn guess_content_type(filename: &str) -> &'static str {
    match filename.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
