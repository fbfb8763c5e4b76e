use paydesk::commands::Cli;
use paydesk::libs::messages::macros::is_debug_mode;
use paydesk::msg_error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("paydesk=debug")))
        .with(fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    if let Err(e) = Cli::menu().await {
        msg_error!(format!("{:#}", e));
        std::process::exit(1);
    }
}
