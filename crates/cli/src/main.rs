//! Store CLI - Drive the cart client against a live store server.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of product 42 to the cart
//! store-cli cart add --product 42
//!
//! # Remove the line from the cart listing page (triggers a reload)
//! store-cli cart delete --product 42 --page /store/cart/
//!
//! # Empty the cart
//! store-cli cart clear
//!
//! # Submit the checkout form
//! store-cli checkout --name "Ada" --email ada@example.com --total 42.50 \
//!     --address "1 Main St" --city Springfield --state IL --zipcode 62701 --country US
//! ```
//!
//! # Environment Variables
//!
//! - `STORE_BASE_URL` and the other `STORE_*` client settings (see `store_client::config`)
//! - `STORE_USER` - Logged-in user name (`AnonymousUser` or unset means anonymous)
//! - `STORE_COOKIES` - Session cookie string, must include `csrftoken`
//! - `SENTRY_DSN` - Sentry error tracking DSN (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "store-cli")]
#[command(author, version, about = "Storefront cart client tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a cart action (add, remove, delete, clear)
    Cart {
        /// Cart action as rendered on the control's `data-action`
        action: String,

        /// Product id as rendered on the control's `data-product`
        #[arg(short, long)]
        product: Option<String>,

        /// Path of the page the control lives on
        #[arg(long, default_value = "/store/")]
        page: String,
    },
    /// Submit the checkout form
    Checkout {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Customer email address
        #[arg(long)]
        email: String,

        /// Cart total shown on the checkout page
        #[arg(long)]
        total: String,

        /// Shipping street address
        #[arg(long)]
        address: String,

        /// Shipping city
        #[arg(long)]
        city: String,

        /// Shipping state or region
        #[arg(long)]
        state: String,

        /// Shipping postal code
        #[arg(long)]
        zipcode: String,

        /// Shipping country
        #[arg(long)]
        country: String,

        /// Path of the checkout page
        #[arg(long, default_value = "/store/checkout/")]
        page: String,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry() -> Option<sentry::ClientInitGuard> {
    let dsn = std::env::var("SENTRY_DSN").ok()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load .env before reading SENTRY_DSN
    let _ = dotenvy::dotenv();

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "store_client=info,store_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Cart {
            action,
            product,
            page,
        } => commands::cart::run(&action, product, &page).await,
        Commands::Checkout {
            name,
            email,
            total,
            address,
            city,
            state,
            zipcode,
            country,
            page,
        } => {
            let form = commands::checkout::CheckoutArgs {
                name,
                email,
                total,
                address,
                city,
                state,
                zipcode,
                country,
            };
            commands::checkout::run(form, &page).await
        }
    }
}
