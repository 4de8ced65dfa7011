//! Planta CLI - a command-line storefront over the backend REST API.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! planta products list
//!
//! # Put two of product 3 in the cart
//! planta cart add 3 --quantity 2
//!
//! # Check out selected lines
//! planta checkout --select 3 --name "Lan" --address "12 Hang Gai" \
//!     --phone 0900000000 --shipping standard --payment visa
//!
//! # Review order history
//! planta orders list
//! ```
//!
//! # Environment Variables
//!
//! - `PLANTA_API_BASE_URL` - Backend REST API base URL (required)
//! - `PLANTA_SESSION_USER` - Session user id (default: 1)

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand, ValueEnum};

use planta_client::{AppState, ShopConfig};

mod commands;

#[derive(Parser)]
#[command(name = "planta")]
#[command(author, version, about = "Planta storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage the product catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Inspect and mutate the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Check out selected cart lines
    Checkout {
        /// Cart line ids to purchase (repeatable)
        #[arg(long = "select", required = true)]
        select: Vec<String>,

        /// Recipient name
        #[arg(long)]
        name: String,

        /// Contact email (optional)
        #[arg(long, default_value = "")]
        email: String,

        /// Delivery address
        #[arg(long)]
        address: String,

        /// Contact phone
        #[arg(long)]
        phone: String,

        /// Shipping option
        #[arg(long, value_enum, default_value_t = ShippingChoice::Standard)]
        shipping: ShippingChoice,

        /// Payment method label
        #[arg(long, default_value = "visa")]
        payment: String,
    },
    /// Review order history
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Manage the session user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Register a new account
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Phone number
        #[arg(long)]
        phone: String,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List the catalog
    List,
    /// Add a product to the catalog
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: rust_decimal::Decimal,
        #[arg(long, default_value = "")]
        size: String,
        #[arg(long, default_value = "")]
        origin: String,
        #[arg(long, default_value = "")]
        stock: String,
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Update fields of an existing product
    Update {
        /// Product id
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<rust_decimal::Decimal>,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        origin: Option<String>,
        #[arg(long)]
        stock: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove a product by id
    Remove { id: String },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add a catalog product to the cart (merges by product id)
    Add {
        /// Product id
        id: String,
        /// Units to add
        #[arg(long, default_value_t = 1)]
        quantity: i64,
    },
    /// Bump a line's quantity up by one
    Increase { id: String },
    /// Bump a line's quantity down by one (floors at 1)
    Decrease { id: String },
    /// Remove a line
    Remove { id: String },
    /// Empty the whole cart
    Clear,
}

#[derive(Subcommand)]
enum OrderAction {
    /// List all orders, newest arrivals as the backend returns them
    List,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the session user's profile
    Show,
    /// Update profile fields and save
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
}

/// Shipping preset selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShippingChoice {
    Standard,
    Express,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::from_env()?;
    let mut state = AppState::new(&config);

    match cli.command {
        Commands::Products { action } => match action {
            ProductAction::List => commands::catalog::list(&mut state).await?,
            ProductAction::Add {
                name,
                price,
                size,
                origin,
                stock,
                image,
            } => {
                commands::catalog::add(&mut state, name, price, size, origin, stock, image)
                    .await?;
            }
            ProductAction::Update {
                id,
                name,
                price,
                size,
                origin,
                stock,
                image,
            } => {
                commands::catalog::update(&mut state, &id, name, price, size, origin, stock, image)
                    .await?;
            }
            ProductAction::Remove { id } => commands::catalog::remove(&mut state, &id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&mut state).await?,
            CartAction::Add { id, quantity } => {
                commands::cart::add(&mut state, &id, quantity).await?;
            }
            CartAction::Increase { id } => {
                commands::cart::step(&mut state, &id, planta_client::QuantityStep::Increase)
                    .await?;
            }
            CartAction::Decrease { id } => {
                commands::cart::step(&mut state, &id, planta_client::QuantityStep::Decrease)
                    .await?;
            }
            CartAction::Remove { id } => commands::cart::remove(&mut state, &id).await?,
            CartAction::Clear => commands::cart::clear(&mut state).await?,
        },
        Commands::Checkout {
            select,
            name,
            email,
            address,
            phone,
            shipping,
            payment,
        } => {
            let shipping = match shipping {
                ShippingChoice::Standard => planta_client::ShippingTable::default().standard,
                ShippingChoice::Express => planta_client::ShippingTable::default().express,
            };
            commands::checkout::run(
                &mut state, &select, name, email, address, phone, shipping, payment,
            )
            .await?;
        }
        Commands::Orders { action } => match action {
            OrderAction::List => commands::orders::list(&mut state).await?,
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::account::show(&mut state).await?,
            ProfileAction::Update {
                name,
                email,
                phone,
                address,
            } => {
                commands::account::update(&mut state, name, email, phone, address).await?;
            }
        },
        Commands::Register {
            name,
            email,
            password,
            phone,
        } => {
            commands::account::register(&state, name, email, password, phone).await?;
        }
    }
    Ok(())
}
