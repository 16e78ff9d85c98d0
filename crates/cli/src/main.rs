//! Velvetine CLI - Admin console for the Velvetine storefront.
//!
//! # Usage
//!
//! ```bash
//! # Log in (token is stored in the session file)
//! velvetine auth login -e admin@velvetine.shop
//!
//! # List orders, page by page
//! velvetine orders list --page 2
//!
//! # Move an order along
//! velvetine orders set-status 66a1b2c3 shipped
//!
//! # Manage testimonials
//! velvetine testimonials list
//! velvetine testimonials delete 66a1b2c3
//!
//! # Edit the landing page hero
//! velvetine hero show
//! velvetine hero set --price 49.99 --rating 4.8
//! ```
//!
//! # Commands
//!
//! - `auth` - Log in, log out, check connectivity
//! - `orders` - List orders, view details, change status
//! - `products` - Product catalogue CRUD
//! - `testimonials` - Testimonial CRUD
//! - `hero` - Landing page hero section

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use velvetine_core::{OrderStatus, ProductTag};

mod commands;

#[derive(Parser)]
#[command(name = "velvetine")]
#[command(author, version, about = "Velvetine storefront admin console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authentication and connectivity
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Order management
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Product catalogue
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Customer testimonials
    Testimonials {
        #[command(subcommand)]
        action: TestimonialAction,
    },
    /// Landing page hero section
    Hero {
        #[command(subcommand)]
        action: HeroAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Log in as an admin; prompts for the password
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,
    },
    /// Drop the stored session token
    Logout,
    /// Check that the API is reachable
    Health,
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders, newest first
    List {
        /// Page number (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show one order with its line items
    Show {
        /// Order id
        id: String,
    },
    /// Change an order's status
    SetStatus {
        /// Order id
        id: String,
        /// New status (`order_placed`, `confirmed`, `shipped`,
        /// `out_for_delivery`, `delivered`, `cancelled`)
        status: OrderStatus,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Page number (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by tag (e.g. "BEST SELLER")
        #[arg(short, long)]
        tag: Option<ProductTag>,
    },
    /// Create a product
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Price, e.g. "49.99"
        #[arg(short, long)]
        price: String,
        /// Original (pre-discount) price
        #[arg(long)]
        original_price: Option<String>,
        /// Category
        #[arg(short, long)]
        category: Option<String>,
        /// Tags (repeatable)
        #[arg(short, long)]
        tag: Vec<ProductTag>,
    },
    /// Delete a product
    Delete {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum TestimonialAction {
    /// List testimonials
    List {
        /// Page number (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Create a testimonial
    Add {
        /// Customer name
        #[arg(short, long)]
        name: String,
        /// Testimonial text
        #[arg(short, long)]
        message: String,
        /// Star rating 1-5
        #[arg(short, long, default_value_t = 5)]
        review: u8,
        /// Customer location
        #[arg(short, long, default_value = "")]
        address: String,
        /// Image: a URL, or a local file path to upload
        #[arg(short, long)]
        image: Option<String>,
    },
    /// Delete a testimonial
    Delete {
        /// Testimonial id
        id: String,
    },
}

#[derive(Subcommand)]
enum HeroAction {
    /// Show the current hero section
    Show,
    /// Update hero fields; only the flags given change
    Set {
        /// Hero image: a URL, or a local file path to upload
        #[arg(long)]
        image: Option<String>,
        /// Displayed price
        #[arg(long)]
        price: Option<String>,
        /// Displayed rating
        #[arg(long)]
        rating: Option<f64>,
        /// Displayed review count
        #[arg(long)]
        review_count: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; VELVETINE_LOG controls verbosity.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("VELVETINE_LOG")
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Login { email } => commands::auth::login(&email).await?,
            AuthAction::Logout => commands::auth::logout()?,
            AuthAction::Health => commands::auth::health().await?,
        },
        Commands::Orders { action } => match action {
            OrderAction::List { page } => commands::orders::list(page).await?,
            OrderAction::Show { id } => commands::orders::show(&id).await?,
            OrderAction::SetStatus { id, status } => {
                commands::orders::set_status(&id, status).await?;
            }
        },
        Commands::Products { action } => match action {
            ProductAction::List {
                page,
                category,
                tag,
            } => {
                commands::products::list(page, category.as_deref(), tag).await?;
            }
            ProductAction::Add {
                name,
                description,
                price,
                original_price,
                category,
                tag,
            } => {
                commands::products::add(commands::products::AddArgs {
                    name,
                    description,
                    price,
                    original_price,
                    category,
                    tags: tag,
                })
                .await?;
            }
            ProductAction::Delete { id } => commands::products::delete(&id).await?,
        },
        Commands::Testimonials { action } => match action {
            TestimonialAction::List { page } => commands::testimonials::list(page).await?,
            TestimonialAction::Add {
                name,
                message,
                review,
                address,
                image,
            } => {
                commands::testimonials::add(&name, &message, review, &address, image.as_deref())
                    .await?;
            }
            TestimonialAction::Delete { id } => commands::testimonials::delete(&id).await?,
        },
        Commands::Hero { action } => match action {
            HeroAction::Show => commands::hero::show().await?,
            HeroAction::Set {
                image,
                price,
                rating,
                review_count,
            } => {
                commands::hero::set(commands::hero::SetArgs {
                    image,
                    price,
                    rating,
                    review_count,
                })
                .await?;
            }
        },
    }
    Ok(())
}
