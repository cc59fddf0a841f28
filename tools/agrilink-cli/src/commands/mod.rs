//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;
pub mod dashboard;
pub mod farmers;
pub mod register;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Search product names, descriptions and farmers.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category (vegetables, fruits, grains, herbs, dairy, legumes).
    #[arg(long)]
    pub category: Option<String>,

    /// Quality grade (premium, standard, organic).
    #[arg(long)]
    pub quality: Option<String>,

    /// Location substring.
    #[arg(short, long)]
    pub location: Option<String>,

    /// Lowest price per unit.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest price per unit.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Availability (in-stock, out-of-stock, seasonal).
    #[arg(long)]
    pub availability: Option<String>,

    /// Only organic produce.
    #[arg(long)]
    pub organic: bool,

    /// Only produce from verified farmers.
    #[arg(long)]
    pub verified: bool,

    /// Sort key (featured, price-low, price-high, rating, newest, name).
    #[arg(long, default_value = "featured")]
    pub sort: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Start from the sample cart.
    #[arg(long)]
    pub seeded: bool,

    /// Add one unit of a product (repeatable).
    #[arg(short, long = "add", value_name = "PRODUCT_ID")]
    pub add: Vec<String>,

    /// Set a quantity, as PRODUCT_ID=QTY (repeatable).
    #[arg(short = 'q', long = "qty", value_name = "PRODUCT_ID=QTY")]
    pub quantities: Vec<String>,

    /// Remove a product (repeatable).
    #[arg(short, long = "remove", value_name = "PRODUCT_ID")]
    pub remove: Vec<String>,

    /// Promo code to apply.
    #[arg(short, long)]
    pub promo: Option<String>,
}

/// Arguments for the farmers command.
#[derive(Args)]
pub struct FarmersArgs {
    #[command(subcommand)]
    pub command: FarmersCommand,
}

#[derive(Subcommand)]
pub enum FarmersCommand {
    /// List all farmers.
    List {
        /// Only verified farmers.
        #[arg(long)]
        verified: bool,
    },
    /// Show a farmer profile (the first farmer when no id is given).
    Show {
        /// Farmer id.
        id: Option<String>,
    },
}

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    #[command(subcommand)]
    pub command: RegisterCommand,

    /// Fail instead of prompting for missing fields.
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Accept the terms and conditions.
    #[arg(long, global = true)]
    pub accept_terms: bool,
}

/// Fields both registration forms share.
#[derive(Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Password. Prompted for when missing.
    #[arg(long)]
    pub password: Option<String>,

    /// Password confirmation. Defaults to the password when given as a flag.
    #[arg(long)]
    pub confirm_password: Option<String>,
}

#[derive(Subcommand)]
pub enum RegisterCommand {
    /// Register as a buyer.
    Buyer {
        #[command(flatten)]
        contact: ContactArgs,

        #[arg(long)]
        company: Option<String>,

        /// Business type (restaurant, retailer, distributor, ...).
        #[arg(long)]
        business_type: Option<String>,
    },
    /// Register as a farmer.
    Farmer {
        #[command(flatten)]
        contact: ContactArgs,

        #[arg(long)]
        farm_name: Option<String>,

        #[arg(long)]
        primary_crops: Option<String>,

        #[arg(long)]
        farm_size: Option<String>,

        #[arg(long)]
        farming_method: Option<String>,

        /// Years of farming experience.
        #[arg(long)]
        experience: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
}

/// Arguments for the dashboard command.
#[derive(Args)]
pub struct DashboardArgs {
    #[command(subcommand)]
    pub command: DashboardCommand,
}

#[derive(Subcommand)]
pub enum DashboardCommand {
    /// Farmer overview and product listings.
    Farmer {
        /// Farmer id.
        id: String,
    },
    /// Validate a new product listing for a farmer.
    AddListing {
        /// Farmer id.
        farmer: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        category: String,

        /// Price per kg.
        #[arg(long)]
        price: String,

        #[arg(long)]
        quantity: String,

        #[arg(long, default_value = "")]
        description: String,
    },
    /// Buyer overview for a cart and favorites.
    Buyer {
        /// Start from the sample cart.
        #[arg(long)]
        seeded: bool,

        /// Favorite product ids (repeatable; repeating an id toggles it off).
        #[arg(short, long = "favorite", value_name = "PRODUCT_ID")]
        favorites: Vec<String>,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
