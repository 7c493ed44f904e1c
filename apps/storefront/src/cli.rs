//! # Command-Line Interface
//!
//! The `tapshop` binary: browse the catalog and stage a cart from a shell.
//!
//! ## Usage
//!
//! ```bash
//! # Category chips with counts
//! tapshop categories
//!
//! # Listing, filtered and sorted
//! tapshop list --category social --sort price-asc
//!
//! # Detail view, third gallery image selected
//! tapshop show nfc-pro-business-1 --image 2
//!
//! # Apply cart operations to a fresh session
//! tapshop stage add:nfc-pro-business-1:3 add:nfc-tiktok-card remove:nfc-pro-business-1
//!
//! # Validate a catalog file
//! tapshop --catalog ./catalog.toml check
//!
//! # Any command as JSON
//! tapshop --json list
//! ```

use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tapshop_core::{Badge, StarFill};
use thiserror::Error;

use crate::commands::cart::CartResponse;
use crate::commands::catalog::{ItemDetailDto, ItemListResponse, ItemSummaryDto};
use crate::commands::{cart, catalog};
use crate::error::{ApiError, StartupError};
use crate::Storefront;

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "tapshop")]
#[command(author, version, about = "Tapshop NFC card storefront")]
pub struct Cli {
    /// Config file (default: platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file, `.json` or `.toml` (overrides config)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List categories with item counts
    Categories,

    /// List items, optionally filtered and sorted
    List {
        /// Category id (omit for all)
        #[arg(short, long)]
        category: Option<String>,

        /// price-asc, price-desc, rating, popularity or catalog-order
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Show one item with gallery and related items
    Show {
        /// Item id
        id: String,

        /// Gallery image to select (0-based)
        #[arg(long)]
        image: Option<usize>,
    },

    /// Apply cart operations to a fresh session and print the cart
    Stage {
        /// add:ID[:QTY], remove:ID[:QTY] or clear
        #[arg(required = true)]
        ops: Vec<CartOp>,
    },

    /// Load and validate the catalog
    Check,
}

/// One `stage` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    /// Quantity is kept as raw text; it is clamped like the quantity field.
    Add {
        item_id: String,
        quantity: Option<String>,
    },
    Remove {
        item_id: String,
        amount: Option<u32>,
    },
    Clear,
}

impl FromStr for CartOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let verb = parts.next().unwrap_or_default();
        let item_id = parts.next().filter(|id| !id.is_empty());
        let amount = parts.next();

        match (verb, item_id) {
            ("clear", None) => Ok(CartOp::Clear),
            ("add", Some(id)) => Ok(CartOp::Add {
                item_id: id.to_string(),
                quantity: amount.map(str::to_string),
            }),
            ("remove", Some(id)) => {
                let amount = amount
                    .map(|a| {
                        a.parse::<u32>()
                            .map_err(|_| format!("invalid remove amount '{}' in '{}'", a, s))
                    })
                    .transpose()?;
                Ok(CartOp::Remove {
                    item_id: id.to_string(),
                    amount,
                })
            }
            _ => Err(format!(
                "invalid cart operation '{}' (expected add:ID[:QTY], remove:ID[:QTY] or clear)",
                s
            )),
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Why a CLI invocation failed.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Execution
// =============================================================================

/// Runs one command against a started storefront, writing to `out`.
pub fn execute(
    storefront: &Storefront,
    command: &Command,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Categories => {
            let options = catalog::category_options(&storefront.catalog);
            if json {
                print_json(out, &options)?;
            } else {
                let total: usize = options.iter().map(|o| o.count).sum();
                writeln!(out, "All Categories ({})", total)?;
                for option in &options {
                    writeln!(out, "  {:<14} {} ({})", option.id, option.label, option.count)?;
                }
            }
        }

        Command::List { category, sort } => {
            let response = catalog::list_items(
                &storefront.catalog,
                &storefront.config,
                category.as_deref(),
                sort.as_deref(),
            );
            if json {
                print_json(out, &response)?;
            } else {
                out.write_all(render_listing(&response).as_bytes())?;
            }
        }

        Command::Show { id, image } => {
            let detail =
                catalog::get_item(&storefront.catalog, &storefront.config, id, *image)?;
            if json {
                print_json(out, &detail)?;
            } else {
                out.write_all(render_detail(&detail).as_bytes())?;
            }
        }

        Command::Stage { ops } => {
            let response = stage(storefront, ops)?;
            if json {
                print_json(out, &response)?;
            } else {
                out.write_all(render_cart(&response).as_bytes())?;
            }
        }

        Command::Check => {
            let catalog = storefront.catalog.catalog();
            let in_stock = catalog.in_stock_items().len();
            if json {
                print_json(
                    out,
                    &serde_json::json!({
                        "categories": catalog.categories().len(),
                        "items": catalog.len(),
                        "inStock": in_stock,
                    }),
                )?;
            } else {
                writeln!(
                    out,
                    "Catalog OK: {} categories, {} items ({} in stock)",
                    catalog.categories().len(),
                    catalog.len(),
                    in_stock
                )?;
            }
        }
    }

    Ok(())
}

/// Applies `ops` in order to a new session, then closes it.
///
/// The first failing operation aborts the run.
fn stage(storefront: &Storefront, ops: &[CartOp]) -> Result<CartResponse, ApiError> {
    let session = cart::open_cart(&storefront.catalog, &storefront.carts)
        .session_id
        .to_string();

    for op in ops {
        let result = match op {
            CartOp::Add { item_id, quantity } => cart::add_to_cart(
                &storefront.catalog,
                &storefront.carts,
                &session,
                item_id,
                quantity.as_deref(),
            ),
            CartOp::Remove { item_id, amount } => cart::remove_from_cart(
                &storefront.catalog,
                &storefront.carts,
                &session,
                item_id,
                *amount,
            ),
            CartOp::Clear => cart::clear_cart(&storefront.catalog, &storefront.carts, &session),
        };

        if let Err(err) = result {
            // Drop the session so a failed run leaves nothing behind
            let _ = cart::close_cart(&storefront.catalog, &storefront.carts, &session);
            return Err(err);
        }
    }

    cart::close_cart(&storefront.catalog, &storefront.carts, &session)
}

fn print_json<T: serde::Serialize>(out: &mut dyn Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

// =============================================================================
// Text Rendering
// =============================================================================

fn stars(fills: &[StarFill; 5]) -> String {
    fills
        .iter()
        .map(|fill| match fill {
            StarFill::Full => '★',
            StarFill::Half => '⯪',
            StarFill::Empty => '☆',
        })
        .collect()
}

fn item_row(item: &ItemSummaryDto) -> String {
    let mut row = format!(
        "{:<26} {:>8}  {} {}  {}",
        item.id,
        item.price,
        stars(&item.stars),
        item.rating_text,
        item.name
    );
    if item.badge != Badge::None {
        let _ = write!(row, " [{}]", item.badge);
    }
    if !item.in_stock {
        row.push_str(" (out of stock)");
    }
    row
}

fn render_listing(response: &ItemListResponse) -> String {
    let mut text = format!("{} · {}\n", response.summary_text, response.sort.display_name());
    for item in &response.items {
        text.push_str("  ");
        text.push_str(&item_row(item));
        text.push('\n');
    }
    text
}

fn render_detail(detail: &ItemDetailDto) -> String {
    let item = &detail.item;
    let mut text = String::new();

    let _ = writeln!(text, "{}", item.name);
    let _ = writeln!(text, "{} · {}", detail.category.name, item.price);
    let _ = writeln!(
        text,
        "{} {} · {}",
        stars(&item.stars),
        item.rating_text,
        if item.in_stock { "In Stock" } else { "Out of Stock" }
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "{}", detail.full_desc);
    let _ = writeln!(text);

    let _ = writeln!(text, "Images:");
    for thumb in &detail.gallery.thumbnails {
        let marker = if thumb.selected { '>' } else { ' ' };
        let _ = writeln!(text, " {} {} {}", marker, thumb.index, thumb.image);
    }

    if !detail.related.is_empty() {
        let _ = writeln!(text);
        let _ = writeln!(text, "Related Products:");
        for related in &detail.related {
            let _ = writeln!(text, "  {}", item_row(related));
        }
    }

    text
}

fn render_cart(response: &CartResponse) -> String {
    if response.lines.is_empty() {
        return "Cart is empty\n".to_string();
    }

    let mut text = String::new();
    for line in &response.lines {
        let _ = writeln!(
            text,
            "  {:>3} x {:<44} {:>9}",
            line.quantity, line.name, line.line_total
        );
    }
    let _ = writeln!(
        text,
        "{} item(s), subtotal {}",
        response.total_count, response.subtotal
    );
    text
}

// =============================================================================
// Unit Tests
// =============================================================================
