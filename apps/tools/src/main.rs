use anyhow::{anyhow, Context, Result};
use catalog::{
    gallery::{self, GallerySelection},
    Catalog,
};
use clap::{Parser, Subcommand};
use shared::{
    domain::{ArtworkId, FrameId, NudgeDirection, RoomId},
    pages::Page,
    protocol::GalleryQuery,
};
use storefront::{CheckoutFlow, Visualizer};

/// Operator utilities for the storefront catalog.
#[derive(Parser, Debug)]
struct Cli {
    /// Print JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every artwork in catalog order.
    Catalog,
    /// Run a gallery query the way `/gallery` does.
    Gallery {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        medium: Option<String>,
        #[arg(long)]
        min_price: Option<u64>,
        #[arg(long)]
        max_price: Option<u64>,
        #[arg(long)]
        availability: Option<String>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        collection: Option<i64>,
    },
    /// Price a cart of artwork ids.
    Quote {
        #[arg(required = true)]
        artwork_ids: Vec<i64>,
        #[arg(long)]
        promo: Option<String>,
    },
    /// Compute the overlay for an artwork on a room template.
    Layout {
        #[arg(long, default_value_t = 1)]
        room: i64,
        #[arg(long, default_value = "none")]
        frame: String,
        #[arg(long, default_value_t = 100)]
        size: u32,
        /// Repeatable: up, down, left or right.
        #[arg(long)]
        nudge: Vec<String>,
    },
    /// Show which page serves a request path.
    Resolve { path: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::seeded();

    match cli.command {
        Command::Catalog => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(catalog.artworks())?);
            } else {
                for artwork in catalog.artworks() {
                    println!(
                        "{:>2}  {:<26} {:<10} {:<18} ${:>5}  {}",
                        artwork.id.0,
                        artwork.title,
                        artwork.category.label(),
                        artwork.medium.label(),
                        artwork.price,
                        if artwork.available { "available" } else { "sold" }
                    );
                }
            }
        }
        Command::Gallery {
            category,
            medium,
            min_price,
            max_price,
            availability,
            sort,
            collection,
        } => {
            let query = GalleryQuery {
                category,
                medium,
                min_price,
                max_price,
                availability,
                sort,
                collection,
            };
            let selection = GallerySelection::from_query(&catalog, &query)?;
            let view = gallery::browse(&catalog, &selection);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{} of {} artworks", view.items.len(), catalog.artworks().len());
                for item in &view.items {
                    println!("{:>2}  {:<26} ${:>5}", item.id.0, item.title, item.price);
                }
            }
        }
        Command::Quote { artwork_ids, promo } => {
            let mut flow = CheckoutFlow::new();
            for raw in artwork_ids {
                let id = ArtworkId(raw);
                let artwork = catalog
                    .artwork(id)
                    .ok_or_else(|| anyhow!("artwork {id} not found"))?;
                flow.add(artwork)?;
            }
            if let Some(code) = promo {
                flow.apply_promo(&code)?;
            }
            let totals = flow.totals();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&totals)?);
            } else {
                println!("subtotal  ${}", totals.subtotal);
                println!("discount -${}", totals.discount);
                println!("shipping  ${}", totals.shipping);
                println!("tax       ${}", totals.tax);
                println!("total     ${}", totals.total);
            }
        }
        Command::Layout {
            room,
            frame,
            size,
            nudge,
        } => {
            let mut visualizer = Visualizer::new(&catalog)?;
            visualizer.select_room(&catalog, RoomId(room))?;
            let frame: FrameId = frame.parse()?;
            visualizer.select_frame(&catalog, frame)?;
            visualizer.set_size(size)?;
            for raw in nudge {
                let direction: NudgeDirection = raw
                    .parse()
                    .with_context(|| format!("invalid nudge '{raw}'"))?;
                visualizer.nudge(direction);
            }
            let layout = visualizer.layout();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                println!("{}", layout.css);
            }
        }
        Command::Resolve { path } => match Page::resolve(&path) {
            Some(page) => println!("{path} -> {} ({})", page.title(), page.route()),
            None => println!("{path} -> no page"),
        },
    }

    Ok(())
}
