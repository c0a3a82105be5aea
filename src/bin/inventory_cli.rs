use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use inventory_api::client::{HttpInventoryClient, InventoryApi};
use inventory_api::view::export::{export_to_file, DEFAULT_EXPORT_FILE};
use inventory_api::view::render::{format_money, render_analytics, render_table};
use inventory_api::view::{InventoryView, NotificationKind};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "inventory_cli", about = "Manage the inventory from the terminal")]
struct Cli {
    /// Base URL of the inventory service.
    #[arg(long, env = "INVENTORY_API_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List items, optionally filtered by name or description.
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a single item.
    Show { id: Uuid },
    /// Add a new item.
    Add(ItemFields),
    /// Change some fields of an item.
    Update {
        id: Uuid,
        #[command(flatten)]
        fields: ItemFields,
    },
    /// Delete an item.
    Delete { id: Uuid },
    /// Print the table together with total value and top items.
    Report {
        #[arg(long)]
        search: Option<String>,
    },
    /// Write the listed items to a spreadsheet file.
    Export {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, short, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
}

#[derive(Debug, Args)]
struct ItemFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    quantity: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    price: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();
    let client = HttpInventoryClient::new(cli.base_url);

    let mut view = InventoryView::new(client);
    let result = run(&mut view, cli.command).await;

    let mut failed = false;
    for notification in view.take_notifications() {
        match notification.kind {
            NotificationKind::Success => println!("{}", notification.message),
            NotificationKind::Error => {
                failed = true;
                eprintln!("error: {}", notification.message);
            }
        }
    }

    result?;
    if failed {
        bail!("one or more actions failed");
    }

    Ok(())
}

async fn run(view: &mut InventoryView<HttpInventoryClient>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { search } => {
            if view.set_search(search.unwrap_or_default()).await {
                print!("{}", render_table(view.items()));
            }
        }
        Command::Show { id } => {
            let item = view
                .api()
                .get(id)
                .await
                .with_context(|| format!("Could not load item {}", id))?;
            println!("id:          {}", item.id);
            println!("name:        {}", item.name);
            println!("description: {}", item.description);
            println!("quantity:    {}", item.quantity);
            println!("price:       {}", format_money(item.price));
            println!("created:     {}", item.created_at.to_rfc3339());
        }
        Command::Add(fields) => {
            let draft = view.new_item_mut();
            draft.name = fields.name;
            draft.description = fields.description;
            draft.quantity = fields.quantity;
            draft.price = fields.price;

            if let Some(item) = view.create().await {
                println!("{}", item.id);
            }
        }
        Command::Update { id, fields } => {
            let item = view
                .api()
                .get(id)
                .await
                .with_context(|| format!("Could not load item {}", id))?;
            view.begin_edit(item);

            if let Some(draft) = view.editing_mut() {
                if let Some(name) = fields.name {
                    draft.name = name;
                }
                if let Some(description) = fields.description {
                    draft.description = description;
                }
                if let Some(quantity) = fields.quantity {
                    draft.quantity = quantity;
                }
                if let Some(price) = fields.price {
                    draft.price = price;
                }
            }

            view.save_edit().await;
        }
        Command::Delete { id } => {
            view.delete(id).await;
        }
        Command::Report { search } => {
            if view.set_search(search.unwrap_or_default()).await {
                print!("{}", render_table(view.items()));
                println!();
                print!("{}", render_analytics(view.total_value(), &view.top_items()));
            }
        }
        Command::Export { search, output } => {
            if view.set_search(search.unwrap_or_default()).await {
                export_to_file(view.items(), &output)
                    .with_context(|| format!("Could not write {}", output.display()))?;
                println!("Exported {} item(s) to {}", view.items().len(), output.display());
            }
        }
    }

    Ok(())
}
