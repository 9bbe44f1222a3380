use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelf::api::{CmdMessage, ConfigAction, DisplayItem, ItemDraft, ItemUpdate, MessageLevel, ShelfApi};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::store::fs::FileStore;
use std::path::{Path, PathBuf};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ShelfApi<FileStore>,
    config: ShelfConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            category,
            quantity,
            price,
        }) => handle_add(&mut ctx, name, category, quantity, price),
        Some(Commands::List { search, category }) => handle_list(&ctx, search, category),
        Some(Commands::Edit {
            index,
            name,
            category,
            quantity,
            price,
        }) => handle_edit(&mut ctx, index, name, category, quantity, price),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Export {
            output,
            watch,
            interval,
        }) => handle_export(&ctx, output, watch, interval),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = ShelfConfig::load(&data_dir).unwrap_or_default();
    let api = open_api(&data_dir)?;

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("SHELF_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "shelf", "shelf")
        .ok_or_else(|| ShelfError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn open_api(data_dir: &Path) -> Result<ShelfApi<FileStore>> {
    let store = FileStore::new(data_dir.to_path_buf());
    ShelfApi::open(store, data_dir.to_path_buf())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    category: String,
    quantity: i64,
    price: f64,
) -> Result<()> {
    let draft = ItemDraft::new(name, category, quantity, price);
    let result = ctx.api.add_item(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>, category: Option<String>) -> Result<()> {
    let query = search.unwrap_or_default();
    let result = ctx.api.list_items(&query, category.as_deref())?;
    print_items(&result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: usize,
    name: Option<String>,
    category: Option<String>,
    quantity: Option<i64>,
    price: Option<f64>,
) -> Result<()> {
    if name.is_none() && category.is_none() && quantity.is_none() && price.is_none() {
        return Err(ShelfError::Api(
            "Nothing to change: pass at least one of --name, --category, --quantity, --price"
                .into(),
        ));
    }

    // Merge the flags over the item's current fields.
    let current = ctx.api.item_at(index)?;
    let draft = ItemDraft::new(
        name.unwrap_or(current.name),
        category.unwrap_or(current.category),
        quantity.unwrap_or(current.quantity),
        price.unwrap_or(current.price),
    );

    let result = ctx.api.update_items(&[ItemUpdate::new(index, draft)])?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<usize>) -> Result<()> {
    let result = ctx.api.delete_items(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    output: Option<PathBuf>,
    watch: bool,
    interval: Option<u64>,
) -> Result<()> {
    let path = output.unwrap_or_else(|| PathBuf::from(&ctx.config.export_file));

    let result = ctx.api.export(&path)?;
    print_messages(&result.messages);

    if !watch {
        return Ok(());
    }

    let every = Duration::from_secs(interval.unwrap_or(ctx.config.autosave_interval_secs));
    println!(
        "{}",
        format!("Rewriting {} every {}s (Ctrl-C to stop)", path.display(), every.as_secs())
            .dimmed()
    );
    loop {
        std::thread::sleep(every);
        // Re-open each tick to pick up mutations made by other shelf
        // processes since the last rewrite.
        let api = open_api(&ctx.data_dir)?;
        let result = api.export(&path)?;
        print_messages(&result.messages);
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("export-file"), None) => ConfigAction::ShowKey("export-file".to_string()),
        (Some("export-file"), Some(v)) => ConfigAction::SetExportFile(v),
        (Some("autosave-interval"), None) => {
            ConfigAction::ShowKey("autosave-interval".to_string())
        }
        (Some("autosave-interval"), Some(v)) => {
            let secs = v
                .parse()
                .map_err(|_| ShelfError::Api(format!("Invalid interval: {}", v)))?;
            ConfigAction::SetAutosaveInterval(secs)
        }
        (Some(other), _) => {
            return Err(ShelfError::Api(format!("Unknown config key: {}", other)));
        }
    };

    let shown_key = match &action {
        ConfigAction::ShowKey(k) => Some(k.clone()),
        _ => None,
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        match shown_key.as_deref() {
            Some("export-file") => println!("export-file = {}", config.export_file),
            Some("autosave-interval") => {
                println!("autosave-interval = {}", config.autosave_interval_secs)
            }
            _ => {
                println!("export-file = {}", config.export_file);
                println!("autosave-interval = {}", config.autosave_interval_secs);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const COL_GAP: usize = 2;

fn print_items(items: &[DisplayItem]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    let name_w = column_width("Name", items.iter().map(|di| di.item.name.as_str()));
    let cat_w = column_width("Category", items.iter().map(|di| di.item.category.as_str()));

    let qty: Vec<String> = items.iter().map(|di| di.item.quantity.to_string()).collect();
    let price: Vec<String> = items
        .iter()
        .map(|di| format!("{:.2}", di.item.price))
        .collect();
    let qty_w = column_width("Qty", qty.iter().map(|s| s.as_str()));
    let price_w = column_width("Price", price.iter().map(|s| s.as_str()));

    println!(
        "{}",
        format!(
            "     {}{}{:>qw$}{}{:>pw$}",
            pad_to("Name", name_w + COL_GAP),
            pad_to("Category", cat_w + COL_GAP),
            "Qty",
            " ".repeat(COL_GAP),
            "Price",
            qw = qty_w,
            pw = price_w,
        )
        .dimmed()
    );

    for (di, (q, p)) in items.iter().zip(qty.iter().zip(price.iter())) {
        println!(
            "{:>3}. {}{}{:>qw$}{}{:>pw$}",
            di.index,
            pad_to(&di.item.name, name_w + COL_GAP),
            pad_to(&di.item.category, cat_w + COL_GAP),
            q,
            " ".repeat(COL_GAP),
            p,
            qw = qty_w,
            pw = price_w,
        );
    }
}

fn column_width<'a, I: Iterator<Item = &'a str>>(header: &str, values: I) -> usize {
    values
        .map(|v| v.width())
        .max()
        .unwrap_or(0)
        .max(header.width())
}

// Pad by display width, not char count, so wide glyphs keep columns aligned.
fn pad_to(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
