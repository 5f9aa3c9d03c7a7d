use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use protlog::api::{CmdMessage, ConfigAction, MessageLevel, ProtlogApi, ProtlogPaths};
use protlog::config::ProtlogConfig;
use protlog::error::Result;
use protlog::fetch::UniProtClient;
use protlog::model::Record;
use protlog::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthChar;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ProtlogApi<FileStore, UniProtClient>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Fetch { id } => handle_fetch(&ctx, id),
        Commands::Add {
            sequence,
            from_uniprot,
            ph,
            temperature,
            solvent,
        } => handle_add(&mut ctx, sequence, from_uniprot, ph, temperature, solvent),
        Commands::List => handle_list(&mut ctx),
        Commands::Export => handle_export(&mut ctx),
        Commands::Share => handle_share(&ctx),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    // Data dir resolution: flag > PROTLOG_DATA_DIR (primarily for tests) >
    // OS-appropriate data directory.
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => std::env::var("PROTLOG_DATA_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let proj_dirs = ProjectDirs::from("org", "protlog", "protlog")
                    .expect("Could not determine data dir");
                proj_dirs.data_dir().to_path_buf()
            }),
    };

    let config = ProtlogConfig::load(&data_dir).unwrap_or_default();
    let paths = ProtlogPaths::new(data_dir);
    let store = FileStore::new(paths.data_file());
    let source = UniProtClient::with_base_url(&config.fetch_base_url);

    Ok(AppContext {
        api: ProtlogApi::new(store, source, paths),
    })
}

fn handle_fetch(ctx: &AppContext, id: String) -> Result<()> {
    let result = ctx.api.fetch_sequence(&id)?;
    if let Some(sequence) = &result.sequence {
        println!("{}", sequence);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    sequence: String,
    from_uniprot: Option<String>,
    ph: String,
    temperature: String,
    solvent: String,
) -> Result<()> {
    let sequence = match from_uniprot {
        Some(id) => {
            let fetched = ctx.api.fetch_sequence(&id)?;
            print_messages(&fetched.messages);
            fetched.sequence.unwrap_or_default()
        }
        None => sequence,
    };

    let record = Record::new(sequence, ph, temperature, solvent);
    let result = ctx.api.add_record(record)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_records()?;
    print_records(&result.records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.export_records()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_share(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.share_export()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("fetch-url = {}", config.fetch_base_url);
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

const SEQ_WIDTH: usize = 60;

fn print_records(records: &[Record]) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let idx = format!("{}.", i + 1);
        if record.sequence.is_empty() {
            println!("{} {}", idx.yellow(), "(no sequence)".dimmed());
        } else {
            let shown = truncate_to_width(&record.sequence, SEQ_WIDTH);
            println!(
                "{} {} {}",
                idx.yellow(),
                shown.bold(),
                format!("({} aa)", record.sequence.len()).dimmed()
            );
        }
        println!(
            "   pH: {}   temperature: {} °C   solvent: {}",
            display_field(&record.ph),
            display_field(&record.temperature),
            display_field(&record.solvent)
        );
    }
}

fn display_field(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
