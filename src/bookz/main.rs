use bookz::api::CatalogApi;
use bookz::commands::{CmdMessage, MessageLevel};
use bookz::config::CatalogConfig;
use bookz::error::Result;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead};

mod args;
use args::Cli;

const EXIT_KEYWORD: &str = "EXIT";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = CatalogApi::new(load_config());

    if let Some(file) = &cli.file {
        dispatch(&mut api, &format!("ADD {}", file.display()));
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.split_whitespace().next() == Some(EXIT_KEYWORD) {
            break;
        }
        dispatch(&mut api, trimmed);
    }

    Ok(())
}

fn load_config() -> CatalogConfig {
    let Some(proj_dirs) = ProjectDirs::from("com", "bookz", "bookz") else {
        return CatalogConfig::default();
    };
    CatalogConfig::load(proj_dirs.config_dir()).unwrap_or_default()
}

/// Run one line; any failure is a single diagnostic line on stderr.
fn dispatch(api: &mut CatalogApi, line: &str) {
    match api.run_line(line) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
