pub mod context;
pub mod contact_commands;

use std::path::Path;

use crate::store::{ContactStore, LoadOutcome};
use context::CLIContext;

/// Load the store at `path` and run the interactive menu on stdin.
pub fn run(path: &Path) {
    let store = open_store(path);
    let mut ctx = CLIContext::new(store);
    menu_loop(&mut ctx);
}

/// Load the contact file, reporting what happened. Never fails: an
/// unreadable file leaves an empty store.
pub fn open_store(path: &Path) -> ContactStore {
    let mut store = ContactStore::new(path);
    match store.load() {
        Ok(LoadOutcome::Loaded(count)) => {
            println!("Loaded {} contacts from {}", count, path.display());
        }
        Ok(LoadOutcome::Missing) => {
            println!("No existing contact file found. Starting with empty contact list.");
        }
        Err(e) => {
            println!("Error loading contacts: {}", e);
            println!("Starting with empty contact list.");
        }
    }
    store
}

pub fn menu_loop(ctx: &mut CLIContext) {
    loop {
        print_menu();

        let input = match ctx.prompt("Enter your choice (1-6): ") {
            Some(s) => s,
            None => {
                println!();
                break;
            }
        };

        match input.as_str() {
            "1" => contact_commands::add(ctx),
            "2" => contact_commands::view(ctx),
            "3" => contact_commands::search(ctx),
            "4" => contact_commands::edit(ctx),
            "5" => contact_commands::delete(ctx),
            "6" => {
                println!("\nThank you for using Contact Manager!");
                break;
            }
            _ => println!("Invalid choice. Please enter 1-6."),
        }
    }
}

fn print_menu() {
    println!("\n{}", "=".repeat(50));
    println!("           CONTACT MANAGER");
    println!("{}", "=".repeat(50));
    println!("1. Add Contact");
    println!("2. View All Contacts");
    println!("3. Search Contacts");
    println!("4. Edit Contact");
    println!("5. Delete Contact");
    println!("6. Exit");
    println!("{}", "-".repeat(50));
}

