use std::io::{self, BufRead, Write};

use crate::error::RolodexError;
use crate::model::Contact;
use crate::store::ContactStore;

pub struct CLIContext {
    pub store: ContactStore,
    input: Box<dyn BufRead>,
}

impl CLIContext {
    /// Context reading from standard input.
    pub fn new(store: ContactStore) -> Self {
        Self::with_input(store, Box::new(io::BufReader::new(io::stdin())))
    }

    pub fn with_input(store: ContactStore, input: Box<dyn BufRead>) -> Self {
        Self { store, input }
    }

    /// Prompt and read a line. Returns None on EOF.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&mut self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Ask for a 1-based position in a list of `count` entries.
    /// Prints a message and returns None on bad input.
    pub fn prompt_position(&mut self, action: &str, count: usize) -> Option<usize> {
        let input = self.prompt(&format!("\nEnter contact number to {} (1-{}): ", action, count))?;
        match input.parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                println!("Please enter a valid number.");
                None
            }
        }
    }

    /// Print contacts as a 1-based numbered list.
    pub fn print_numbered<'a>(contacts: impl IntoIterator<Item = &'a Contact>) {
        for (i, contact) in contacts.into_iter().enumerate() {
            println!();
            println!("{}. {}", i + 1, contact);
            println!("{}", "-".repeat(40));
        }
    }

    pub fn print_error(&self, e: &RolodexError) {
        println!("Error: {}", e);
    }
}
