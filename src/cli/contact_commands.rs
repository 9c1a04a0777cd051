use crate::cli::context::CLIContext;
use crate::model::ContactField;
use crate::validation;

fn invalid_hint(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Name cannot be empty. Please try again.",
        ContactField::Phone => "Invalid phone number. Please enter at least 10 digits.",
        ContactField::Email => "Invalid email format. Please try again.",
    }
}

/// Prompt until the value passes validation. None on EOF.
fn prompt_valid(ctx: &mut CLIContext, prompt: &str, field: ContactField) -> Option<String> {
    loop {
        let value = ctx.prompt(prompt)?;
        if validation::is_valid(field, &value) {
            return Some(value);
        }
        println!("{}", invalid_hint(field));
    }
}

pub fn add(ctx: &mut CLIContext) {
    println!("\n--- Add New Contact ---");

    let name = loop {
        let name = match prompt_valid(ctx, "Enter name: ", ContactField::Name) {
            Some(n) => n,
            None => return,
        };
        if ctx.store.list_all().iter().any(|c| c.name == name) {
            println!("Contact '{}' already exists. Please choose another name.", name);
            continue;
        }
        break name;
    };

    let phone = match prompt_valid(ctx, "Enter phone number: ", ContactField::Phone) {
        Some(p) => p,
        None => return,
    };
    let email = match prompt_valid(ctx, "Enter email address: ", ContactField::Email) {
        Some(e) => e,
        None => return,
    };

    match ctx.store.add(&name, &phone, &email) {
        Ok(contact) => println!("\nContact '{}' added successfully!", contact.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn view(ctx: &mut CLIContext) {
    let contacts = ctx.store.list_all();
    if contacts.is_empty() {
        println!("\nNo contacts found.");
        return;
    }

    println!("\n--- Contact List ({} contacts) ---", contacts.len());
    CLIContext::print_numbered(contacts);
}

pub fn search(ctx: &mut CLIContext) {
    if ctx.store.is_empty() {
        println!("\nNo contacts to search.");
        return;
    }

    let query = match ctx.prompt("Enter name to search: ") {
        Some(q) if !q.is_empty() => q,
        Some(_) => {
            println!("No search term entered.");
            return;
        }
        None => return,
    };

    let matches = ctx.store.search(&query);
    if matches.is_empty() {
        println!("No contacts found matching your search.");
        return;
    }

    println!("\n--- Search Results ({} found) ---", matches.len());
    CLIContext::print_numbered(matches);
}

pub fn edit(ctx: &mut CLIContext) {
    if ctx.store.is_empty() {
        println!("\nNo contacts to edit.");
        return;
    }

    view(ctx);
    let count = ctx.store.len();
    let position = match ctx.prompt_position("edit", count) {
        Some(p) => p,
        None => return,
    };
    let current = match ctx.store.get(position) {
        Ok(c) => c.clone(),
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    println!("\nEditing contact: {}", current.name);
    println!("\nPress Enter to keep current value:");

    let mut changes: [Option<String>; 3] = [None, None, None];
    let fields = [
        (ContactField::Name, &current.name),
        (ContactField::Phone, &current.phone),
        (ContactField::Email, &current.email),
    ];
    for (slot, (field, value)) in changes.iter_mut().zip(fields) {
        let label = match field {
            ContactField::Name => "Name",
            ContactField::Phone => "Phone",
            ContactField::Email => "Email",
        };
        loop {
            let input = match ctx.prompt(&format!("{} ({}): ", label, value)) {
                Some(s) => s,
                None => return,
            };
            if input.is_empty() {
                break;
            }
            if validation::is_valid(field, &input) {
                *slot = Some(input);
                break;
            }
            println!("{}", invalid_hint(field));
        }
    }

    let [name, phone, email] = changes;
    if name.is_none() && phone.is_none() && email.is_none() {
        println!("No changes made.");
        return;
    }

    match ctx
        .store
        .edit(position, name.as_deref(), phone.as_deref(), email.as_deref())
    {
        Ok(_) => println!("Contact updated successfully!"),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CLIContext) {
    if ctx.store.is_empty() {
        println!("\nNo contacts to delete.");
        return;
    }

    view(ctx);
    let count = ctx.store.len();
    let position = match ctx.prompt_position("delete", count) {
        Some(p) => p,
        None => return,
    };
    let name = match ctx.store.get(position) {
        Ok(c) => c.name.clone(),
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    let confirm = ctx
        .prompt(&format!("Are you sure you want to delete '{}'? (y/n): ", name))
        .unwrap_or_default();
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Deletion cancelled.");
        return;
    }

    match ctx.store.delete(position) {
        Ok(removed) => println!("Contact '{}' deleted successfully!", removed.name),
        Err(e) => ctx.print_error(&e),
    }
}
