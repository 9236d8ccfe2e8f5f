pub mod context;
pub mod contact_commands;
pub mod render;
pub mod session;

use crate::directory::ContactDirectory;
use context::CLIContext;
use session::Session;

/// Run the interactive REPL over an opened directory.
pub fn run(directory: &mut ContactDirectory) {
    println!("Contacts");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut ctx = CLIContext::new(Session::new(directory));
    contact_commands::list(&mut ctx);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "list" | "ls" => contact_commands::list(ctx),
            "add" => contact_commands::add(ctx, args),
            "cancel" => contact_commands::cancel(ctx),
            "search" | "find" => contact_commands::search(ctx, args),
            "show" | "view" => contact_commands::show(ctx, args),
            "delete" | "rm" => contact_commands::delete(ctx),
            "close" => contact_commands::close(ctx),
            "stats" => contact_commands::stats(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into the command word and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

    list                    List all contacts
    add [name]              Add a contact (prompts for name, phone, email)
    cancel                  Clear a half-filled add form
    search <term>           Filter by name, phone or email
    show <id|name>          Open a contact
    delete                  Delete the open contact (asks first)
    close                   Close the open contact
    stats                   Show how many contacts are stored
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Names are case-insensitive and partial matches work
  - 'search' with no term shows everything again"#);
}
