use crate::cli::context::CLIContext;
use crate::cli::render;
use crate::db::contact_repo;

pub fn list(ctx: &mut CLIContext) {
    print!("{}", ensure_newline(ctx.session.search_input("")));
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    println!("Adding a new contact (all fields required, Enter keeps the shown value)");

    if !args.is_empty() {
        ctx.session.form.name = args.to_string();
    }

    let name = match ctx.prompt_field("Name", &ctx.session.form.name) {
        Some(s) => s,
        None => return,
    };
    ctx.session.form.name = name;

    let phone = match ctx.prompt_field("Phone", &ctx.session.form.phone) {
        Some(s) => s,
        None => return,
    };
    ctx.session.form.phone = phone;

    let email = match ctx.prompt_field("Email", &ctx.session.form.email) {
        Some(s) => s,
        None => return,
    };
    ctx.session.form.email = email;

    let outcome = ctx.session.submit_form();
    ctx.notify(&outcome);
}

pub fn cancel(ctx: &mut CLIContext) {
    ctx.session.cancel_form();
    println!("Form cleared.");
}

pub fn search(ctx: &mut CLIContext, args: &str) {
    print!("{}", ensure_newline(ctx.session.search_input(args)));
}

pub fn show(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: show <id|name>");
        return;
    }
    let id = match ctx.find_contact(args) {
        Some(id) => id,
        None => return,
    };

    match ctx.session.activate_row(id) {
        Some(view) => {
            println!();
            print!("{}", view);
            println!();
            println!("Type 'delete' to remove this contact or 'close' to go back.");
        }
        None => println!("That contact no longer exists."),
    }
}

pub fn delete(ctx: &mut CLIContext) {
    let request = match ctx.session.request_delete() {
        Some(r) => r,
        None => {
            println!("No contact open. Use 'show <id|name>' first.");
            return;
        }
    };

    let answer = ctx.prompt(&render::confirmation_prompt(&request));
    let confirmed = answer
        .map(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"))
        .unwrap_or(false);

    match ctx.session.confirm_delete(confirmed) {
        Some(outcome) => ctx.notify(&outcome),
        None => println!("Cancelled."),
    }
}

pub fn close(ctx: &mut CLIContext) {
    ctx.session.close_detail();
}

pub fn stats(ctx: &CLIContext) {
    match contact_repo::count(ctx.session.directory().conn()) {
        Ok(n) => println!("Stored contacts: {}", n),
        Err(e) => println!("Error: {}", e),
    }
    if !ctx.session.filter().is_empty() {
        println!("Current search: '{}'", ctx.session.filter());
    }
}

fn ensure_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
