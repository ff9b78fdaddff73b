use colored::Colorize;
use helicone_core::hc_println;
use helicone_messages::{msg, MESSAGES};
use helicone_templates::CATALOG;

/// Handles `--list`: prints the template catalog. Never touches the filesystem.
pub fn handle_list() {
    hc_println!("{}", MESSAGES.list_header.bold());
    for template in CATALOG {
        hc_println!(
            "{}",
            msg!(
                MESSAGES.list_entry,
                name = template.name.green().to_string(),
                description = template.description
            )
        );
    }
}
