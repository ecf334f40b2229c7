//! Output rendering for the skillctl CLI.
//!
//! Formats skill listings for terminal display; user-facing strings come from
//! the localized message bundles.

use skill_core::messages::Messages;
use skill_core::types::Skill;

/// Print the skill listing in tabular format.
pub fn print_skill_list(skills: &[Skill], messages: &Messages) {
    if skills.is_empty() {
        println!("{}", messages.get("skills.empty"));
        return;
    }

    println!(
        "{:<24}  {:<28}  {:<8}  {:<16}  {:<10}",
        "NAME", "FILE", "SOURCE", "PLUGIN", "STATUS"
    );
    println!("{}", "-".repeat(94));

    for skill in skills {
        let status = if skill.enabled {
            messages.get("status.enabled")
        } else {
            messages.get("status.disabled")
        };
        println!(
            "{:<24}  {:<28}  {:<8}  {:<16}  {:<10}",
            truncate(&skill.name, 24),
            truncate(&skill.file_name, 28),
            skill.source.as_str(),
            skill.plugin().unwrap_or("-"),
            status,
        );
    }

    println!();
    println!(
        "{}",
        messages.format("skills.count", &[("count", &skills.len().to_string())])
    );
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
