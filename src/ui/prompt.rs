use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, FuzzySelect};

use crate::models::TutorialSection;

/// True when both stdin and stdout are attached to a terminal.
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout)
}

pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

pub fn section_label(section: &TutorialSection) -> String {
    format!(
        "{} ({})",
        section.title,
        section.id.as_deref().unwrap_or("-")
    )
}

/// Lets the user pick the section a lesson belongs to.
pub fn select_section(sections: &[TutorialSection]) -> Result<String> {
    if sections.is_empty() {
        return Err(anyhow!("No tutorial sections exist yet; create one with `devref section new`"));
    }
    let labels: Vec<String> = sections.iter().map(section_label).collect();
    let index = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Section")
        .items(&labels)
        .default(0)
        .interact()?;
    sections[index]
        .id
        .clone()
        .ok_or_else(|| anyhow!("Selected section has no id"))
}
