use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use ratatui::style::Color;
use serde_json::Value;
use tracing::warn;

use super::args::{Commands, EditArgs, EntityCommands, LessonCommands, SectionCommands, ToolCommands, TutorialCommands};
use crate::api::routes::{SECTIONS, TUTORIALS};
use crate::api::{ApiClient, EntityId};
use crate::config::Config;
use crate::forms::{self, CommandForm, EntityForm, FormField, LessonForm, ToolForm};
use crate::models::{Tutorial, TutorialSection};
use crate::render::ToolPageRenderer;
use crate::ui::{prompt, FormApp, FormOutcome};
use crate::utils::serde_helpers::value_to_string;
use crate::utils::slug::generate_slug;
use crate::utils::time::format_local;

const RULE: &str = "─────────────────────────────────────────────";

pub fn handle_command(command: Commands, client: &ApiClient, config: &Config) -> Result<()> {
    match command {
        Commands::Command { action } => match action {
            EntityCommands::List => {
                let commands = client.list_commands()?;
                let rows: Vec<Row> = commands
                    .iter()
                    .map(|c| Row::new(c.id.as_deref(), &c.title, &c.slug, c.published))
                    .collect();
                print_rows("commands", &rows);
            }
            EntityCommands::Show { id } => {
                let command = client.get_command(&id)?;
                print_fields(&CommandForm::from_record(command.clone()).fields());
                print_timestamps(command.created_at.as_ref(), command.updated_at.as_ref());
            }
            EntityCommands::Edit(args) => {
                let id = EntityId::from(args.id.as_str());
                let form = match &id {
                    EntityId::New => CommandForm::new(),
                    EntityId::Existing(id) => CommandForm::from_record(client.get_command(id)?),
                };
                edit_entity(client, form, &id, &args)?;
            }
        },
        Commands::Tool { action } => match action {
            ToolCommands::List => {
                let tools = client.list_tools()?;
                let rows: Vec<Row> = tools
                    .iter()
                    .map(|t| Row::new(t.id.as_deref(), &t.title, &t.slug, t.published))
                    .collect();
                print_rows("tools", &rows);
            }
            ToolCommands::Show { id } => {
                let tool = client.get_tool(&id)?;
                print_fields(&ToolForm::from_record(tool.clone()).fields());
                print_timestamps(tool.created_at.as_ref(), tool.updated_at.as_ref());
            }
            ToolCommands::Edit(args) => {
                let id = EntityId::from(args.id.as_str());
                let form = match &id {
                    EntityId::New => ToolForm::new(),
                    EntityId::Existing(id) => ToolForm::from_record(client.get_tool(id)?),
                };
                edit_entity(client, form, &id, &args)?;
            }
            ToolCommands::Publish { id, off } => {
                client.set_tool_published(&id, !off)?;
                let state = if off { "unpublished" } else { "published" };
                println!("Tool {} {}", id, state.green());
            }
        },
        Commands::Lesson { action } => match action {
            LessonCommands::List { section } => {
                let lessons = client.list_lessons(section.as_deref())?;
                let rows: Vec<Row> = lessons
                    .iter()
                    .map(|l| Row::new(l.id.as_deref(), &l.title, &l.slug, l.is_active))
                    .collect();
                print_rows("lessons", &rows);
            }
            LessonCommands::Show { id } => {
                let lesson = client.get_lesson(&id)?;
                print_fields(&LessonForm::from_record(lesson.clone(), config.site()).fields());
                print_timestamps(lesson.created_at.as_ref(), lesson.updated_at.as_ref());
            }
            LessonCommands::Edit(args) => edit_lesson(client, config, &args)?,
            LessonCommands::Seo { id } => {
                let mut form = LessonForm::from_record(client.get_lesson(&id)?, config.site());
                attach_parents(client, &mut form);
                print_seo_report(&form);
            }
        },
        Commands::Tutorial { action } => match action {
            TutorialCommands::List => {
                let tutorials = client.list_tutorials()?;
                let rows: Vec<Row> = tutorials
                    .iter()
                    .map(|t| Row::new(t.id.as_deref(), &t.title, &t.slug, true))
                    .collect();
                print_rows("tutorials", &rows);
            }
            TutorialCommands::New { title, slug, description } => {
                let tutorial = Tutorial {
                    id: None,
                    slug: slug.unwrap_or_else(|| generate_slug(&title)),
                    title,
                    description: description.unwrap_or_default(),
                };
                let saved = client.save(&TUTORIALS, &EntityId::New, &tutorial)?;
                print_saved(TUTORIALS.singular, &saved, &tutorial.slug);
            }
        },
        Commands::Section { action } => match action {
            SectionCommands::List { tutorial } => {
                let sections = client.list_sections(tutorial.as_deref())?;
                let rows: Vec<Row> = sections
                    .iter()
                    .map(|s| Row::new(s.id.as_deref(), &s.title, &s.slug, true))
                    .collect();
                print_rows("sections", &rows);
            }
            SectionCommands::New { tutorial, title, slug, order } => {
                let section = TutorialSection {
                    id: None,
                    slug: slug.unwrap_or_else(|| generate_slug(&title)),
                    title,
                    tutorial_id: Some(tutorial),
                    order_index: order,
                };
                let saved = client.save(&SECTIONS, &EntityId::New, &section)?;
                print_saved(SECTIONS.singular, &saved, &section.slug);
            }
        },
        Commands::Slug { title } => {
            println!("{}", generate_slug(&title.join(" ")));
        }
        Commands::Render { slug, output } => {
            let html = render_tool_page(client, config, &slug)?;
            match output {
                Some(path) => {
                    if path.exists()
                        && prompt::is_interactive()
                        && !prompt::confirm(&format!("Overwrite {}?", path.display()), false)?
                    {
                        println!("Cancelled");
                        return Ok(());
                    }
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Rendered {} to {}", slug.green(), path.display());
                }
                None => println!("{}", html),
            }
        }
    }
    Ok(())
}

/// Fetches a tool and its related tools and renders the public page.
pub fn render_tool_page(client: &ApiClient, config: &Config, slug: &str) -> Result<String> {
    let tool = client.public_tool(slug)?;
    let related = match client.related_tools(config.related_limit, slug) {
        Ok(related) => related,
        Err(err) => {
            warn!(%slug, error = %err, "could not load related tools");
            Vec::new()
        }
    };
    ToolPageRenderer::new()?.render(&tool, &related, &config.site())
}

fn load_seed(form: &mut impl EntityForm, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let seed: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    form.merge_json(&seed)?;
    form.derive_slug();
    Ok(())
}

/// Shared create/edit flow: seed, optionally auto-generate SEO, edit
/// interactively, then submit.
pub fn edit_entity<F: EntityForm>(client: &ApiClient, mut form: F, id: &EntityId, args: &EditArgs) -> Result<()> {
    if let Some(path) = &args.file {
        load_seed(&mut form, path)?;
    }
    if args.auto_seo {
        forms::auto_generate_seo(client, &mut form)?;
    }

    let interactive = !args.yes && prompt::is_interactive();
    if interactive && !run_editor(client, &mut form, id)? {
        println!("Cancelled");
        return Ok(());
    }

    let saved = forms::submit(client, &mut form, id)?;
    print_saved(form.resource().singular, &saved, form.slug());
    Ok(())
}

/// What the edit loop does once the editor closes.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorStep {
    /// Leave the editor; `save` is false when the user cancelled.
    Finish { save: bool },
    /// Open the editor again. `fields` carries the user's raw values when a
    /// field was rejected, otherwise the form's current values are shown.
    Reopen {
        fields: Option<Vec<FormField>>,
        message: (String, Color),
    },
}

/// Applies an editor outcome to the form. Rejected input never ends the
/// session and never discards the other edits.
pub fn after_editor<F: EntityForm>(client: &ApiClient, form: &mut F, outcome: FormOutcome) -> EditorStep {
    let (fields, generate_seo) = match outcome {
        FormOutcome::Cancel => return EditorStep::Finish { save: false },
        FormOutcome::Save(fields) => (fields, false),
        FormOutcome::GenerateSeo(fields) => (fields, true),
    };

    if let Err(err) = form.apply_fields(&fields) {
        return EditorStep::Reopen {
            fields: Some(fields),
            message: (err.to_string(), Color::Red),
        };
    }

    let message = if generate_seo {
        match forms::auto_generate_seo(client, form) {
            Ok(()) => ("SEO fields generated".to_string(), Color::Green),
            Err(err) => (err.to_string(), Color::Red),
        }
    } else {
        form.prepare();
        match form.validate().and_then(|_| form.payload().map(|_| ())) {
            Ok(()) => return EditorStep::Finish { save: true },
            Err(err) => (err.to_string(), Color::Red),
        }
    };
    EditorStep::Reopen { fields: None, message }
}

/// Returns false when the user cancelled.
fn run_editor<F: EntityForm>(client: &ApiClient, form: &mut F, id: &EntityId) -> Result<bool> {
    let resource = form.resource();
    let heading = match id {
        EntityId::New => format!("New {}", resource.singular),
        EntityId::Existing(id) => format!("Edit {} {}", resource.singular, id),
    };
    let mut pending: Option<(Option<Vec<FormField>>, (String, Color))> = None;

    loop {
        let (fields, message) = match pending.take() {
            Some((fields, message)) => (fields.unwrap_or_else(|| form.fields()), Some(message)),
            None => (form.fields(), None),
        };
        let mut app = FormApp::new(heading.clone(), fields, resource.auto_seo);
        if let Some((text, color)) = message {
            app = app.with_message(text, color);
        }
        match after_editor(client, form, app.run()?) {
            EditorStep::Finish { save } => return Ok(save),
            EditorStep::Reopen { fields, message } => pending = Some((fields, message)),
        }
    }
}

fn edit_lesson(client: &ApiClient, config: &Config, args: &EditArgs) -> Result<()> {
    let id = EntityId::from(args.id.as_str());
    let mut form = match &id {
        EntityId::New => LessonForm::new(config.site()),
        EntityId::Existing(id) => LessonForm::from_record(client.get_lesson(id)?, config.site()),
    };
    if let Some(path) = &args.file {
        load_seed(&mut form, path)?;
    }
    if args.auto_seo {
        forms::auto_generate_seo(client, &mut form)?;
    }

    let interactive = !args.yes && prompt::is_interactive();
    if interactive && form.record.section_id.is_none() {
        let sections = client.list_sections(None)?;
        form.record.section_id = Some(prompt::select_section(&sections)?);
    }
    attach_parents(client, &mut form);

    if interactive && !run_editor(client, &mut form, &id)? {
        println!("Cancelled");
        return Ok(());
    }

    let saved = forms::submit(client, &mut form, &id)?;
    print_saved(form.resource().singular, &saved, form.slug());
    let report = form.seo_report();
    println!("SEO score: {}", score_label(report.score));
    Ok(())
}

/// Best effort: a lesson can still be saved without its parents.
fn attach_parents(client: &ApiClient, form: &mut LessonForm) {
    if form.record.section_id.is_none() {
        return;
    }
    let sections = client.list_sections(None).unwrap_or_else(|err| {
        warn!(error = %err, "could not load sections");
        Vec::new()
    });
    let tutorials = client.list_tutorials().unwrap_or_else(|err| {
        warn!(error = %err, "could not load tutorials");
        Vec::new()
    });
    form.resolve_parents(&sections, &tutorials);
}

fn print_seo_report(form: &LessonForm) {
    let report = form.seo_report();
    println!("\nSEO score for {}: {}", form.record.title.bold(), score_label(report.score));
    println!("{}", RULE);
    if report.unmet.is_empty() {
        println!("{}", "All checks pass".green());
    } else {
        for check in &report.unmet {
            println!("  {} {}", "✗".red(), check);
        }
    }
    println!("{}", RULE);
    println!("{}", form.structured_data_json());
}

fn score_label(score: u32) -> ColoredString {
    let text = format!("{}/100", score);
    match score {
        80..=100 => text.green().bold(),
        50..=79 => text.yellow().bold(),
        _ => text.red().bold(),
    }
}

struct Row {
    id: String,
    title: String,
    slug: String,
    flag: bool,
}

impl Row {
    fn new(id: Option<&str>, title: &str, slug: &str, flag: bool) -> Self {
        Self {
            id: id.unwrap_or("-").to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
            flag,
        }
    }
}

fn print_rows(what: &str, rows: &[Row]) {
    if rows.is_empty() {
        println!("No {} found.", what);
        return;
    }

    println!("\nFound {} {}:", rows.len(), what);
    println!("{}", RULE);
    for row in rows {
        let marker = if row.flag { "●".green() } else { "○".dimmed() };
        println!("{} ({}) {} {}", marker, row.id.yellow(), row.title, format!("/{}", row.slug).dimmed());
    }
    println!("{}", RULE);
}

fn print_fields(fields: &[FormField]) {
    println!("{}", RULE);
    for field in fields {
        if field.is_multiline() && field.value.contains('\n') {
            println!("{}:", field.label.blue().bold());
            for line in field.value.lines() {
                println!("    {}", line);
            }
        } else {
            println!("{}: {}", field.label.blue().bold(), field.value);
        }
    }
    println!("{}", RULE);
}

fn print_timestamps(created: Option<&chrono::DateTime<chrono::Utc>>, updated: Option<&chrono::DateTime<chrono::Utc>>) {
    if let Some(created) = created {
        println!("Created: {}", format_local(created));
    }
    if let Some(updated) = updated {
        println!("Updated: {}", format_local(updated));
    }
}

fn print_saved(what: &str, saved: &Value, slug: &str) {
    let id = saved
        .get("id")
        .and_then(value_to_string)
        .unwrap_or_else(|| "-".to_string());
    println!("Saved {} {} with ID: {}", what, slug.green(), id.yellow());
}
