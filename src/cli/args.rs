use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/devref/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the REST API, overrides config and environment
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log requests and responses
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage command reference entries
    Command {
        #[command(subcommand)]
        action: EntityCommands,
    },
    /// Manage tools
    Tool {
        #[command(subcommand)]
        action: ToolCommands,
    },
    /// Manage tutorial lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
    /// Manage tutorials
    Tutorial {
        #[command(subcommand)]
        action: TutorialCommands,
    },
    /// Manage tutorial sections
    Section {
        #[command(subcommand)]
        action: SectionCommands,
    },
    /// Print the slug for a title
    Slug {
        #[arg(required = true)]
        title: Vec<String>,
    },
    /// Render the public page of a tool to HTML
    Render {
        /// Tool slug
        slug: String,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Options shared by every `edit` subcommand.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    /// Record id, or `new` to create one
    pub id: String,

    /// JSON object whose fields seed the form
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Run Auto Generate SEO before saving
    #[arg(long)]
    pub auto_seo: bool,

    /// Skip the interactive editor and save straight away
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum EntityCommands {
    /// List all commands
    List,
    /// Show one command
    Show { id: String },
    /// Create (`new`) or edit a command
    Edit(EditArgs),
}

#[derive(Subcommand, Debug)]
pub enum ToolCommands {
    /// List all tools
    List,
    /// Show one tool
    Show { id: String },
    /// Create (`new`) or edit a tool
    Edit(EditArgs),
    /// Publish or unpublish a tool
    Publish {
        id: String,

        /// Unpublish instead
        #[arg(long)]
        off: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    /// List lessons
    List {
        /// Only lessons in this section
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Show one lesson
    Show { id: String },
    /// Create (`new`) or edit a lesson
    Edit(EditArgs),
    /// SEO score, unmet checks and structured data for a lesson
    Seo { id: String },
}

#[derive(Subcommand, Debug)]
pub enum TutorialCommands {
    /// List tutorials
    List,
    /// Create a tutorial
    New {
        #[arg(short, long)]
        title: String,

        /// Derived from the title when omitted
        #[arg(short, long)]
        slug: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SectionCommands {
    /// List sections
    List {
        /// Only sections of this tutorial
        #[arg(short, long)]
        tutorial: Option<String>,
    },
    /// Create a section
    New {
        /// Parent tutorial id
        #[arg(long)]
        tutorial: String,

        #[arg(short, long)]
        title: String,

        /// Derived from the title when omitted
        #[arg(short, long)]
        slug: Option<String>,

        #[arg(short, long, default_value = "0")]
        order: i64,
    },
}
