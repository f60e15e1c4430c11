use clap::Parser;
use devref::cli::args::{
    Cli, Commands, EntityCommands, LessonCommands, SectionCommands, ToolCommands, TutorialCommands,
};

#[test]
fn test_parse_command_edit_new() {
    let cli = Cli::parse_from(["devref", "command", "edit", "new", "--auto-seo", "-y"]);
    match cli.command {
        Commands::Command {
            action: EntityCommands::Edit(args),
        } => {
            assert_eq!(args.id, "new");
            assert!(args.auto_seo);
            assert!(args.yes);
            assert!(args.file.is_none());
        }
        _ => panic!("Expected command edit"),
    }
}

#[test]
fn test_parse_tool_edit_with_file() {
    let cli = Cli::parse_from(["devref", "tool", "edit", "12", "-f", "tool.json"]);
    match cli.command {
        Commands::Tool {
            action: ToolCommands::Edit(args),
        } => {
            assert_eq!(args.id, "12");
            assert_eq!(args.file.unwrap().to_str(), Some("tool.json"));
            assert!(!args.auto_seo);
        }
        _ => panic!("Expected tool edit"),
    }
}

#[test]
fn test_parse_tool_publish_off() {
    let cli = Cli::parse_from(["devref", "tool", "publish", "3", "--off"]);
    match cli.command {
        Commands::Tool {
            action: ToolCommands::Publish { id, off },
        } => {
            assert_eq!(id, "3");
            assert!(off);
        }
        _ => panic!("Expected tool publish"),
    }
}

#[test]
fn test_parse_lesson_commands() {
    let cli = Cli::parse_from(["devref", "lesson", "list", "-s", "9"]);
    match cli.command {
        Commands::Lesson {
            action: LessonCommands::List { section },
        } => assert_eq!(section.as_deref(), Some("9")),
        _ => panic!("Expected lesson list"),
    }

    let cli = Cli::parse_from(["devref", "lesson", "seo", "4"]);
    match cli.command {
        Commands::Lesson {
            action: LessonCommands::Seo { id },
        } => assert_eq!(id, "4"),
        _ => panic!("Expected lesson seo"),
    }
}

#[test]
fn test_parse_tutorial_and_section_new() {
    let cli = Cli::parse_from(["devref", "tutorial", "new", "-t", "Linux Basics"]);
    match cli.command {
        Commands::Tutorial {
            action: TutorialCommands::New { title, slug, description },
        } => {
            assert_eq!(title, "Linux Basics");
            assert!(slug.is_none());
            assert!(description.is_none());
        }
        _ => panic!("Expected tutorial new"),
    }

    let cli = Cli::parse_from([
        "devref", "section", "new", "--tutorial", "1", "-t", "Getting Started", "-o", "2",
    ]);
    match cli.command {
        Commands::Section {
            action: SectionCommands::New { tutorial, title, slug, order },
        } => {
            assert_eq!(tutorial, "1");
            assert_eq!(title, "Getting Started");
            assert!(slug.is_none());
            assert_eq!(order, 2);
        }
        _ => panic!("Expected section new"),
    }
}

#[test]
fn test_parse_slug_and_render() {
    let cli = Cli::parse_from(["devref", "slug", "What", "is", "Linux?"]);
    match cli.command {
        Commands::Slug { title } => assert_eq!(title, vec!["What", "is", "Linux?"]),
        _ => panic!("Expected slug"),
    }

    let cli = Cli::parse_from(["devref", "--api-url", "http://api", "render", "cron-generator", "-o", "out.html"]);
    assert_eq!(cli.api_url.as_deref(), Some("http://api"));
    match cli.command {
        Commands::Render { slug, output } => {
            assert_eq!(slug, "cron-generator");
            assert_eq!(output.unwrap().to_str(), Some("out.html"));
        }
        _ => panic!("Expected render"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["devref", "command", "list", "-v", "--config", "devref.toml"]);
    assert!(cli.verbose);
    assert_eq!(cli.config.unwrap().to_str(), Some("devref.toml"));
    assert!(matches!(
        cli.command,
        Commands::Command {
            action: EntityCommands::List
        }
    ));
}

#[test]
fn test_missing_id_is_rejected() {
    assert!(Cli::try_parse_from(["devref", "tool", "edit"]).is_err());
    assert!(Cli::try_parse_from(["devref", "slug"]).is_err());
}
