use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use plab_core::ValidationReport;

#[derive(Parser)]
#[command(name = "plab", version, about = "Prompt authoring toolkit")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate prompt quality and print a scored report
    Validate(ValidateArgs),

    /// Generate a prompt template for a task category
    Template(TemplateArgs),
}

#[derive(Args)]
struct ValidateArgs {
    /// Prompt to validate
    prompt: Option<String>,

    /// Read the prompt from a UTF-8 file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Echo the original prompt after the report
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TemplateArgs {
    /// Template type (see --list)
    r#type: Option<String>,

    /// List available template types
    #[arg(short, long)]
    list: bool,

    /// Show variables for a template type
    #[arg(long, value_name = "TYPE")]
    variables: Option<String>,

    /// Write the template to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON object of variable overrides, e.g. '{"language": "Python"}'
    #[arg(long, value_name = "JSON")]
    custom: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => run_validate(args),
        Command::Template(args) => run_template(args),
    }
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let prompt = match (&args.file, &args.prompt) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("read prompt file: {}", path.display()))?
            .trim()
            .to_string(),
        (None, Some(text)) => text.clone(),
        (None, None) => bail!("provide a prompt as an argument or via --file"),
    };

    let report = plab_rules::validate(&prompt);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_report(&report, args.verbose);
    Ok(())
}

fn print_report(report: &ValidationReport, verbose: bool) {
    let rule = "=".repeat(50);
    println!();
    println!("{rule}");
    println!("PROMPT VALIDATION RESULTS");
    println!("{rule}");
    println!("Score: {}/100", report.score);
    println!("Word Count: {}", report.word_count);
    println!("Character Count: {}", report.character_count);

    if !report.issues.is_empty() {
        println!();
        println!("ISSUES FOUND ({}):", report.issues.len());
        for (i, issue) in report.issues.iter().enumerate() {
            println!("  {}. {}", i + 1, issue);
        }
    }

    if !report.suggestions.is_empty() {
        println!();
        println!("SUGGESTIONS ({}):", report.suggestions.len());
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            println!("  {}. {}", i + 1, suggestion);
        }
    }

    if report.is_clean() {
        println!();
        println!("Great! No issues found.");
    }

    if verbose {
        println!();
        println!("ORIGINAL PROMPT:");
        println!("'{}'", report.prompt);
    }

    println!();
    println!("{rule}");
}

fn run_template(args: TemplateArgs) -> Result<()> {
    if args.list {
        println!("Available template types:");
        for name in plab_templates::categories() {
            println!("  - {name}");
        }
        return Ok(());
    }

    if let Some(ty) = &args.variables {
        let vars = plab_templates::variables(ty)?;
        println!("Variables for '{ty}' template:");
        for (name, desc) in vars {
            println!("  {name}: {desc}");
        }
        return Ok(());
    }

    let Some(ty) = args.r#type else {
        bail!("specify a template type or use --list to see available types");
    };

    let overrides: HashMap<String, String> = match &args.custom {
        Some(json) => serde_json::from_str(json).context("invalid JSON in --custom")?,
        None => HashMap::new(),
    };

    match &args.output {
        Some(path) => {
            plab_templates::save(&ty, path, &overrides)?;
            println!("Template saved to {}", path.display());
        }
        None => println!("{}", plab_templates::render(&ty, &overrides)?),
    }
    Ok(())
}
