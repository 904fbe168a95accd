use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ext_organizer::{
    exit_code, init_logging, organize, prompt_destination, prompt_source, Category, Config, LogConfig,
    OrganizeOptions, TracingReporter,
};

#[derive(Parser)]
#[command(name = "ext-organizer")]
#[command(version)]
#[command(about = "Copy files into subfolders grouped by extension")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, help = "Folder with the files to organize [prompted if omitted]")]
    source: Option<PathBuf>,
    #[arg(
        short,
        long,
        help = "Folder to save organized files [prompted if omitted]"
    )]
    destination: Option<PathBuf>,
    #[arg(long, env = "EXT_ORGANIZER_CONFIG", help = "JSON config file")]
    config: Option<PathBuf>,
    #[arg(long, help = "Log file, appended to [default: organization_log.log]")]
    log_file: Option<PathBuf>,
    #[arg(long, help = "Hash each copy and compare with its source")]
    verify: bool,
    #[arg(long, help = "Print the run report as JSON")]
    json: bool,
    #[arg(short, long, help = "Debug-level logging")]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the folder each file name would be copied into
    Classify {
        #[arg(required = true, help = "File names")]
        names: Vec<String>,
    },
    /// Write a config file filled with the default values
    InitConfig {
        #[arg(help = "Where to write the JSON config")]
        path: PathBuf,
    },
    /// Generate shell completions
    Completions {
        #[arg(help = "Shell to generate for (bash, zsh, fish, powershell)")]
        shell: Shell,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Classify { names }) => cmd_classify(names).map(|_| ExitCode::SUCCESS),
        Some(Commands::InitConfig { path }) => cmd_init_config(path).map(|_| ExitCode::SUCCESS),
        Some(Commands::Completions { shell }) => {
            generate(
                *shell,
                &mut Cli::command(),
                "ext-organizer",
                &mut io::stdout(),
            );
            Ok(ExitCode::SUCCESS)
        }
        None => cmd_organize(&cli),
    }
}

fn cmd_classify(names: &[String]) -> Result<()> {
    for name in names {
        println!("{} -> {}", name, Category::from_file_name(name));
    }
    Ok(())
}

fn cmd_init_config(path: &Path) -> Result<()> {
    Config::default().save(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn cmd_organize(cli: &Cli) -> Result<ExitCode> {
    let config = Config::load_or_default(cli.config.as_deref())?
        .with_overrides(cli.log_file.clone(), cli.verify);

    init_logging(LogConfig {
        log_file: &config.log_file,
        verbose: cli.verbose,
    })?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let source = match &cli.source {
        Some(path) => path.clone(),
        None => prompt_source(&mut input, &mut output)?,
    };

    let destination = match &cli.destination {
        Some(path) => path.clone(),
        None => prompt_destination(&mut input, &mut output, &config.default_destination)?,
    };

    println!("\nStarting organization...");

    let options = OrganizeOptions {
        verify: config.verify,
    };

    // Fatal errors are already logged by the reporter.
    let result = organize(&source, &destination, &options, &mut TracingReporter);

    if let (Ok(report), true) = (&result, cli.json) {
        println!("{}", serde_json::to_string_pretty(report)?);
    }

    Ok(ExitCode::from(exit_code(&result)))
}
