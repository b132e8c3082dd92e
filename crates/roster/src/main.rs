use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use fastrace::collector::Config as FastraceConfig;
use fastrace::prelude::*;
use roster_config::{get_config_path, Config, LogFormat};
use roster_directory::{validate_raw, Directory};
use roster_output::*;
use roster_types::{FieldKind, NewUser, Requester, UserUpdate, ValidationReport};
use tracing_subscriber::EnvFilter;

mod demo;
mod profiling;
mod seed;

use profiling::CollectingReporter;

const MAIN_HELP: &str = r#"Roster is an in-memory user directory. It validates profile fields
(email, age, mobile, gender, blood group) and lets admins add, update, view and
list users while regular users may only view and update themselves.

The directory is seeded at startup from the `[[seed]]` entries of the config
file, or from a small built-in sample when there are none. Changes made by
`add` and `update` are printed but not saved.

Run `roster demo` for a scripted walk-through, or `roster config show` to see
where the config file lives."#;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[arg(long, global = true, help = "Print per-operation timing after the command")]
    profile: bool,

    #[arg(long, global = true, env = "ROSTER_CONFIG", help = "Config file to use")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RequesterArgs {
    #[arg(long = "as", value_name = "USERNAME", help = "User performing the operation")]
    requester: String,
    #[arg(long, help = "Perform the operation with admin rights")]
    admin: bool,
}

impl RequesterArgs {
    fn requester(&self) -> Requester {
        Requester::new(self.requester.clone(), self.admin)
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run the scripted admin and self-service scenarios.")]
    Demo,

    #[command(about = "Show one user's record.")]
    Get {
        #[arg(help = "User to show")]
        username: String,
        #[command(flatten)]
        who: RequesterArgs,
    },

    #[command(about = "List every user (admin only).")]
    List {
        #[command(flatten)]
        who: RequesterArgs,
    },

    #[command(about = "Add a user (admin only).")]
    Add {
        #[arg(help = "Username of the new user")]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, allow_hyphen_values = true)]
        age: i32,
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        blood_group: String,
        #[arg(long, default_value = "user")]
        role: String,
        #[command(flatten)]
        who: RequesterArgs,
    },

    #[command(about = "Update fields of an existing user.")]
    Update {
        #[arg(help = "User to update")]
        username: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        age: Option<i32>,
        #[arg(long)]
        mobile: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        blood_group: Option<String>,
        #[command(flatten)]
        who: RequesterArgs,
    },

    #[command(about = "Check a single field value.")]
    Validate {
        #[arg(help = "email, age, mobile, gender, blood_group or country")]
        field: FieldKind,
        #[arg(allow_hyphen_values = true, help = "Value to check")]
        value: String,
    },

    #[command(about = "Inspect or create the config file.")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    #[command(about = "Print config file location and contents.")]
    Show,
    #[command(about = "Write a config file with the default settings.")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(get_config_path);

    // `config show` must still work when the file on disk does not parse.
    let config = match &cli.command {
        Commands::Config { .. } => Config::default(),
        _ => Config::load_from(&config_path)?,
    };
    init_logging(&config);

    let collector = if cli.profile {
        let (reporter, collector) = CollectingReporter::new();
        fastrace::set_reporter(reporter, FastraceConfig::default());
        Some(collector)
    } else {
        None
    };

    let result = {
        let root = Span::root("roster", SpanContext::random());
        let _guard = root.set_local_parent();
        run(&cli, &config, &config_path)
    };

    if let Err(e) = &result {
        tracing::error!(severity = "critical", "{}", e);
    }

    if let Some(collector) = collector {
        fastrace::flush();
        eprintln!("{}", format_profile(&collector.collect_and_aggregate()));
    }

    result
}

fn run(cli: &Cli, config: &Config, config_path: &Path) -> Result<ExitCode> {
    match &cli.command {
        Commands::Demo => {
            let mut directory = seed::build_directory(config)?;
            handle_demo(&mut directory, cli.json)?;
        }
        Commands::Get { username, who } => {
            let directory = seed::build_directory(config)?;
            let record = directory.get_user_info(username, &who.requester())?;
            if cli.json {
                println!("{}", to_json(record));
            } else {
                println!("{}", format_user(username, record));
            }
        }
        Commands::List { who } => {
            let directory = seed::build_directory(config)?;
            let records = directory.list_all_users(&who.requester())?;
            if cli.json {
                println!("{}", to_json(records));
            } else {
                println!("{}", format_users(records));
            }
        }
        Commands::Add {
            username,
            email,
            age,
            mobile,
            gender,
            blood_group,
            role,
            who,
        } => {
            let mut directory = seed::build_directory(config)?;
            let new_user = NewUser {
                username: username.clone(),
                email: email.clone(),
                age: *age,
                mobile: mobile.clone(),
                gender: gender.clone(),
                blood_group: blood_group.clone(),
                role: role.clone(),
            };
            let records = directory.add_user(new_user, &who.requester())?;
            if cli.json {
                println!("{}", to_json(records));
            } else {
                println!("{}", format_users(records));
            }
        }
        Commands::Update {
            username,
            email,
            age,
            mobile,
            gender,
            blood_group,
            who,
        } => {
            let updates = UserUpdate {
                email: email.clone(),
                age: *age,
                mobile: mobile.clone(),
                gender: gender.clone(),
                blood_group: blood_group.clone(),
            };
            if updates.is_empty() {
                bail!("Nothing to update: pass at least one of --email, --age, --mobile, --gender, --blood-group");
            }
            let mut directory = seed::build_directory(config)?;
            let record = directory.update_user(username, &updates, &who.requester())?;
            if cli.json {
                println!("{}", to_json(record));
            } else {
                println!("{}", format_user(username, record));
            }
        }
        Commands::Validate { field, value } => {
            if !handle_validate(config, cli.json, *field, value) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Config { command } => handle_config(command, config_path)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_demo(directory: &mut Directory, json_output: bool) -> Result<()> {
    let outcomes = demo::run(directory);
    if json_output {
        println!("{}", to_json(&outcomes));
    } else {
        for outcome in &outcomes {
            match &outcome.error {
                None => println!("ok      {}", outcome.scenario),
                Some(error) => println!("failed  {} ({})", outcome.scenario, error),
            }
        }
    }
    Ok(())
}

/// Prints the report and returns whether the value was accepted.
fn handle_validate(config: &Config, json_output: bool, field: FieldKind, value: &str) -> bool {
    let reference = config.reference_data();
    let report = match validate_raw(field, value, &reference) {
        Ok(status) => ValidationReport {
            field,
            value: value.to_string(),
            valid: true,
            status: status.map(|s| s.to_string()),
            error: None,
        },
        Err(e) => ValidationReport {
            field,
            value: value.to_string(),
            valid: false,
            status: None,
            error: Some(e.to_string()),
        },
    };

    if json_output {
        println!("{}", to_json(&report));
    } else {
        println!("{}", format_validation_report(&report));
    }

    report.valid
}

fn handle_config(command: &ConfigCommands, config_path: &Path) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            println!("Config file: {}", config_path.display());
            println!();

            if config_path.exists() {
                println!("{}", std::fs::read_to_string(config_path)?);
            } else {
                println!("(file does not exist, using defaults)");
            }
        }
        ConfigCommands::Init { force } => {
            if config_path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default().save_to(config_path)?;
            println!("Wrote {}", config_path.display());
        }
    }
    Ok(())
}
