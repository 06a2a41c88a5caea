use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use user_registry::utils::{logger, validation::Validate};
use user_registry::{CliConfig, Command, FileUserSource, RegistryError, Settings, UserManager};

fn main() -> anyhow::Result<ExitCode> {
    let cli = CliConfig::parse();

    let settings = match Settings::load(
        cli.config.as_deref(),
        cli.organization.clone(),
        cli.seed.clone(),
    )
    .and_then(|s| s.validate().map(|_| s))
    {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            return Ok(report(&e));
        }
    };

    logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    tracing::debug!("Resolved settings: {:?}", settings);

    let manager = match &settings.seed_file {
        Some(seed) => {
            let source = FileUserSource::new(seed);
            match UserManager::from_source(settings.organization.clone(), &source) {
                Ok(manager) => manager,
                Err(e) => return Ok(report(&e)),
            }
        }
        None => UserManager::new(settings.organization.clone()),
    };

    let mut out = std::io::stdout().lock();
    run(&cli.command, &manager, &mut out).context("failed to write output")
}

fn run(
    command: &Command,
    manager: &UserManager,
    out: &mut impl std::io::Write,
) -> std::io::Result<ExitCode> {
    match command {
        Command::List => {
            writeln!(out, "{} ({} users)", manager.organization_name(), manager.len())?;
            for user in manager.users() {
                write_user(out, user)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Lookup { id } => match manager.get_user_by_id(*id) {
            Some(user) => {
                write_user(out, user)?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                writeln!(out, "not found")?;
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

fn write_user(out: &mut impl std::io::Write, user: &user_registry::User) -> std::io::Result<()> {
    match &user.email {
        Some(email) => writeln!(out, "{} <{}>", user.describe(), email),
        None => writeln!(out, "{}", user.describe()),
    }
}

fn report(e: &RegistryError) -> ExitCode {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    ExitCode::from(e.exit_code() as u8)
}
