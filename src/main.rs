use anyhow::Context;
use clap::Parser;
use gwa_calc::adapters::csv_source::CsvRowSource;
use gwa_calc::app::{self, session::Session};
use gwa_calc::config::{CalcArgs, Command, LogFormat, OutputFormat, ShellArgs};
use gwa_calc::domain::ports::{ConfigProvider, RowSource};
use gwa_calc::utils::error::ErrorSeverity;
use gwa_calc::utils::{logger, validation::Validate};
use gwa_calc::{CliConfig, ConsoleSink, GwaConfig, GwaError, Row};
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = load_config(cli.config.as_deref())?;

    let outcome = match &cli.command {
        Command::Calc(args) => run_calc(&config, args),
        Command::Shell(args) => run_shell(&config, args),
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> anyhow::Result<GwaConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            GwaConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?
        }
        None => GwaConfig::default(),
    };
    config.validate().context("configuration validation failed")?;
    Ok(config)
}

fn read_rows(input: Option<&str>, specs: &[String]) -> Result<Vec<Row>, GwaError> {
    let mut rows = match input {
        Some(path) => CsvRowSource::from_path(path)?.read_rows()?,
        None => Vec::new(),
    };
    for spec in specs {
        rows.push(app::parse_row_spec(spec)?);
    }
    Ok(rows)
}

fn run_calc(config: &GwaConfig, args: &CalcArgs) -> Result<(), GwaError> {
    let rows = read_rows(args.input.as_deref(), &args.rows)?;
    if rows.is_empty() {
        tracing::warn!("no rows given, using a single default row");
    }
    if !args.no_validate {
        config.row_constraints().check_rows(&rows)?;
    }

    match args.format {
        OutputFormat::Text => {
            let mut controller = app::build_controller(config, ConsoleSink::stdout());
            controller.load_rows(rows);
            controller.calculate()?;
        }
        OutputFormat::Json => {
            let report = app::calculate_report(config, rows)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn run_shell(config: &GwaConfig, args: &ShellArgs) -> Result<(), GwaError> {
    let rows = read_rows(args.input.as_deref(), &[])?;
    let mut constraints = config.row_constraints();
    if args.no_validate {
        constraints.enabled = false;
    }
    constraints.check_rows(&rows)?;

    let mut controller = app::build_controller(config, ConsoleSink::stdout());
    if !rows.is_empty() {
        controller.load_rows(rows);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        println!("gwa-calc shell, type 'help' for commands");
    }
    let mut session = Session::new(controller, constraints);
    session.run(stdin.lock(), std::io::stdout())
}
