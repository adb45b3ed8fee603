// Passport data page generator
// Command line front end over the datapage library

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::info;

use datapage::{
    form::{download_name, parse_date, parse_form_data},
    models::MrzValidationResult,
    mrz::{format_check_line, format_name_line},
    utils::PassportError,
    validation::{FormatValidator, MrzValidator},
    DataPageGenerator, GeneratorConfig,
};

#[derive(Parser)]
#[command(name = "datapage", about = "Generate passport data page footer lines")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Public base URL of the asset store
    #[arg(long, global = true, env = "DATAPAGE_ASSET_BASE_URL")]
    asset_base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the two footer lines for the given fields
    Lines {
        #[arg(long)]
        surname: String,
        #[arg(long)]
        first_name: String,
        /// Date of birth (YYYY-MM-DD or "DD Mon YYYY")
        #[arg(long)]
        dob: String,
        /// Date of issue, defaults to today
        #[arg(long)]
        issued: Option<String>,
        #[arg(long, default_value_t = 0)]
        number: u32,
        /// Document version, defaults to the configured one
        #[arg(long)]
        version: Option<u32>,
    },
    /// Build a full data page from form fields and print it as JSON
    ///
    /// `userId` and `sendToDb` are parsed but nothing is persisted or
    /// uploaded; with `sendToDb=true` the output only carries the URL the
    /// stored image would have.
    Generate {
        /// Form field as key=value, e.g. --field surname=DOE
        #[arg(long = "field", value_parser = parse_key_value)]
        fields: Vec<(String, String)>,
    },
    /// Verify the checksum digits of a printed check line
    Verify {
        check_line: String,
        #[arg(long)]
        name_line: Option<String>,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig, PassportError> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(url) = &cli.asset_base_url {
        config = config.with_asset_base_url(url.clone());
    }
    Ok(config)
}

fn print_mrz_report(result: &MrzValidationResult) {
    let mark = |ok: bool| if ok { "PASSED" } else { "FAILED" };
    println!("CHECK LINE VERIFICATION:");
    println!("  Document number check: {}", mark(result.document_check_valid));
    println!("  Date of birth check:   {}", mark(result.date_of_birth_check_valid));
    println!("  Date of issue check:   {}", mark(result.date_of_issue_check_valid));
    println!("  Composite check:       {}", mark(result.composite_check_valid));
    for issue in &result.issues {
        println!("  - {}", issue.message);
    }
}

fn run(cli: Cli, today: NaiveDate) -> Result<bool, PassportError> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Lines {
            surname,
            first_name,
            dob,
            issued,
            number,
            version,
        } => {
            let date_of_birth = parse_date(&dob)?;
            let date_of_issue = match issued {
                Some(raw) => parse_date(&raw)?,
                None => today,
            };
            let version = version.unwrap_or(config.passport_version);

            println!("{}", format_name_line(&surname, &first_name));
            println!("{}", format_check_line(version, number, date_of_birth, date_of_issue));
            Ok(true)
        }
        Command::Generate { fields } => {
            let fields: HashMap<String, String> = fields.into_iter().collect();
            if let Some(raw) = fields.get("passportNumber") {
                let requested = FormatValidator::validate_requested_number(raw, &config);
                if !requested.is_valid {
                    let messages: Vec<&str> =
                        requested.issues.iter().map(|i| i.message.as_str()).collect();
                    return Err(PassportError::Validation(messages.join("; ")));
                }
            }

            let submission = parse_form_data(&fields, today)?;
            let file_name = download_name(&submission.first_name, &submission.surname);
            let register = submission.register;
            let user_id = submission.user_id;

            let generator = DataPageGenerator::new(config);
            let record = submission.into_record(generator.config().passport_version);
            let mut page = generator.generate(record, today)?;
            if register {
                generator.register(&mut page);
            }
            info!(
                "generated {} (user {}, register: {})",
                file_name, user_id, register
            );

            println!("{}", serde_json::to_string_pretty(&page)?);
            Ok(true)
        }
        Command::Verify {
            check_line,
            name_line,
        } => {
            let result = MrzValidator::validate(&check_line);
            print_mrz_report(&result);
            let mut is_valid = result.is_valid;

            if let Some(line) = name_line {
                let issues = MrzValidator::validate_name_line(&line);
                println!("NAME LINE: {}", if issues.is_empty() { "PASSED" } else { "FAILED" });
                for issue in &issues {
                    println!("  - {}", issue.message);
                }
                is_valid &= issues.is_empty();
            }
            Ok(is_valid)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    match run(cli, today) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
