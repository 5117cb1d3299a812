//! # brdoc CLI Entry Point
//!
//! Thin shell over the library crates: check documents, apply display
//! masks, and parse or format currency text, from scripts and shells.
//! The exit code of `check` reflects validity, so it composes with `&&`
//! and `if` in shell pipelines.

use clap::Parser;

use brdoc_core::{apply_mask, DocumentKind};
use brdoc_field::{evaluate, FieldConfig, FieldState};
use brdoc_numeric::{format_currency, parse_currency, NumberLocale};

/// Brazilian document validation toolbox.
///
/// Validates CPF/CNPJ/CEP text, formats display masks, and handles
/// locale-aware currency text.
#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a document; exits non-zero when invalid.
    Check(CheckArgs),
    /// Insert a kind's display mask into a digits-only string.
    Mask(MaskArgs),
    /// Parse or format currency text.
    Money(MoneyArgs),
}

#[derive(clap::Args, Debug)]
struct CheckArgs {
    /// Document kind to validate against.
    #[arg(long, value_enum)]
    kind: KindArg,
    /// The text to validate.
    text: String,
    /// Treat blank input as a failure.
    #[arg(long)]
    required: bool,
    /// Leave valid input unmasked in the reported display text.
    #[arg(long)]
    no_mask: bool,
}

#[derive(clap::Args, Debug)]
struct MaskArgs {
    /// Document kind whose mask to apply.
    #[arg(long, value_enum)]
    kind: KindArg,
    /// Digits-only input of the kind's unmasked length.
    digits: String,
}

#[derive(clap::Args, Debug)]
struct MoneyArgs {
    #[command(subcommand)]
    command: MoneyCommands,
}

#[derive(clap::Subcommand, Debug)]
enum MoneyCommands {
    /// Parse currency text into a plain decimal.
    Parse {
        /// Formatting culture.
        #[arg(long, value_enum, default_value = "pt-br")]
        locale: LocaleArg,
        /// The currency text, e.g. "R$ 1.234,56".
        text: String,
    },
    /// Format a plain decimal as currency text.
    Format {
        /// Formatting culture.
        #[arg(long, value_enum, default_value = "pt-br")]
        locale: LocaleArg,
        /// The value, written with a dot decimal point.
        value: rust_decimal::Decimal,
    },
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum KindArg {
    Cpf,
    Cnpj,
    Cep,
}

impl From<KindArg> for DocumentKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Cpf => Self::Cpf,
            KindArg::Cnpj => Self::Cnpj,
            KindArg::Cep => Self::Cep,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum LocaleArg {
    PtBr,
    EnUs,
}

impl From<LocaleArg> for NumberLocale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::PtBr => Self::pt_br(),
            LocaleArg::EnUs => Self::en_us(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Check(args) => {
            let config = FieldConfig {
                required: args.required,
                mask_on_blur: !args.no_mask,
                ..FieldConfig::default()
            };
            let result = evaluate(args.kind.into(), &args.text, &config);
            println!("{}", serde_json::to_string_pretty(&result)?);
            if result.state == FieldState::Invalid {
                std::process::exit(1);
            }
        }
        Commands::Mask(args) => {
            println!("{}", apply_mask(args.kind.into(), &args.digits));
        }
        Commands::Money(args) => match args.command {
            MoneyCommands::Parse { locale, text } => {
                let value = parse_currency(&text, &locale.into())?;
                println!("{value}");
            }
            MoneyCommands::Format { locale, value } => {
                println!("{}", format_currency(value, &locale.into()));
            }
        },
    }

    Ok(())
}
