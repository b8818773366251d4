use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "legalconv",
    version,
    about = "Convert legislation HTML and case-law XML into structured records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Convert(ConvertArgs),
    Inventory(InventoryArgs),
    Status(StatusArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Pipeline {
    Legislation,
    CaseLaw,
}

impl Pipeline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legislation => "legislation",
            Self::CaseLaw => "case-law",
        }
    }

    pub fn input_extension(self) -> &'static str {
        match self {
            Self::Legislation => ".html",
            Self::CaseLaw => ".xml",
        }
    }

    pub fn output_extension(self) -> &'static str {
        match self {
            Self::Legislation => ".json",
            Self::CaseLaw => ".html",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[arg(long, default_value = "input")]
    pub input_root: PathBuf,

    #[arg(long, default_value = "output")]
    pub output_root: PathBuf,

    #[arg(long, value_enum, default_value_t = Pipeline::Legislation)]
    pub pipeline: Pipeline,

    #[arg(long, default_value = ".cache/legalconv")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct InventoryArgs {
    #[arg(long, default_value = "input")]
    pub input_root: PathBuf,

    #[arg(long, value_enum, default_value_t = Pipeline::Legislation)]
    pub pipeline: Pipeline,

    #[arg(long, default_value = ".cache/legalconv")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value = ".cache/legalconv")]
    pub cache_root: PathBuf,
}
