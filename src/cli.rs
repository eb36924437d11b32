use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "legalease")]
#[command(about = "Legal document generation and document analysis client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_base: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: browse, generate, download, upload (default)
    Shell {
        /// Where downloaded documents are saved
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the document types
    Types {
        /// Compare with the backend's catalog
        #[arg(long)]
        remote: bool,
    },

    /// Generate one document; missing fields are prompted for
    Generate {
        /// Document type identifier, e.g. nda
        #[arg(required = true)]
        document_type: String,

        /// Field value as field=value (repeatable)
        #[arg(short = 's', long = "set", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Save the Word version afterwards
        #[arg(short, long)]
        download: bool,

        /// Where the Word file is saved
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Upload a document for text extraction and analysis
    Upload {
        /// .pdf, .docx, .doc or .txt file
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Show or edit the configuration
    Config {
        /// Set the backend base URL
        #[arg(long)]
        set_api_base: Option<String>,

        /// Show the configuration
        #[arg(long)]
        show: bool,
    },
}

/// `field=value`; the value may itself contain `=`
pub fn parse_field(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected field=value, got: {}", s))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("Missing field name in: {}", s));
    }
    Ok((field.to_string(), value.to_string()))
}
