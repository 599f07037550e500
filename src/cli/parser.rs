use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for iptareas
/// CLI application to migrate historical IP time-tracking sheets
#[derive(Parser)]
#[command(
    name = "iptareas",
    version = env!("CARGO_PKG_VERSION"),
    about = "Migrate historical IP time-tracking sheets into T_ANOTACIONES upload tables",
    long_about = None
)]
pub struct Cli {
    /// Override the input directory (useful for tests or alternate datasets)
    #[arg(global = true, long = "archivos")]
    pub archivos: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the migration and write the upload tables
    Migrate {
        /// Directory under which the timestamped output dir is created
        #[arg(long, value_name = "DIR")]
        output: Option<String>,

        /// First IdAnot assigned to the annotation rows
        #[arg(long = "primer-id", value_name = "N")]
        primer_id: Option<i64>,

        /// Output file format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Validation date stamped on every VALID row (DD/MM/YYYY, default: today)
        #[arg(long = "fecha-valid", value_name = "DATE")]
        fecha_valid: Option<String>,

        /// Validating user stamped on every VALID row
        #[arg(long = "usuario-valid", value_name = "ID")]
        usuario_valid: Option<String>,

        /// Drop rows whose chapa failed to clean instead of proposing them
        /// as missing users
        #[arg(long = "descartar-chapas-invalidas")]
        descartar_chapas_invalidas: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check that the input files exist")]
        check: bool,
    },
}
