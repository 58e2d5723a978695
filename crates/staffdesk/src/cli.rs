//! Clap derive structures for the `staffdesk` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// staffdesk -- staff and department administration from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "staffdesk",
    version,
    about = "Manage staff and departments from the command line",
    long_about = "A console for the staff/department administration REST API.\n\n\
        Every view goes through the same stores a graphical front end would use:\n\
        list, detail, create, edit and delete for both resources, plus a dashboard.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "STAFFDESK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL, e.g. http://localhost:8080/api (overrides profile)
    #[arg(long, short = 'u', env = "STAFFDESK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format [default: table, or `defaults.output` from config]
    #[arg(long, short = 'o', env = "STAFFDESK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "STAFFDESK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: 30]
    #[arg(long, env = "STAFFDESK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Treat `success: false` response envelopes as errors
    #[arg(long, env = "STAFFDESK_STRICT_ENVELOPE", global = true)]
    pub strict_envelope: bool,
}

impl GlobalOpts {
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Table)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage departments
    #[command(alias = "dept", alias = "d")]
    Departments(DepartmentsArgs),

    /// Manage staff members
    #[command(alias = "s")]
    Staff(StaffArgs),

    /// Show headcount totals (landing view)
    #[command(alias = "dash")]
    Dashboard,

    /// Inspect the view route table
    Routes(RoutesArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Departments ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DepartmentsArgs {
    #[command(subcommand)]
    pub command: DepartmentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DepartmentsCommand {
    /// List all departments
    #[command(alias = "ls")]
    List,

    /// Show one department by id
    Get { id: i64 },

    /// Show one department by its code
    ByCode { code: String },

    /// Search departments by name
    Search { name: String },

    /// Create a department
    Create(DepartmentCreate),

    /// Update a department (unspecified fields keep their current values)
    Update {
        id: i64,
        #[command(flatten)]
        patch: DepartmentPatch,
    },

    /// Delete a department
    #[command(alias = "rm")]
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct DepartmentCreate {
    /// Unique department code
    #[arg(long)]
    pub code: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Id of the parent department
    #[arg(long)]
    pub parent_id: Option<i64>,

    /// Depth in the hierarchy (not derived from the parent)
    #[arg(long)]
    pub level: Option<i32>,

    /// Create the department as inactive
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Debug, Args)]
pub struct DepartmentPatch {
    #[arg(long)]
    pub code: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Remove the description
    #[arg(long, conflicts_with = "description")]
    pub no_description: bool,

    #[arg(long)]
    pub parent_id: Option<i64>,

    /// Remove the parent department
    #[arg(long, conflicts_with = "parent_id")]
    pub no_parent: bool,

    #[arg(long)]
    pub level: Option<i32>,

    /// Set the active flag
    #[arg(long)]
    pub active: Option<bool>,
}

// ── Staff ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StaffArgs {
    #[command(subcommand)]
    pub command: StaffCommand,
}

#[derive(Debug, Subcommand)]
pub enum StaffCommand {
    /// List all staff
    #[command(alias = "ls")]
    List,

    /// Show one staff member by id
    Get { id: i64 },

    /// Show one staff member by staff number
    ByNo { staff_no: String },

    /// List the staff of one department
    ByDepartment { department_id: i64 },

    /// Search staff by name
    Search { name: String },

    /// Create a staff member
    Create(StaffCreate),

    /// Update a staff member (unspecified fields keep their current values)
    Update {
        id: i64,
        #[command(flatten)]
        patch: StaffPatch,
    },

    /// Delete a staff member
    #[command(alias = "rm")]
    Delete { id: i64 },
}

/// Optional personal fields shared by create and update.
#[derive(Debug, Args)]
pub struct StaffDetails {
    #[arg(long)]
    pub gender: Option<String>,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub id_card: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    /// Hire date (YYYY-MM-DD)
    #[arg(long)]
    pub hire_date: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}

/// Optional personal fields that `staff update --clear` can empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StaffField {
    Gender,
    BirthDate,
    Phone,
    Email,
    IdCard,
    Position,
    HireDate,
    Status,
    Address,
}

#[derive(Debug, Args)]
pub struct StaffCreate {
    /// Unique staff number
    #[arg(long)]
    pub staff_no: String,

    #[arg(long)]
    pub name: String,

    /// Department to assign
    #[arg(long)]
    pub department_id: Option<i64>,

    /// Create the staff member as inactive
    #[arg(long)]
    pub inactive: bool,

    #[command(flatten)]
    pub details: StaffDetails,
}

#[derive(Debug, Args)]
pub struct StaffPatch {
    #[arg(long)]
    pub staff_no: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub department_id: Option<i64>,

    /// Unassign the department
    #[arg(long, conflicts_with = "department_id")]
    pub no_department: bool,

    /// Empty these optional fields (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub clear: Vec<StaffField>,

    /// Set the active flag
    #[arg(long)]
    pub active: Option<bool>,

    #[command(flatten)]
    pub details: StaffDetails,
}

// ── Routes ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RoutesArgs {
    #[command(subcommand)]
    pub command: RoutesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoutesCommand {
    /// Print the route table
    #[command(alias = "ls")]
    List,

    /// Resolve a path to its route and view
    Resolve { path: String },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or overwrite a profile (prompts for missing values when interactive)
    Init(ConfigInit),

    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Make a profile the default
    Use { name: String },
}

#[derive(Debug, Args)]
pub struct ConfigInit {
    /// Profile name
    #[arg(long = "name", default_value = "default")]
    pub profile_name: String,

    /// API base URL for the profile
    #[arg(long = "url")]
    pub url: Option<String>,

    /// Timeout in seconds for this profile
    #[arg(long = "profile-timeout")]
    pub profile_timeout: Option<u64>,

    /// Accept invalid TLS certificates for this profile
    #[arg(long = "profile-insecure")]
    pub profile_insecure: bool,

    /// Path to a custom CA certificate (PEM)
    #[arg(long)]
    pub ca_cert: Option<std::path::PathBuf>,

    /// Reject `success: false` envelopes for this profile
    #[arg(long = "profile-strict")]
    pub profile_strict: bool,

    /// Make this the default profile
    #[arg(long)]
    pub default: bool,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}
