use crate::utils::parser::parse_box_lengths;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "bondkit CLI - Inspect, edit and evaluate harmonic bond force parameters.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the attributes and bonds of a parameter file.
    Inspect(InspectArgs),
    /// Change the parameters of one bond in a parameter file.
    Set(SetArgs),
    /// Evaluate bond energies for every frame of an XYZ trajectory.
    Evaluate(EvaluateArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the bond parameter file (.toml or .csv).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub params: PathBuf,
}

/// Arguments for the `set` subcommand.
///
/// Fields that are not given keep their current value.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Path to the bond parameter file (.toml or .csv).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub params: PathBuf,

    /// Index of the bond to modify.
    #[arg(short, long, required = true, value_name = "INT")]
    pub index: usize,

    /// New index of the first particle.
    #[arg(short = 'a', long, value_name = "INT")]
    pub particle_a: Option<usize>,

    /// New index of the second particle.
    #[arg(short = 'b', long, value_name = "INT")]
    pub particle_b: Option<usize>,

    /// New equilibrium length.
    #[arg(short, long, value_name = "FLOAT")]
    pub length: Option<f64>,

    /// New force constant.
    #[arg(short, long, value_name = "FLOAT")]
    pub k: Option<f64>,

    /// Write the result here instead of overwriting the input file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Path to the bond parameter file (.toml or .csv).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub params: PathBuf,

    /// Path to the XYZ coordinate file; every frame is evaluated.
    #[arg(short = 'x', long, required = true, value_name = "PATH")]
    pub positions: PathBuf,

    /// Path to an evaluation configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the periodic box edge lengths from the config file.
    #[arg(long = "box", value_name = "X,Y,Z", value_parser = parse_box_lengths)]
    pub box_lengths: Option<[f64; 3]>,

    /// Restrict evaluation to a force group. Can be used multiple times.
    #[arg(short, long = "group", value_name = "GROUP")]
    pub groups: Vec<u8>,

    /// Skip force computation and report energies only.
    #[arg(long)]
    pub no_forces: bool,

    /// Write per-frame results to a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}
