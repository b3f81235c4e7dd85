pub mod render;
pub mod viewer;

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, ValueHint};

/// Argument definitions for the `drivesync` binary.
pub fn cli() -> Command {
    Command::new("drivesync")
        .version(clap::crate_version!())
        .about("\u{1F697} DriveSync - Intelligent driver assistance analysis figure")
        .arg(
            Arg::new("config")
                .help("Path to a JSON configuration file")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help(
                    "File path the PNG figure is written to. \
                     Overrides the output file specified in the configuration file.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("dpi")
                .long("dpi")
                .help("Raster resolution in dots per inch.")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the timeline noise, for reproducible figures.")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("html_report")
                .long("report")
                .help("Also write an interactive HTML report to this path.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("font")
                .long("font")
                .help("TrueType font used for all text. Discovered from system font directories by default.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no_display")
                .long("no-display")
                .help("Do not open the result in a viewer.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("print_config")
                .long("print-config")
                .help("Print the effective configuration as JSON and exit.")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
