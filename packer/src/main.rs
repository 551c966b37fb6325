//! Main packer executable, to be used as cli tool. For help run this command
//! with `-h`.

#![warn(missing_docs)]

use anyhow::Error;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::{path::PathBuf, process::ExitCode};
use web_static_bundle::{ExtractError, extractor};
use web_static_bundle_packer::embed::{self, EmbedOptions};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    /// Print debug messages.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Packs html document and all files from its directory (recursively) into
    /// a single html file.
    ///
    /// Please note that all found files are added, including hidden files
    /// (starting with `.` on unix and with certain flags on windows).
    Embed {
        /// Output `bundle` path. If not set, `SELF_CONTAINED_<input name>`
        /// next to the input is used.
        #[arg(short, long)]
        output_path: Option<PathBuf>,

        /// Script executed before any script of every packed document.
        #[arg(short = 'P', long, default_value = "")]
        prepend_script: String,

        /// Script executed after all scripts of every packed document.
        #[arg(short = 'p', long, default_value = "")]
        append_script: String,

        /// Whether to follow links while traversing directories. If not set,
        /// uses sane defaults.
        #[arg(long)]
        follow_links: Option<bool>,

        /// Glob pattern of file names to skip. If not set, output file name is
        /// used.
        #[arg(long)]
        exclude_pattern: Option<String>,

        /// Entry html document.
        input_path: PathBuf,
    },
    /// Restores files packed into a `bundle`.
    Extract {
        /// The `bundle` to be extracted.
        input_path: PathBuf,

        /// Directory to write files to.
        #[arg(default_value = ".")]
        output_directory: PathBuf,
    },
}

fn main() -> Result<ExitCode, Error> {
    let arguments = Arguments::parse();

    SimpleLogger::new()
        .with_level(if arguments.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init()?;

    match arguments.command {
        Command::Embed {
            output_path,
            prepend_script,
            append_script,
            follow_links,
            exclude_pattern,
            input_path,
        } => {
            let mut embed_options = EmbedOptions {
                output_path,
                prepend_script,
                append_script,
                exclude_pattern,
                ..EmbedOptions::default()
            };
            if let Some(follow_links) = follow_links {
                embed_options.follow_links = follow_links;
            }

            embed::embed(&input_path, &embed_options, log::logger())?;
        }
        Command::Extract {
            input_path,
            output_directory,
        } => {
            if let Err(error) = extractor::extract(&input_path, &output_directory, log::logger()) {
                if error.downcast_ref::<ExtractError>().is_some() {
                    log::error!(
                        "{} does not look like a valid bundle: {:#}",
                        input_path.display(),
                        error
                    );
                } else {
                    log::error!("extraction failed: {:#}", error);
                }
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
