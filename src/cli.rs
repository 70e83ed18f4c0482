use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memorabilia")]
#[command(about = "Terminal showcase of favorite things and experience", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of the default search path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Browse favorites and experience (default)
    Browse,

    /// Fetch the bookmark collection and save it as JSON
    Import {
        /// Where to write the collection (overrides bookmarks.output_path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default configuration file
    InitConfig {
        /// Target path (defaults to the user config directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

impl Cli {
    /// Subcommand to run, `browse` when none was given
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Browse)
    }
}
