use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(name = "vibenotes", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/vibenotes/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Notes file, overrides `[storage] path`
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Keep everything in memory; nothing is read or written
    #[arg(long, global = true, default_value_t = false)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum Command {
    /// Print notes, most recently updated first
    List {
        /// Only notes in this folder
        #[arg(long, conflicts_with = "uncategorized")]
        folder: Option<String>,

        /// Only notes without a folder
        #[arg(long, default_value_t = false)]
        uncategorized: bool,

        /// Case-insensitive match on title or content
        #[arg(long)]
        search: Option<String>,
    },
    /// Print folders with their note counts
    Folders,
    /// Create a note and print its id
    New {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        folder: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },
    /// Create a folder and print its id
    NewFolder {
        name: String,

        /// `#rrggbb`; picked from the palette when omitted
        #[arg(long)]
        color: Option<String>,
    },
    /// Write a note's markdown to a file and print the path
    Export {
        id: String,

        /// Target directory, overrides `[export] directory`
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the resolved notes file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_launches_the_ui() {
        let cli = Cli::try_parse_from(["vibenotes"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.ephemeral);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["vibenotes", "list", "--data", "/tmp/n.json"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/n.json")));
    }

    #[test]
    fn folder_and_uncategorized_conflict() {
        let result =
            Cli::try_parse_from(["vibenotes", "list", "--folder", "f", "--uncategorized"]);
        assert!(result.is_err());
    }

    #[test]
    fn new_folder_requires_a_name() {
        assert!(Cli::try_parse_from(["vibenotes", "new-folder"]).is_err());
    }
}
