use std::path::PathBuf;
use structopt::StructOpt;

use crate::labels::{Category, Status};

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Log a new entry, dated today.
    Add {
        /// What was done.
        #[structopt(default_value = "")]
        task: String,

        /// The kind of activity.
        #[structopt(short, long, default_value = "Job Application", possible_values = &Category::LABELS, case_insensitive = true)]
        category: Category,

        /// Where the task stands.
        #[structopt(short, long, default_value = "Pending", possible_values = &Status::LABELS, case_insensitive = true)]
        status: Status,

        /// Optional free-text notes.
        #[structopt(short, long, default_value = "")]
        notes: String,
    },
    /// List all entries, newest first.
    List {
        /// Render the entries as a table.
        #[structopt(long)]
        table: bool,
    },
    /// Export all entries to a csv file.
    Export {
        /// Write the csv to a different file.
        #[structopt(parse(from_os_str), short, long)]
        output: Option<PathBuf>,

        /// Also write the csv document to the standard output.
        #[structopt(long)]
        stdout: bool,
    },
    /// Chart the number of entries logged per day and category.
    Plot {
        /// Write the chart to a different svg file.
        #[structopt(parse(from_os_str), short, long)]
        output: Option<PathBuf>,
    },
    /// Init the store
    Init,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "jobtrack", about = "A minimalistic job search and habit log.")]
pub struct CommandLineArgs {
    #[structopt(subcommand)]
    pub action: Command,

    /// Use a different store file.
    #[structopt(parse(from_os_str), short, long)]
    pub database: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLineArgs {
        CommandLineArgs::from_iter_safe(args).unwrap()
    }

    #[test]
    fn add_defaults_to_first_options() {
        match parse(&["jobtrack", "add"]).action {
            Command::Add { task, category, status, notes } => {
                assert_eq!(task, "");
                assert_eq!(category, Category::JobApplication);
                assert_eq!(status, Status::Pending);
                assert_eq!(notes, "");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn add_takes_labels() {
        let args = parse(&[
            "jobtrack",
            "-d",
            "/tmp/store.db",
            "add",
            "Coffee chat",
            "--category",
            "networking",
            "-s",
            "In Progress",
            "-n",
            "went well",
        ]);
        assert_eq!(args.database, Some(PathBuf::from("/tmp/store.db")));
        match args.action {
            Command::Add { task, category, status, notes } => {
                assert_eq!(task, "Coffee chat");
                assert_eq!(category, Category::Networking);
                assert_eq!(status, Status::InProgress);
                assert_eq!(notes, "went well");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(CommandLineArgs::from_iter_safe(&["jobtrack", "add", "-c", "Gardening"]).is_err());
    }

    #[test]
    fn counts_verbosity() {
        assert_eq!(parse(&["jobtrack", "-vv", "list"]).verbose, 2);
    }
}
