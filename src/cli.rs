use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_text_argument(command);
        let command = Self::register_input_file_argument(command);
        let command = Self::register_threads_argument(command);
        Self::register_show_tree_argument(command)
    }

    fn register_text_argument(command: Command) -> Command {
        command.arg(Self::create_text_argument())
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_show_tree_argument(command: Command) -> Command {
        command.arg(Self::create_show_tree_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_text_argument() -> Arg {
        Arg::new("text")
            .help("Text to encode, every line is encoded separately")
            .required_unless_present("input_file")
            .conflicts_with("input_file")
    }

    fn create_input_file_argument() -> Arg {
        arg!(input_file: -f --input_file <PATH> "Path to a text file to encode")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_show_tree_argument() -> Arg {
        arg!(show_tree: --show_tree "Print the huffman tree")
            .action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            text: Self::extract_text_argument(matches),
            input_file: Self::extract_input_file_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            show_tree: Self::extract_show_tree_argument(matches),
        }
    }

    fn extract_text_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("text").cloned()
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("input_file").cloned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_show_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("show_tree")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
