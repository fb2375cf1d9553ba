use std::env::args_os;
use std::process::ExitCode;

use huffman_coder::{encode_input, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match encode_input(&arguments) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Encoding failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
