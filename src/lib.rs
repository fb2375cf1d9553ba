use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
    sync::Arc,
};

use alphabet::build_alphabet;
use batch::BatchCoder;
pub use cli::CLIParser;
pub use error::Error;
use huffman::{CodeTable, HuffmanTree};
use threadpool::ThreadPool;

pub mod alphabet;
pub mod batch;
mod cli;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    text: Option<String>,
    input_file: Option<PathBuf>,
    number_of_threads: usize,
    show_tree: bool,
}

pub struct EncodedLine {
    pub text: String,
    pub bits: String,
}

pub struct EncodingReport {
    pub code_table: CodeTable<char>,
    pub tree: Option<String>,
    pub lines: Vec<EncodedLine>,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })
}

fn read_input(arguments: &Arguments) -> Result<String> {
    if let Some(text) = &arguments.text {
        return Ok(text.clone());
    }
    let file_path = arguments.input_file.as_ref().ok_or(Error::NoInputProvided)?;
    let mut input = String::new();
    BufReader::new(open_input_file(file_path)?)
        .read_to_string(&mut input)
        .map_err(Error::FailedToReadInput)?;
    Ok(input)
}

/// Builds one code over all lines of the input, then encodes every line
/// on the thread pool and checks that it decodes back to the same text.
pub fn encode_input(arguments: &Arguments) -> Result<EncodingReport> {
    let input = read_input(arguments)?;
    let lines: Vec<&str> = input.lines().collect();
    let alphabet = build_alphabet(lines.iter().flat_map(|line| line.chars()));
    let tree = Arc::new(HuffmanTree::new(&alphabet)?);
    log::info!(
        "Encoding {} lines with an alphabet of {} symbols",
        lines.len(),
        tree.symbol_count()
    );

    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let coder = BatchCoder::new(Arc::clone(&tree), &threadpool);
    let encoded = coder
        .encode_all(lines.iter().map(|line| line.chars().collect()).collect())
        .into_iter()
        .collect::<std::result::Result<Vec<String>, _>>()?;
    let decoded = coder
        .decode_all(encoded.clone())
        .into_iter()
        .collect::<std::result::Result<Vec<Vec<char>>, _>>()?;

    let mut encoded_lines = Vec::with_capacity(lines.len());
    for (line_number, ((line, bits), symbols)) in
        lines.iter().zip(encoded).zip(decoded).enumerate()
    {
        if symbols.into_iter().collect::<String>() != *line {
            return Err(Error::RoundTripMismatch(line_number + 1));
        }
        encoded_lines.push(EncodedLine {
            text: line.to_string(),
            bits,
        });
    }

    Ok(EncodingReport {
        code_table: tree.code_table(),
        tree: arguments.show_tree.then(|| tree.to_string()),
        lines: encoded_lines,
    })
}

impl fmt::Display for EncodingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tree) = &self.tree {
            writeln!(f, "{}", tree)?;
        }
        write!(f, "{}", self.code_table)?;
        writeln!(
            f,
            "average code length: {:.4} bits",
            self.code_table.average_code_length()
        )?;
        for line in &self.lines {
            writeln!(f)?;
            writeln!(f, "{}", line.text)?;
            writeln!(f, "{}", line.bits)?;
        }
        Ok(())
    }
}
