use std::fs::File;
use std::io;
use std::io::BufRead;
use std::path::Path;

use log::warn;

pub fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}

/// Lines starting with `#` are comments in formula files.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// The formula carried by one input line, if any.
///
/// Comments yield `None`. So does a line that is not valid UTF-8, which is
/// reported on stderr so the rest of the input is still processed. Other I/O
/// errors are returned.
pub fn formula_line(line: io::Result<String>) -> io::Result<Option<String>> {
    match line {
        Ok(line) if is_comment(&line) => Ok(None),
        Ok(line) => Ok(Some(line)),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            warn!("Skipping unreadable line: {}", e);
            eprintln!("error: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
