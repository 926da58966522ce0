use std::io::BufRead;

/// Library path carried by one `otool -L` line, if the line is a dependency record.
///
/// Records start with a tab; the first whitespace-delimited token after it is the
/// path and the trailing `(compatibility version ...)` part is dropped.
pub fn parse_record(line: &str) -> Option<&str> {
    let record = line.strip_prefix('\t')?;
    record.split_whitespace().next()
}

/// Every dependency record of a full listing, in output order
pub fn parse_listing(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(parse_record)
        .map(str::to_string)
        .collect()
}

/// Streaming variant of [`parse_listing`] for a child process pipe.
/// Lines that are not valid UTF-8 are decoded lossily instead of failing the read.
pub fn read_listing<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut references = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        if let Some(reference) = parse_record(line.trim_end_matches('\r')) {
            references.push(reference.to_string());
        }
    }
    Ok(references)
}
