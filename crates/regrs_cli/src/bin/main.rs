use clap::Parser;
use regrs::{MatchError, Program, RegexOptions, Submatches};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const STDIN_NAME: &str = "(standard input)";

#[derive(Parser)]
#[command(
    name = "regrs",
    version,
    about = "Print lines that match a regular expression"
)]
struct Cli {
    /// Regular expression to search for
    pattern: String,

    /// Files to search ("-" or none for standard input)
    files: Vec<PathBuf>,

    /// Select lines that do not match
    #[arg(short = 'v', long = "invert-match")]
    invert: bool,

    /// Print only the number of selected lines of each input
    #[arg(short = 'c', long = "count")]
    count: bool,

    /// Prefix output with the line number
    #[arg(short = 'n', long = "line-number")]
    line_number: bool,

    /// Prefix output with the byte offset of the line (of the match with -o or -g)
    #[arg(short = 'b', long = "byte-offset")]
    byte_offset: bool,

    /// Print only the matched text
    #[arg(short = 'o', long = "only-matching")]
    only_matching: bool,

    /// Print only submatch N (0 is the whole match)
    #[arg(
        short = 'g',
        long = "group",
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(0..10)
    )]
    group: Option<u8>,

    /// Report every non-overlapping match of a line, not just the first
    #[arg(long)]
    all: bool,
}

impl Cli {
    fn prints_matches(&self) -> bool {
        !self.invert && (self.only_matching || self.group.is_some())
    }
}

fn write_number(out: &mut impl Write, n: usize) -> io::Result<()> {
    let mut buffer = itoa::Buffer::new();
    out.write_all(buffer.format(n).as_bytes())
}

struct Scanner<'a, W: Write> {
    cli: &'a Cli,
    program: &'a Program,
    options: RegexOptions,
    out: W,
    show_names: bool,
    selected: bool, // some line of some input was selected
    failed: bool,   // some error was reported
}

impl<W: Write> Scanner<'_, W> {
    /// Scan one input line by line.
    fn scan(&mut self, name: &str, mut reader: impl BufRead) -> io::Result<()> {
        let mut buf = Vec::new();
        let mut line_number = 0;
        let mut offset = 0;
        let mut count = 0;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf)?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);
            let line: &str = &line;
            let line = line.strip_suffix('\n').unwrap_or(line);
            let line = line.strip_suffix('\r').unwrap_or(line);

            if self.select(name, line_number, offset, line)? {
                count += 1;
            }
            offset += read;
        }

        if self.cli.count {
            if self.show_names {
                write!(self.out, "{}:", name)?;
            }
            write_number(&mut self.out, count)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Handle one line. Returns whether it was selected.
    fn select(
        &mut self,
        name: &str,
        line_number: usize,
        offset: usize,
        line: &str,
    ) -> io::Result<bool> {
        let matches = match self.matches(line) {
            Ok(matches) => matches,
            Err(err) => {
                eprintln!("regrs: {}:{}: {}", name, line_number, err);
                self.failed = true;
                return Ok(false);
            }
        };

        if matches.is_empty() != self.cli.invert {
            return Ok(false);
        }
        self.selected = true;
        if self.cli.count {
            return Ok(true);
        }

        if !self.cli.prints_matches() {
            self.prefix(name, line_number, offset)?;
            writeln!(self.out, "{}", line)?;
            return Ok(true);
        }

        let slot = self.cli.group.map_or(0, usize::from);
        for subs in &matches {
            if let (Some((start, _)), Some(text)) = (subs.span(slot), subs.get(slot, line)) {
                self.prefix(name, line_number, offset + start)?;
                writeln!(self.out, "{}", text)?;
            }
        }
        Ok(true)
    }

    fn matches(&self, line: &str) -> Result<Vec<Submatches>, MatchError> {
        if self.cli.all && self.cli.prints_matches() {
            return self.program.find_iter(line, &self.options).collect();
        }
        Ok(self
            .program
            .search(line, 0, &self.options)?
            .into_iter()
            .collect())
    }

    fn prefix(&mut self, name: &str, line_number: usize, offset: usize) -> io::Result<()> {
        if self.show_names {
            write!(self.out, "{}:", name)?;
        }
        if self.cli.line_number {
            write_number(&mut self.out, line_number)?;
            self.out.write_all(b":")?;
        }
        if self.cli.byte_offset {
            write_number(&mut self.out, offset)?;
            self.out.write_all(b":")?;
        }
        Ok(())
    }

    /// Exit status: 0 when a line was selected, 1 when none was, 2 on error.
    fn status(&self) -> ExitCode {
        if self.failed {
            ExitCode::from(2)
        } else if self.selected {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = RegexOptions::default();

    let program = match Program::compile_with(&cli.pattern, &options) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("regrs: {:?}: {}", cli.pattern, err);
            return ExitCode::from(2);
        }
    };

    let stdout = io::stdout();
    let mut scanner = Scanner {
        cli: &cli,
        program: &program,
        options,
        out: BufWriter::new(stdout.lock()),
        show_names: cli.files.len() > 1,
        selected: false,
        failed: false,
    };

    if cli.files.is_empty() {
        if let Err(err) = scanner.scan(STDIN_NAME, io::stdin().lock()) {
            eprintln!("regrs: {}: {}", STDIN_NAME, err);
            scanner.failed = true;
        }
    }

    for path in &cli.files {
        let result = if path.as_os_str() == "-" {
            scanner.scan(STDIN_NAME, io::stdin().lock())
        } else {
            let name = path.display().to_string();
            File::open(path).and_then(|file| scanner.scan(&name, BufReader::new(file)))
        };
        if let Err(err) = result {
            eprintln!("regrs: {}: {}", path.display(), err);
            scanner.failed = true;
        }
    }

    if let Err(err) = scanner.out.flush() {
        eprintln!("regrs: {}", err);
        return ExitCode::from(2);
    }
    scanner.status()
}
