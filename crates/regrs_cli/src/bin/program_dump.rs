use clap::Parser;
use regrs::Program;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "program_dump",
    version,
    about = "Show the compiled program of regular expressions"
)]
struct Cli {
    /// Patterns to compile
    #[arg(required = true)]
    patterns: Vec<String>,

    /// Print each program as JSON instead of a listing
    #[arg(long)]
    json: bool,
}

fn dump(pattern: &str, program: &Program, json: bool) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(program).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    println!("=== {:?} ===", pattern);
    println!("{}", program);
    println!();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut status = ExitCode::SUCCESS;

    for pattern in &cli.patterns {
        let result = Program::compile(pattern)
            .map_err(|e| e.to_string())
            .and_then(|program| dump(pattern, &program, cli.json));
        if let Err(e) = result {
            eprintln!("program_dump: {:?}: {}", pattern, e);
            status = ExitCode::from(1);
        }
    }
    status
}
