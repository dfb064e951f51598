use pds_parser::{logging, recognize_constant};
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize global logging system
    logging::init_global_logging()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <literal|file.pds>", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let input = read_input(&args[1])?;

    match recognize_constant(&input) {
        Ok(constant) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&constant.structured_dump())?
            );
            Ok(())
        }
        Err(error) => {
            eprintln!("error[{}]: {}", error.error_code(), error);
            std::process::exit(1);
        }
    }
}

/// Treat the argument as a file path when one exists, otherwise as an inline
/// literal
fn read_input(arg: &str) -> Result<String, Box<dyn std::error::Error>> {
    let path = Path::new(arg);
    if path.is_file() {
        Ok(std::fs::read_to_string(path)?)
    } else {
        Ok(arg.to_string())
    }
}

fn print_help(program_name: &str) {
    println!("PDS constant recognizer v{}", env!("CARGO_PKG_VERSION"));
    println!("Recognizes one scalar constant and prints its structured dump");
    println!();
    println!("USAGE:");
    println!("    {} <literal>      # Recognize an inline literal", program_name);
    println!("    {} <file.pds>     # Recognize the constant at the start of a file", program_name);
    println!();
    println!("EXAMPLES:");
    println!("    {} '\"hello\"'", program_name);
    println!("    {} '-inf'", program_name);
    println!("    {} my.Enum.VALUE", program_name);
    println!();
    println!("ENVIRONMENT:");
    println!("    PDS_LOGGING_MIN_LEVEL        error|warn|info|debug");
    println!("    PDS_LOGGING_ENABLE_CONSOLE   true|false");
}
