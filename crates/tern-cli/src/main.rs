mod demos;

use owo_colors::OwoColorize;
use tern_interpreter::run;
use tern_syntax::error::Error;

fn render_error(err: &Error) {
    eprintln!(
        "{}: {}",
        format!("{} error", err.kind).red().bold(),
        err.msg.red()
    );
}

fn print_usage() {
    eprintln!("Usage: tern [--debug] <program>");
    eprintln!("       tern --list");
    eprintln!();
    eprintln!("Runs one of the bundled demo programs.");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut debug = false;
    let mut name: Option<&str> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--debug" | "-d" => debug = true,
            "--list" | "-l" => {
                for n in demos::NAMES {
                    println!("{}", n);
                }
                return;
            }
            s if s.starts_with('-') => {
                eprintln!("{}: {}", "error".red().bold(), format!("Unknown flag '{}'", s).red());
                print_usage();
                std::process::exit(2);
            }
            s => name = Some(s),
        }
    }

    let name = match name {
        Some(n) => n,
        None => {
            print_usage();
            std::process::exit(2);
        }
    };

    let program = match demos::by_name(name) {
        Some(p) => p,
        None => {
            eprintln!(
                "{}: {}",
                "error".red().bold(),
                format!("Unknown program '{}'. Try --list.", name).red()
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&program, debug) {
        render_error(&e);
        std::process::exit(1);
    }
}
