use std::env;
use std::process;

use revlines::open_reverse;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <path> [-n COUNT] [--all] [--buffer BYTES] [--encoding LABEL]",
            args[0]
        );
        process::exit(1);
    }

    let path = &args[1];
    let mut count: Option<usize> = Some(10);
    let mut buffer_capacity: Option<usize> = None;
    let mut encoding: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-n" => {
                count = Some(numeric_value(&args, i, "-n"));
                i += 2;
            }
            "--all" => {
                count = None;
                i += 1;
            }
            "--buffer" => {
                buffer_capacity = Some(numeric_value(&args, i, "--buffer"));
                i += 2;
            }
            "--encoding" => {
                match args.get(i + 1) {
                    Some(label) => encoding = Some(label.clone()),
                    None => {
                        eprintln!("ERROR: --encoding requires a label argument.");
                        process::exit(1);
                    }
                }
                i += 2;
            }
            other => {
                eprintln!("ERROR: Unknown argument: {}", other);
                process::exit(1);
            }
        }
    }

    let lines = match open_reverse(path, buffer_capacity, encoding.as_deref()) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    let mut emitted = 0usize;
    for line in lines {
        match line {
            Ok(text) => print!("{}", text),
            Err(e) => {
                eprintln!("ERROR: {}", e);
                if e.is_retryable() {
                    eprintln!("Hint: retry with a larger --buffer.");
                }
                process::exit(1);
            }
        }

        emitted += 1;
        if count.map_or(false, |n| emitted >= n) {
            break;
        }
    }
}

/// Parse the numeric value following a flag, exiting with a usage error if
/// it is missing or not a positive integer.
fn numeric_value(args: &[String], flag_idx: usize, flag: &str) -> usize {
    match args.get(flag_idx + 1).map(|v| v.parse::<usize>()) {
        Some(Ok(n)) if n > 0 => n,
        _ => {
            eprintln!("ERROR: {} requires a positive integer argument.", flag);
            process::exit(1);
        }
    }
}
