use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use log::{error, info};
use teascript::{format_error, lexer::lexer::tokenize, parser::parser::parse};

const SAMPLE_SOURCE: &str = "43.56 + 6 ^ 2";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [file]", args[0]);
        return ExitCode::FAILURE;
    }

    let (source, file_name) = match args.get(1) {
        Some(file_path) => {
            let path = PathBuf::from(file_path);
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file_path.clone());

            match read_to_string(&path) {
                Ok(contents) => (contents, file_name),
                Err(err) => {
                    error!("failed to read {}: {}", path.display(), err);
                    eprintln!("Failed to read {}: {}", path.display(), err);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => (String::from(SAMPLE_SOURCE), String::from("shell")),
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", format_error(&err, &source));
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let ast = match parse(tokens, Rc::new(file_name)) {
        Ok(ast) => ast,
        Err(err) => {
            eprintln!("{}", format_error(&err, &source));
            return ExitCode::FAILURE;
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());

    println!("{}", ast);
    ExitCode::SUCCESS
}
