use rat23s_compiler::config::RuntimeConfig;
use rat23s_compiler::{logging, pipeline, PipelineError};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    input: String,
    output: Option<PathBuf>,
    tokens: bool,
    json: bool,
    config: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Run(CliOptions),
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("rat23s_compiler");

    let options = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(Command::Help) => {
            print_help(program_name);
            return;
        }
        Ok(Command::Version) => {
            print_version();
            return;
        }
        Ok(Command::Run(options)) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: {} <input> [-o <output>] [--tokens] [--json] [--config <file>]", program_name);
            eprintln!("       {} --help", program_name);
            std::process::exit(1);
        }
    };

    let config = match load_config(&options) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    // Initialize global logging system
    if let Err(e) = logging::config::init_runtime_preferences(config.logging.clone()) {
        eprintln!("Warning: {}", e);
    }
    if let Err(e) = logging::init_global_logging() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Validate pipeline configuration
    if let Err(e) = pipeline::validate_pipeline() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(error) = run(&options, &config) {
        eprintln!("\nFAILED: {}", error);
        if config.syntax.echo_errors_to_console {
            if let Some(report) = error.source_report() {
                eprintln!("{}", report);
            }
        }
        std::process::exit(1);
    }
}

fn run(options: &CliOptions, config: &RuntimeConfig) -> Result<(), PipelineError> {
    // The output file is created only after the input has been accepted
    let output_path = options.output.as_deref();
    let open = || pipeline::open_output(output_path);

    if options.tokens {
        pipeline::list_tokens_with(&options.input, open, options.json, config)?;
    } else {
        pipeline::process_file_with(&options.input, open, config)?;
    }
    Ok(())
}

fn load_config(options: &CliOptions) -> Result<RuntimeConfig, String> {
    match &options.config {
        Some(path) => RuntimeConfig::from_toml_file(path).map_err(|e| e.to_string()),
        None => Ok(RuntimeConfig::default()),
    }
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut input = None;
    let mut output = None;
    let mut tokens = false;
    let mut json = false;
    let mut config = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--tokens" => tokens = true,
            "--json" => json = true,
            "-o" | "--output" => {
                i += 1;
                let path = args.get(i).ok_or("-o requires a file name")?;
                output = Some(PathBuf::from(path));
            }
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a file name")?;
                config = Some(PathBuf::from(path));
            }
            option if option.starts_with('-') => {
                return Err(format!("Unknown option '{}'", option));
            }
            path => {
                if input.is_some() {
                    return Err(format!("Unexpected argument '{}'", path));
                }
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    if json && !tokens {
        return Err("--json is only valid with --tokens".to_string());
    }

    let input = input.ok_or("Missing input file")?;
    Ok(Command::Run(CliOptions {
        input,
        output,
        tokens,
        json,
        config,
    }))
}

fn print_help(program_name: &str) {
    println!("Rat23S Front End v{}", env!("CARGO_PKG_VERSION"));
    println!("Lexical analysis and recursive-descent syntax analysis for Rat23S");
    println!();
    println!("USAGE:");
    println!("    {} <input> [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <input>    Rat23S source file");
    println!();
    println!("OPTIONS:");
    println!("    -o, --output FILE   Write output to FILE instead of stdout");
    println!("    --tokens            List tokens instead of parsing");
    println!("    --json              With --tokens, write the listing as JSON");
    println!("    --config FILE       Load runtime preferences from a TOML file");
    println!("    -h, --help          Show this help message");
    println!("    -V, --version       Show version and build configuration");
    println!();
    println!("OUTPUT:");
    println!("    Parse mode: the productions used to reach every token");
    println!("    Token mode: one token per line, kind then lexeme");
    println!("    Failure:    '<line>: ERROR - <message>' in the output, exit status 1");
    println!();

    let pipeline_info = pipeline::get_pipeline_info();
    println!("PIPELINE CAPABILITIES:");
    for line in pipeline_info.report().lines() {
        println!("    {}", line);
    }
}

fn print_version() {
    println!("rat23s_compiler {}", env!("CARGO_PKG_VERSION"));
    println!("{}", logging::config::get_config_summary());
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_minimal() {
        assert_eq!(
            parse_args(&args(&["prog.rat"])),
            Ok(Command::Run(CliOptions {
                input: "prog.rat".to_string(),
                output: None,
                tokens: false,
                json: false,
                config: None,
            }))
        );
    }

    #[test]
    fn test_parse_all_options() {
        let command = parse_args(&args(&[
            "--tokens", "prog.rat", "-o", "out.txt", "--json", "--config", "prefs.toml",
        ]))
        .unwrap();

        assert_matches!(command, Command::Run(ref options) if options.tokens && options.json);
        if let Command::Run(options) = command {
            assert_eq!(options.output, Some(PathBuf::from("out.txt")));
            assert_eq!(options.config, Some(PathBuf::from("prefs.toml")));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["a.rat", "b.rat"])).is_err());
        assert!(parse_args(&args(&["a.rat", "-o"])).is_err());
        assert!(parse_args(&args(&["a.rat", "--json"])).is_err());
        assert!(parse_args(&args(&["a.rat", "--verbose"])).is_err());
    }

    #[test]
    fn test_help_and_version_win() {
        assert_eq!(parse_args(&args(&["a.rat", "--help"])), Ok(Command::Help));
        assert_eq!(parse_args(&args(&["--version"])), Ok(Command::Version));
    }
}
