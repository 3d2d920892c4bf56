mod config;
mod logging;
mod repl;

use std::process::ExitCode;

use config::AppConfig;
use headshot_studio_adapters::{
    present_exported, present_style_row, FsImageLoader, FsResultExporter, GeminiSynthesisService,
    SystemClock,
};
use headshot_studio_application::{
    DownloadResultCommand, GenerationOutcome, SelectStyleCommand, SessionStatusQuery,
    StudioService, UploadImageCommand,
};
use headshot_studio_domain::StyleCatalog;

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::from_env();

    let command = parse_command(&args);
    match run_command(command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_studio_service(config: &AppConfig) -> Result<StudioService, CommandError> {
    let Some(api_key) = config.api_key.clone() else {
        return Err(CommandError::Runtime(
            "GEMINI_API_KEY or GOOGLE_API_KEY must be set".to_string(),
        ));
    };
    Ok(StudioService::new(
        Box::new(GeminiSynthesisService::new(
            config.api_base.clone(),
            api_key,
            config.model.clone(),
        )),
        Box::new(FsImageLoader),
        Box::new(FsResultExporter),
        Box::new(SystemClock),
    ))
}

#[derive(Debug, Clone)]
enum Command {
    Studio,
    Styles,
    Generate { photo: String, style_id: String },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Studio);
    }

    match args[1].as_str() {
        "studio" => Ok(Command::Studio),
        "styles" => Ok(Command::Styles),
        "generate" => {
            if args.len() < 4 {
                return Err(CommandError::Usage(
                    "missing photo path or style id".to_string(),
                ));
            }
            Ok(Command::Generate {
                photo: args[2].clone(),
                style_id: args[3].clone(),
            })
        }
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn run_command(
    command: Result<Command, CommandError>,
    config: &AppConfig,
) -> Result<(), CommandError> {
    match command? {
        Command::Studio => {
            let mut service = build_studio_service(config)?;
            repl::run_session(&mut service, config).map_err(CommandError::Runtime)
        }
        Command::Styles => {
            for style in StyleCatalog::builtin().all() {
                println!("{}", present_style_row(style));
            }
            Ok(())
        }
        Command::Generate { photo, style_id } => {
            let mut service = build_studio_service(config)?;
            service
                .upload_image(UploadImageCommand { path: photo })
                .map_err(|error| CommandError::Runtime(format!("upload failed: {error}")))?;

            let outcome = service
                .select_style(SelectStyleCommand { style_id })
                .map_err(|error| CommandError::Runtime(format!("generate failed: {error}")))?;

            match outcome {
                GenerationOutcome::Generated => {
                    let exported = service
                        .download_result(DownloadResultCommand {
                            output_dir: config.output_dir.clone(),
                        })
                        .map_err(|error| {
                            CommandError::Runtime(format!("download failed: {error}"))
                        })?;
                    println!("{}", present_exported(&exported));
                    Ok(())
                }
                GenerationOutcome::Failed => {
                    let status = service.session_status(SessionStatusQuery);
                    Err(CommandError::Runtime(
                        status
                            .last_error
                            .unwrap_or_else(|| "generation failed".to_string()),
                    ))
                }
            }
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  headshot-studio studio");
    println!("  headshot-studio styles");
    println!("  headshot-studio generate <photo> <style-id>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_opens_the_interactive_studio() {
        let args = vec!["headshot-studio".to_string()];
        let command = parse_command(&args).expect("default should parse");
        assert!(matches!(command, Command::Studio));
    }

    #[test]
    fn parse_generate_command() {
        let args = vec![
            "headshot-studio".to_string(),
            "generate".to_string(),
            "selfie.jpg".to_string(),
            "corporate".to_string(),
        ];
        let command = parse_command(&args).expect("generate should parse");
        assert!(matches!(command, Command::Generate { .. }));
    }

    #[test]
    fn generate_requires_both_arguments() {
        let args = vec![
            "headshot-studio".to_string(),
            "generate".to_string(),
            "selfie.jpg".to_string(),
        ];
        assert!(matches!(parse_command(&args), Err(CommandError::Usage(_))));
    }

    #[test]
    fn unknown_commands_are_usage_errors() {
        let args = vec!["headshot-studio".to_string(), "frobnicate".to_string()];
        assert!(matches!(parse_command(&args), Err(CommandError::Usage(_))));
    }
}
