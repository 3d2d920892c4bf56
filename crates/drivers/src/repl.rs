use std::io::{self, BufRead, Write};

use headshot_studio_adapters::{present_exported, present_session, present_style_row};
use headshot_studio_application::{
    BackCommand, ChangeStyleCommand, DownloadResultCommand, EditOutcome, GenerationOutcome,
    ListStylesCommand, SelectStyleCommand, SessionStatusQuery, StartOverCommand, StudioService,
    SubmitEditCommand, UploadImageCommand,
};
use headshot_studio_domain::EDIT_SUGGESTIONS;

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Help,
    Styles,
    Suggestions,
    Upload { path: String },
    Style { style_id: String },
    Edit { instruction: String },
    Download,
    ChangeStyle,
    Back,
    StartOver,
    Status,
    Quit,
    Unknown { word: String },
}

pub fn run_session(service: &mut StudioService, config: &AppConfig) -> Result<(), String> {
    println!("headshot studio session. Type 'help' for commands, 'quit' to leave.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|error| format!("stdout flush failed: {error}"))?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|error| format!("stdin read failed: {error}"))?;

        let Some(command) = parse_session_command(&line) else {
            continue;
        };
        if command == SessionCommand::Quit {
            break;
        }
        dispatch(service, config, command);
    }

    Ok(())
}

fn dispatch(service: &mut StudioService, config: &AppConfig, command: SessionCommand) {
    match command {
        SessionCommand::Help => print_session_help(),
        SessionCommand::Styles => {
            for style in service.styles(ListStylesCommand) {
                println!("{}", present_style_row(style));
            }
        }
        SessionCommand::Suggestions => {
            for suggestion in EDIT_SUGGESTIONS {
                println!("{suggestion}");
            }
        }
        SessionCommand::Upload { path } => {
            match service.upload_image(UploadImageCommand { path }) {
                Ok(()) => println!("image loaded; pick a style ('styles' lists them)"),
                Err(error) => println!("upload failed: {error}"),
            }
        }
        SessionCommand::Style { style_id } => {
            println!("generating headshot...");
            match service.select_style(SelectStyleCommand { style_id }) {
                Ok(GenerationOutcome::Generated) => {
                    println!("headshot ready ('download' to save, 'edit <text>' to retouch)");
                }
                Ok(GenerationOutcome::Failed) => print_session_error(service),
                Err(error) => println!("{error}"),
            }
        }
        SessionCommand::Edit { instruction } => {
            match service.submit_edit(SubmitEditCommand { instruction }) {
                Ok(EditOutcome::Applied) => println!("edit applied"),
                Ok(EditOutcome::Failed) => print_session_error(service),
                Ok(EditOutcome::Skipped) => {
                    println!("nothing to edit: generate a headshot first and give a non-empty instruction");
                }
                Err(error) => println!("{error}"),
            }
        }
        SessionCommand::Download => {
            match service.download_result(DownloadResultCommand {
                output_dir: config.output_dir.clone(),
            }) {
                Ok(exported) => println!("{}", present_exported(&exported)),
                Err(error) => println!("download failed: {error}"),
            }
        }
        SessionCommand::ChangeStyle => match service.change_style(ChangeStyleCommand) {
            Ok(()) => println!("back to style selection (original image kept)"),
            Err(error) => println!("{error}"),
        },
        SessionCommand::Back => match service.go_back(BackCommand) {
            Ok(()) => println!("back to the start"),
            Err(error) => println!("{error}"),
        },
        SessionCommand::StartOver => {
            service.start_over(StartOverCommand);
            println!("session cleared");
        }
        SessionCommand::Status => {
            println!("{}", present_session(&service.session_status(SessionStatusQuery)));
        }
        SessionCommand::Unknown { word } => {
            println!("unknown command: {word} (try 'help')");
        }
        SessionCommand::Quit => {}
    }
}

fn print_session_error(service: &StudioService) {
    let status = service.session_status(SessionStatusQuery);
    match status.last_error {
        Some(message) => println!("{message}"),
        None => println!("the request failed"),
    }
}

fn parse_session_command(line: &str) -> Option<SessionCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    Some(match word {
        "help" => SessionCommand::Help,
        "styles" => SessionCommand::Styles,
        "suggest" => SessionCommand::Suggestions,
        "upload" => SessionCommand::Upload {
            path: rest.to_string(),
        },
        "style" => SessionCommand::Style {
            style_id: rest.to_string(),
        },
        "edit" => SessionCommand::Edit {
            instruction: rest.to_string(),
        },
        "download" => SessionCommand::Download,
        "change-style" => SessionCommand::ChangeStyle,
        "back" => SessionCommand::Back,
        "start-over" => SessionCommand::StartOver,
        "status" => SessionCommand::Status,
        "quit" | "exit" => SessionCommand::Quit,
        other => SessionCommand::Unknown {
            word: other.to_string(),
        },
    })
}

fn print_session_help() {
    println!("commands:");
    println!("  upload <path>      load a selfie (jpg, png, or webp)");
    println!("  styles             list the style presets");
    println!("  style <id>         generate a headshot in the given style");
    println!("  edit <text>        retouch the current headshot");
    println!("  suggest            show canned edit instructions");
    println!("  download           save the current headshot");
    println!("  change-style       pick a different style for the same selfie");
    println!("  back               return to the start from style selection");
    println!("  start-over         clear the whole session");
    println!("  status             show the session state");
    println!("  quit               leave the session");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse_session_command(""), None);
        assert_eq!(parse_session_command("   "), None);
    }

    #[test]
    fn commands_with_arguments_keep_the_rest_of_the_line() {
        assert_eq!(
            parse_session_command("upload photos/selfie.jpg"),
            Some(SessionCommand::Upload {
                path: "photos/selfie.jpg".to_string()
            })
        );
        assert_eq!(
            parse_session_command("edit Add a blue tie"),
            Some(SessionCommand::Edit {
                instruction: "Add a blue tie".to_string()
            })
        );
    }

    #[test]
    fn bare_keywords_parse() {
        assert_eq!(parse_session_command("styles"), Some(SessionCommand::Styles));
        assert_eq!(parse_session_command("quit"), Some(SessionCommand::Quit));
        assert_eq!(parse_session_command("exit"), Some(SessionCommand::Quit));
        assert_eq!(
            parse_session_command("change-style"),
            Some(SessionCommand::ChangeStyle)
        );
    }

    #[test]
    fn unknown_words_are_reported_not_dropped() {
        assert_eq!(
            parse_session_command("frobnicate now"),
            Some(SessionCommand::Unknown {
                word: "frobnicate".to_string()
            })
        );
    }
}
