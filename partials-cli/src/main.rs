mod command;
mod log_backend;
mod render;

use std::fs::File;
use std::io::{self, BufRead, Write};

use partials_core::action::{Action, IsolationAction};
use partials_core::config::Config;
use partials_core::dispatch::LocalDispatcher;
use partials_core::interaction_log::InteractionLog;
use partials_core::state::AppState;
use partials_types::Dispatcher;

use command::{parse_command, Command, View, HELP};
use log_backend::LogBackend;

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("partials")
        .join("partials.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path)
        .or_else(|_| File::create(std::env::temp_dir().join("partials.log")))
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("logging disabled: {}", e);
            return;
        }
    };

    if let Err(e) = WriteLogger::init(log_level, simplelog::Config::default(), log_file) {
        eprintln!("logging disabled: {}", e);
        return;
    }

    log::info!("partials starting (log level: {:?})", log_level);
}

fn show(view: View, state: &AppState) -> String {
    match view {
        View::Notes => render::render_notes(state),
        View::Overtones => render::render_overtones(state),
        View::Partials => render::render_partials(state),
        View::Clashes => render::render_clashes(state),
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    let config = Config::load();
    let mut state = AppState::new_with_defaults(config.defaults());
    let mut action_log = if config.interaction_log_enabled() {
        InteractionLog::open_default()
    } else {
        None
    };

    let backend = LogBackend;
    let mut dispatcher = LocalDispatcher::new(&mut state, &backend);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "partials explorer. type 'help' for commands.")?;
    write!(stdout, "{}", render::render_notes(dispatcher.state))?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let action: Action = match parse_command(&line) {
            Ok(Command::Dispatch(action)) => action,
            Ok(Command::Isolate(row)) => match dispatcher.state.clash_report().get(row) {
                Some(clash) => IsolationAction::Toggle(clash.selection()).into(),
                None => {
                    writeln!(stdout, "no clash row {}", row + 1)?;
                    continue;
                }
            },
            Ok(Command::Show(view)) => {
                write!(stdout, "{}", show(view, dispatcher.state))?;
                continue;
            }
            Ok(Command::Help) => {
                writeln!(stdout, "{}", HELP)?;
                continue;
            }
            Ok(Command::Quit) => break,
            Err(message) => {
                writeln!(stdout, "{}", message)?;
                continue;
            }
        };

        let result = dispatcher.dispatch(&action);
        if let Some(log) = action_log.as_mut() {
            log.log_action(&action, &result);
        }
        if let Some(reason) = &result.rejected {
            writeln!(stdout, "ignored: {}", reason)?;
        } else if result.changed() {
            write!(stdout, "{}", render::render_clashes(dispatcher.state))?;
        }
    }

    dispatcher.shutdown();
    log::info!("partials exiting");
    Ok(())
}
