//! Line-oriented command parsing. Note, overtone and clash numbers are
//! 1-based on the command line and 0-based everywhere else.

use partials_core::action::{Action, IsolationAction, NoteAction, OvertoneAction, SessionAction};
use partials_types::{BaseFreqPreset, EditableRow, Preset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Notes,
    Overtones,
    Partials,
    Clashes,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    /// Toggle isolation on a clash table row (0-based).
    Isolate(usize),
    Show(View),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  play N | stop N          start / stop note N
  pitch N SEMIS            set note N's offset from the base frequency
  base HZ | a2 | a3 | a4   set the base frequency
  preset NAME              pure-tone, plucked-string, bell, custom
  add | remove K           append / remove overtone K
  enable K | disable K     toggle overtone K
  mult K X | mag K X       set overtone K's multiplier / magnitude
  sync M:G[:off] ...       replace the custom set
  isolate R | clear        audition clash row R / leave isolation
  notes | overtones | partials | clashes
  help | quit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = words.split_first() else {
        return Err("empty command".to_string());
    };

    if let (Some(preset), []) = (BaseFreqPreset::from_name(head), args) {
        return Ok(Command::Dispatch(SessionAction::SelectBaseFreq(preset).into()));
    }

    let action: Action = match (head, args) {
        ("play", [n]) => NoteAction::SetPlaying(index(n)?, true).into(),
        ("stop", [n]) => NoteAction::SetPlaying(index(n)?, false).into(),
        ("pitch", [n, semis]) => NoteAction::SetPitch(index(n)?, semis.to_string()).into(),
        ("base", [hz]) => SessionAction::SetBaseFreq(hz.to_string()).into(),
        ("preset", [name]) => {
            let preset =
                Preset::from_name(name).ok_or_else(|| format!("unknown preset '{}'", name))?;
            OvertoneAction::SelectPreset(preset).into()
        }
        ("add", []) => OvertoneAction::Add.into(),
        ("remove", [k]) => OvertoneAction::Remove(index(k)?).into(),
        ("enable", [k]) => OvertoneAction::SetEnabled(index(k)?, true).into(),
        ("disable", [k]) => OvertoneAction::SetEnabled(index(k)?, false).into(),
        ("mult", [k, x]) => OvertoneAction::SetMultiplier(index(k)?, x.to_string()).into(),
        ("mag", [k, x]) => OvertoneAction::SetMagnitude(index(k)?, x.to_string()).into(),
        ("sync", rows) => {
            let rows = rows.iter().map(|r| parse_row(r)).collect::<Result<Vec<_>, _>>()?;
            OvertoneAction::SyncCustom(rows).into()
        }
        ("clear", []) => IsolationAction::Clear.into(),
        ("isolate", [r]) => return Ok(Command::Isolate(index(r)?)),
        ("notes", []) => return Ok(Command::Show(View::Notes)),
        ("overtones", []) => return Ok(Command::Show(View::Overtones)),
        ("partials", []) => return Ok(Command::Show(View::Partials)),
        ("clashes", []) => return Ok(Command::Show(View::Clashes)),
        ("help", _) => return Ok(Command::Help),
        ("quit" | "exit", _) => return Ok(Command::Quit),
        _ => return Err(format!("unrecognised command '{}' (try help)", line.trim())),
    };
    Ok(Command::Dispatch(action))
}

fn index(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("'{}' is not a number from 1 up", text)),
    }
}

/// `M:G` or `M:G:off`. Values stay as text; the engine drops rows it can't parse.
fn parse_row(text: &str) -> Result<EditableRow, String> {
    let parts: Vec<&str> = text.split(':').collect();
    match parts.as_slice() {
        [m, g] => Ok(EditableRow::new(true, *m, *g)),
        [m, g, "off"] => Ok(EditableRow::new(false, *m, *g)),
        [m, g, "on"] => Ok(EditableRow::new(true, *m, *g)),
        _ => Err(format!("bad row '{}', expected MULT:MAG[:off]", text)),
    }
}
