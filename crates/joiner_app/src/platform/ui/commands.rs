use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Add(Vec<PathBuf>),
    /// Zero-based position.
    Remove(usize),
    /// Zero-based positions in their new order.
    Order(Vec<usize>),
    Drag(usize),
    Over(usize),
    Drop,
    Move { from: usize, to: usize },
    Join,
    Format(String),
    Download,
    Show,
    List,
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unbalanced quotes in input")]
    UnbalancedQuotes,
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("`{0}` is not a valid position (positions start at 1)")]
    BadPosition(String),
}

/// Parses one typed line with shell-style quoting. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<UiCommand>, CommandError> {
    let words = shlex::split(line).ok_or(CommandError::UnbalancedQuotes)?;
    let Some((head, rest)) = words.split_first() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "add" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("add <paths...>"));
            }
            UiCommand::Add(rest.iter().map(PathBuf::from).collect())
        }
        "remove" | "rm" => UiCommand::Remove(single_position(rest, "remove <n>")?),
        "order" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("order <n...>"));
            }
            UiCommand::Order(
                rest.iter()
                    .map(|word| position(word))
                    .collect::<Result<_, _>>()?,
            )
        }
        "drag" => UiCommand::Drag(single_position(rest, "drag <n>")?),
        "over" => UiCommand::Over(single_position(rest, "over <n>")?),
        "drop" => UiCommand::Drop,
        "move" | "mv" => match rest {
            [from, to] => UiCommand::Move {
                from: position(from)?,
                to: position(to)?,
            },
            _ => return Err(CommandError::Usage("move <from> <to>")),
        },
        "join" => UiCommand::Join,
        "format" => match rest {
            [ext] => UiCommand::Format(ext.clone()),
            _ => return Err(CommandError::Usage("format <ext>")),
        },
        "download" | "save" => UiCommand::Download,
        "show" => UiCommand::Show,
        "list" | "ls" => UiCommand::List,
        "clear" => UiCommand::Clear,
        "help" | "?" => UiCommand::Help,
        "quit" | "exit" | "q" => UiCommand::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn single_position(rest: &[String], usage: &'static str) -> Result<usize, CommandError> {
    match rest {
        [word] => position(word),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// 1-based text to 0-based index.
fn position(word: &str) -> Result<usize, CommandError> {
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadPosition(word.to_string())),
    }
}
