use feed_core::Msg;

pub const HELP: &str = "commands: mute <id> | click <id> | follow <id> | reload | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Dispatch(Msg),
    Quit,
    Help,
}

/// Maps one line typed on stdin to a command. Unknown input maps to `Help`.
pub fn parse_line(line: &str) -> InputCommand {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
    let id = parts.next().and_then(|raw| raw.parse().ok());

    match (verb.as_str(), id) {
        ("mute" | "click", Some(video_id)) => InputCommand::Dispatch(Msg::MuteToggled { video_id }),
        ("follow", Some(video_id)) => InputCommand::Dispatch(Msg::FollowToggled { video_id }),
        ("reload", _) => InputCommand::Dispatch(Msg::Mounted),
        ("quit" | "q" | "exit", _) => InputCommand::Quit,
        _ => InputCommand::Help,
    }
}
