use feed_core::{FeedBody, FeedViewModel, VideoRowView, DESCRIPTION_MAX_LINES};

use super::constants::*;
use super::surface::SurfaceCommand;

pub fn render(view: &FeedViewModel) -> Vec<SurfaceCommand> {
    let mut cmds = vec![SurfaceCommand::Clear];

    match &view.body {
        FeedBody::Unmounted => {}
        FeedBody::Loading { placeholder } => cmds.push(SurfaceCommand::Placeholder {
            text: placeholder.clone(),
        }),
        FeedBody::Failed { notice } => cmds.push(SurfaceCommand::Notice {
            text: notice.clone(),
        }),
        FeedBody::Rows(rows) => {
            cmds.extend(rows.iter().map(|row| SurfaceCommand::Row {
                video_id: row.video_id,
                lines: format_row(row),
            }));
        }
    }

    let nav = view
        .nav
        .iter()
        .map(|item| format!("{} {}", nav_glyph(*item), item.label()))
        .collect::<Vec<_>>()
        .join("   ");
    cmds.push(SurfaceCommand::NavBar { text: nav });

    cmds
}

fn format_row(row: &VideoRowView) -> Vec<String> {
    let sound = if row.muted { "muted" } else { "sound on" };
    let playback = match (row.autoplay, row.looping) {
        (true, true) => "autoplay, loop",
        (true, false) => "autoplay",
        (false, true) => "loop",
        (false, false) => "paused",
    };
    let mut lines = vec![
        format!(
            "[{id}] ▶ {url} ({sound}, {playback})",
            id = row.video_id,
            url = row.video_url
        ),
        row.caption.clone(),
    ];

    let mut byline = format!("{} <{}> [{}]", row.user_name, row.user_image, row.follow_label);
    if row.is_paid {
        byline.push(' ');
        byline.push_str(PAID_BADGE);
    }
    lines.push(byline);

    lines.extend(wrap_clamped(
        &row.description,
        DESCRIPTION_WIDTH,
        DESCRIPTION_MAX_LINES,
    ));

    let mut counters = row
        .counters
        .iter()
        .map(|counter| format!("{} {}", counter.kind.glyph(), counter.text))
        .collect::<Vec<_>>();
    counters.push(MENU_GLYPH.to_string());
    lines.push(counters.join("  "));

    lines
}

/// Word-wraps `text` to `width` characters, keeping at most `max_lines` lines.
fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}
