use headshot_studio_application::{ExportedFile, SessionSnapshot};
use headshot_studio_domain::StylePreset;

pub fn present_style_row(style: &StylePreset) -> String {
    format!("{}\t{}\t{}", style.id, style.name, style.description)
}

pub fn present_session(snapshot: &SessionSnapshot) -> String {
    format!(
        "state={} busy={} style={} result={} error={}",
        snapshot.state,
        snapshot.busy,
        snapshot.style_name.as_deref().unwrap_or("-"),
        if snapshot.has_result { "ready" } else { "none" },
        snapshot.last_error.as_deref().unwrap_or("-"),
    )
}

pub fn present_exported(exported: &ExportedFile) -> String {
    format!(
        "saved headshot to {} ({} bytes)",
        exported.file_path, exported.bytes_written
    )
}
