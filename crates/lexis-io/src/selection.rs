use anyhow::Context;
use arboard::Clipboard;

/// Text currently selected on the desktop
///
/// On Linux this is the primary selection (highlighted text), elsewhere the
/// clipboard. An empty selection is returned as an empty string.
pub fn read_selection() -> anyhow::Result<String> {
    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;

    #[cfg(target_os = "linux")]
    let text = {
        use arboard::{GetExtLinux, LinuxClipboardKind};
        clipboard
            .get()
            .clipboard(LinuxClipboardKind::Primary)
            .text()
    };

    #[cfg(not(target_os = "linux"))]
    let text = clipboard.get_text();

    match text {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => {
            tracing::debug!("Selection is empty");
            Ok(String::new())
        }
        Err(e) => Err(e).context("Failed to read selection"),
    }
}
