use kanal::{AsyncReceiver, AsyncSender};
use lexis_core::picker::{PickerSession, PickerStep};
use lexis_types::{AppEvent, NoticeLevel};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tokio_util::sync::CancellationToken;

use crate::status::format_entry_count;

/// Terminal frontend: prints notices and runs the suggestion picker
///
/// Returns once the current lookup is finished or the user dismisses the picker.
pub async fn ui_loop<R, W>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    input: R,
    mut output: W,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        let event = tokio::select! {
            event = app_to_ui_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
            _ = cancel.cancelled() => break,
        };

        match event {
            AppEvent::Notify(notice) => {
                let prefix = match notice.level {
                    NoticeLevel::Info => "",
                    NoticeLevel::Warning => "warning: ",
                    NoticeLevel::Error => "error: ",
                };
                write_line(&mut output, &format!("{prefix}{}", notice.message)).await?;
            }
            AppEvent::StatusUpdate { entry_count } => {
                write_line(&mut output, &format_entry_count(entry_count)).await?;
            }
            AppEvent::ShowSuggestions { term, suggestions } => {
                match pick_suggestion(&term, suggestions, &mut lines, &mut output).await? {
                    Some(choice) => {
                        ui_to_app_tx.send(AppEvent::SuggestionChosen(choice)).await?;
                    }
                    None => {
                        write_line(&mut output, "No word chosen").await?;
                        break;
                    }
                }
            }
            AppEvent::LookupFinished => break,
            _ => {}
        }
    }

    output.flush().await?;
    Ok(())
}

async fn pick_suggestion<R, W>(
    term: &str,
    suggestions: Vec<String>,
    lines: &mut Lines<R>,
    output: &mut W,
) -> anyhow::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = PickerSession::new(suggestions);
    write_line(output, &format!("No definition for \"{term}\". Did you mean:")).await?;
    render_choices(output, &session.visible()).await?;

    loop {
        output
            .write_all(b"Filter, number to choose, Enter to cancel: ")
            .await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };

        match session.handle_input(&line) {
            PickerStep::Selected(choice) => return Ok(Some(choice)),
            PickerStep::Cancelled => return Ok(None),
            PickerStep::Filtered(visible) => render_choices(output, &visible).await?,
        }
    }
}

async fn render_choices<W: AsyncWrite + Unpin>(
    output: &mut W,
    choices: &[String],
) -> anyhow::Result<()> {
    if choices.is_empty() {
        return write_line(output, "  (no matches)").await;
    }

    for (i, choice) in choices.iter().enumerate() {
        write_line(output, &format!("  {:>2}. {}", i + 1, choice)).await?;
    }
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> anyhow::Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(())
}
