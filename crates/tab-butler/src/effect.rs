/// Side effects requested by the host reducer
///
/// The reducer stays pure; `execute_effect` performs the I/O and feeds
/// results back as actions.
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tab_butler_palette::{DispatchMessage, TabInventory};

use crate::{App, actions::Action};

#[derive(Debug, Clone)]
pub enum Effect {
    /// Read the tab inventory for the host tab strip
    LoadHostTabs,

    /// Append a dispatched message as one JSON line
    AppendCommandLog {
        path: PathBuf,
        message: DispatchMessage,
    },
}

pub fn execute_effect(app: &mut App, effect: Effect) -> Result<()> {
    match effect {
        Effect::LoadHostTabs => {
            let inventory = app.inventory.clone();
            let tx = app.action_tx.clone();
            tokio::spawn(async move {
                let result = inventory.fetch_tabs().await.map_err(|err| err.to_string());
                let _ = tx.send(Action::HostTabsLoaded(result));
            });
        }
        Effect::AppendCommandLog { path, message } => {
            // A broken log file must not take the palette down
            if let Err(err) = append_command_log(&path, &message) {
                log::error!("{:#}", err);
            }
        }
    }
    Ok(())
}

pub fn append_command_log(path: &Path, message: &DispatchMessage) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open command log {}", path.display()))?;
    let line = serde_json::to_string(message)?;
    writeln!(file, "{}", line)
        .with_context(|| format!("Failed to write command log {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tab_butler_palette::TabId;

    #[test]
    fn test_command_log_appends_json_lines() {
        let path = std::env::temp_dir().join(format!(
            "tab-butler-command-log-{}.jsonl",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        append_command_log(
            &path,
            &DispatchMessage::ChangeActiveTab {
                tab_id: TabId::new(3),
            },
        )
        .unwrap();
        append_command_log(
            &path,
            &DispatchMessage::RunAction {
                command: "reload-tab".into(),
            },
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(
            content,
            "{\"command\":\"change-active-tab\",\"tabIdentifier\":3}\n{\"command\":\"reload-tab\"}\n"
        );
    }

    #[test]
    fn test_command_log_reports_unwritable_path() {
        let result = append_command_log(
            Path::new("/definitely/not/here/commands.jsonl"),
            &DispatchMessage::RunAction {
                command: "new-tab".into(),
            },
        );
        assert!(result.is_err());
    }
}
