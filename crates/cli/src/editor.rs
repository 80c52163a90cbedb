//! Optional hand-off of the generated file to an external editor.
//!
//! Interactive runs end with an offer to open the file in Visual Studio
//! Code. The offer only appears when the `code` launcher is on PATH, and a
//! failed launch never fails the run.

use std::path::Path;
use std::process::Command;

use console::style;
use dialoguer::Confirm;
use tracing::debug;

/// An editor the generated file can be handed off to.
pub trait EditorPort {
    /// Whether the editor can be launched on this host.
    fn is_available(&self) -> bool;
    /// Open `path` in the editor.
    fn open(&self, path: &Path) -> Result<(), String>;
}

/// Visual Studio Code via the `code` CLI launcher.
#[derive(Debug, Clone, Copy)]
pub struct VsCodeEditor;

impl EditorPort for VsCodeEditor {
    fn is_available(&self) -> bool {
        which::which("code").is_ok()
    }

    fn open(&self, path: &Path) -> Result<(), String> {
        let status = Command::new("code")
            .arg(path)
            .status()
            .map_err(|err| format!("could not launch code: {err}"))?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("code exited with status {status}"))
        }
    }
}

/// Ask whether to open `path` in the editor and do so if confirmed.
///
/// Declining, an unavailable editor, or a failed launch all leave the run
/// successful; the file is already on disk.
pub fn offer_to_open(editor: &impl EditorPort, path: &Path) {
    if !editor.is_available() {
        debug!("no editor launcher found, skipping open offer");
        return;
    }

    let confirmed = Confirm::new()
        .with_prompt("Open the generated file in VS Code?")
        .default(false)
        .interact()
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    if let Err(err) = editor.open(path) {
        println!("{}", style(format!("⚠️ Could not open the editor: {err}")).yellow());
    }
}
