use std::path::Path;
use std::process::{Child, Command, Stdio};

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};

/// Program and leading arguments that open a file with the desktop's default handler.
pub fn opener_command(os: &str) -> (&'static str, &'static [&'static str]) {
    match os {
        "macos" => ("open", &[]),
        "windows" => ("cmd", &["/C", "start", ""]),
        _ => ("xdg-open", &[]),
    }
}

/// Launcher invocation for `document` on `os`, with the standard streams detached.
pub fn launch_command(os: &str, document: &Path) -> Command {
    let (program, args) = opener_command(os);
    let mut command = Command::new(program);
    command
        .args(args)
        .arg(document)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// External viewer showing the paper.
///
/// Holds the launcher child process so it can be reaped when the owning scene goes away.
pub struct DocumentViewer {
    process: Option<Child>,
}

impl DocumentViewer {
    pub fn new() -> Self {
        Self { process: None }
    }

    pub fn is_running(&mut self) -> bool {
        match self.process.as_mut().map(Child::try_wait) {
            Some(Ok(None)) => true,
            Some(Ok(Some(status))) => {
                debug!("Document viewer exited with {}", status);
                self.process = None;
                false
            }
            Some(Err(e)) => {
                warn!("Lost track of document viewer: {}", e);
                self.process = None;
                false
            }
            None => false,
        }
    }

    pub fn open(&mut self, document: &Path) -> Result<()> {
        if !document.is_file() {
            bail!("document not found: {}", document.display());
        }
        if self.is_running() {
            debug!("Document viewer already running");
            return Ok(());
        }

        let mut command = launch_command(std::env::consts::OS, document);
        let program = command.get_program().to_string_lossy().into_owned();
        let child = command
            .spawn()
            .with_context(|| format!("failed to start {} for {}", program, document.display()))?;
        info!("Opened {} with {}", document.display(), program);
        self.process = Some(child);
        Ok(())
    }
}

impl Drop for DocumentViewer {
    fn drop(&mut self) {
        // Reap the launcher if it already finished; a viewer still running is left alone
        if let Some(mut child) = self.process.take() {
            match child.try_wait() {
                Ok(Some(status)) => debug!("Document viewer exited with {}", status),
                Ok(None) => debug!("Leaving document viewer running"),
                Err(e) => warn!("Failed to poll document viewer: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_openers() {
        assert_eq!(opener_command("linux").0, "xdg-open");
        assert_eq!(opener_command("macos").0, "open");
        let (program, args) = opener_command("windows");
        assert_eq!(program, "cmd");
        assert_eq!(args, &["/C", "start", ""]);
    }

    #[test]
    fn document_path_is_passed_untouched() {
        let document = Path::new("site/figures dir/paper.pdf");
        let command = launch_command("windows", document);
        assert_eq!(command.get_program(), "cmd");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.len(), 4);
        assert_eq!(args[3], document.as_os_str());

        let command = launch_command("linux", document);
        assert_eq!(command.get_program(), "xdg-open");
        assert_eq!(command.get_args().collect::<Vec<_>>(), [document.as_os_str()]);
    }

    #[test]
    fn missing_document_is_an_error() {
        let mut viewer = DocumentViewer::new();
        let err = viewer.open(Path::new("/definitely/not/here/paper.pdf")).unwrap_err();
        assert!(err.to_string().contains("paper.pdf"));
        assert!(!viewer.is_running());
    }
}
