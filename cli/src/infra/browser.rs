//! Browser infrastructure — implements `UrlOpener` with the platform opener.

use std::process::Stdio;

use anyhow::{Context, Result};

use crate::application::ports::UrlOpener;

/// Opens URLs with the host's default handler.
pub struct SystemBrowser;

impl SystemBrowser {
    /// The opener command and its leading arguments for this platform.
    #[must_use]
    pub fn command() -> (&'static str, &'static [&'static str]) {
        if cfg!(target_os = "windows") {
            ("rundll32", &["url.dll,FileProtocolHandler"])
        } else if cfg!(target_os = "macos") {
            ("open", &[])
        } else {
            ("xdg-open", &[])
        }
    }
}

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        let (program, args) = Self::command();
        tokio::process::Command::new(program)
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("{program} is not installed or not in PATH"))?;
        Ok(())
    }
}
