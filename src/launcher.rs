//! Opening tool URLs in the user's browser.
//!
//! The opener is spawned and not waited on, so the browser opens in its own
//! window or tab while the catalog keeps running.

use std::process::{Command, Stdio};

use crate::error::{Result, ToolcatError};

/// Opens a URL in a new browsing context.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform opener or a configured command.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    /// Command line to run instead of the platform default; the URL is
    /// appended as the last argument.
    command: Option<String>,
}

impl SystemOpener {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    /// Program and leading arguments used to open `url`.
    pub fn command_line(&self, url: &str) -> Result<(String, Vec<String>)> {
        if let Some(command) = &self.command {
            let mut parts = command.split_whitespace().map(str::to_string);
            let program = parts.next().ok_or_else(|| ToolcatError::Launch {
                url: url.to_string(),
                reason: "open_command is empty".to_string(),
            })?;
            let mut args: Vec<String> = parts.collect();
            args.push(url.to_string());
            return Ok((program, args));
        }

        let (program, mut args): (&str, Vec<String>) = if cfg!(target_os = "macos") {
            ("open", vec![])
        } else if cfg!(target_os = "windows") {
            ("cmd", vec!["/C".to_string(), "start".to_string(), String::new()])
        } else {
            ("xdg-open", vec![])
        };
        args.push(url.to_string());
        Ok((program.to_string(), args))
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let (program, args) = self.command_line(url)?;
        log::info!("Opening {} with {}", url, program);

        Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ToolcatError::Launch {
                url: url.to_string(),
                reason: format!("{}: {}", program, e),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_command_appends_url() {
        let opener = SystemOpener::new(Some("firefox --new-tab".to_string()));
        let (program, args) = opener.command_line("https://example.com").unwrap();
        assert_eq!(program, "firefox");
        assert_eq!(args, vec!["--new-tab", "https://example.com"]);
    }

    #[test]
    fn test_empty_custom_command_is_an_error() {
        let opener = SystemOpener::new(Some("   ".to_string()));
        let err = opener.command_line("https://example.com").unwrap_err();
        assert!(matches!(err, ToolcatError::Launch { .. }));
    }

    #[test]
    fn test_platform_default_ends_with_url() {
        let opener = SystemOpener::default();
        let (program, args) = opener.command_line("https://example.com").unwrap();
        assert!(!program.is_empty());
        assert_eq!(args.last().map(String::as_str), Some("https://example.com"));
    }

    #[test]
    fn test_missing_program_reports_launch_error() {
        let opener = SystemOpener::new(Some("definitely-not-a-real-opener-binary".to_string()));
        let err = opener.open("https://example.com").unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-real-opener-binary"));
    }
}
