use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;

/// Editor launched when neither `--editor`, `$VISUAL` nor `$EDITOR` is set.
pub const DEFAULT_EDITOR: &str = "vim";

/// An editor command resolved against `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    program: PathBuf,
    args: Vec<String>,
}

impl Editor {
    /// Picks the editor from the explicit flag, then `$VISUAL`, then
    /// `$EDITOR`, falling back to [`DEFAULT_EDITOR`].
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        let command = explicit
            .map(str::to_string)
            .or_else(|| non_empty_env("VISUAL"))
            .or_else(|| non_empty_env("EDITOR"))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        Self::from_command(&command)
    }

    /// Parses a shell-quoted command line such as `code --wait`.
    pub fn from_command(command: &str) -> Result<Self> {
        let parts = shlex::split(command)
            .ok_or_else(|| anyhow!("cannot parse editor command `{command}`"))?;
        let Some((program, args)) = parts.split_first() else {
            anyhow::bail!("editor command is empty");
        };
        let program = which::which(program)
            .with_context(|| format!("editor `{program}` not found on PATH"))?;
        Ok(Self {
            program,
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(path);
        command
    }

    /// Hands `path` to the editor. On Unix the editor replaces this process
    /// and the call only returns on failure.
    #[cfg(unix)]
    pub fn open(&self, path: &Path) -> Result<()> {
        use std::os::unix::process::CommandExt;

        let err = self.command(path).exec();
        Err(err).with_context(|| format!("failed to launch {}", self.program.display()))
    }

    #[cfg(not(unix))]
    pub fn open(&self, path: &Path) -> Result<()> {
        let status = self
            .command(path)
            .status()
            .with_context(|| format!("failed to launch {}", self.program.display()))?;
        if !status.success() {
            anyhow::bail!("{} exited with {status}", self.program.display());
        }
        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
