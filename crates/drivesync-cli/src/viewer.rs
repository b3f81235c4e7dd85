//! Hands a finished file to the desktop's default viewer.
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

fn spawn(path: &Path) -> io::Result<()> {
    viewer_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

/// Open `path` without waiting for the viewer. Failure is only logged.
pub fn open(path: &Path) {
    match spawn(path) {
        Ok(()) => log::debug!("Opened {} in the default viewer", path.display()),
        Err(e) => log::warn!("Could not open {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_receives_the_path() {
        let cmd = viewer_command(Path::new("figure.png"));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.last().map(|a| a.to_str()), Some(Some("figure.png")));
    }
}
