use std::fs;
use std::io::Write;
use std::path::Path;

use crate::prelude::{println, *};

/// Write the rendered output to `destination`, or print it to stdout.
///
/// When writing to a file, `{verb} to {file}` is printed as confirmation.
pub fn emit(rendered: &str, destination: Option<&Path>, verb: &str) -> Result<()> {
    match destination {
        Some(path) => {
            write_output(path, rendered)?;
            println!("{}", confirmation_line(verb, path));
        }
        None => print_rendered(&mut std::io::stdout().lock(), rendered)?,
    }

    Ok(())
}

/// Write the rendered output byte for byte, followed by a newline.
///
/// Bypasses `anstream` so escape sequences inside record values reach a pipe
/// unchanged.
pub fn print_rendered<W: Write>(out: &mut W, rendered: &str) -> Result<()> {
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.write_all(b"\n"))
        .and_then(|()| out.flush())
        .context("Failed to write output to stdout")?;
    Ok(())
}

pub fn write_output(path: &Path, rendered: &str) -> Result<()> {
    fs::write(path, rendered)
        .with_context(|| f!("Failed to write output file {}", path.display()))?;
    log::info!("Wrote {} bytes to {}", rendered.len(), path.display());
    Ok(())
}

pub fn confirmation_line(verb: &str, path: &Path) -> String {
    f!("{verb} to {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_line() {
        assert_eq!(
            confirmation_line("Exported", Path::new("leads.csv")),
            "Exported to leads.csv"
        );
        assert_eq!(
            confirmation_line("Written", Path::new("report.md")),
            "Written to report.md"
        );
    }

    #[test]
    fn test_write_output_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_output(&path, "a,b\r\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\r\n");
    }

    #[test]
    fn test_write_output_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.csv");

        let err = write_output(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write output file"));
    }

    #[test]
    fn test_print_rendered_keeps_record_bytes() {
        let mut out = Vec::new();

        print_rendered(&mut out, "person,A\u{1b}[31mB\r\n").unwrap();

        assert_eq!(out, b"person,A\x1b[31mB\r\n\n");
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        emit("<html></html>", Some(&path), "Written").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }
}
