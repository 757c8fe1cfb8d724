use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use trioduel_engine::Roster;
use trioduel_evaluator::team_evaluator::SynergyWeights;

use crate::schema::session::SessionFile;

/// Destination for JSON results: stdout, or a file given with `--output`.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Writes `value` as pretty JSON to `path`, or to stdout if no path is given.
    pub fn save_json<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match path {
            Some(path) => Output::open(path.to_owned())?,
            None => Output::Stdout(io::stdout().lock()),
        };
        output.write_json(value)
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn target(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .and_then(|()| writeln!(self).map_err(serde_json::Error::io))
            .and_then(|()| self.flush().map_err(serde_json::Error::io))
            .with_context(|| format!("Failed to write JSON to {}", self.target()))
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read the character roster from a JSON file
pub fn read_roster_file<P>(path: P) -> anyhow::Result<Roster>
where
    P: AsRef<Path>,
{
    let roster: Roster = read_json_file("roster", &path)?;
    log::info!(
        "loaded {} characters from {}",
        roster.characters().len(),
        path.as_ref().display()
    );
    Ok(roster)
}

/// Read scoring weights, falling back to the built-in defaults when no path is given
pub fn read_weights_file(path: Option<&Path>) -> anyhow::Result<SynergyWeights> {
    match path {
        Some(path) => read_json_file("weights", path),
        None => Ok(SynergyWeights::DEFAULT),
    }
}

/// Read a session file, starting a fresh session if it does not exist yet
pub fn read_session_file<P>(path: P) -> anyhow::Result<SessionFile>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        eprintln!("Starting new session: {}", path.display());
        return Ok(SessionFile::default());
    }
    read_json_file("session", path)
}

/// Write a session file, replacing any previous content
pub fn write_session_file<P>(path: P, session: &SessionFile) -> anyhow::Result<()>
where
    P: AsRef<Path>,
{
    let mut output = Output::open(path.as_ref().to_owned())?;
    output.write_json(session)?;
    log::debug!("session saved to {}", output.target());
    Ok(())
}

#[cfg(test)]
mod tests {
    use trioduel_engine::Mode;

    use super::*;

    #[test]
    fn test_session_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("trioduel-session-{}.json", std::process::id()));
        let missing = read_session_file(&path).unwrap();
        assert_eq!(missing, SessionFile::default());

        let session = SessionFile {
            player_a: Some("alice".to_owned()),
            mode: Mode::Optimized,
            ..SessionFile::default()
        };
        write_session_file(&path, &session).unwrap();
        let loaded = read_session_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, session);
    }
}
