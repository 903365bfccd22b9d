//! Output writers for simulation results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::metrics::{HandMetrics, SimulationSummary};
use crate::types::OutputFormat;

pub struct OutputWriter {
    writer: Box<dyn Write + Send>,
    format: OutputFormat,
    path: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
enum Record<'a> {
    Hand(&'a HandMetrics),
    Summary(&'a SimulationSummary),
}

impl OutputWriter {
    /// Write to `path`, or to stdout when no path is given.
    pub fn new(path: Option<&Path>, format: OutputFormat) -> io::Result<Self> {
        let writer: Box<dyn Write + Send> = match path {
            Some(p) => {
                if let Some(dir) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
                    std::fs::create_dir_all(dir)?;
                }
                Box::new(BufWriter::new(File::create(p)?))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(Self::from_writer(writer, format, path.map(Path::to_path_buf)))
    }

    pub fn from_writer(
        writer: Box<dyn Write + Send>,
        format: OutputFormat,
        path: Option<PathBuf>,
    ) -> Self {
        Self { writer, format, path }
    }

    pub fn write_hand(&mut self, hand: &HandMetrics) -> io::Result<()> {
        if self.format == OutputFormat::Jsonl {
            self.write_line(&Record::Hand(hand))?;
        }
        Ok(())
    }

    pub fn finish(mut self, summary: &SimulationSummary) -> io::Result<()> {
        self.write_line(&Record::Summary(summary))?;
        self.writer.flush()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn write_line(&mut self, record: &Record<'_>) -> io::Result<()> {
        let json = serde_json::to_string(record)?;
        writeln!(self.writer, "{json}")
    }
}
