//! Listing formatter for short and long output
//!
//! Every line is rendered before anything is written, so a missing
//! timestamp in long format aborts without partial output.

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::error::Result;
use crate::tree::Node;

use super::config::OutputConfig;
use super::utils::{format_size, format_time};

/// One entry ready to write: the long-format columns (if any) and the name.
struct RenderedEntry<'a> {
    columns: Option<String>,
    name: &'a str,
    is_dir: bool,
}

/// Formatter for a processed list of entries.
pub struct ListingFormatter {
    config: OutputConfig,
}

impl ListingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn render<'a>(&self, entries: &[&'a Node]) -> Result<Vec<RenderedEntry<'a>>> {
        entries
            .iter()
            .copied()
            .map(|node| self.render_entry(node))
            .collect()
    }

    fn render_entry<'a>(&self, node: &'a Node) -> Result<RenderedEntry<'a>> {
        let columns = if self.config.long_format {
            Some(format!(
                "{} {:>4} {}",
                node.permissions,
                format_size(node.size, self.config.human_readable),
                format_time(node)?
            ))
        } else {
            None
        };
        Ok(RenderedEntry {
            columns,
            name: node.name(),
            is_dir: node.is_dir(),
        })
    }

    /// Format the listing as plain text, without colors.
    pub fn format(&self, entries: &[&Node]) -> Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write_to(&mut out, entries)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }

    /// Print the listing to stdout, coloring directories if enabled.
    pub fn print(&self, entries: &[&Node]) -> Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_to(&mut stdout, entries)
    }

    pub fn write_to<W: WriteColor>(&self, out: &mut W, entries: &[&Node]) -> Result<()> {
        let rendered = self.render(entries)?;

        if self.config.long_format {
            for entry in &rendered {
                if let Some(columns) = &entry.columns {
                    write!(out, "{} ", columns)?;
                }
                self.write_name(out, entry)?;
                writeln!(out)?;
            }
        } else {
            for (i, entry) in rendered.iter().enumerate() {
                if i > 0 {
                    write!(out, " ")?;
                }
                self.write_name(out, entry)?;
            }
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }

    fn write_name<W: WriteColor>(&self, out: &mut W, entry: &RenderedEntry) -> Result<()> {
        if entry.is_dir && self.config.use_color {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}", entry.name)?;
            out.reset()?;
        } else {
            write!(out, "{}", entry.name)?;
        }
        Ok(())
    }
}
