use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::{Attribute, HashMap, Instance, SignalValue, format_bits};

/// Destination for dump lines. All output is debug-level text; ordering of
/// writes is call order.
pub trait LogSink {
    fn debug(&mut self, line: &str);
}

/// In-memory sink; each dumped line becomes one element.
impl LogSink for Vec<String> {
    fn debug(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Sink forwarding to the `log` facade at debug level.
#[derive(Debug, Clone)]
pub struct LoggerSink {
    target: String,
}

impl LoggerSink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Default for LoggerSink {
    fn default() -> Self {
        Self::new("siglog")
    }
}

impl LogSink for LoggerSink {
    fn debug(&mut self, line: &str) {
        log::debug!(target: self.target.as_str(), "{line}");
    }
}

/// Line-oriented file sink.
///
/// Writes are buffered; the first write error is held and surfaced by
/// [`FileSink::finish`], so dumping itself stays infallible.
pub struct FileSink {
    writer: BufWriter<File>,
    error: Option<io::Error>,
}

impl FileSink {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            error: None,
        })
    }

    /// Flush, reporting any write error deferred while dumping.
    pub fn finish(mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => self.writer.flush(),
        }
    }
}

impl LogSink for FileSink {
    fn debug(&mut self, line: &str) {
        if self.error.is_none() {
            if let Err(err) = writeln!(self.writer, "{line}") {
                self.error = Some(err);
            }
        }
    }
}

/// Options for [`dump_instance_with`].
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// Also list submodule attributes (definition name, or element count
    /// for instance arrays), before any signal lines.
    pub submodules: bool,
    /// Sort each group by attribute name instead of insertion order.
    pub sort_names: bool,
}

enum Rendered {
    Wire(String),
    Submodule(String),
}

fn render_attribute(attribute: &Attribute) -> Option<Rendered> {
    match attribute {
        Attribute::Scalar(value) => Some(Rendered::Wire(format_bits(&value.to_string()))),
        Attribute::ScalarArray(values) => Some(Rendered::Wire(render_array(values))),
        Attribute::Submodule(sub) => Some(Rendered::Submodule(sub.definition.clone())),
        Attribute::SubmoduleArray(subs) => Some(Rendered::Submodule(format!("[{}]", subs.len()))),
        Attribute::Opaque => None,
    }
}

fn render_array(values: &[SignalValue]) -> String {
    format!(
        "[{}]",
        values
            .iter()
            .map(|value| format_bits(&value.to_string()))
            .join(", ")
    )
}

fn signal_line(instance: &str, name: &str, value: &str) -> String {
    format!("{instance}.{name:<20} = {value}")
}

fn submodule_line(instance: &str, name: &str, what: &str) -> String {
    format!("{instance}.{name:<20} is {what}")
}

/// Log every signal directly held by `instance`, one line per attribute.
///
/// Scalars and signal array elements render through [`format_bits`]. With
/// `submodules` set, submodule attributes are listed first, names and
/// definition/size only; their contents are not visited.
pub fn dump_instance(instance: &Instance, sink: &mut dyn LogSink, submodules: bool) {
    dump_instance_with(
        instance,
        sink,
        &DumpOptions {
            submodules,
            ..Default::default()
        },
    );
}

/// Full form of [`dump_instance`].
pub fn dump_instance_with(instance: &Instance, sink: &mut dyn LogSink, options: &DumpOptions) {
    let mut wires: Vec<(&str, String)> = Vec::new();
    let mut submodules: Vec<(&str, String)> = Vec::new();

    for (name, attribute) in &instance.attributes {
        match render_attribute(attribute) {
            Some(Rendered::Wire(text)) => wires.push((name.as_str(), text)),
            Some(Rendered::Submodule(text)) => submodules.push((name.as_str(), text)),
            None => {}
        }
    }

    if options.sort_names {
        wires.sort_by_key(|(name, _)| *name);
        submodules.sort_by_key(|(name, _)| *name);
    }

    if options.submodules {
        for (name, what) in &submodules {
            sink.debug(&submodule_line(&instance.name, name, what));
        }
    }
    for (name, value) in &wires {
        sink.debug(&signal_line(&instance.name, name, value));
    }
}

/// A per-edge logging probe: an optional banner plus an ordered allow-list
/// of attribute names to report.
///
/// Stands in for hand-written per-signal log statements in a testbench:
/// configure once, call [`Probe::log`] before each clock edge.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    banner: Option<String>,
    watched: Vec<String>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a banner line before the watched signals.
    pub fn banner(mut self, title: impl Into<String>) -> Self {
        self.banner = Some(title.into());
        self
    }

    /// Add an attribute name to report. Call order is output order.
    pub fn watch(mut self, name: impl Into<String>) -> Self {
        self.watched.push(name.into());
        self
    }

    /// Log the banner, then every watched attribute present on `instance`.
    ///
    /// Watched names the instance does not hold are skipped.
    pub fn log(&self, instance: &Instance, sink: &mut dyn LogSink) {
        if let Some(title) = &self.banner {
            sink.debug(&format!("************ {title} ***************"));
        }
        let by_name: HashMap<&str, &Attribute> = instance
            .attributes
            .iter()
            .map(|(name, attribute)| (name.as_str(), attribute))
            .collect();
        for name in &self.watched {
            let Some(attribute) = by_name.get(name.as_str()).copied() else {
                continue;
            };
            match render_attribute(attribute) {
                Some(Rendered::Wire(text)) => {
                    sink.debug(&signal_line(&instance.name, name, &text));
                }
                Some(Rendered::Submodule(text)) => {
                    sink.debug(&submodule_line(&instance.name, name, &text));
                }
                None => {}
            }
        }
    }
}
