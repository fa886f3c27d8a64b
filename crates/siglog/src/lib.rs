mod dump;
mod format;
mod instance;
mod timing;
mod value;

pub use dump::{
    DumpOptions, FileSink, LogSink, LoggerSink, Probe, dump_instance, dump_instance_with,
};
pub use format::format_bits;
pub use instance::{Attribute, Instance};
pub use timing::OpClass;
pub use value::{SignalValue, ValueError};

pub(crate) use fxhash::FxHashMap as HashMap;
