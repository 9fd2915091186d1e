pub mod file_writer;
pub mod stdout_writer;

pub use file_writer::MarkdownFileWriter;
pub use stdout_writer::StdoutWriter;
