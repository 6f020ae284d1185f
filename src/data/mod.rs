mod loader;
mod parser;
mod picker;

pub use loader::load_exam;
pub use parser::{parse, Diagnostic, DiagnosticKind, Parsed};
pub use picker::{choose_exam, discover_exams, display_name, EXAM_EXTENSION};
