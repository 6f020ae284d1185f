use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ExamError;

pub const EXAM_EXTENSION: &str = "exam";

/// List the exam files directly inside `dir`, sorted by file name.
pub fn discover_exams<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
    let mut exams = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == EXAM_EXTENSION) {
            exams.push(path);
        }
    }
    exams.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(exams)
}

/// Resolve a 1-based menu choice typed by the user.
pub fn choose_exam<'a>(exams: &'a [PathBuf], input: &str) -> Result<&'a Path, ExamError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|choice| choice.checked_sub(1))
        .and_then(|index| exams.get(index))
        .map(PathBuf::as_path)
        .ok_or_else(|| ExamError::InvalidChoice(input.trim().to_string()))
}

/// File name for menus, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[test]
    fn finds_only_exam_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.exam", "a.exam", "notes.txt", "c.exam.bak"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("dir.exam")).unwrap();

        let names: Vec<_> = discover_exams(dir.path())
            .unwrap()
            .iter()
            .map(|p| display_name(p))
            .collect();
        assert_eq!(names, vec!["a.exam", "b.exam"]);
    }

    #[test]
    fn empty_directory_has_no_exams() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_exams(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn choice_is_one_based() {
        let exams = vec![PathBuf::from("a.exam"), PathBuf::from("b.exam")];
        assert_eq!(choose_exam(&exams, "2\n").unwrap(), Path::new("b.exam"));
        assert_eq!(choose_exam(&exams, " 1 ").unwrap(), Path::new("a.exam"));
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let exams = vec![PathBuf::from("a.exam")];
        for input in ["0", "2", "x", ""] {
            assert!(matches!(
                choose_exam(&exams, input),
                Err(ExamError::InvalidChoice(_))
            ));
        }
    }
}
