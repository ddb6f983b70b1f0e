use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;
use tracing::warn;

/// Configuration for [`folder_picker`].
#[derive(Debug, Clone)]
pub struct FolderPickerOptions {
    /// Path to the external picker executable.
    pub exe_path: PathBuf,
    /// Directory the picker opens in.
    pub default_path: Option<PathBuf>,
    /// Return full paths rather than folder names.
    pub return_full_paths: bool,
    /// Picker window title.
    pub title: Option<String>,
    /// Allow selecting more than one folder.
    pub multi_folder: bool,
}

impl Default for FolderPickerOptions {
    fn default() -> Self {
        Self {
            exe_path: PathBuf::from("folder-picker"),
            default_path: None,
            return_full_paths: true,
            title: None,
            multi_folder: true,
        }
    }
}

/// Configuration for [`file_picker`].
#[derive(Debug, Clone)]
pub struct FilePickerOptions {
    /// Directory the dialog opens in. Defaults to the working directory.
    pub initial_dir: Option<PathBuf>,
    /// Dialog window title.
    pub title: String,
    /// Return full paths rather than base filenames.
    pub return_full_paths: bool,
}

impl Default for FilePickerOptions {
    fn default() -> Self {
        Self {
            initial_dir: None,
            title: "Select Files".to_string(),
            return_full_paths: true,
        }
    }
}

/// Run the external folder-picking executable and return the selected paths.
///
/// The picker is a best-effort tool: a missing executable, a non-zero exit,
/// or malformed output is logged and yields an empty list, never an error.
pub fn folder_picker(options: &FolderPickerOptions) -> Vec<String> {
    let mut command = Command::new(&options.exe_path);
    command.args(picker_args(options));

    let output = match command.output() {
        Ok(output) => output,
        Err(error) => {
            warn!(
                exe = %options.exe_path.display(),
                %error,
                "folder picker executable could not be run"
            );
            return Vec::new();
        }
    };

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        warn!(
            status = %output.status,
            stderr = %stderr.trim(),
            "folder picker exited with an error"
        );
        return Vec::new();
    }
    if !stderr.trim().is_empty() {
        warn!(stderr = %stderr.trim(), "folder picker diagnostics");
    }

    parse_picker_stdout(&String::from_utf8_lossy(&output.stdout))
}

fn picker_args(options: &FolderPickerOptions) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(dir) = &options.default_path {
        args.push(format!("--default_path={}", dir.display()));
    }
    args.push(format!("--return_full_paths={}", options.return_full_paths));
    if let Some(title) = &options.title {
        args.push(format!("--title={title}"));
    }
    args.push(format!("--multi-folder={}", options.multi_folder));
    args
}

/// Decode the picker's stdout contract: trimmed output is either empty or a
/// JSON array of strings. Anything else is downgraded to an empty list.
fn parse_picker_stdout(stdout: &str) -> Vec<String> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(values)) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(path) => Some(path),
                _ => None,
            })
            .collect(),
        Ok(_) => Vec::new(),
        Err(error) => {
            warn!(%error, "folder picker stdout was not valid JSON");
            Vec::new()
        }
    }
}

/// Open the OS-native file-open dialog and return the chosen files, or an
/// empty list if the user cancels.
pub fn file_picker(options: &FilePickerOptions) -> Vec<String> {
    let mut dialog = rfd::FileDialog::new().set_title(&options.title);
    if let Some(dir) = &options.initial_dir {
        dialog = dialog.set_directory(dir);
    }
    let Some(paths) = dialog.pick_files() else {
        return Vec::new();
    };
    paths
        .iter()
        .map(|path| {
            if options.return_full_paths {
                path.display().to_string()
            } else {
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{folder_picker, parse_picker_stdout, picker_args, FolderPickerOptions};
    use std::path::PathBuf;

    #[test]
    fn empty_and_non_array_stdout_yield_an_empty_list() {
        assert!(parse_picker_stdout("").is_empty());
        assert!(parse_picker_stdout("   \n").is_empty());
        assert!(parse_picker_stdout("[]").is_empty());
        assert!(parse_picker_stdout("\"just a string\"").is_empty());
        assert!(parse_picker_stdout("{\"paths\": []}").is_empty());
    }

    #[test]
    fn malformed_json_is_swallowed() {
        assert!(parse_picker_stdout("not json").is_empty());
    }

    #[test]
    fn array_stdout_keeps_its_string_elements() {
        assert_eq!(
            parse_picker_stdout("[\"/a\", \"/b\"]\n"),
            vec!["/a".to_string(), "/b".to_string()]
        );
        assert_eq!(
            parse_picker_stdout("[\"/a\", 3, null]"),
            vec!["/a".to_string()]
        );
    }

    #[test]
    fn args_encode_every_flag() {
        let options = FolderPickerOptions {
            exe_path: PathBuf::from("picker"),
            default_path: Some(PathBuf::from("/home/me")),
            return_full_paths: false,
            title: Some("Pick folders".to_string()),
            multi_folder: true,
        };
        assert_eq!(
            picker_args(&options),
            vec![
                "--default_path=/home/me".to_string(),
                "--return_full_paths=false".to_string(),
                "--title=Pick folders".to_string(),
                "--multi-folder=true".to_string(),
            ]
        );
    }

    #[test]
    fn optional_flags_are_omitted() {
        let options = FolderPickerOptions::default();
        assert_eq!(
            picker_args(&options),
            vec![
                "--return_full_paths=true".to_string(),
                "--multi-folder=true".to_string(),
            ]
        );
    }

    #[test]
    fn missing_executable_yields_an_empty_list() {
        let options = FolderPickerOptions {
            exe_path: PathBuf::from("/definitely/not/a/real/picker"),
            ..FolderPickerOptions::default()
        };
        assert!(folder_picker(&options).is_empty());
    }

    #[cfg(unix)]
    mod subprocess {
        use super::super::{folder_picker, FolderPickerOptions};
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;

        fn fake_picker(dir: &tempfile::TempDir, script_body: &str) -> PathBuf {
            let path = dir.path().join("picker.sh");
            fs::write(&path, format!("#!/bin/sh\n{script_body}\n")).expect("write script");
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("mark script executable");
            path
        }

        #[test]
        fn picker_output_round_trips_through_the_subprocess() {
            let dir = tempfile::tempdir().expect("tempdir");
            let exe_path = fake_picker(&dir, "echo '[\"/tmp/a\", \"/tmp/b\"]'");
            let options = FolderPickerOptions {
                exe_path,
                ..FolderPickerOptions::default()
            };
            assert_eq!(
                folder_picker(&options),
                vec!["/tmp/a".to_string(), "/tmp/b".to_string()]
            );
        }

        #[test]
        fn non_zero_exit_with_stderr_yields_an_empty_list() {
            let dir = tempfile::tempdir().expect("tempdir");
            let exe_path = fake_picker(&dir, "echo 'picker blew up' >&2\nexit 3");
            let options = FolderPickerOptions {
                exe_path,
                ..FolderPickerOptions::default()
            };
            assert!(folder_picker(&options).is_empty());
        }

        #[test]
        fn garbage_stdout_yields_an_empty_list() {
            let dir = tempfile::tempdir().expect("tempdir");
            let exe_path = fake_picker(&dir, "echo 'not json'");
            let options = FolderPickerOptions {
                exe_path,
                ..FolderPickerOptions::default()
            };
            assert!(folder_picker(&options).is_empty());
        }
    }
}
