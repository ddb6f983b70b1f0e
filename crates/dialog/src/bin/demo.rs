use termdialog::{
    alert, confirm, file_picker, folder_picker, prompt, selection, AlertKind, DialogError,
    FilePickerOptions, FolderPickerOptions, SelectionOptions,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DialogError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match prompt("Enter your name:", "Alice") {
        Ok(name) => println!("Prompt returned: {name:?}"),
        Err(DialogError::Cancelled) => println!("Prompt cancelled"),
        Err(error) => return Err(error),
    }

    let confirmed = confirm("Do you want to continue?")?;
    println!("Confirm returned: {confirmed}");

    let options = SelectionOptions {
        multiple: true,
        ..SelectionOptions::default()
    };
    let candidates = vec![
        "Starter".to_string(),
        "Main course".to_string(),
        "Dessert".to_string(),
    ];
    match selection("Which courses would you like?", &candidates, &options) {
        Ok(courses) => println!("Selection returned: {courses:?}"),
        Err(DialogError::Cancelled) => println!("Selection cancelled"),
        Err(DialogError::SelectionRequired) => println!("Nothing selected"),
        Err(error) => return Err(error),
    }

    alert(
        AlertKind::Success,
        Some("Test Alert"),
        "This is a success alert!",
        None,
    )?;

    let files = file_picker(&FilePickerOptions::default());
    println!("Selected files: {files:?}");

    let folders = folder_picker(&FolderPickerOptions::default());
    println!("Selected folders: {folders:?}");

    Ok(())
}
