/// Pretty-printer for recorded action logs
///
/// Reads the JSON file written on exit when [logging] enable_action_log is
/// set and prints a per-event timeline plus a session summary.
use firetrap::action_log::{Action, LoggedAction};
use std::env;
use std::fs;
use std::io;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <action_log.json>", args[0]);
        eprintln!("Prints a recorded firetrap session as a timeline");
        std::process::exit(1);
    }

    let filename = &args[1];
    let json = fs::read_to_string(filename)?;
    let actions: Vec<LoggedAction> = serde_json::from_str(&json)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    println!("=== Action Log: {} ===", filename);
    println!("Events: {}\n", actions.len());

    let mut placed = 0;
    let mut removed = 0;
    let mut ignitions = 0;
    let mut slain = 0;

    for entry in &actions {
        let line = match &entry.action {
            Action::PlaceBrick { x, y } => {
                placed += 1;
                format!("PlaceBrick({:.1}, {:.1})", x, y)
            }
            Action::RemoveBrick { x, y } => {
                removed += 1;
                format!("RemoveBrick({:.1}, {:.1})", x, y)
            }
            Action::FurnaceIgnited { enclosed_count } => {
                ignitions += 1;
                format!("FurnaceIgnited(cells={})", enclosed_count)
            }
            Action::FurnaceExtinguished => "FurnaceExtinguished".to_string(),
            Action::EnemySlain { x, y } => {
                slain += 1;
                format!("EnemySlain({:.1}, {:.1})", x, y)
            }
            Action::SetVolume { volume } => format!("SetVolume({:.2})", volume),
            Action::SaveGame => "SaveGame".to_string(),
            Action::LoadGame => "LoadGame".to_string(),
        };
        println!("[{:6}ms] {}", entry.timestamp_ms, line);
    }

    println!("\n=== Summary ===");
    println!("Bricks placed: {}, removed: {}", placed, removed);
    println!("Ignitions: {}, enemies slain: {}", ignitions, slain);

    Ok(())
}
