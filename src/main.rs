//! work_hours main entrypoint.

use work_hours::run;
use work_hours::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(e.kind().exit_code());
    }
}
