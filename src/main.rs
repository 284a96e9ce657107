//! rPunchclock main entrypoint.

use rpunchclock::run;
use rpunchclock::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(if e.is_rejection() { 2 } else { 1 });
    }
}
