//! rFareLog main entrypoint.

use rfarelog::run;
use rfarelog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
