//! horimetro main entrypoint.

use horimetro::run;
use horimetro::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
