use std::error::Error;

use intcode::repl::Repl;

fn main() -> Result<(), Box<dyn Error>> {
    if let Err(e) = Repl::new().run() {
        eprintln!("Failure: {}", e);
    }

    Ok(())
}
