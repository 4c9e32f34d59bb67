use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

// Puts config.toml next to the built binary so Config::load finds it there.
fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=config.toml");

    // OUT_DIR is target/<profile>/build/<pkg>/out
    let out_dir = env::var("OUT_DIR")?;
    let profile_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .ok_or("OUT_DIR is not nested under the target profile dir")?;

    fs::copy("config.toml", profile_dir.join("config.toml"))?;
    Ok(())
}
