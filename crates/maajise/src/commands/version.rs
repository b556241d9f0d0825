use anyhow::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn execute() -> Result<()> {
  println!("maajise {VERSION}");
  Ok(())
}
