use anyhow::Result;

use crate::api::support;

pub fn handle() -> Result<()> {
  let info = support::support_info();

  print!("{}", toml::to_string(&info)?);

  Ok(())
}
