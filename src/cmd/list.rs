use std::io::Write;

use clap::Args;
use simac::MacType;

use super::config::SiConfig;

#[derive(Args)]
#[command(about = "list the supported MAC algorithms")]
pub struct ListArgs {
    #[arg(long, help = "only list the allowed algorithms")]
    allowed: bool,
}

impl ListArgs {
    pub fn exe<W: Write>(self, cfg: &SiConfig, out: &mut W) -> anyhow::Result<()> {
        let allowed = cfg.allowed_macs()?;

        writeln!(out, "{:<10} {:>6} {:>5}", "TERM", "TAG", "BYTES")?;
        for &mac in MacType::all() {
            let is_allowed = allowed.is_empty() || allowed.contains(&mac);
            if self.allowed && !is_allowed {
                continue;
            }

            write!(out, "{:<10} {:>#6x} {:>5}", mac, mac as u32, mac.size())?;
            if mac.defined_term() == cfg.mac {
                write!(out, " (default)")?;
            }
            if !is_allowed {
                write!(out, " (forbidden)")?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}
