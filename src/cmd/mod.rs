use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod config;
use config::SiConfig;

mod digest;
pub use digest::{DigestArgs, VerifyArgs};

mod list;
pub use list::ListArgs;

#[derive(Parser)]
#[command(name = "sidigest", version = env!("SIDIGEST_VERSION_INFO"))]
#[command(about = "message digest for DICOM digital signatures")]
pub struct SiArgs {
    #[arg(short, long, help = "read the message from pipe(stdin)")]
    pub pipe: bool,

    #[arg(short, long, value_name = "FILE", help = "the configuration file path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: SiSubArgs,
}

#[derive(Subcommand)]
pub enum SiSubArgs {
    #[command(alias = "ls")]
    List(ListArgs),
    #[command(alias = "d")]
    Digest(DigestArgs),
    #[command(alias = "v")]
    Verify(VerifyArgs),
}

impl SiArgs {
    pub fn exe(self) -> anyhow::Result<()> {
        let cfg = SiConfig::init(self.config.as_deref())?;

        let mut pipe = Vec::new();
        if self.pipe {
            let _len = std::io::stdin().lock().read_to_end(&mut pipe)?;
        }
        let pipe = self.pipe.then_some(pipe.as_slice());

        let mut out = std::io::stdout().lock();
        self.cmd.exe(pipe, cfg, &mut out)?;
        out.flush()?;

        Ok(())
    }
}

impl SiSubArgs {
    pub fn exe<W: Write>(
        self,
        pipe: Option<&[u8]>,
        cfg: &SiConfig,
        out: &mut W,
    ) -> anyhow::Result<()> {
        match self {
            SiSubArgs::List(a) => a.exe(cfg, out),
            SiSubArgs::Digest(a) => a.exe(pipe, cfg, out),
            SiSubArgs::Verify(a) => a.exe(pipe, cfg, out),
        }
    }
}
