use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use simac::Output;
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

use super::config::SiConfig;
use crate::error::SiError;
use crate::log_error;
use crate::stream::{digest_file, digest_files, digest_reader};

#[derive(Args, Clone)]
pub struct DigestCommonArgs {
    #[arg(value_name = "STRING", help = "the message string, appended after the pipe data")]
    pub msg: Option<String>,

    #[arg(short, long, value_name = "TERM")]
    #[arg(help = "the MAC algorithm defined term, e.g. SHA384")]
    pub mac: Option<String>,
}

#[derive(Args)]
#[command(about = "message digest of (PIPE | STRING) or files")]
pub struct DigestArgs {
    #[command(flatten)]
    common: DigestCommonArgs,

    #[arg(short, long = "file", value_name = "FILEs")]
    #[arg(help = "digest each file separately")]
    files: Vec<PathBuf>,

    #[arg(long, help = "display prefix with `0x`")]
    prefix: bool,

    #[arg(long, help = "display with upper case")]
    upper: bool,
}

#[derive(Args)]
#[command(about = "verify the message digest of (PIPE | STRING) or file")]
pub struct VerifyArgs {
    #[command(flatten)]
    common: DigestCommonArgs,

    #[arg(short, long = "file", value_name = "FILE", conflicts_with = "msg")]
    file: Option<PathBuf>,

    #[arg(short, long, value_name = "HEX", help = "the expected digest in hex")]
    expect: String,
}

impl DigestCommonArgs {
    /// 按顺序将pipe数据和字符串送入摘要算法
    fn digest_msg(&self, pipe: Option<&[u8]>, cfg: &SiConfig) -> Result<Output, SiError> {
        let mut mac = cfg.mac_builder(self.mac.as_deref())?.build()?;
        let (pipe, msg) = (
            pipe.unwrap_or_default(),
            self.msg.as_deref().unwrap_or_default().as_bytes(),
        );

        digest_reader(mac.as_mut(), &mut pipe.chain(msg), cfg.io_buf_size)
    }
}

fn format_digest(d: &Output, prefix: bool, upper: bool) -> String {
    match (prefix, upper) {
        (false, false) => format!("{:x}", d),
        (true, false) => format!("{:#x}", d),
        (false, true) => format!("{:X}", d),
        (true, true) => format!("{:#X}", d),
    }
}

impl DigestArgs {
    pub fn exe<W: Write>(
        self,
        pipe: Option<&[u8]>,
        cfg: &SiConfig,
        out: &mut W,
    ) -> anyhow::Result<()> {
        if self.files.is_empty() {
            let d = self.common.digest_msg(pipe, cfg)?;
            writeln!(out, "{}", format_digest(&d, self.prefix, self.upper))?;
            return Ok(());
        }

        anyhow::ensure!(
            pipe.is_none() && self.common.msg.is_none(),
            "the (PIPE | STRING) cannot be used together with `--file`"
        );

        let builder = cfg.mac_builder(self.common.mac.as_deref())?;
        let mut failed = 0usize;
        for (path, d) in digest_files(&builder, self.files.as_slice(), cfg)? {
            match log_error(d) {
                Some(d) => writeln!(
                    out,
                    "{}  {}",
                    format_digest(&d, self.prefix, self.upper),
                    path.display()
                )?,
                None => failed += 1,
            }
        }

        anyhow::ensure!(
            failed == 0,
            "{failed} of {} files digest failed",
            self.files.len()
        );

        Ok(())
    }
}

impl VerifyArgs {
    pub fn exe<W: Write>(
        self,
        pipe: Option<&[u8]>,
        cfg: &SiConfig,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let expect = self.expect.trim();
        let expect_hex = expect
            .strip_prefix("0x")
            .or_else(|| expect.strip_prefix("0X"))
            .unwrap_or(expect);
        let expected = hex::decode(expect_hex)
            .map_err(|_| SiError::InvalidHexDigest(self.expect.clone()))?;

        #[allow(unused_mut)]
        let mut d = match self.file.as_ref() {
            Some(f) => {
                anyhow::ensure!(
                    pipe.is_none(),
                    "the PIPE cannot be used together with `--file`"
                );
                let builder = cfg.mac_builder(self.common.mac.as_deref())?;
                digest_file(&builder, f.as_path(), cfg.io_buf_size)?
            }
            None => self.common.digest_msg(pipe, cfg)?,
        };

        let is_match = d.verify(expected.as_slice());
        let real = format!("{:x}", d);
        #[cfg(feature = "sec-zeroize")]
        d.zeroize();

        if is_match {
            writeln!(out, "{}: OK", d.mac_type())?;
            Ok(())
        } else {
            writeln!(out, "{}: FAILED", d.mac_type())?;
            Err(SiError::DigestMismatch {
                expect: expect_hex.to_ascii_lowercase(),
                real,
            }
            .into())
        }
    }
}
