//! 将输入流送入摘要算法.
//!
//! 多个文件并行计算时, 每个文件在各自的工作线程中构造独立的适配器, 适配器不会在线程间共享.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use simac::{Mac, MacBuilder, Output};

use crate::cmd::config::SiConfig;
use crate::error::SiError;

/// 每次最多读取`buf_size`字节送入`mac`, 直到`reader`读完.
pub fn digest_reader<R: Read + ?Sized>(
    mac: &mut dyn Mac,
    reader: &mut R,
    buf_size: usize,
) -> Result<Output, SiError> {
    mac.initialize()?;

    let mut buf = vec![0u8; buf_size.max(1)];
    loop {
        let n = match reader.read(buf.as_mut_slice()) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(SiError::ReadFailed {
                    path: "<stream>".to_string(),
                    msg: e.to_string(),
                })
            }
        };

        mac.feed(&buf[..n])?;
    }

    Ok(mac.finalize_output()?)
}

pub fn digest_file(builder: &MacBuilder, path: &Path, buf_size: usize) -> Result<Output, SiError> {
    if !path.is_file() {
        return Err(SiError::PathNotExist(path.display().to_string()));
    }

    let mut f = File::open(path).map_err(|e| SiError::ReadFailed {
        path: path.display().to_string(),
        msg: e.to_string(),
    })?;

    let mut mac = builder.build()?;
    digest_reader(mac.as_mut(), &mut f, buf_size).map_err(|e| match e {
        SiError::ReadFailed { msg, .. } => SiError::ReadFailed {
            path: path.display().to_string(),
            msg,
        },
        e => e,
    })
}

/// 使用最多`cfg.threads`个线程并行计算`paths`中每个文件的摘要, 结果与`paths`顺序一致.
pub fn digest_files(
    builder: &MacBuilder,
    paths: &[PathBuf],
    cfg: &SiConfig,
) -> Result<Vec<(PathBuf, Result<Output, SiError>)>, SiError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cfg.threads.min(paths.len()).max(1))
        .build()?;

    log::debug!(
        "digest {} files with {} by {} threads",
        paths.len(),
        builder.mac_type(),
        pool.current_num_threads()
    );

    Ok(pool.install(|| {
        paths
            .par_iter()
            .map(|p| (p.clone(), digest_file(builder, p, cfg.io_buf_size)))
            .collect()
    }))
}
