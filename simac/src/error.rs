use crate::MacType;
use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MacError {
    /// 在空闲状态(未`initialize()`或已`finalize()`)下执行了`op`操作
    NotInitialized { mac: MacType, op: &'static str },
    /// 输出缓冲区的字节长度`real`小于摘要的字节长度`target`
    BufferTooSmall { target: usize, real: usize },
    /// 实际字节长度`real`和目标字节长度`target`不匹配
    MismatchingByteLen { target: usize, real: usize },
    InvalidMacType(u32),
    UnknownDefinedTerm(String),
    /// 摘要算法不在允许使用的列表中
    NotAllowed(MacType),
}

impl Display for MacError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MacError::NotInitialized { mac, op } => f.write_fmt(format_args!(
                "{mac} cannot `{op}` before `initialize`"
            )),
            MacError::BufferTooSmall { target, real } => f.write_fmt(format_args!(
                "result buffer byte length `{real}` is less than digest byte length `{target}`"
            )),
            MacError::MismatchingByteLen { target, real } => f.write_fmt(format_args!(
                "real byte length `{real}` not match to target byte length `{target}`"
            )),
            MacError::InvalidMacType(x) => {
                f.write_fmt(format_args!("{x:#x} is not valid MacType value"))
            }
            MacError::UnknownDefinedTerm(s) => {
                f.write_fmt(format_args!("`{s}` is not a supported MAC algorithm"))
            }
            MacError::NotAllowed(mac) => {
                f.write_fmt(format_args!("MAC algorithm {mac} is not allowed"))
            }
        }
    }
}

impl Error for MacError {}

impl From<MacError> for std::io::Error {
    fn from(value: MacError) -> Self {
        std::io::Error::other(value)
    }
}
