//! # 数字签名使用的消息摘要(MAC)
//!
//! 数字签名流程先将规范化后的数据集字节流送入摘要算法, 再由签名算法对摘要进行签名或验签.
//! 本crate提供与算法无关的摘要生命周期接口[`Mac`], 以及每个摘要算法对应的适配器.
//!
//! ```text
//! idle --initialize()--> running --feed()*--> running --finalize()--> idle
//! ```
//!
//! - 摘要算法的实现(压缩函数)来自RustCrypto, 本crate只驱动其状态机;
//! - 每个算法通过[`MacType::defined_term`]映射到DICOM中的MAC Algorithm defined term;
//! - 适配器实例独占其引擎状态, 不可复制, 同一时刻只对应一次摘要计算.

use std::io::Write;

mod error;
pub use error::MacError;

mod output;
pub use output::Output;

mod builder;
pub use builder::{MacBuilder, MacType};

mod adapter;
pub use adapter::{MD5, RIPEMD160, SHA1, SHA256, SHA384, SHA512};

#[cfg(test)]
mod tests;

/// 摘要算法适配器实现该trait.
///
/// 必须先调用`initialize()`, 再调用若干次`feed()`写入数据, 最后调用`finalize()`获取摘要.
/// `finalize()`之后适配器回到空闲状态, 需要再次`initialize()`才能开始下一次计算.
/// 在空闲状态调用`feed()`或`finalize()`会返回[`MacError::NotInitialized`].
///
/// 通过`Write` trait写入的数据等同于调用`feed()`.
pub trait Mac: Write + Send {
    /// 将摘要算法重置到初始状态, 之前写入但未`finalize()`的数据会被丢弃.
    fn initialize(&mut self) -> Result<(), MacError>;

    /// 将数据追加到正在进行的摘要计算中, 数据的分块方式不影响最终的摘要.
    fn feed(&mut self, data: &[u8]) -> Result<(), MacError>;

    /// 完成摘要计算并将`self.size()`字节的摘要写入`result`的前部.
    ///
    /// `result`的长度小于`self.size()`时返回[`MacError::BufferTooSmall`], 此时计算状态保持不变.
    fn finalize(&mut self, result: &mut [u8]) -> Result<(), MacError>;

    /// 摘要的字节长度
    fn size(&self) -> usize;

    /// 摘要算法类型
    fn mac_type(&self) -> MacType;

    /// DICOM defined term
    fn defined_term(&self) -> &str;

    /// 是否处于`initialize()`之后`finalize()`之前的计算状态
    fn is_running(&self) -> bool;

    /// 完成摘要计算, 返回摘要
    fn finalize_output(&mut self) -> Result<Output, MacError> {
        let mut data = vec![0u8; self.size()];
        self.finalize(data.as_mut_slice())?;
        Ok(Output::new(self.mac_type(), data))
    }

    /// 生成消息摘要. 会丢弃之前未完成的计算.
    fn digest_all(&mut self, msg: &[u8]) -> Result<Output, MacError> {
        self.initialize()?;
        self.feed(msg)?;
        self.finalize_output()
    }
}
