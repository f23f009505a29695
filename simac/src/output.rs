use crate::{MacError, MacType};
use std::fmt::{Display, LowerHex, UpperHex};
use subtle::ConstantTimeEq;
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

/// 消息摘要输出, 按书写顺序存储, 即大端序.
///
/// 由适配器的`finalize`生成, 适配器保证`self.len() == self.mac_type().size()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
    mac: MacType,
    data: Vec<u8>,
}

impl Output {
    pub(crate) fn new(mac: MacType, data: Vec<u8>) -> Self {
        debug_assert_eq!(mac.size(), data.len());
        Self { mac, data }
    }

    /// 生成该摘要的算法
    pub fn mac_type(&self) -> MacType {
        self.mac
    }

    pub fn iter(&self) -> std::slice::Iter<u8> {
        self.data.iter()
    }

    /// 字节长度
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 位长度
    pub fn bits(&self) -> usize {
        self.data.len() << 3
    }

    /// `N`必须和`self.len()`相等, 否则返回`MacError::MismatchingByteLen`.
    pub fn to_array<const N: usize>(&self) -> Result<[u8; N], MacError> {
        if N != self.len() {
            return Err(MacError::MismatchingByteLen {
                target: N,
                real: self.len(),
            });
        }

        let mut arr = [0u8; N];
        arr.copy_from_slice(self.as_ref());
        Ok(arr)
    }

    /// 以常量时间比较`expected`和摘要是否相同, 长度不同直接返回`false`.
    pub fn verify(&self, expected: &[u8]) -> bool {
        self.data.as_slice().ct_eq(expected).into()
    }
}

#[cfg(feature = "sec-zeroize")]
impl Zeroize for Output {
    fn zeroize(&mut self) {
        self.data.zeroize();
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Output> for Vec<u8> {
    fn from(value: Output) -> Self {
        value.data
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}:{:x}", self.mac, self))
    }
}

impl LowerHex for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for &b in self.as_ref() {
            f.write_fmt(format_args!("{:02x}", b))?;
        }

        Ok(())
    }
}

impl UpperHex for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.write_str("0X")?;
        }
        for &b in self.as_ref() {
            f.write_fmt(format_args!("{:02X}", b))?;
        }

        Ok(())
    }
}
