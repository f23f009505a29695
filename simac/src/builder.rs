use crate::adapter::{MD5, RIPEMD160, SHA1, SHA256, SHA384, SHA512};
use crate::{Mac, MacError};
use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

/// $NAME: 枚举名<br>
/// $ITEM: 摘要算法, 同时也是DICOM defined term<br>
/// $VAL: 算法的数值标识<br>
/// $SIZE: 摘要的字节长度<br>
macro_rules! impl_mac_type {
    ($NAME: ident, $([$ITEM: ident = $VAL: literal, $SIZE: literal]),+) => {
        #[repr(u32)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum $NAME {
            $($ITEM = $VAL,)+
        }

        impl $NAME {
            const ALL: &'static [$NAME] = &[$(Self::$ITEM,)+];

            /// 所有支持的摘要算法
            pub fn all() -> &'static [$NAME] {
                Self::ALL
            }

            /// DICOM defined term
            pub const fn defined_term(&self) -> &'static str {
                match self {
                    $(Self::$ITEM => stringify!($ITEM),)+
                }
            }

            /// 摘要的字节长度
            pub const fn size(&self) -> usize {
                match self {
                    $(Self::$ITEM => $SIZE,)+
                }
            }
        }

        impl TryFrom<u32> for $NAME {
            type Error = MacError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                match value {
                    $(x if x == Self::$ITEM as u32 => Ok(Self::$ITEM),)+
                    _ => Err(MacError::InvalidMacType(value)),
                }
            }
        }

    };
}

impl_mac_type!(
    MacType,
    [MD5 = 0x10, 16],
    [RIPEMD160 = 0x11, 20],
    [SHA1 = 0x20, 20],
    [SHA256 = 0x21, 32],
    [SHA384 = 0x22, 48],
    [SHA512 = 0x23, 64]
);

impl MacType {
    /// 构造该摘要算法的适配器, 适配器处于空闲状态
    pub fn build(self) -> Box<dyn Mac> {
        match self {
            MacType::MD5 => Box::new(MD5::new()),
            MacType::RIPEMD160 => Box::new(RIPEMD160::new()),
            MacType::SHA1 => Box::new(SHA1::new()),
            MacType::SHA256 => Box::new(SHA256::new()),
            MacType::SHA384 => Box::new(SHA384::new()),
            MacType::SHA512 => Box::new(SHA512::new()),
        }
    }
}

impl Display for MacType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.defined_term())
    }
}

/// 忽略大小写以及`-`, `_`, 即`sha-384`, `Sha384`都会解析为`SHA384`.
impl FromStr for MacType {
    type Err = MacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let term = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();

        Self::all()
            .iter()
            .find(|x| x.defined_term() == term)
            .copied()
            .ok_or_else(|| MacError::UnknownDefinedTerm(s.to_string()))
    }
}

/// 按照摘要算法类型构造适配器. 设置了允许列表时, 不在列表中的算法会被拒绝.
#[derive(Clone, Debug)]
pub struct MacBuilder {
    mac: MacType,
    allowed: Option<Vec<MacType>>,
}

impl From<MacType> for MacBuilder {
    fn from(value: MacType) -> Self {
        Self::new(value)
    }
}

impl MacBuilder {
    pub fn new(mac: MacType) -> Self {
        Self { mac, allowed: None }
    }

    /// 通过DICOM defined term选择摘要算法
    pub fn with_defined_term(term: &str) -> Result<Self, MacError> {
        Ok(Self::new(term.parse()?))
    }

    /// 允许使用的摘要算法. 空列表等同于不限制.
    pub fn allowed(mut self, allowed: &[MacType]) -> Self {
        self.allowed = if allowed.is_empty() {
            None
        } else {
            Some(allowed.to_vec())
        };
        self
    }

    pub fn mac_type(&self) -> MacType {
        self.mac
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&self.mac))
    }

    pub fn build(&self) -> Result<Box<dyn Mac>, MacError> {
        if self.is_allowed() {
            Ok(self.mac.build())
        } else {
            Err(MacError::NotAllowed(self.mac))
        }
    }
}
