//! # 摘要算法适配器
//!
//! 每个适配器独占一个RustCrypto摘要引擎的状态(构造时分配, 析构时释放), 并按照[`Mac`](crate::Mac)的
//! 生命周期驱动引擎. 适配器没有实现`Clone`, 计算中途的状态不能被复制.
//!
//! - [RFC 1321 MD5](https://www.rfc-editor.org/rfc/rfc1321)
//! - [RIPEMD-160](https://homes.esat.kuleuven.be/~bosselae/ripemd160.html)
//! - [FIPS 180-4 SHA-1/SHA-2](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf)
//! - [DICOM PS3.15 Digital Signatures](https://dicom.nema.org/medical/dicom/current/output/html/part15.html)

/// $NAME: 适配器名, 与`MacType`中的枚举值同名<br>
/// $ENGINE: RustCrypto摘要引擎<br>
/// $DOC: 适配器文档<br>
macro_rules! impl_mac_adapter {
    ($NAME: ident, $ENGINE: ty, $DOC: meta) => {
        use crate::{Mac, MacError, MacType};
        use digest::typenum::Unsigned;
        use digest::{Digest, OutputSizeUser};
        use std::io::Write;

        #[$DOC]
        pub struct $NAME {
            ctx: Box<$ENGINE>,
            // initialize之后finalize之前为true
            running: bool,
        }

        // 引擎的输出长度必须和MacType中登记的长度一致
        const _: () =
            assert!(<<$ENGINE as OutputSizeUser>::OutputSize as Unsigned>::USIZE == $NAME::SIZE);

        impl $NAME {
            pub const MAC_TYPE: MacType = MacType::$NAME;
            pub const DEFINED_TERM: &'static str = MacType::$NAME.defined_term();
            /// 摘要的字节长度
            pub const SIZE: usize = MacType::$NAME.size();

            pub fn new() -> Self {
                Self {
                    ctx: Box::new(<$ENGINE as Digest>::new()),
                    running: false,
                }
            }

            fn check_running(&self, op: &'static str) -> Result<(), MacError> {
                if self.running {
                    Ok(())
                } else {
                    Err(MacError::NotInitialized {
                        mac: Self::MAC_TYPE,
                        op,
                    })
                }
            }
        }

        impl Default for $NAME {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Write for $NAME {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.feed(buf)?;
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl Mac for $NAME {
            fn initialize(&mut self) -> Result<(), MacError> {
                Digest::reset(&mut *self.ctx);
                self.running = true;
                Ok(())
            }

            fn feed(&mut self, data: &[u8]) -> Result<(), MacError> {
                self.check_running("feed")?;
                Digest::update(&mut *self.ctx, data);
                Ok(())
            }

            fn finalize(&mut self, result: &mut [u8]) -> Result<(), MacError> {
                self.check_running("finalize")?;
                if result.len() < Self::SIZE {
                    return Err(MacError::BufferTooSmall {
                        target: Self::SIZE,
                        real: result.len(),
                    });
                }

                let digest = Digest::finalize_reset(&mut *self.ctx);
                result[..Self::SIZE].copy_from_slice(digest.as_slice());
                self.running = false;

                Ok(())
            }

            fn size(&self) -> usize {
                Self::SIZE
            }

            fn mac_type(&self) -> MacType {
                Self::MAC_TYPE
            }

            fn defined_term(&self) -> &str {
                Self::DEFINED_TERM
            }

            fn is_running(&self) -> bool {
                self.running
            }
        }
    };
}

#[cfg(test)]
macro_rules! kat_cases {
    ($NAME: ty, $([$MSG: expr, $DIGEST: literal]),+) => {{
        use crate::Mac;
        let mut mac = <$NAME>::new();
        $(
            let d = mac.digest_all($MSG).unwrap();
            assert_eq!(format!("{:x}", d), $DIGEST, "case {:?} failed", $MSG);
        )+
    }};
}

mod md5;
mod ripemd160;
mod sha1;
mod sha256;
mod sha384;
mod sha512;

pub use self::md5::MD5;
pub use self::ripemd160::RIPEMD160;
pub use self::sha1::SHA1;
pub use self::sha256::SHA256;
pub use self::sha384::SHA384;
pub use self::sha512::SHA512;
