impl_mac_adapter!(
    SHA384,
    ::sha2::Sha384,
    doc = r"SHA-384, 内部使用SHA-512的512位压缩状态, 输出时截断为384位(48字节)"
);

#[cfg(test)]
mod tests {
    use super::SHA384;
    use crate::{Mac, MacError, MacType};

    #[test]
    fn sha384() {
        kat_cases!(
            SHA384,
            [
                b"",
                "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
            ],
            [
                b"abc",
                "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
            ],
            [
                b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
                "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6b0455a8520bc4e6f5fe95b1fe3c8452b"
            ],
            [
                b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
                "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039"
            ]
        );
    }

    #[test]
    fn sha384_identity() {
        let (a, b) = (SHA384::new(), SHA384::default());
        for m in [&a, &b] {
            assert_eq!(m.size(), 48);
            assert_eq!(m.mac_type(), MacType::SHA384);
            assert_eq!(m.defined_term(), "SHA384");
        }
        assert_eq!(SHA384::DEFINED_TERM, "SHA384");
    }

    #[test]
    fn sha384_finalize_into_larger_buffer() {
        let mut mac = SHA384::new();
        mac.initialize().unwrap();
        mac.feed(b"abc").unwrap();

        let mut small = [0u8; 47];
        assert_eq!(
            mac.finalize(&mut small),
            Err(MacError::BufferTooSmall {
                target: 48,
                real: 47
            })
        );
        assert!(mac.is_running());

        let mut buf = [0xffu8; 64];
        mac.finalize(&mut buf).unwrap();
        assert_eq!(buf[..48], SHA384::new().digest_all(b"abc").unwrap().as_ref()[..]);
        assert!(buf[48..].iter().all(|&x| x == 0xff));
        assert!(!mac.is_running());
    }
}
