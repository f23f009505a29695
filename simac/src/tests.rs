use crate::{Mac, MacError, MacType, SHA384};
use rand::{Rng, RngCore};
use std::io::Write;

fn random_msg(rng: &mut impl RngCore, max_len: usize) -> Vec<u8> {
    let mut msg = vec![0u8; rng.gen_range(0..=max_len)];
    rng.fill_bytes(msg.as_mut_slice());
    msg
}

#[test]
fn deterministic() {
    let mut rng = rand::thread_rng();
    for &mac in MacType::all() {
        let mut m = mac.build();
        for _ in 0..16 {
            let msg = random_msg(&mut rng, 1024);
            let d1 = m.digest_all(msg.as_slice()).unwrap();
            let d2 = mac.build().digest_all(msg.as_slice()).unwrap();
            assert_eq!(d1, d2, "{mac} not deterministic");
            assert_eq!(d1.len(), mac.size());
        }
    }
}

#[test]
fn chunking_invariance() {
    let mut rng = rand::thread_rng();
    for &mac in MacType::all() {
        let mut m = mac.build();
        for _ in 0..16 {
            let msg = random_msg(&mut rng, 2048);
            let tgt = m.digest_all(msg.as_slice()).unwrap();

            m.initialize().unwrap();
            let mut rest = msg.as_slice();
            while !rest.is_empty() {
                let (chunk, tail) = rest.split_at(rng.gen_range(0..=rest.len()));
                m.feed(chunk).unwrap();
                rest = tail;
            }
            assert_eq!(tgt, m.finalize_output().unwrap(), "{mac} chunking failed");

            // 逐字节写入, 并夹杂空写入
            m.initialize().unwrap();
            for b in msg.iter() {
                m.feed(&[]).unwrap();
                m.feed(std::slice::from_ref(b)).unwrap();
            }
            assert_eq!(tgt, m.finalize_output().unwrap(), "{mac} byte feed failed");
        }
    }
}

#[test]
fn fixed_size() {
    let mut m = SHA384::new();
    assert_eq!(m.size(), 48);
    for len in [0usize, 1, 111, 112, 127, 128, 129, 1000] {
        let d = m.digest_all(vec![0x61u8; len].as_slice()).unwrap();
        assert_eq!(d.len(), 48);
        assert_eq!(m.size(), 48);
    }
}

#[test]
fn lifecycle_enforcement() {
    for &mac in MacType::all() {
        let mut m = mac.build();
        let mut buf = vec![0u8; m.size()];

        assert_eq!(
            m.feed(b"abc"),
            Err(MacError::NotInitialized { mac, op: "feed" })
        );
        assert_eq!(
            m.finalize(buf.as_mut_slice()),
            Err(MacError::NotInitialized {
                mac,
                op: "finalize"
            })
        );

        m.initialize().unwrap();
        assert!(m.is_running());
        m.feed(b"abc").unwrap();
        m.finalize(buf.as_mut_slice()).unwrap();
        assert!(!m.is_running());

        assert!(m.feed(b"abc").is_err());
        assert!(m.finalize(buf.as_mut_slice()).is_err());
        assert!(m.write_all(b"abc").is_err());
    }
}

#[test]
fn reuse_after_reset() {
    for &mac in MacType::all() {
        let tgt = mac.build().digest_all(b"abc").unwrap();

        let mut m = mac.build();
        m.initialize().unwrap();
        m.feed(b"stale data which must be discarded").unwrap();
        m.initialize().unwrap();
        m.feed(b"abc").unwrap();
        assert_eq!(tgt, m.finalize_output().unwrap());

        // 完成一次计算后再次使用
        m.digest_all(b"another message").unwrap();
        m.initialize().unwrap();
        m.feed(b"ab").unwrap();
        m.feed(b"c").unwrap();
        assert_eq!(tgt, m.finalize_output().unwrap());
    }
}

#[test]
fn defined_term_stable() {
    let used = {
        let mut m = SHA384::new();
        m.digest_all(b"abc").unwrap();
        m
    };
    let fresh = SHA384::new();
    let boxed = MacType::SHA384.build();

    assert_eq!(fresh.defined_term(), "SHA384");
    assert_eq!(used.defined_term(), fresh.defined_term());
    assert_eq!(boxed.defined_term(), fresh.defined_term());
}

#[test]
fn write_trait() {
    let mut m = MacType::SHA384.build();
    m.initialize().unwrap();
    std::io::copy(&mut &b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"[..], &mut m)
        .unwrap();
    assert_eq!(
        format!("{:x}", m.finalize_output().unwrap()),
        "3391fdddfc8dc7393707a65b1b4709397cf8b1d162af05abfe8f450de5f36bc6b0455a8520bc4e6f5fe95b1fe3c8452b"
    );
}

#[test]
fn concurrent_instances() {
    let msgs = (0..8u8).map(|i| vec![i; 4096]).collect::<Vec<_>>();
    let tgt = msgs
        .iter()
        .map(|msg| SHA384::new().digest_all(msg.as_slice()).unwrap())
        .collect::<Vec<_>>();

    let res = std::thread::scope(|s| {
        let handles = msgs
            .iter()
            .map(|msg| {
                s.spawn(move || {
                    let mut m = MacType::SHA384.build();
                    m.initialize().unwrap();
                    for chunk in msg.chunks(100) {
                        m.feed(chunk).unwrap();
                    }
                    m.finalize_output().unwrap()
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert_eq!(tgt, res);
}
