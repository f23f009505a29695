impl_mac_adapter!(
    RIPEMD160,
    ::ripemd::Ripemd160,
    doc = r"RIPEMD-160, 摘要长度160位"
);

#[cfg(test)]
mod tests {
    use super::RIPEMD160;

    #[test]
    fn ripemd160() {
        kat_cases!(
            RIPEMD160,
            [b"", "9c1185a5c5e9fc54612808977ee8f548b2258d31"],
            [b"a", "0bdc9d2d256b3ee9daae347be6f4dc835a467ffe"],
            [b"abc", "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"],
            [b"message digest", "5d0689ef49d2fae572b881b123a85ffa21595f36"]
        );
    }
}
