impl_mac_adapter!(
    SHA512,
    ::sha2::Sha512,
    doc = r"SHA-512, 摘要长度512位"
);
