impl_mac_adapter!(
    SHA256,
    ::sha2::Sha256,
    doc = r"SHA-256, 摘要长度256位"
);
