impl_mac_adapter!(
    SHA1,
    ::sha1::Sha1,
    doc = r"SHA-1, 摘要长度160位"
);
