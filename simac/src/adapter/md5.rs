impl_mac_adapter!(
    MD5,
    ::md5::Md5,
    doc = r"MD5, 摘要长度128位. 仅用于验证旧的签名, 新签名不应再使用"
);
