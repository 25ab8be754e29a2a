use std::fmt;
use std::str::FromStr;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

/// Requested digest algorithm is not part of the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown hash algorithm {:?}", self.0)
    }
}
impl std::error::Error for UnknownAlgorithm {}

/// The supported digest algorithms. Unrecognized names never reach this
/// type; callers decide how to fall back (the interactive session
/// substitutes [`Algorithm::default`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    Md5,
    #[default]
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Canonical display name, as echoed in the results block.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha224 => "SHA-224",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
        }
    }

    /// Digests the UTF-8 encoding of `merged`.
    pub fn digest(self, merged: &str) -> Vec<u8> {
        match self {
            Algorithm::Md5 => Md5::digest(merged).to_vec(),
            Algorithm::Sha1 => Sha1::digest(merged).to_vec(),
            Algorithm::Sha224 => Sha224::digest(merged).to_vec(),
            Algorithm::Sha256 => Sha256::digest(merged).to_vec(),
            Algorithm::Sha384 => Sha384::digest(merged).to_vec(),
            Algorithm::Sha512 => Sha512::digest(merged).to_vec(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Accepts the `MessageDigest`-style spellings ("SHA-1", "MD5", ...)
    /// case-insensitively, with or without the dash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "").as_str() {
            "MD5" => Ok(Algorithm::Md5),
            "SHA1" => Ok(Algorithm::Sha1),
            "SHA224" => Ok(Algorithm::Sha224),
            "SHA256" => Ok(Algorithm::Sha256),
            "SHA384" => Ok(Algorithm::Sha384),
            "SHA512" => Ok(Algorithm::Sha512),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
