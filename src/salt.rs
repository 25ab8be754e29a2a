use rand::Rng;

/// Generates a random 16-byte salt, hex encoded.
///
/// The printed form is the exact string that gets merged and digested, so it
/// has to round-trip: hex keeps it unambiguous and free of the `{`/`}` merge
/// delimiters.
pub fn generate() -> String {
    let salt = rand::thread_rng().gen::<[u8; 16]>();
    hex::encode(salt)
}
