use rand::Rng;

/// Size of one password-hiding block and of the Request Authenticator
pub const BLOCK_SIZE: usize = 16;

/// Generate a random Request Authenticator (16 bytes) per RFC 2865 Section 3
pub fn generate_request_authenticator() -> [u8; 16] {
    let mut rng = rand::rng();
    let mut authenticator = [0u8; 16];
    rng.fill(&mut authenticator);
    authenticator
}

/// Pick a request identifier.
///
/// The identifier is the only thing tying a response to its request, and it is
/// drawn uniformly from 0-255 with no attempt to avoid collisions. Each request
/// owns its own socket, so a collision between concurrent callers cannot route a
/// response to the wrong caller.
pub fn generate_identifier() -> u8 {
    rand::random()
}

/// MD5(secret + seed), the keystream for one block
fn block_hash(secret: &[u8], seed: &[u8]) -> [u8; 16] {
    let mut context = md5::Context::new();
    context.consume(secret);
    context.consume(seed);
    context.compute().0
}

/// Encrypt User-Password attribute per RFC 2865 Section 5.2
///
/// The password is first padded to a multiple of 16 bytes, then XORed with
/// MD5(secret + request_authenticator) for the first 16 bytes, and
/// MD5(secret + previous_block) for subsequent blocks. An empty password
/// still produces one block.
pub fn encrypt_user_password(password: &[u8], secret: &[u8], authenticator: &[u8; 16]) -> Vec<u8> {
    let blocks = password.len().div_ceil(BLOCK_SIZE).max(1);
    let mut padded = password.to_vec();
    padded.resize(blocks * BLOCK_SIZE, 0);

    let mut result = Vec::with_capacity(padded.len());
    let mut previous_block = *authenticator;

    for chunk in padded.chunks(BLOCK_SIZE) {
        let hash = block_hash(secret, &previous_block);

        let mut encrypted_block = [0u8; 16];
        for i in 0..BLOCK_SIZE {
            encrypted_block[i] = chunk[i] ^ hash[i];
        }

        previous_block = encrypted_block;
        result.extend_from_slice(&encrypted_block);
    }

    result
}

/// Decrypt User-Password attribute per RFC 2865 Section 5.2
///
/// Trailing zero padding is stripped from the result.
pub fn decrypt_user_password(
    encrypted: &[u8],
    secret: &[u8],
    authenticator: &[u8; 16],
) -> Option<Vec<u8>> {
    if encrypted.len() % BLOCK_SIZE != 0 || encrypted.is_empty() {
        return None;
    }

    let mut result = Vec::with_capacity(encrypted.len());
    let mut previous_block: &[u8] = authenticator;

    for chunk in encrypted.chunks(BLOCK_SIZE) {
        let hash = block_hash(secret, previous_block);
        result.extend(chunk.iter().zip(hash.iter()).map(|(c, h)| c ^ h));
        previous_block = chunk;
    }

    while result.last() == Some(&0) {
        result.pop();
    }

    Some(result)
}
