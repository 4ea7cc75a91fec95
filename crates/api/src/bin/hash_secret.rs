//! Print the Argon2id PHC hash of a client secret read from stdin, for use
//! in `AUTH_CLIENTS`.

use std::io::{self, BufRead};

use vidcat_api::auth::secret::hash_secret;

fn main() {
    let mut secret = String::new();
    io::stdin()
        .lock()
        .read_line(&mut secret)
        .expect("Failed to read secret from stdin");
    let secret = secret.trim_end_matches(['\r', '\n']);
    assert!(!secret.is_empty(), "secret must not be empty");

    let hash = hash_secret(secret).expect("Failed to hash secret");
    println!("{hash}");
}
