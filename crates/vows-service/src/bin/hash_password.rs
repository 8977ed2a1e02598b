//! Prints an Argon2id hash for seeding `admin_user.password_hash` by hand.
//!
//! Reads the password from the first argument, or from the first line of
//! stdin when no argument is given.

use std::io::BufRead;

use vows_core::constants::MIN_PASSWORD_LENGTH;
use vows_service::auth::password::{hash_password, is_long_enough};

fn main() {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            if let Err(err) = std::io::stdin().lock().read_line(&mut line) {
                eprintln!("Failed to read password from stdin: {err}");
                std::process::exit(1);
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if !is_long_enough(&password) {
        eprintln!("Password must be at least {MIN_PASSWORD_LENGTH} characters");
        std::process::exit(2);
    }

    match hash_password(&password) {
        Ok(hash) => {
            println!("{hash}");
        }
        Err(err) => {
            eprintln!("Failed to hash password: {err}");
            std::process::exit(1);
        }
    }
}
