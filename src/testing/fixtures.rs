use crate::domain::account::{Account, Balance};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const CURRENCIES: [&str; 3] = ["USD", "EUR", "CAD"];

pub fn random_int(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

pub fn random_string(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

pub fn random_owner() -> String {
    random_string(6)
}

/// A balance between 0 and 1000.00 with two decimal places.
pub fn random_money() -> Balance {
    Balance::new(Decimal::new(random_int(0, 100_000), 2))
}

pub fn random_currency() -> String {
    CURRENCIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("USD")
        .to_string()
}

pub fn random_account() -> Account {
    Account {
        id: random_int(1, 1000),
        owner: random_owner(),
        balance: random_money(),
        currency: random_currency(),
    }
}
