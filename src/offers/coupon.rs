use rand::Rng;

const COUPON_PREFIX: &str = "ECO-";
const COUPON_LEN: usize = 8;
/// Sans 0/O ni 1/I pour éviter les confusions à la saisie
const COUPON_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Génère un code coupon `ECO-XXXXXXXX`, jamais persisté
pub fn generate_coupon_code() -> String {
    let mut rng = rand::rng();
    let code: String = (0..COUPON_LEN)
        .map(|_| char::from(COUPON_ALPHABET[rng.random_range(0..COUPON_ALPHABET.len())]))
        .collect();
    format!("{COUPON_PREFIX}{code}")
}
