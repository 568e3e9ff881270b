//! Password generation.

use rand::Rng;
use zeroize::Zeroize;

use super::{GenerationConfig, Password, charset};

/// Generate a single password.
///
/// One character is drawn from every enabled class, the rest from the
/// combined pool, then the whole buffer is shuffled. Returns an empty
/// password when no class is enabled. If `length` is shorter than the number
/// of enabled classes the shuffled buffer is cut to `length`, so some classes
/// go missing.
pub fn generate<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Password {
    let classes = charset::enabled(config);
    if classes.is_empty() {
        log::debug!("no character class enabled, returning empty password");
        return Password::default();
    }

    let mut buf: Vec<u8> = Vec::with_capacity(config.length.max(classes.len()));

    for class in &classes {
        buf.push(random_byte(class.bytes(), rng));
    }

    let chars = charset::pool(&classes);
    while buf.len() < config.length {
        buf.push(random_byte(&chars, rng));
    }

    shuffle(&mut buf, rng);
    buf.truncate(config.length);

    // charset is all ASCII
    let pass: String = buf.iter().map(|&b| char::from(b)).collect();
    buf.zeroize();

    log::debug!(
        "generated {} chars from {} class(es), pool of {}",
        config.length,
        classes.len(),
        chars.len()
    );
    Password::from(pass)
}

/// Generate `count` independent passwords with the same config.
pub fn generate_batch<R: Rng + ?Sized>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
) -> Vec<Password> {
    (0..count).map(|_| generate(config, rng)).collect()
}

#[inline]
fn random_byte<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.random_range(0..chars.len())]
}

/// Fisher-Yates, one fresh draw per position.
#[inline]
fn shuffle<R: Rng + ?Sized>(chars: &mut [u8], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.random_range(0..=i);
        chars.swap(i, j);
    }
}
