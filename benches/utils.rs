use rand::{Rng, SeedableRng, rngs::StdRng};
use uttergen::Intents;

/// Generate `n` random intents, each with a handful of templates mixing plain
/// words, alternations, optional groups and slots.
pub fn generate_random_intents(n: usize) -> Intents {
    let mut rng = StdRng::seed_from_u64(42); // Fixed seed for reproducibility
    let mut intents = Intents::new();

    for i in 0..n {
        let template_count = rng.random_range(1..4);
        let templates: Vec<String> = (0..template_count)
            .map(|_| random_template(&mut rng))
            .collect();
        intents.insert(format!("Intent{i}"), templates);
    }

    intents
}

fn random_template(rng: &mut StdRng) -> String {
    let token_count = rng.random_range(3..8);
    let mut tokens = Vec::with_capacity(token_count);

    for _ in 0..token_count {
        let token = match rng.random_range(0..10) {
            0..=4 => random_string(rng, 2, 8),
            5..=6 => format!("({})", random_alternatives(rng)),
            7..=8 => format!("(|{})", random_string(rng, 2, 8)),
            _ => format!("{{({})|Slot}}", random_alternatives(rng)),
        };
        tokens.push(token);
    }

    tokens.join(" ")
}

fn random_alternatives(rng: &mut StdRng) -> String {
    let count = rng.random_range(2..4);
    (0..count)
        .map(|_| random_string(rng, 2, 8))
        .collect::<Vec<_>>()
        .join("|")
}

/// Generate a random string with length between min and max
fn random_string(rng: &mut StdRng, min_len: usize, max_len: usize) -> String {
    let charset = "abcdefghijklmnopqrstuvwxyz";
    let len = rng.random_range(min_len..=max_len);

    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..charset.len());
            charset.chars().nth(idx).unwrap()
        })
        .collect()
}
