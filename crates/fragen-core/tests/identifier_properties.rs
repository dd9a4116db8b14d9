//! Property checks for the franchise-name hook over many draws.

use fragen_core::{
    EnvValue, Environment, EnvironmentStore, FRANCHISE_NAME_KEY, IdentifierGenerator,
    MemoryConsole, NoopConsole, RANDOM_NUMBER_KEY, RandomSource, SeededRandom, ThreadRandom,
    generate_identifier,
};

/// Replays a fixed list of draws.
struct ScriptedRandom(Vec<u32>);

impl RandomSource for ScriptedRandom {
    fn draw_inclusive(&mut self, _low: u32, _high: u32) -> u32 {
        self.0.remove(0)
    }
}

#[test]
fn test_every_draw_is_in_range_and_formatted() {
    let generator = IdentifierGenerator::default();
    let mut rng = ThreadRandom;

    for _ in 0..10_000 {
        let id = generator.generate(&mut rng);
        assert!((1..=1000).contains(&id.random_number));
        assert_eq!(id.franchise_name, format!("fra{}", id.random_number));
        assert!(id.franchise_name.starts_with("fra"));
        assert!(!id.franchise_name[3..].starts_with('0'));
    }
}

#[test]
fn test_distribution_is_roughly_uniform() {
    const DRAWS: usize = 200_000;
    const BUCKETS: usize = 10;

    let generator = IdentifierGenerator::default();
    let mut rng = SeededRandom::new(0x5EED);
    let mut counts = [0_usize; BUCKETS];
    let mut seen_low = false;
    let mut seen_high = false;

    for _ in 0..DRAWS {
        let n = generator.generate(&mut rng).random_number;
        counts[((n - 1) / 100) as usize] += 1;
        seen_low |= n == 1;
        seen_high |= n == 1000;
    }

    // Each bucket of 100 values expects DRAWS / 10 hits; allow 5% deviation.
    let expected = DRAWS / BUCKETS;
    for (bucket, count) in counts.iter().enumerate() {
        let deviation = count.abs_diff(expected);
        assert!(
            deviation * 20 < expected,
            "bucket {bucket} got {count}, expected about {expected}"
        );
    }
    assert!(seen_low && seen_high, "both range ends should be drawn");
}

#[test]
fn test_documented_examples() {
    let mut rng = ScriptedRandom(vec![42, 1, 1000]);
    let mut env = Environment::new("examples");
    let console = MemoryConsole::new();

    let expected = [(42_i64, "fra42"), (1, "fra1"), (1000, "fra1000")];
    for (number, name) in expected {
        let id = generate_identifier(&mut rng, &mut env, &console);
        assert_eq!(id.franchise_name, name);
        assert_eq!(env.get(FRANCHISE_NAME_KEY), Some(EnvValue::from(name)));
        assert_eq!(env.get(RANDOM_NUMBER_KEY), Some(EnvValue::Number(number)));
    }

    assert_eq!(
        console.lines(),
        [
            "Generated franchise name: fra42",
            "Generated franchise name: fra1",
            "Generated franchise name: fra1000",
        ]
    );
}

#[test]
fn test_hook_preserves_unrelated_variables() {
    let mut env = Environment::new("local");
    env.set("base_url", "http://localhost:8080".into());
    env.set("token", "secret".into());

    generate_identifier(&mut SeededRandom::new(3), &mut env, &NoopConsole);

    assert_eq!(env.len(), 4);
    assert_eq!(env.get("token"), Some(EnvValue::from("secret")));
    let name = env.get(FRANCHISE_NAME_KEY).unwrap().to_string();
    let number = env.get(RANDOM_NUMBER_KEY).unwrap().as_i64().unwrap();
    assert_eq!(name, format!("fra{number}"));
}
