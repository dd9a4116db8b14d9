//! The franchise-name pre-request hook.
//!
//! Runs immediately before a request is rendered: draws a number, formats the
//! franchise name, writes both into the environment, and logs the name.

use crate::domain::{EnvValue, GeneratedIdentifier, IdentifierGenerator};
use crate::ports::{ConsoleSink, EnvironmentStore, RandomSource};
use crate::settings::{NumberStorage, Settings, SettingsError};

/// Environment key receiving the formatted franchise name.
pub const FRANCHISE_NAME_KEY: &str = "franchise_name";

/// Environment key receiving the raw draw.
pub const RANDOM_NUMBER_KEY: &str = "random_number";

/// Pre-request hook populating `franchise_name` and `random_number`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FranchiseNameHook {
    generator: IdentifierGenerator,
    number_storage: NumberStorage,
}

impl FranchiseNameHook {
    pub const fn new(generator: IdentifierGenerator, number_storage: NumberStorage) -> Self {
        Self {
            generator,
            number_storage,
        }
    }

    /// Build the hook from validated settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        Ok(Self::new(
            IdentifierGenerator::from_settings(settings)?,
            settings.effective_number_storage(),
        ))
    }

    pub const fn generator(&self) -> &IdentifierGenerator {
        &self.generator
    }

    pub const fn number_storage(&self) -> NumberStorage {
        self.number_storage
    }

    /// Generate an identifier, store both values, and log the name.
    pub fn run(
        &self,
        rng: &mut dyn RandomSource,
        store: &mut dyn EnvironmentStore,
        console: &dyn ConsoleSink,
    ) -> GeneratedIdentifier {
        let identifier = self.generator.generate(rng);

        store.set(
            FRANCHISE_NAME_KEY,
            EnvValue::Text(identifier.franchise_name.clone()),
        );
        store.set(
            RANDOM_NUMBER_KEY,
            self.number_storage.to_value(identifier.random_number),
        );

        console.log(&format!(
            "Generated franchise name: {}",
            identifier.franchise_name
        ));

        identifier
    }
}

/// Run the hook with its default configuration: prefix `fra`, range `1..=1000`,
/// `random_number` stored as a native integer.
pub fn generate_identifier(
    rng: &mut dyn RandomSource,
    store: &mut dyn EnvironmentStore,
    console: &dyn ConsoleSink,
) -> GeneratedIdentifier {
    FranchiseNameHook::default().run(rng, store, console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Environment;
    use crate::ports::{MockConsoleSink, MockRandomSource, NoopConsole};

    fn rng_returning(value: u32) -> MockRandomSource {
        let mut rng = MockRandomSource::new();
        rng.expect_draw_inclusive().times(1).return_const(value);
        rng
    }

    #[test]
    fn test_draw_42_populates_store_and_console() {
        let mut rng = rng_returning(42);
        let mut env = Environment::new("test");
        let mut console = MockConsoleSink::new();
        console
            .expect_log()
            .withf(|line| line.contains("fra42"))
            .times(1)
            .return_const(());

        let id = generate_identifier(&mut rng, &mut env, &console);

        assert_eq!(id.franchise_name, "fra42");
        assert_eq!(id.random_number, 42);
        assert_eq!(env.get(FRANCHISE_NAME_KEY), Some(EnvValue::from("fra42")));
        assert_eq!(env.get(RANDOM_NUMBER_KEY), Some(EnvValue::Number(42)));
    }

    #[test]
    fn test_bounds() {
        let mut env = Environment::new("test");

        let low = generate_identifier(&mut rng_returning(1), &mut env, &NoopConsole);
        assert_eq!(low.franchise_name, "fra1");

        let high = generate_identifier(&mut rng_returning(1000), &mut env, &NoopConsole);
        assert_eq!(high.franchise_name, "fra1000");
        assert_eq!(env.get(RANDOM_NUMBER_KEY), Some(EnvValue::Number(1000)));
    }

    #[test]
    fn test_repeat_runs_overwrite_keys() {
        let mut env = Environment::new("test");
        generate_identifier(&mut rng_returning(3), &mut env, &NoopConsole);
        generate_identifier(&mut rng_returning(4), &mut env, &NoopConsole);

        assert_eq!(env.len(), 2);
        assert_eq!(env.get(FRANCHISE_NAME_KEY), Some(EnvValue::from("fra4")));
    }

    #[test]
    fn test_text_number_storage() {
        let hook = FranchiseNameHook::new(IdentifierGenerator::default(), NumberStorage::Text);
        let mut env = Environment::new("test");

        hook.run(&mut rng_returning(42), &mut env, &NoopConsole);

        let stored = env.get(RANDOM_NUMBER_KEY).unwrap();
        assert_eq!(stored, EnvValue::from("42"));
        assert_eq!(stored.as_i64(), Some(42));
    }

    #[test]
    fn test_from_settings_uses_prefix_and_range() {
        let settings = Settings {
            name_prefix: Some("shop".into()),
            min_number: Some(5),
            max_number: Some(6),
            ..Settings::with_defaults()
        };
        let hook = FranchiseNameHook::from_settings(&settings).unwrap();
        assert_eq!(hook.generator().prefix(), "shop");
        assert_eq!(hook.generator().range(), 5..=6);

        let mut rng = MockRandomSource::new();
        rng.expect_draw_inclusive()
            .withf(|low, high| *low == 5 && *high == 6)
            .return_const(6_u32);
        let mut env = Environment::new("test");
        assert_eq!(hook.run(&mut rng, &mut env, &NoopConsole).franchise_name, "shop6");
    }
}
