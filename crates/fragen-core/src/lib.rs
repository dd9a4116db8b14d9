#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod random;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    CaptureRule, CaptureRuleError, EnvEntry, EnvValue, Environment, GeneratedIdentifier, Header,
    HttpMethod, IdentifierGenerator, RenderedRequest, RequestTemplate, ResponseSummary,
    TemplateError, ValidationError, format_franchise_name, render_template,
    validate_franchise_name,
};
pub use ports::{
    ConsoleSink, CoreError, EnvironmentRepository, EnvironmentStore, MemoryConsole, NoopConsole,
    RandomSource, RepositoryError, RequestSender, TracingConsole, TransportError,
};
pub use random::{SeededRandom, ThreadRandom, random_source};
pub use services::{
    FRANCHISE_NAME_KEY, FranchiseNameHook, PreparedRequest, RANDOM_NUMBER_KEY, RequestRunner,
    RunOutcome, generate_identifier,
};
pub use settings::{NumberStorage, Settings, SettingsError, validate_settings};
