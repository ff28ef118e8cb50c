pub mod config;
pub mod onboarding;
pub mod survey;
