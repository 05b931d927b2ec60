mod secret;

pub use secret::SecretText;
