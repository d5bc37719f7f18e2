use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Tuning knobs for [`ShortenerService`](crate::ShortenerService).
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct ShortenerSettings {
    /// How many candidate ids to try before giving up with a conflict.
    ///
    /// `1` means a single collision is reported to the caller. Zero is
    /// treated as one.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        assert_eq!(ShortenerSettings::default().max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn builder_overrides_max_attempts() {
        let settings = ShortenerSettings::builder().max_attempts(1).build();
        assert_eq!(settings.max_attempts, 1);
    }
}
