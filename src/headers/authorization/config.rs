/// Parsing options for [`AuthRecord::parse_with_config`].
///
/// [`AuthRecord::parse_with_config`]: super::AuthRecord::parse_with_config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    decode_basic: bool,
}

impl Config {
    /// Set whether `Basic` credentials get base64-decoded and split into
    /// user-ID and password. Enabled by default.
    pub fn decode_basic(mut self, value: bool) -> Config {
        self.decode_basic = value;
        self
    }

    pub(crate) fn decodes_basic(&self) -> bool {
        self.decode_basic
    }
}

impl Default for Config {
    fn default() -> Self {
        Config { decode_basic: true }
    }
}
