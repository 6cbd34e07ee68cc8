/// Who can read an object, which decides the top-level folder it is stored under.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccessLevel {
    /// Readable and writable by every user of the app.
    #[default]
    Guest,
    /// Readable by everyone, writable by its owner only.
    Protected,
    /// Owner only.
    Private,
}

impl AccessLevel {
    /// Folder name used in object keys. Guest objects live under `public`.
    pub fn service_prefix(self) -> &'static str {
        match self {
            AccessLevel::Guest => "public",
            AccessLevel::Protected => "protected",
            AccessLevel::Private => "private",
        }
    }

    /// Whether keys at this level are scoped to an identity.
    pub fn is_identity_scoped(self) -> bool {
        !matches!(self, AccessLevel::Guest)
    }
}
