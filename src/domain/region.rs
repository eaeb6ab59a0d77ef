/// Hosting region selector for the regionalized product APIs.
///
/// The region only picks the hostname template; protocol and payloads are
/// identical across regions. Products that are not regionalized (Numbers)
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Us,
    Eu,
    Au,
    Br,
    Ca,
}

impl Region {
    /// Hostname fragment used in regionalized URL templates.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Au => "au",
            Self::Br => "br",
            Self::Ca => "ca",
        }
    }
}
