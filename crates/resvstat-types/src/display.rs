/// Requested verbosity for reservation output. Exactly one mode is active
/// per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Every attribute, long state names, expanded timestamps.
    Full,
    /// Reservation identifiers only.
    NamesOnly,
    /// Fixed-column short summary; applies when no mode flag is given.
    #[default]
    Default,
}
