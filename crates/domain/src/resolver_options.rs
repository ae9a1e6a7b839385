use serde::Serialize;

/// Name-expansion settings shared by every lookup in a run.
///
/// `ndots == 0` means the user left it unset and the system value may apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolverOptions {
    pub ndots: u32,

    pub search_list: Vec<String>,

    pub use_search_list: bool,
}

impl ResolverOptions {
    pub fn new(ndots: u32, search_list: Vec<String>, use_search_list: bool) -> Self {
        Self {
            ndots,
            search_list,
            use_search_list,
        }
    }

    /// Suffixes to apply during expansion; empty unless search is enabled.
    pub fn effective_search_list(&self) -> &[String] {
        if self.use_search_list {
            &self.search_list
        } else {
            &[]
        }
    }
}
