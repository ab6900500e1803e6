mod ord;
mod parse;
#[cfg(test)]
mod test;

pub use ord::compare_version_release;
pub use parse::tokenize;

/// A maximal run of digits or non-digits within a version/release string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionToken {
    Number(u128),
    Text(String),
}
