use super::{parse::tokenize, VersionToken};

use std::cmp::max;

/// Whether `a` ranks newer-or-equal to `b`.
///
/// Token walk, most significant first:
/// - number vs number: plain integer comparison, equal runs continue;
/// - number vs text: the numeric side always wins;
/// - text vs text: a token starting with '.' outranks one that does not
///   (separates dotted pre-release-style tails), otherwise lexicographic
///   over the lower-cased text;
/// - the shorter sequence loses from either side.
///
/// Two strings that compare equal token-for-token are not an update when
/// comparing releases, but count as newer-or-equal when comparing versions
/// so that the release walk decides the tie in the caller.
pub fn compare_version_release(a: &str, b: &str, is_release: bool) -> bool {
    let this = tokenize(a);
    let that = tokenize(b);

    let max_len = max(this.len(), that.len());
    for i in 0..max_len {
        match (this.get(i), that.get(i)) {
            (Some(VersionToken::Number(this_val)), Some(VersionToken::Number(that_val))) => {
                if this_val != that_val {
                    return this_val > that_val;
                }
            }
            (Some(VersionToken::Number(_)), Some(VersionToken::Text(_))) => {
                return true;
            }
            (Some(VersionToken::Text(_)), Some(VersionToken::Number(_))) => {
                return false;
            }
            (Some(VersionToken::Text(this_val)), Some(VersionToken::Text(that_val))) => {
                if this_val.contains('.') || that_val.contains('.') {
                    let this_dotted = this_val.starts_with('.');
                    let that_dotted = that_val.starts_with('.');
                    if this_dotted != that_dotted {
                        return this_dotted;
                    }
                }
                if this_val != that_val {
                    return this_val > that_val;
                }
            }
            (Some(_), None) => {
                return true;
            }
            (None, Some(_)) => {
                return false;
            }
            (None, None) => {
                unreachable!()
            }
        }
    }

    !is_release
}
