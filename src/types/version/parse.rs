use super::VersionToken;

use nom::{character::complete::digit1, error::ErrorKind, IResult, InputTakeAtPosition};

fn non_digit1(i: &str) -> IResult<&str, &str, ()> {
    i.split_at_position1_complete(|c| c.is_ascii_digit(), ErrorKind::Char)
}

/// Split a version or release string at every digit-run boundary.
///
/// Digit runs become numbers, everything else becomes lower-cased text.
/// Total: any input tokenizes, the empty string yields no tokens.
pub fn tokenize(i: &str) -> Vec<VersionToken> {
    let mut result = Vec::new();
    let mut ti = i;
    loop {
        if ti.is_empty() {
            // Our job is done here
            break;
        } else if let Ok((rest, digits)) = digit1::<_, ()>(ti) {
            // We got a digit run
            match digits.parse::<u128>() {
                Ok(num) => result.push(VersionToken::Number(num)),
                // Runs too wide for u128 keep their textual form
                Err(_) => result.push(VersionToken::Text(digits.to_string())),
            }
            ti = rest;
        } else if let Ok((rest, chars)) = non_digit1(ti) {
            // We got a text run
            result.push(VersionToken::Text(chars.to_lowercase()));
            ti = rest;
        } else {
            // One of the two branches above always consumes input
            break;
        }
    }

    result
}
