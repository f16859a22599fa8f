// src/util/helper.rs
use std::io::{self, BufRead, IsTerminal, Write};

/// Interactive confirmation prompt on stderr; anything but y/yes declines
pub fn confirm(prompt: &str) -> bool {
    confirm_with(prompt, &mut io::stdin().lock(), &mut io::stderr())
}

fn confirm_with<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> bool {
    if write!(output, "{} (y/N): ", prompt).and_then(|_| output.flush()).is_err() {
        return false;
    }

    let mut user_input = String::new();
    if input.read_line(&mut user_input).is_err() {
        return false;
    }

    matches!(user_input.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn is_stderr_piped() -> bool {
    !io::stderr().is_terminal()
}

/// Splits a comma separated tag list, dropping blanks
pub fn parse_tag_list(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("y\n", true)]
    #[case("YES\n", true)]
    #[case("n\n", false)]
    #[case("\n", false)]
    #[case("", false)]
    fn given_answer_when_confirm_then_expected(#[case] answer: &str, #[case] expected: bool) {
        let mut output = Vec::new();
        assert_eq!(confirm_with("Delete?", &mut answer.as_bytes(), &mut output), expected);
        assert_eq!(String::from_utf8(output).unwrap(), "Delete? (y/N): ");
    }

    #[test]
    fn given_tag_list_when_parse_then_trimmed_without_blanks() {
        assert_eq!(parse_tag_list(" C#, ,React ,"), vec!["C#", "React"]);
        assert!(parse_tag_list("").is_empty());
    }
}
