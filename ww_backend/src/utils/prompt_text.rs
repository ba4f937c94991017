use nom::IResult;
use nom::character::complete::{char, digit1, multispace1};
use nom::combinator::recognize;
use nom::sequence::tuple;

const QUOTES: [char; 6] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Trims whitespace and any run of wrapping quotes. Markdown is kept.
pub fn unquote_prompt_text(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || QUOTES.contains(&c))
        .to_string()
}

/// Removes bold markers, then unquotes with [`unquote_prompt_text`].
pub fn clean_prompt_text(raw: &str) -> String {
    unquote_prompt_text(&raw.replace("**", ""))
}

/// A list marker such as `1. ` or `12.\n`.
fn numbering(input: &str) -> IResult<&str, &str> {
    recognize(tuple((digit1, char('.'), multispace1)))(input)
}

/// Splits a numbered-list completion into its items, in order.
///
/// Every marker is a separator, so text before the first one (a model
/// preamble such as "Here are three prompts:") comes back as an item of its
/// own. Items are unquoted with [`unquote_prompt_text`] and blank ones
/// discarded.
pub fn split_numbered(text: &str) -> Vec<String> {
    let mut segments: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        let rest = &text[cursor..];
        match numbering(rest) {
            Ok((remaining, _)) => {
                segments.push(&text[start..cursor]);
                cursor = text.len() - remaining.len();
                start = cursor;
            }
            Err(_) => {
                cursor += rest.chars().next().map_or(1, |c| c.len_utf8());
            }
        }
    }
    segments.push(&text[start..]);

    segments
        .into_iter()
        .map(unquote_prompt_text)
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_quotes_and_bold_are_removed() {
        assert_eq!(clean_prompt_text("\"A door opens.\""), "A door opens.");
        assert_eq!(clean_prompt_text("'A door opens.'"), "A door opens.");
        assert_eq!(
            clean_prompt_text("**A door** opens onto the sea."),
            "A door opens onto the sea."
        );
        assert_eq!(clean_prompt_text("  \"**A door opens.**\"\n"), "A door opens.");
        assert_eq!(clean_prompt_text("\u{201C}Curly.\u{201D}"), "Curly.");
    }

    #[test]
    fn inner_quotes_are_kept() {
        assert_eq!(
            clean_prompt_text("The sign read \"Closed\" forever."),
            "The sign read \"Closed\" forever."
        );
    }

    #[test]
    fn cleaned_text_never_starts_or_ends_with_a_quote() {
        for raw in ["\"\"", "\" 'nested' \"", "**\"x\"**", "'\"mixed\"'"] {
            let cleaned = clean_prompt_text(raw);
            assert!(!cleaned.starts_with(QUOTES), "{raw:?} -> {cleaned:?}");
            assert!(!cleaned.ends_with(QUOTES), "{raw:?} -> {cleaned:?}");
            assert!(!cleaned.contains("**"));
        }
    }

    #[test]
    fn numbered_list_splits_in_order() {
        assert_eq!(
            split_numbered("1. A.\n2. B.\n3. C."),
            vec!["A.", "B.", "C."]
        );
    }

    #[test]
    fn items_are_trimmed_and_unquoted() {
        assert_eq!(
            split_numbered("1. \"First idea.\"\n\n2.  'Second idea.'\n"),
            vec!["First idea.", "Second idea."]
        );
    }

    #[test]
    fn preamble_before_first_marker_is_kept_as_an_item() {
        assert_eq!(
            split_numbered("Here are two prompts:\n1. A.\n2. B."),
            vec!["Here are two prompts:", "A.", "B."]
        );
    }

    #[test]
    fn batch_items_keep_bold_markers() {
        assert_eq!(split_numbered("1. **Bold** idea."), vec!["**Bold** idea."]);
        assert_eq!(
            split_numbered("1. \"**Quoted** bold.\"\n2. Plain."),
            vec!["**Quoted** bold.", "Plain."]
        );
    }

    #[test]
    fn text_without_markers_is_a_single_item() {
        assert_eq!(split_numbered("Just one idea."), vec!["Just one idea."]);
        assert!(split_numbered("   ").is_empty());
    }

    #[test]
    fn numbers_without_trailing_space_do_not_split() {
        assert_eq!(
            split_numbered("1. It cost 3.50 dollars.\n2. B."),
            vec!["It cost 3.50 dollars.", "B."]
        );
    }
}
