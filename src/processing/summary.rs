//! Summary section to HTML paragraphs

const SUMMARY_LINES: usize = 8;
const MAX_PARAGRAPH_CHARS: usize = 220;

/// Split on whitespace runs that follow `.`, `!` or `?`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            sentences.push(&text[start..idx]);
            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(c);
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Greedily pack sentences into chunks of at most 220 characters.
pub fn pack_sentences(sentences: &[&str]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in sentences {
        let joined_len = current.chars().count() + 1 + sentence.chars().count();
        if joined_len > MAX_PARAGRAPH_CHARS {
            if !current.trim().is_empty() {
                chunks.push(current.trim().to_string());
            }
            current = sentence.to_string();
        } else if current.is_empty() {
            current = sentence.to_string();
        } else {
            current.push(' ');
            current.push_str(sentence);
        }
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }
    chunks
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// First eight lines, sentence-packed and wrapped as `<p>` elements.
pub fn to_html_paragraphs(lines: &[String]) -> String {
    let text = lines
        .iter()
        .take(SUMMARY_LINES)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    pack_sentences(&split_sentences(&text))
        .iter()
        .map(|chunk| format!("<p>{}</p>", escape_html(chunk)))
        .collect()
}
