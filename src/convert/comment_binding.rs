use once_cell::sync::Lazy;
use regex::Regex;

static BINDING_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r".*\[\[(.*)\]\].*").expect("binding marker pattern is valid")
});

/// Pulls `[[...]]` validation directives out of column comments.
pub struct CommentBinding;

impl CommentBinding {
    /// Split `comment` into the comment without its marker and the marker content.
    ///
    /// Matching is greedy on both sides: the marker opens at the last `[[` of
    /// the line and closes at the last `]]` after it. Only the first literal
    /// occurrence of that marker is removed. Without a marker, or with an
    /// unbalanced one, the comment is returned unchanged with an empty binding.
    pub fn extract(comment: &str) -> (String, String) {
        match BINDING_MARKER.captures(comment) {
            Some(caps) => {
                let binding = caps.get(1).map_or("", |m| m.as_str());
                let cleaned = comment.replacen(&format!("[[{binding}]]"), "", 1);
                (cleaned, binding.to_string())
            }
            None => (comment.to_string(), String::new()),
        }
    }
}
