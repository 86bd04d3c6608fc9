use alloc::string::String;

/// Uppercases the first character so a label can open a sentence.
pub fn sentence(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut output = String::with_capacity(text.len());
    output.extend(first.to_uppercase());
    output.push_str(chars.as_str());
    output
}
