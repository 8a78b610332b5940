/// One embeddable chunk of the tagged description corpus: the Spotify
/// track id and the description text that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub text: String,
}

/// Splits tagged corpus contents into documents, one per non-empty line.
///
/// Lines that don't carry a leading quoted id are skipped; the corpus is a
/// generated file, but a hand-edited stray line shouldn't take the whole
/// index down.
pub fn split_documents(contents: &str) -> Vec<Document> {
    contents
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .filter_map(parse_tagged_line)
        .collect()
}

/// Parses a single `"<id>" <text>` corpus line.
pub fn parse_tagged_line(line: &str) -> Option<Document> {
    let rest = line.strip_prefix('"')?;
    let (id, text) = rest.split_once('"')?;

    let id = id.trim();
    let text = text.trim();
    if id.is_empty() || text.is_empty() {
        return None;
    }

    Some(Document {
        id: id.to_string(),
        text: text.to_string(),
    })
}
