use super::{Classification, CookieRecord};

const SEPARATOR: &str = ": ";

/// Parse a model reply of `Key: Value` lines into a `CookieRecord`.
///
/// Lines without `": "` are dropped. Each line splits on its first separator,
/// so values may contain further `": "` sequences. The `classification` value is
/// normalized to a fixed label and `description` goes to its own slot (last
/// one wins); both keys match case-insensitively. Never fails.
pub fn parse_response(reply: &str) -> CookieRecord {
    let mut record = CookieRecord::default();

    for line in reply.lines() {
        let Some((key, value)) = line.split_once(SEPARATOR) else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if key.eq_ignore_ascii_case("description") {
            record.description = value.to_string();
        } else if key.eq_ignore_ascii_case("classification") {
            record
                .attributes
                .insert(key, Classification::normalize(value).as_str());
        } else {
            record.attributes.insert(key, value);
        }
    }

    record
}
