//! Lenient JSON catalog ingestion.
//!
//! Catalogs come from static files and third-party feeds, so nothing here
//! fails: a document that is not an array (or is `null`, or not JSON at all)
//! yields an empty list, entries without an `id` and `src` are skipped, and
//! unusable dimensions are dropped so the engine falls back to landscape.
//!
//! ```
//! use zencollage::catalog::parse_catalog;
//!
//! let items = parse_catalog(r#"[
//!     {"id": "a", "src": "a.jpg", "width": 1080, "height": 1350},
//!     {"id": 7, "url": "b.jpg", "width": "wide"}
//! ]"#);
//! assert_eq!(items.len(), 2);
//! assert!(items[0].orientation().is_portrait());
//! assert_eq!(items[1].id, "7");
//! assert_eq!(items[1].width, None);
//! ```

use serde_json::{Map, Value};

use crate::media::MediaItem;

/// Parse a JSON document into media items.
pub fn parse_catalog(json: &str) -> Vec<MediaItem> {
    match serde_json::from_str::<Value>(json) {
        Ok(value) => from_value(&value),
        Err(e) => {
            log::warn!("catalog: not valid JSON ({e}), treating as empty");
            Vec::new()
        }
    }
}

/// Normalize an already-parsed JSON value into media items.
pub fn from_value(value: &Value) -> Vec<MediaItem> {
    let Value::Array(entries) = value else {
        if !value.is_null() {
            log::warn!("catalog: expected an array, treating as empty");
        }
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let item = entry.as_object().and_then(item_from_object);
            if item.is_none() {
                log::warn!("catalog: skipping entry {i}, needs an id and a src");
            }
            item
        })
        .collect()
}

fn item_from_object(obj: &Map<String, Value>) -> Option<MediaItem> {
    let id = match obj.get("id")? {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let src = ["src", "url"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
        .filter(|s| !s.is_empty())?;

    let mut item = MediaItem::new(id, src);
    item.width = dimension(obj.get("width"));
    item.height = dimension(obj.get("height"));
    item.alt = obj.get("alt").and_then(Value::as_str).map(String::from);
    Some(item)
}

/// A positive pixel count that fits in `u32`. Integral floats are accepted.
fn dimension(value: Option<&Value>) -> Option<u32> {
    let n = value?.as_number()?;
    let v = match n.as_u64() {
        Some(v) => v,
        None => {
            let f = n.as_f64()?;
            if f.fract() != 0.0 || f < 0.0 {
                return None;
            }
            f as u64
        }
    };
    u32::try_from(v).ok().filter(|&v| v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_is_empty() {
        assert!(parse_catalog("null").is_empty());
        assert!(parse_catalog(r#"{"id": "a", "src": "a.jpg"}"#).is_empty());
        assert!(parse_catalog("\"photos\"").is_empty());
        assert!(parse_catalog("not json").is_empty());
        assert!(parse_catalog("[]").is_empty());
    }

    #[test]
    fn entries_keep_order() {
        let items = from_value(&json!([
            {"id": "a", "src": "a.jpg", "width": 1600, "height": 900, "alt": "Harbor"},
            {"id": "b", "src": "b.jpg"},
        ]));
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(items[0].alt.as_deref(), Some("Harbor"));
        assert_eq!(items[0].width, Some(1600));
        assert_eq!(items[1].dimensions(), None);
    }

    #[test]
    fn unusable_entries_skipped() {
        let items = from_value(&json!([
            42,
            {"src": "no-id.jpg"},
            {"id": "", "src": "empty-id.jpg"},
            {"id": "no-src"},
            {"id": "ok", "src": "ok.jpg"},
        ]));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "ok");
    }

    #[test]
    fn bad_dimensions_become_none() {
        let items = from_value(&json!([
            {"id": "a", "src": "a", "width": -5, "height": 0},
            {"id": "b", "src": "b", "width": 12.5, "height": "900"},
            {"id": "c", "src": "c", "width": 4_294_967_296_u64, "height": 1350.0},
        ]));
        assert_eq!((items[0].width, items[0].height), (None, None));
        assert_eq!((items[1].width, items[1].height), (None, None));
        assert_eq!((items[2].width, items[2].height), (None, Some(1350)));
    }

    #[test]
    fn serde_round_trip_of_item() {
        let item = MediaItem::new("a", "a.jpg").with_dimensions(4, 5);
        let json = serde_json::to_string(&item).unwrap();
        let back: MediaItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
        // Optional fields may be omitted entirely.
        let bare: MediaItem = serde_json::from_str(r#"{"id":"x","src":"x.jpg"}"#).unwrap();
        assert_eq!(bare, MediaItem::new("x", "x.jpg"));
    }
}
