/*!
Pure-data snapshot of a directory listing and its items.

The browsing layer owns the real listing; the resolver only ever reads a
snapshot of it through the content-view capability. Properties are
variant-typed (plugins store strings, flags and numbers under arbitrary
keys), so they are kept as [`serde_json::Value`] with coercing accessors.
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Video metadata attached to a listing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
  /// Times the item has been played to completion.
  pub play_count: u32,
  /// Duration of the main video stream in seconds.
  pub duration_secs: u64,
}

/// Audio metadata attached to a listing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioInfo {
  /// Track duration in seconds.
  pub duration_secs: u64,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
  pub is_folder: bool,
  /// Whether this is the synthetic ".." entry pointing at the parent.
  pub is_parent: bool,
  pub video: Option<VideoInfo>,
  pub audio: Option<AudioInfo>,
}

impl ListItem {
  /// A plain file entry.
  pub const fn file() -> Self {
    Self {
      is_folder: false,
      is_parent: false,
      video: None,
      audio: None,
    }
  }

  /// A folder entry.
  pub const fn folder() -> Self {
    Self {
      is_folder: true,
      is_parent: false,
      video: None,
      audio: None,
    }
  }

  /// The synthetic parent ("..") entry.
  pub const fn parent() -> Self {
    Self {
      is_folder: true,
      is_parent: true,
      video: None,
      audio: None,
    }
  }

  /// A video item with the given play count and duration.
  pub const fn video(play_count: u32, duration_secs: u64) -> Self {
    Self {
      is_folder: false,
      is_parent: false,
      video: Some(VideoInfo {
        play_count,
        duration_secs,
      }),
      audio: None,
    }
  }

  /// An audio item with the given duration.
  pub const fn audio(duration_secs: u64) -> Self {
    Self {
      is_folder: false,
      is_parent: false,
      video: None,
      audio: Some(AudioInfo { duration_secs }),
    }
  }

  /// Playback duration in seconds. Audio metadata wins when both kinds
  /// are present; items without media metadata contribute zero.
  pub const fn duration_secs(&self) -> u64 {
    match (&self.audio, &self.video) {
      (Some(audio), _) => audio.duration_secs,
      (None, Some(video)) => video.duration_secs,
      (None, None) => 0,
    }
  }
}

/// Snapshot of the directory a content-listing window currently shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
  /// Source location, possibly carrying credentials.
  pub path: String,
  /// Display name of the location.
  pub label: String,
  /// Content type ("movies", "albums", ...), empty when untyped.
  pub content: String,
  /// Arbitrary per-listing properties set by the source.
  pub properties: HashMap<String, Value>,
  /// Art paths by kind ("thumb", "backdrop", ...).
  pub art: HashMap<String, String>,
  pub items: Vec<ListItem>,
}

impl Listing {
  /// Property value coerced to a string; empty for missing or null keys.
  pub fn property_str(&self, key: &str) -> String {
    match self.properties.get(key) {
      Some(Value::String(s)) => s.clone(),
      Some(Value::Null) | None => String::new(),
      Some(other) => other.to_string(),
    }
  }

  /// Property value coerced to a flag; missing keys are `false`.
  pub fn property_flag(&self, key: &str) -> bool {
    match self.properties.get(key) {
      Some(Value::Bool(flag)) => *flag,
      Some(Value::Number(n)) => n.as_i64().is_some_and(|v| v != 0),
      Some(Value::String(s)) => s == "1" || s.eq_ignore_ascii_case("true"),
      _ => false,
    }
  }

  /// Art path for a kind, if one is set.
  pub fn art(&self, kind: &str) -> Option<&str> {
    self.art.get(kind).map(String::as_str)
  }

  /// Whether art of the given kind is set.
  pub fn has_art(&self, kind: &str) -> bool {
    self.art.contains_key(kind)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn listing_with(key: &str, value: Value) -> Listing {
    let mut listing = Listing::default();
    listing.properties.insert(key.to_string(), value);
    listing
  }

  mod property_coercion {
    use super::*;

    #[test]
    fn string_properties_pass_through() {
      let listing = listing_with("plot", json!("a long night"));
      assert_eq!(listing.property_str("plot"), "a long night");
    }

    #[test]
    fn missing_and_null_properties_are_empty() {
      let listing = listing_with("plot", Value::Null);
      assert_eq!(listing.property_str("plot"), "");
      assert_eq!(listing.property_str("nope"), "");
    }

    #[test]
    fn flags_accept_bool_number_and_string_forms() {
      assert!(listing_with("stacked", json!(true)).property_flag("stacked"));
      assert!(listing_with("stacked", json!(1)).property_flag("stacked"));
      assert!(listing_with("stacked", json!("true")).property_flag("stacked"));
      assert!(listing_with("stacked", json!("1")).property_flag("stacked"));
      assert!(!listing_with("stacked", json!(0)).property_flag("stacked"));
      assert!(!listing_with("stacked", json!("no")).property_flag("stacked"));
      assert!(!Listing::default().property_flag("stacked"));
    }
  }

  mod durations {
    use super::*;

    #[test]
    fn audio_metadata_wins_over_video() {
      let item = ListItem {
        video: Some(VideoInfo {
          play_count: 0,
          duration_secs: 100,
        }),
        audio: Some(AudioInfo { duration_secs: 40 }),
        ..ListItem::file()
      };
      assert_eq!(item.duration_secs(), 40);
    }

    #[test]
    fn items_without_metadata_contribute_zero() {
      assert_eq!(ListItem::folder().duration_secs(), 0);
    }
  }
}
